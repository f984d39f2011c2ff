//! Time utilities: UTC millisecond timestamps and RFC 3339 rendering.

use chrono::{DateTime, Utc};

/// Get the current Unix timestamp in UTC (milliseconds).
pub fn now_utc_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert a Unix timestamp (milliseconds) to an RFC 3339 string in UTC.
///
/// Timestamps that fall outside chrono's representable range render as the
/// Unix epoch rather than panicking.
pub fn timestamp_to_rfc3339(timestamp_millis: i64) -> String {
    let dt: DateTime<Utc> =
        DateTime::from_timestamp_millis(timestamp_millis).unwrap_or(DateTime::UNIX_EPOCH);
    dt.to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_utc_millis_returns_positive_value() {
        let timestamp = now_utc_millis();

        assert!(timestamp > 0);
    }

    #[test]
    fn now_utc_millis_is_monotonic_enough() {
        let first = now_utc_millis();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let second = now_utc_millis();

        assert!(second >= first);
    }

    #[test]
    fn timestamp_to_rfc3339_renders_utc() {
        // 2023-01-01 00:00:00 UTC in milliseconds
        let timestamp = 1672531200000;

        let result = timestamp_to_rfc3339(timestamp);

        assert!(result.starts_with("2023-01-01T00:00:00"));
        assert!(result.contains("+00:00"));
    }

    #[test]
    fn timestamp_to_rfc3339_keeps_milliseconds() {
        let timestamp = 1672531200123;

        let result = timestamp_to_rfc3339(timestamp);

        assert!(result.starts_with("2023-01-01T00:00:00.123"));
    }

    #[test]
    fn timestamp_to_rfc3339_out_of_range_falls_back_to_epoch() {
        let result = timestamp_to_rfc3339(i64::MAX);

        assert!(result.starts_with("1970-01-01T00:00:00"));
    }
}
