//! Client error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("connection error: {0}")]
    ConnectionError(String),

    #[error("connection rejected by server: {0}")]
    Rejected(String),
}
