//! Rendering of incoming server events for the terminal.

use bansho_server::infrastructure::dto::websocket::ServerEvent;

/// Formats server events into printable lines.
pub struct MessageFormatter;

impl MessageFormatter {
    pub fn format_event(event: &ServerEvent) -> String {
        match event {
            ServerEvent::EditorInitialization { room } => {
                format!("\n== you are the first member of '{room}'; starting blank ==\n")
            }
            ServerEvent::EditorUpdateReturn { room, value } => {
                format!("\n-- [{room}] code buffer --\n{value}\n")
            }
            ServerEvent::LanguageUpdateReturn { room, language } => {
                format!("\n-- [{room}] language is now '{language}' --\n")
            }
            ServerEvent::ChatHistory { room, messages } => {
                let mut out = format!("\n-- [{room}] chat so far --\n");
                for message in messages {
                    out.push_str(&Self::format_chat_line(message));
                }
                out
            }
            ServerEvent::ChatMessageReturn { room, message } => {
                format!("\n[{room}] {}", Self::format_chat_line(message))
            }
        }
    }

    /// Chat payloads are opaque to the server; render the `{user, text}`
    /// shape this client sends, and fall back to raw JSON for anything else.
    fn format_chat_line(message: &serde_json::Value) -> String {
        match (
            message.get("user").and_then(|v| v.as_str()),
            message.get("text").and_then(|v| v.as_str()),
        ) {
            (Some(user), Some(text)) => format!("<{user}> {text}\n"),
            _ => format!("{message}\n"),
        }
    }

    pub fn format_raw_message(text: &str) -> String {
        format!("\n(unrecognized) {text}\n")
    }
}
