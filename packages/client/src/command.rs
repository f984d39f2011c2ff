//! Input line grammar for the interactive session.
//!
//! A line starting with `/code ` replaces the shared code buffer, `/lang `
//! switches the shared language, and anything else is sent as chat.

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    /// Replace the room's code buffer with the given text.
    Code(String),
    /// Switch the room's selected language.
    Language(String),
    /// Send a chat message.
    Chat(String),
}

/// Parse one line of user input. Blank lines produce nothing.
pub fn parse_input(line: &str) -> Option<InputCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(code) = line.strip_prefix("/code ") {
        return Some(InputCommand::Code(code.to_string()));
    }
    if let Some(language) = line.strip_prefix("/lang ") {
        return Some(InputCommand::Language(language.trim().to_string()));
    }
    Some(InputCommand::Chat(line.to_string()))
}
