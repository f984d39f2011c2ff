//! Terminal prompt helpers.

use std::io::Write;

/// Redraw the input prompt after printing an incoming event.
pub fn redisplay_prompt(name: &str) {
    print!("{name}> ");
    let _ = std::io::stdout().flush();
}
