// Rust guideline compliant 2026-02-06

//! Terminal utilities for the Hookpin CLI.

use std::env;
use std::io::{IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    std::io::stdout().is_terminal()
}

/// Writes an error line to stderr, with a red `Error:` prefix when colors are enabled.
pub fn print_error(message: &str, use_color: bool) {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
    let _ = write!(stderr, "Error:");
    let _ = stderr.reset();
    let _ = writeln!(stderr, " {}", message);
}
