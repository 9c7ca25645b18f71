//! ANSI color helpers for CLI output.

use std::borrow::Cow;
use std::io::IsTerminal;

use ratatui::style::Color;

use super::Theme;

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// Whether stdout should be colored: a terminal, and `NO_COLOR` unset.
pub fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// Foreground escape for a ratatui color. `Reset` has none.
pub fn color_to_ansi(color: Color) -> Cow<'static, str> {
    let code = match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Rgb(r, g, b) => return Cow::Owned(format!("\x1b[38;2;{};{};{}m", r, g, b)),
        Color::Indexed(i) => return Cow::Owned(format!("\x1b[38;5;{}m", i)),
        Color::Reset => "",
    };
    Cow::Borrowed(code)
}

fn paint(color: Color, text: &str) -> String {
    let code = color_to_ansi(color);
    if code.is_empty() || !color_enabled() {
        text.to_string()
    } else {
        format!("{}{}{}", code, text, ANSI_RESET)
    }
}

impl Theme {
    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }
}
