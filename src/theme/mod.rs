//! Theme configuration for the player and CLI
//!
//! Centralizes the colors used to draw terminal boxes, plus the mapping
//! from line classes (styling hooks) to colors.

use std::collections::BTreeMap;
use std::str::FromStr;

use ratatui::style::Color;

pub mod cli;

pub use cli::{color_enabled, color_to_ansi, ANSI_RESET};

/// Theme configuration for terminal boxes.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Line text
    pub text_primary: Color,
    /// Title bar and dimmed text
    pub text_secondary: Color,
    /// Prompt glyph
    pub accent: Color,
    /// Cursor glyph of the line being typed
    pub cursor: Color,
    /// Fast-forward and restart controls
    pub control: Color,
    /// Box background
    pub background: Color,
    /// Title bar window dots, left to right
    pub dots: [Color; 3],
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// Dark box, light text, traffic-light dots.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::LightGreen,
            cursor: Color::Gray,
            control: Color::Yellow,
            background: Color::Rgb(37, 38, 40),
            dots: [Color::Red, Color::Yellow, Color::Green],
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            cursor: Color::LightBlue,
            control: Color::LightBlue,
            background: Color::Rgb(16, 30, 48),
            dots: [Color::LightBlue, Color::Cyan, Color::LightCyan],
        }
    }

    /// No colors at all; the terminal's own defaults.
    pub fn mono() -> Self {
        Self {
            text_primary: Color::Reset,
            text_secondary: Color::Reset,
            accent: Color::Reset,
            cursor: Color::Reset,
            control: Color::Reset,
            background: Color::Reset,
            dots: [Color::Reset; 3],
        }
    }

    /// Look up a preset by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "classic" => Some(Self::classic()),
            "ocean" => Some(Self::ocean()),
            "mono" => Some(Self::mono()),
            _ => None,
        }
    }

    pub const NAMES: [&'static str; 3] = ["classic", "ocean", "mono"];
}

/// Colors for line classes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassColors(BTreeMap<String, Color>);

impl ClassColors {
    /// Build from `class -> color` strings. Unknown color names are skipped
    /// with a warning.
    pub fn parse<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut colors = BTreeMap::new();
        for (class, value) in entries {
            match Color::from_str(value) {
                Ok(color) => {
                    colors.insert(class.clone(), color);
                }
                Err(_) => {
                    tracing::warn!(class = %class, value = %value, "Unknown color, ignoring");
                }
            }
        }
        Self(colors)
    }

    /// Color for a (possibly space-separated) class list; the first class
    /// with a mapping wins.
    pub fn get(&self, class: Option<&str>) -> Option<Color> {
        class?
            .split_whitespace()
            .find_map(|name| self.0.get(name).copied())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
