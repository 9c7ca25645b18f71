//! termynal library
//!
//! Animated terminal sessions: a line sequencer that types commands, fills
//! progress bars and prints output into a container, plus document loading
//! (HTML markup or TOML/JSON scripts), a page run loop with
//! visibility-triggered autostart, and terminal players.

pub mod cli;
pub mod config;
pub mod markup;
pub mod page;
pub mod player;
pub mod script;
pub mod sequencer;
pub mod source;
pub mod theme;
pub mod visibility;

pub use config::Config;
pub use page::{Page, PageSettings};
pub use player::{play_page, render_document, PlaybackResult, PlayerOptions, RenderOptions};
pub use sequencer::{Sequencer, SequencerOptions, Step};
pub use source::{LoadOptions, SourceError, TerminalSource};
