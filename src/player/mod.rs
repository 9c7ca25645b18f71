//! Terminal playback
//!
//! - `native`: interactive player (alternate screen, wall clock, input)
//! - `input`: keyboard and mouse handling for the interactive player
//! - `widget`: ratatui widgets for terminal boxes and the page
//! - `transcript`: headless playback on a virtual clock
//!
//! # Usage
//!
//! ```no_run
//! use termynal::page::{Page, PageSettings};
//! use termynal::player::{play_page, PlaybackResult, PlayerOptions};
//!
//! let page = Page::new(Vec::new(), PageSettings::default());
//! match play_page(page, "demo.html", &PlayerOptions::default()).unwrap() {
//!     PlaybackResult::Success(name) => println!("Finished: {}", name),
//!     PlaybackResult::Interrupted => println!("Stopped by user"),
//!     PlaybackResult::Error(e) => eprintln!("Error: {}", e),
//! }
//! ```

pub mod input;
mod native;
pub mod transcript;
pub mod widget;

pub use native::{play_page, PlaybackResult, PlayerOptions};
pub use transcript::{render_document, RenderOptions};
pub use widget::{PageView, TerminalWidget};
