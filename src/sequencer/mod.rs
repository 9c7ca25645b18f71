//! Line sequencer
//!
//! Plays a list of terminal lines into a host container:
//!
//! - `line`: line kinds, nodes, attribute parsing
//! - `line_data`: programmatic line descriptors
//! - `options`: option/attribute/default resolution
//! - `container`: the host container model
//! - `state`: runtime lines and timing state
//! - `machine`: the sequencing state machine
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//! use termynal::sequencer::{Attributes, Defaults, LineData, Sequencer, SequencerOptions, Step};
//!
//! let options = SequencerOptions {
//!     line_data: vec![LineData::new().with("type", "input").with("value", "ls")],
//!     ..Default::default()
//! };
//! let mut seq = Sequencer::new(Attributes::new(), Vec::new(), &options, &Defaults::default());
//! assert_eq!(seq.step(), Step::Wait(Duration::from_millis(600)));
//! ```

mod container;
mod line;
mod line_data;
mod machine;
mod options;
pub mod parse;
mod state;

pub use container::{Child, Container, ControlKind, Size};
pub use line::{nodes_width, AttrNames, Attributes, LineElement, LineKind, LineSpec, Node};
pub use line_data::LineData;
pub use machine::{Row, Sequencer, Step};
pub use options::{
    Defaults, SequencerConfig, SequencerOptions, DEFAULT_CURSOR, DEFAULT_LINE_DELAY,
    DEFAULT_PREFIX, DEFAULT_PROGRESS_CHAR, DEFAULT_PROGRESS_LENGTH, DEFAULT_PROGRESS_PERCENT,
    DEFAULT_PROMPT, DEFAULT_START_DELAY, DEFAULT_TYPE_DELAY,
};
pub use state::{Delays, Line, LineStage, Phase, PlaybackState};
