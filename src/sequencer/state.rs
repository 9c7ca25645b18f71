//! Playback state: runtime lines, timing overrides and the sequencing phase.

use serde::Serialize;

use super::line::{nodes_width, LineSpec, Node};

/// A line as it currently looks on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub spec: LineSpec,
    /// Current content. Reset from `spec` on every Initialize.
    pub nodes: Vec<Node>,
    pub visible: bool,
    /// Active cursor glyph while the line is the one being typed.
    pub cursor: Option<String>,
}

impl Line {
    pub fn new(spec: LineSpec) -> Self {
        Self {
            nodes: spec.nodes.clone(),
            spec,
            visible: false,
            cursor: None,
        }
    }

    /// Restore the original content and drop any cursor marker.
    pub fn reset(&mut self) {
        self.nodes = self.spec.nodes.clone();
        self.cursor = None;
    }

    pub fn text(&self) -> String {
        self.nodes.iter().map(|n| n.text.as_str()).collect()
    }

    pub fn width(&self) -> usize {
        nodes_width(&self.nodes)
    }
}

/// The three instance delays, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Delays {
    pub start: f64,
    pub type_delay: f64,
    pub line: f64,
}

impl Delays {
    pub const ZERO: Delays = Delays {
        start: 0.0,
        type_delay: 0.0,
        line: 0.0,
    };
}

/// Where a line is within its animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStage {
    /// Not yet attached.
    Begin,
    /// Next character to append: `offset` chars into node `node`.
    Typing { node: usize, offset: usize },
    /// Next progress step to render (1-based).
    Progress { step: usize },
    /// Rendered; waiting out its line delay.
    Settle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed but never initialized.
    Idle,
    /// Initialized; the fast-forward control and start delay come next.
    Starting,
    Line { index: usize, stage: LineStage },
    Finished,
}

/// Per-instance timing state and position in the line list.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    current: Delays,
    original: Delays,
    fast_forward: bool,
    pub phase: Phase,
    /// Number of Initialize calls so far.
    pub runs: u32,
}

impl PlaybackState {
    pub fn new(delays: Delays) -> Self {
        Self {
            current: delays,
            original: delays,
            fast_forward: false,
            phase: Phase::Idle,
            runs: 0,
        }
    }

    pub fn delays(&self) -> Delays {
        self.current
    }

    pub fn original_delays(&self) -> Delays {
        self.original
    }

    pub fn is_fast_forward(&self) -> bool {
        self.fast_forward
    }

    /// Zero every delay for the rest of the current run.
    pub fn fast_forward(&mut self) {
        self.current = Delays::ZERO;
        self.fast_forward = true;
    }

    /// Undo a fast-forward once a run completes.
    pub fn restore(&mut self) {
        self.current = self.original;
        self.fast_forward = false;
    }

    pub fn start_delay(&self) -> f64 {
        self.current.start
    }

    /// Type delay for a line, honoring its override unless fast-forwarding.
    pub fn type_delay_for(&self, line_override: Option<f64>) -> f64 {
        if self.fast_forward {
            0.0
        } else {
            line_override.unwrap_or(self.current.type_delay)
        }
    }

    /// Line delay for a line, honoring its override unless fast-forwarding.
    pub fn line_delay_for(&self, line_override: Option<f64>) -> f64 {
        if self.fast_forward {
            0.0
        } else {
            line_override.unwrap_or(self.current.line)
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.phase, Phase::Starting | Phase::Line { .. })
    }
}
