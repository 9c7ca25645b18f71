//! Headless playback on a virtual clock.
//!
//! Steps a sequencer to completion without sleeping and reports what a
//! viewer would have seen: the final transcript, or every visible change
//! stamped with its virtual time.

use std::fmt::Write as _;
use std::time::Duration;

use crate::sequencer::{Row, Sequencer, Step};

/// How to play terminals headlessly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Fast-forward before playing: every wait is zero.
    pub fast: bool,
    /// Emit every visible change instead of the final transcript.
    pub timeline: bool,
}

/// One visible change during headless playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Virtual time since Initialize.
    pub at: Duration,
    /// Row index within the container's visible lines.
    pub row: usize,
    pub text: String,
}

/// Visible line rows, cursor included. Controls and hidden lines are not
/// part of the transcript.
pub fn visible_rows(sequencer: &Sequencer) -> Vec<String> {
    sequencer
        .rows()
        .filter_map(|row| match row {
            Row::Line(line) if line.visible => {
                let mut text = line.text();
                if let Some(cursor) = &line.cursor {
                    text.push_str(cursor);
                }
                Some(text)
            }
            _ => None,
        })
        .collect()
}

/// Initialize (if needed) and run to completion, calling `on_step` after
/// every transition with the virtual time at which it happened. Returns the
/// total virtual duration.
pub fn run_to_end<F>(sequencer: &mut Sequencer, fast: bool, mut on_step: F) -> Duration
where
    F: FnMut(Duration, &Sequencer),
{
    if !sequencer.is_playing() {
        sequencer.initialize();
    }
    if fast {
        sequencer.fast_forward();
    }
    let mut clock = Duration::ZERO;
    loop {
        let step = sequencer.step();
        on_step(clock, sequencer);
        match step {
            Step::Wait(wait) => clock += wait,
            Step::Finished | Step::Idle => return clock,
        }
    }
}

/// Every row change, in order.
pub fn timeline(sequencer: &mut Sequencer, fast: bool) -> Vec<Frame> {
    let mut frames = Vec::new();
    let mut previous: Vec<String> = Vec::new();
    run_to_end(sequencer, fast, |at, seq| {
        let rows = visible_rows(seq);
        for (row, text) in rows.iter().enumerate() {
            if previous.get(row) != Some(text) {
                frames.push(Frame {
                    at,
                    row,
                    text: text.clone(),
                });
            }
        }
        previous = rows;
    });
    frames
}

/// Final transcript of one terminal.
pub fn transcript(sequencer: &mut Sequencer, fast: bool) -> Vec<String> {
    run_to_end(sequencer, fast, |_, _| {});
    visible_rows(sequencer)
}

/// Render every terminal of a document as text. Multiple terminals get a
/// header each and are separated by a blank line.
pub fn render_document(sequencers: &mut [Sequencer], options: RenderOptions) -> String {
    let count = sequencers.len();
    let mut out = String::new();
    for (index, sequencer) in sequencers.iter_mut().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        if count > 1 {
            let _ = writeln!(out, "# terminal {}/{}", index + 1, count);
        }
        if options.timeline {
            for frame in timeline(sequencer, options.fast) {
                let _ = writeln!(
                    out,
                    "{:>9.3}s  {:>2}  {}",
                    frame.at.as_secs_f64(),
                    frame.row + 1,
                    frame.text
                );
            }
        } else {
            for row in transcript(sequencer, options.fast) {
                let _ = writeln!(out, "{}", row);
            }
        }
    }
    out
}
