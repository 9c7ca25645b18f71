//! The line sequencer.
//!
//! Playback is an explicit state machine. [`Sequencer::step`] applies every
//! mutation up to the next suspension point and returns how long to wait
//! before calling it again. Whoever drives it (the page run loop, the
//! headless renderer, a test) owns the clock; there is exactly one pending
//! wait per sequencer at any time.

use std::time::Duration;

use tracing::{debug, trace};
use unicode_width::UnicodeWidthStr;

use super::container::{Child, Container, ControlKind, Size};
use super::line::{Attributes, LineElement, LineKind, LineSpec, Node};
use super::options::{Defaults, SequencerConfig, SequencerOptions};
use super::state::{Delays, Line, LineStage, Phase, PlaybackState};

/// Outcome of one [`Sequencer::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Call `step` again once this much time has passed.
    Wait(Duration),
    /// The run completed; the restart control is showing.
    Finished,
    /// Never initialized; nothing to do.
    Idle,
}

/// A renderable row of the container, in display order.
#[derive(Debug, Clone, Copy)]
pub enum Row<'a> {
    Line(&'a Line),
    Control { kind: ControlKind, visible: bool },
}

#[derive(Debug, Clone)]
pub struct Sequencer {
    config: SequencerConfig,
    container: Container,
    lines: Vec<Line>,
    state: PlaybackState,
}

impl Sequencer {
    /// Build a sequencer over a container and its declared lines.
    ///
    /// Programmatic lines from `options.line_data` are appended after the
    /// declared ones. Every line starts hidden but attached so the
    /// container measures at its final size. Runs Initialize unless
    /// `options.no_init` is set.
    pub fn new(
        attributes: Attributes,
        declared: Vec<LineElement>,
        options: &SequencerOptions,
        defaults: &Defaults,
    ) -> Self {
        let config = SequencerConfig::resolve(options, &attributes, defaults);
        let names = config.attr_names();

        let elements = declared
            .into_iter()
            .chain(options.line_data.iter().map(|data| data.to_element(&names)));
        let lines: Vec<Line> = elements
            .map(|element| {
                let mut spec = LineSpec::from_element(element, &names);
                spec.insert_prompt(&config.prompt);
                Line::new(spec)
            })
            .collect();

        let mut container = Container::new(attributes);
        container.append_control(ControlKind::FastForward, false);
        for index in 0..lines.len() {
            container.append_line(index);
        }
        container.append_control(ControlKind::Restart, false);

        let state = PlaybackState::new(Delays {
            start: config.start_delay,
            type_delay: config.type_delay,
            line: config.line_delay,
        });

        debug!(
            lines = lines.len(),
            prefix = %config.prefix,
            start_delay = config.start_delay,
            type_delay = config.type_delay,
            line_delay = config.line_delay,
            "Sequencer constructed"
        );

        let mut sequencer = Self {
            config,
            container,
            lines,
            state,
        };
        if !options.no_init {
            sequencer.initialize();
        }
        sequencer
    }

    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn is_initialized(&self) -> bool {
        self.state.runs > 0
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn is_finished(&self) -> bool {
        self.state.phase == Phase::Finished
    }

    /// Rows currently attached to the container.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> + '_ {
        self.container.children().iter().map(|child| match *child {
            Child::Line(index) => Row::Line(&self.lines[index]),
            Child::Control { kind, visible } => Row::Control { kind, visible },
        })
    }

    /// Current rendered size: widest row by attached row count.
    pub fn measure(&self) -> Size {
        let width = self
            .rows()
            .map(|row| match row {
                Row::Line(line) => {
                    line.width() + line.cursor.as_deref().map(UnicodeWidthStr::width).unwrap_or(0)
                }
                Row::Control { kind, .. } => kind.label().width(),
            })
            .max()
            .unwrap_or(0);
        Size {
            width,
            height: self.container.children().len(),
        }
    }

    /// Freeze the container size, clear it, reveal every line and start a
    /// new run from the first line. Also the restart entry point.
    ///
    /// A run still in progress is abandoned: its pending wait resolves into
    /// the new run, which starts from the top.
    pub fn initialize(&mut self) {
        if self.state.is_playing() {
            debug!(run = self.state.runs, "Initialize during playback, abandoning run");
        }
        let measured = self.measure();
        self.container.freeze(measured);
        self.container.clear();
        for line in &mut self.lines {
            line.reset();
            line.visible = true;
        }
        self.state.phase = Phase::Starting;
        self.state.runs += 1;
        debug!(
            run = self.state.runs,
            width = measured.width,
            height = measured.height,
            "Sequencer initialized"
        );
    }

    pub fn restart(&mut self) {
        self.initialize();
    }

    /// Zero the delays for the rest of the current run.
    pub fn fast_forward(&mut self) {
        debug!(run = self.state.runs, "Fast-forward");
        self.state.fast_forward();
    }

    /// Activate a rendered control. Hidden or detached controls do nothing.
    pub fn activate(&mut self, kind: ControlKind) -> bool {
        if !self.container.has_visible_control(kind) {
            return false;
        }
        match kind {
            ControlKind::FastForward => self.fast_forward(),
            ControlKind::Restart => self.restart(),
        }
        true
    }

    /// Advance to the next suspension point.
    pub fn step(&mut self) -> Step {
        loop {
            let (index, stage) = match self.state.phase {
                Phase::Idle => return Step::Idle,
                Phase::Finished => return Step::Finished,
                Phase::Starting => {
                    self.container.append_control(ControlKind::FastForward, true);
                    self.state.phase = Phase::Line {
                        index: 0,
                        stage: LineStage::Begin,
                    };
                    return wait(self.state.start_delay());
                }
                Phase::Line { index, stage } => (index, stage),
            };

            if index >= self.lines.len() {
                self.finish();
                return Step::Finished;
            }

            trace!(line = index, stage = ?stage, "Sequencer step");

            let step = match stage {
                LineStage::Begin => self.begin_line(index),
                LineStage::Typing { node, offset } => self.type_char(index, node, offset),
                LineStage::Progress { step } => self.progress_step(index, step),
                LineStage::Settle => {
                    self.lines[index].cursor = None;
                    self.state.phase = Phase::Line {
                        index: index + 1,
                        stage: LineStage::Begin,
                    };
                    continue;
                }
            };
            return step;
        }
    }

    fn begin_line(&mut self, index: usize) -> Step {
        match self.lines[index].spec.kind {
            LineKind::Input => {
                let line = &mut self.lines[index];
                line.cursor = Some(self.config.cursor.clone());
                for node in line.nodes.iter_mut().filter(|n| !n.prompt) {
                    node.text.clear();
                }
                self.container.append_line(index);
                match next_char(&self.lines[index], 0, 0) {
                    Some((node, offset)) => {
                        self.set_stage(index, LineStage::Typing { node, offset });
                        wait(self.type_delay(index))
                    }
                    None => self.settle(index),
                }
            }
            LineKind::Progress => {
                self.lines[index].nodes = vec![Node::text("")];
                self.container.append_line(index);
                let (glyph, length) = self.progress_glyph(index);
                if glyph.is_empty() || length == 0 {
                    self.settle(index)
                } else {
                    self.set_stage(index, LineStage::Progress { step: 1 });
                    wait(self.state.type_delay_for(None))
                }
            }
            LineKind::Plain => {
                self.container.append_line(index);
                self.settle(index)
            }
        }
    }

    fn type_char(&mut self, index: usize, node: usize, offset: usize) -> Step {
        let line = &mut self.lines[index];
        if let Some(ch) = line.spec.nodes[node].text.chars().nth(offset) {
            line.nodes[node].text.push(ch);
        }
        match next_char(line, node, offset + 1) {
            Some((node, offset)) => {
                self.set_stage(index, LineStage::Typing { node, offset });
                wait(self.type_delay(index))
            }
            None => self.settle(index),
        }
    }

    fn progress_step(&mut self, index: usize, step: usize) -> Step {
        let (glyph, length) = self.progress_glyph(index);
        let total = glyph.chars().count() * length;
        let step = step.min(total);
        let percent = (step as f64 / total as f64 * 100.0).round();
        let filled: String = glyph.chars().cycle().take(step).collect();
        self.lines[index].nodes = vec![Node::text(format!("{} {}%", filled, percent as u64))];

        let cap = self.lines[index]
            .spec
            .progress_percent
            .unwrap_or(self.config.progress_percent);
        if percent > cap || step >= total {
            self.settle(index)
        } else {
            self.set_stage(index, LineStage::Progress { step: step + 1 });
            wait(self.state.type_delay_for(None))
        }
    }

    fn settle(&mut self, index: usize) -> Step {
        self.set_stage(index, LineStage::Settle);
        wait(self.state.line_delay_for(self.lines[index].spec.delay_after))
    }

    fn finish(&mut self) {
        self.container
            .set_control_visible(ControlKind::FastForward, false);
        self.state.restore();
        self.container.append_control(ControlKind::Restart, true);
        self.state.phase = Phase::Finished;
        debug!(run = self.state.runs, "Sequencer finished");
    }

    fn set_stage(&mut self, index: usize, stage: LineStage) {
        self.state.phase = Phase::Line { index, stage };
    }

    fn type_delay(&self, index: usize) -> f64 {
        self.state.type_delay_for(self.lines[index].spec.type_delay)
    }

    /// Fill glyph and repeat count of a progress line. The bar itself is
    /// never materialized; each step takes a prefix of the glyph cycle.
    fn progress_glyph(&self, index: usize) -> (&str, usize) {
        let spec = &self.lines[index].spec;
        let length = spec.progress_length.unwrap_or(self.config.progress_length);
        let glyph = spec
            .progress_char
            .as_deref()
            .unwrap_or(&self.config.progress_char);
        (glyph, length)
    }
}

fn wait(ms: f64) -> Step {
    Step::Wait(Duration::from_nanos((ms.max(0.0) * 1_000_000.0).round() as u64))
}

/// First typeable position at or after `offset` chars into node `from`.
/// Prompt markers are never typed.
fn next_char(line: &Line, from: usize, offset: usize) -> Option<(usize, usize)> {
    line.spec
        .nodes
        .iter()
        .enumerate()
        .skip(from)
        .filter(|(_, node)| !node.prompt)
        .find_map(|(i, node)| {
            let start = if i == from { offset } else { 0 };
            (node.text.chars().count() > start).then_some((i, start))
        })
}
