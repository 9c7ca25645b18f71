//! The page: every terminal of a document stacked vertically, with timers,
//! scrolling, focus and the visibility-triggered autostart.
//!
//! `Page` holds no terminal I/O. The interactive player feeds it wall-clock
//! time, viewport sizes and input; tests feed it a virtual clock.

use std::time::Duration;

use tracing::debug;
use unicode_width::UnicodeWidthStr;

use crate::sequencer::{Child, ControlKind, Sequencer, Step};
use crate::visibility::{Span, VisibilityWatcher};

/// Rows drawn above a container (the title bar).
pub const TITLE_ROWS: usize = 1;
/// Rows drawn below a container.
pub const PADDING_ROWS: usize = 1;
/// Blank rows between two terminal boxes.
pub const GAP_ROWS: usize = 1;
/// Columns between the box edge and line content.
pub const CONTENT_INDENT: usize = 2;

/// Page behavior settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSettings {
    /// Start each terminal on first appearance instead of all at once.
    pub autostart: bool,
    /// Inward viewport margin for the autostart trigger, in rows.
    pub root_margin: usize,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            autostart: true,
            root_margin: 2,
        }
    }
}

/// One terminal of the page and its pending timer.
#[derive(Debug, Clone)]
pub struct Terminal {
    pub sequencer: Sequencer,
    /// When the sequencer should next be stepped. `None` while idle or
    /// finished.
    deadline: Option<Duration>,
}

impl Terminal {
    pub fn new(sequencer: Sequencer) -> Self {
        Self {
            sequencer,
            deadline: None,
        }
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Rows taken by the container itself.
    pub fn content_height(&self) -> usize {
        self.sequencer.container().layout_height()
    }

    /// Rows taken by the whole box: title, container, padding.
    pub fn box_height(&self) -> usize {
        TITLE_ROWS + self.content_height() + PADDING_ROWS
    }

    /// Step every due transition. Returns whether anything changed.
    fn advance(&mut self, now: Duration) -> bool {
        let mut changed = false;
        while let Some(deadline) = self.deadline {
            if deadline > now {
                break;
            }
            changed = true;
            self.deadline = match self.sequencer.step() {
                Step::Wait(wait) => Some(deadline + wait),
                Step::Finished | Step::Idle => None,
            };
        }
        changed
    }
}

#[derive(Debug, Clone)]
pub struct Page {
    terminals: Vec<Terminal>,
    watcher: VisibilityWatcher<usize>,
    settings: PageSettings,
    scroll: usize,
    viewport_height: usize,
    focus: usize,
    now: Duration,
}

impl Page {
    /// Build a page over sequencers constructed with `no_init`.
    ///
    /// With autostart every terminal waits for its first appearance;
    /// without it every terminal is initialized right away.
    pub fn new(sequencers: Vec<Sequencer>, settings: PageSettings) -> Self {
        let mut page = Self {
            terminals: sequencers.into_iter().map(Terminal::new).collect(),
            watcher: VisibilityWatcher::new(settings.root_margin),
            settings,
            scroll: 0,
            viewport_height: 0,
            focus: 0,
            now: Duration::ZERO,
        };
        for index in 0..page.terminals.len() {
            if settings.autostart {
                page.watcher.observe(index);
            } else {
                page.start(index);
            }
        }
        page
    }

    pub fn terminals(&self) -> &[Terminal] {
        &self.terminals
    }

    pub fn settings(&self) -> PageSettings {
        self.settings
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Whether every started terminal is done and nothing waits to appear.
    pub fn is_settled(&self) -> bool {
        self.watcher.is_empty() && self.terminals.iter().all(|t| t.deadline.is_none())
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.terminals.iter().filter_map(|t| t.deadline).min()
    }

    /// Top row of every terminal box.
    pub fn box_tops(&self) -> Vec<usize> {
        let mut top = 0;
        self.terminals
            .iter()
            .map(|terminal| {
                let this = top;
                top += terminal.box_height() + GAP_ROWS;
                this
            })
            .collect()
    }

    /// Total page height in rows.
    pub fn height(&self) -> usize {
        let boxes: usize = self.terminals.iter().map(Terminal::box_height).sum();
        boxes + GAP_ROWS * self.terminals.len().saturating_sub(1)
    }

    pub fn regions(&self) -> Vec<(usize, Span)> {
        self.box_tops()
            .into_iter()
            .zip(&self.terminals)
            .enumerate()
            .map(|(index, (top, terminal))| (index, Span::new(top, terminal.box_height())))
            .collect()
    }

    fn max_scroll(&self) -> usize {
        self.height().saturating_sub(self.viewport_height)
    }

    /// Set the number of visible rows and re-evaluate visibility.
    pub fn set_viewport(&mut self, height: usize) {
        self.viewport_height = height;
        self.scroll = self.scroll.min(self.max_scroll());
        self.check_visibility();
    }

    pub fn scroll_to(&mut self, row: usize) {
        self.scroll = row.min(self.max_scroll());
        self.check_visibility();
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let row = if delta < 0 {
            self.scroll.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll.saturating_add(delta as usize)
        };
        self.scroll_to(row);
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.viewport_height.max(1) as isize);
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-(self.viewport_height.max(1) as isize));
    }

    pub fn scroll_home(&mut self) {
        self.scroll_to(0);
    }

    pub fn scroll_end(&mut self) {
        self.scroll_to(self.max_scroll());
    }

    pub fn focus_next(&mut self) {
        if !self.terminals.is_empty() {
            self.set_focus((self.focus + 1) % self.terminals.len());
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.terminals.is_empty() {
            let len = self.terminals.len();
            self.set_focus((self.focus + len - 1) % len);
        }
    }

    /// Focus a terminal and scroll its box into view.
    pub fn set_focus(&mut self, index: usize) {
        let Some(&top) = self.box_tops().get(index) else {
            return;
        };
        self.focus = index;
        let bottom = top + self.terminals[index].box_height();
        if top < self.scroll {
            self.scroll_to(top);
        } else if bottom > self.scroll + self.viewport_height {
            self.scroll_to(bottom.saturating_sub(self.viewport_height).min(top));
        }
    }

    /// Activate a control on the focused terminal.
    pub fn activate(&mut self, kind: ControlKind) -> bool {
        self.activate_on(self.focus, kind)
    }

    /// Activate a control on a given terminal. A restart schedules the new
    /// run immediately.
    pub fn activate_on(&mut self, index: usize, kind: ControlKind) -> bool {
        let now = self.now;
        let Some(terminal) = self.terminals.get_mut(index) else {
            return false;
        };
        if !terminal.sequencer.activate(kind) {
            return false;
        }
        debug!(terminal = index, control = ?kind, "Control activated");
        if kind == ControlKind::Restart {
            terminal.deadline = Some(now);
        }
        true
    }

    /// Translate a click at a viewport position into a control activation.
    pub fn click(&mut self, column: usize, row: usize) -> bool {
        let Some((index, kind)) = self.hit_test(column, row) else {
            return false;
        };
        self.focus = index;
        self.activate_on(index, kind)
    }

    /// The visible control rendered at a viewport position, if any.
    pub fn hit_test(&self, column: usize, row: usize) -> Option<(usize, ControlKind)> {
        let page_row = self.scroll + row;
        let (index, top) = self
            .box_tops()
            .into_iter()
            .enumerate()
            .find(|(i, top)| page_row >= *top && page_row < top + self.terminals[*i].box_height())?;
        let child_row = page_row.checked_sub(top + TITLE_ROWS)?;
        match self.terminals[index].sequencer.container().children().get(child_row)? {
            Child::Control {
                kind,
                visible: true,
            } => {
                let start = CONTENT_INDENT;
                let end = start + kind.label().width();
                (column >= start && column < end).then_some((index, *kind))
            }
            _ => None,
        }
    }

    /// Advance the clock and step every due terminal.
    pub fn tick(&mut self, now: Duration) -> bool {
        self.now = now;
        let mut changed = false;
        for terminal in &mut self.terminals {
            changed |= terminal.advance(now);
        }
        changed
    }

    fn check_visibility(&mut self) {
        if self.watcher.is_empty() {
            return;
        }
        let viewport = Span::new(self.scroll, self.viewport_height);
        let regions = self.regions();
        for index in self.watcher.update(regions, viewport) {
            debug!(terminal = index, "Terminal scrolled into view");
            self.start(index);
        }
    }

    fn start(&mut self, index: usize) {
        if let Some(terminal) = self.terminals.get_mut(index) {
            terminal.sequencer.initialize();
            terminal.deadline = Some(self.now);
        }
    }
}
