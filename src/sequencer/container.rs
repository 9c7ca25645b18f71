//! Host container model.
//!
//! The container is the region lines are attached to. It only records
//! which children are attached, in order, whether each control is visible,
//! and the size frozen by Initialize. Renderers read it; the sequencer is
//! the only writer.

use serde::Serialize;

use super::line::Attributes;

/// The two interactive controls rendered inside a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    FastForward,
    Restart,
}

impl ControlKind {
    pub fn label(&self) -> &'static str {
        match self {
            ControlKind::FastForward => "fast →",
            ControlKind::Restart => "restart ↻",
        }
    }

    /// Link target of the control. Activation never follows it.
    pub fn href(&self) -> &'static str {
        match self {
            ControlKind::FastForward => "#",
            ControlKind::Restart => "",
        }
    }
}

/// One attached child, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Child {
    /// Index into the sequencer's line list.
    Line(usize),
    Control { kind: ControlKind, visible: bool },
}

/// Size in terminal cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    attributes: Attributes,
    children: Vec<Child>,
    fixed_width: Option<usize>,
    min_height: Option<usize>,
}

impl Container {
    pub fn new(attributes: Attributes) -> Self {
        Self {
            attributes,
            ..Self::default()
        }
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Attach a line. Attaching an already attached line moves it to the end.
    pub fn append_line(&mut self, index: usize) {
        self.children.retain(|c| *c != Child::Line(index));
        self.children.push(Child::Line(index));
    }

    pub fn append_control(&mut self, kind: ControlKind, visible: bool) {
        self.children.push(Child::Control { kind, visible });
    }

    /// Change the visibility of the most recently attached control of `kind`.
    pub fn set_control_visible(&mut self, kind: ControlKind, visible: bool) -> bool {
        let latest = self.children.iter_mut().rev().find_map(|child| match child {
            Child::Control { kind: k, visible: shown } if *k == kind => Some(shown),
            _ => None,
        });
        match latest {
            Some(shown) => {
                *shown = visible;
                true
            }
            None => false,
        }
    }

    /// Whether a visible control of `kind` is attached.
    pub fn has_visible_control(&self, kind: ControlKind) -> bool {
        self.children
            .iter()
            .any(|c| matches!(c, Child::Control { kind: k, visible: true } if *k == kind))
    }

    pub fn contains_line(&self, index: usize) -> bool {
        self.children.contains(&Child::Line(index))
    }

    /// Detach every child.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Pin the measured size so emptying the container keeps its footprint.
    /// Zero dimensions are left to the surrounding layout.
    pub fn freeze(&mut self, measured: Size) {
        if measured.width > 0 {
            self.fixed_width = Some(measured.width);
        }
        if measured.height > 0 {
            self.min_height = Some(measured.height);
        }
    }

    pub fn fixed_width(&self) -> Option<usize> {
        self.fixed_width
    }

    pub fn min_height(&self) -> Option<usize> {
        self.min_height
    }

    /// Rows occupied on the page: attached children, never less than the
    /// frozen minimum height.
    pub fn layout_height(&self) -> usize {
        self.children.len().max(self.min_height.unwrap_or(0))
    }
}
