//! Line model: attributes, child nodes and the parsed per-line settings.

use std::collections::BTreeMap;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::parse::{parse_delay, parse_glyph, parse_length, parse_percent};

/// Case-insensitive attribute map.
///
/// HTML parsers lowercase attribute names (`data-ty-typeDelay` arrives as
/// `data-ty-typedelay`), so keys are normalized on insert and lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(name.to_ascii_lowercase(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(&name.to_ascii_lowercase())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.remove(&name.to_ascii_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k.as_ref(), v);
        }
        attrs
    }
}

/// Attribute names derived from the configured prefix (`ty` -> `data-ty`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrNames {
    base: String,
}

impl AttrNames {
    pub fn new(prefix: &str) -> Self {
        Self {
            base: format!("data-{}", prefix),
        }
    }

    /// The bare attribute holding a line's kind (`data-ty`).
    pub fn kind(&self) -> &str {
        &self.base
    }

    /// A namespaced setting attribute (`data-ty-<name>`).
    pub fn setting(&self, name: &str) -> String {
        format!("{}-{}", self.base, name)
    }
}

/// The three line variants. Anything unrecognized is `Plain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Input,
    Progress,
    Plain,
}

impl LineKind {
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("input") => LineKind::Input,
            Some("progress") => LineKind::Progress,
            _ => LineKind::Plain,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineKind::Input => "input",
            LineKind::Progress => "progress",
            LineKind::Plain => "plain",
        }
    }
}

/// One text-bearing child of a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub text: String,
    /// Styling hook carried over from the source element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Prompt marker inserted before input lines. Never cleared or retyped.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub prompt: bool,
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: None,
            prompt: false,
        }
    }

    pub fn styled(text: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: Some(class.into()),
            prompt: false,
        }
    }

    pub fn prompt(glyph: &str) -> Self {
        Self {
            text: format!("{} ", glyph),
            class: None,
            prompt: true,
        }
    }
}

/// Raw element form shared by markup lines and programmatic line data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineElement {
    pub attributes: Attributes,
    pub class: Option<String>,
    pub nodes: Vec<Node>,
}

/// One simulated terminal line, parsed once and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSpec {
    pub kind: LineKind,
    pub nodes: Vec<Node>,
    /// Milliseconds to wait after the line renders.
    pub delay_after: Option<f64>,
    /// Milliseconds per typed character (input lines).
    pub type_delay: Option<f64>,
    pub progress_length: Option<usize>,
    pub progress_char: Option<String>,
    pub progress_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl LineSpec {
    /// Parse a line element. Unparsable settings are left unset so the
    /// instance defaults apply at playback time.
    pub fn from_element(element: LineElement, names: &AttrNames) -> Self {
        let attrs = &element.attributes;
        let setting = |name: &str| names.setting(name);

        Self {
            kind: LineKind::from_attr(attrs.get(names.kind())),
            delay_after: parse_setting(attrs, &setting("delay"), parse_delay),
            type_delay: parse_setting(attrs, &setting("typeDelay"), parse_delay),
            progress_length: parse_setting(attrs, &setting("progressLength"), parse_length),
            progress_char: parse_setting(attrs, &setting("progressChar"), parse_glyph),
            progress_percent: parse_setting(attrs, &setting("progressPercent"), parse_percent),
            class: element.class.clone(),
            nodes: element.nodes,
            attributes: element.attributes,
        }
    }

    /// Insert the prompt marker before the content of an input line.
    ///
    /// Applied at most once; returns `false` when the marker already exists
    /// or the line is not an input line.
    pub fn insert_prompt(&mut self, glyph: &str) -> bool {
        if self.kind != LineKind::Input || self.nodes.iter().any(|n| n.prompt) {
            return false;
        }
        self.nodes.insert(0, Node::prompt(glyph));
        true
    }

    /// Concatenated text of every node, prompt included.
    pub fn text(&self) -> String {
        self.nodes.iter().map(|n| n.text.as_str()).collect()
    }

    /// Concatenated text without the prompt marker.
    pub fn content(&self) -> String {
        self.nodes
            .iter()
            .filter(|n| !n.prompt)
            .map(|n| n.text.as_str())
            .collect()
    }
}

/// Look up and parse one attribute, logging values that had to be ignored.
pub(crate) fn parse_setting<T>(
    attrs: &Attributes,
    name: &str,
    parse: fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = attrs.get(name)?;
    let parsed = parse(raw);
    if parsed.is_none() {
        tracing::warn!(attribute = name, value = raw, "Ignoring unparsable setting");
    }
    parsed
}

/// Display width of a run of nodes in terminal columns.
pub fn nodes_width(nodes: &[Node]) -> usize {
    nodes.iter().map(|n| n.text.width()).sum()
}
