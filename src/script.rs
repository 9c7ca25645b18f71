//! Line data scripts (TOML or JSON).
//!
//! A script describes one or more terminals without any markup:
//!
//! ```toml
//! [options]
//! type_delay = 40
//!
//! [[lines]]
//! type = "input"
//! value = "pip install termynal"
//!
//! [[lines]]
//! type = "progress"
//! ```
//!
//! Several terminals use `[[terminal]]` tables with the same keys. A JSON
//! script may also be a bare array of line data objects.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::sequencer::{Attributes, LineData, SequencerOptions};
use crate::source::{SourceError, TerminalSource};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ScriptFile {
    terminal: Vec<ScriptTerminal>,
    #[serde(flatten)]
    single: ScriptTerminal,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ScriptTerminal {
    options: Option<SequencerOptions>,
    attributes: BTreeMap<String, String>,
    lines: Vec<LineData>,
}

impl ScriptTerminal {
    fn is_empty(&self) -> bool {
        self.options.is_none() && self.attributes.is_empty() && self.lines.is_empty()
    }

    fn into_source(self) -> TerminalSource {
        let mut options = self.options.unwrap_or_default();
        options.line_data = self.lines;
        TerminalSource {
            attributes: self.attributes.iter().collect::<Attributes>(),
            lines: Vec::new(),
            options,
        }
    }
}

impl ScriptFile {
    fn into_sources(self) -> Vec<TerminalSource> {
        let mut sources: Vec<TerminalSource> = Vec::new();
        if !self.single.is_empty() {
            sources.push(self.single.into_source());
        }
        sources.extend(self.terminal.into_iter().map(ScriptTerminal::into_source));
        sources
    }
}

pub fn parse_toml(contents: &str) -> Result<Vec<TerminalSource>, SourceError> {
    let script: ScriptFile = toml::from_str(contents)?;
    Ok(script.into_sources())
}

pub fn parse_json(contents: &str) -> Result<Vec<TerminalSource>, SourceError> {
    let value: serde_json::Value = serde_json::from_str(contents)?;
    if value.is_array() {
        let lines: Vec<LineData> = serde_json::from_value(value)?;
        return Ok(vec![ScriptTerminal {
            lines,
            ..ScriptTerminal::default()
        }
        .into_source()]);
    }
    let script: ScriptFile = serde_json::from_value(value)?;
    Ok(script.into_sources())
}
