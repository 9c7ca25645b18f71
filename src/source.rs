//! Document loading: HTML markup or line data scripts.

use std::fs;
use std::path::{Path, PathBuf};

use crate::markup;
use crate::script;
use crate::sequencer::{Attributes, Defaults, LineElement, Sequencer, SequencerOptions};

/// Errors that can occur while loading a document.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid container selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("Invalid TOML script: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON script: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No terminals found in {0}")]
    Empty(String),
}

/// Input format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Html,
    Toml,
    Json,
}

impl Format {
    /// Pick the format from the file extension, sniffing the contents when
    /// the extension is unknown.
    pub fn detect(path: &Path, contents: &str) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("html") | Some("htm") => Format::Html,
            Some("toml") => Format::Toml,
            Some("json") => Format::Json,
            _ => Self::sniff(contents),
        }
    }

    pub fn sniff(contents: &str) -> Self {
        match contents.trim_start().chars().next() {
            Some('<') => Format::Html,
            Some('[') | Some('{') if serde_json::from_str::<serde_json::Value>(contents).is_ok() => {
                Format::Json
            }
            _ => Format::Toml,
        }
    }
}

/// One terminal as declared by a document, before construction.
#[derive(Debug, Clone, Default)]
pub struct TerminalSource {
    /// Container attributes (instance-wide `data-ty-*` settings).
    pub attributes: Attributes,
    /// Lines declared in markup, in document order.
    pub lines: Vec<LineElement>,
    /// Options declared by the document itself (scripts only).
    pub options: SequencerOptions,
}

impl TerminalSource {
    /// Construct the sequencer. `explicit` options layer over the
    /// document's own options.
    pub fn build(self, explicit: &SequencerOptions, defaults: &Defaults) -> Sequencer {
        let options = explicit.over(&self.options);
        Sequencer::new(self.attributes, self.lines, &options, defaults)
    }
}

/// Settings that affect how a document is read.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// CSS selector for containers (markup only).
    pub selector: String,
    /// Attribute prefix used to find declared lines (markup only).
    pub prefix: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            selector: markup::DEFAULT_SELECTOR.to_string(),
            prefix: crate::sequencer::DEFAULT_PREFIX.to_string(),
        }
    }
}

/// Parse document contents in the given format.
pub fn parse(
    contents: &str,
    format: Format,
    load: &LoadOptions,
) -> Result<Vec<TerminalSource>, SourceError> {
    match format {
        Format::Html => markup::parse_document(contents, &load.selector, &load.prefix),
        Format::Toml => script::parse_toml(contents),
        Format::Json => script::parse_json(contents),
    }
}

/// Read and parse a document from disk. A document without any terminal
/// is an error.
pub fn load(path: &Path, load: &LoadOptions) -> Result<Vec<TerminalSource>, SourceError> {
    let contents = fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let format = Format::detect(path, &contents);
    tracing::debug!(path = %path.display(), ?format, "Loading document");

    let terminals = parse(&contents, format, load)?;
    if terminals.is_empty() {
        return Err(SourceError::Empty(path.display().to_string()));
    }
    Ok(terminals)
}
