//! Sequencer settings and their resolution.
//!
//! Every tunable is resolved with the same precedence:
//! explicit option > container attribute > default layer. The default layer
//! is the built-in table below unless the user config overrides it.

use serde::{Deserialize, Serialize};

use super::line::{parse_setting, AttrNames, Attributes};
use super::line_data::LineData;
use super::parse::{
    parse_delay, parse_glyph, parse_length, parse_percent, valid_length, MAX_PROGRESS_LENGTH,
};

pub const DEFAULT_PREFIX: &str = "ty";
pub const DEFAULT_START_DELAY: f64 = 600.0;
pub const DEFAULT_TYPE_DELAY: f64 = 90.0;
pub const DEFAULT_LINE_DELAY: f64 = 1500.0;
pub const DEFAULT_PROGRESS_LENGTH: usize = 40;
pub const DEFAULT_PROGRESS_CHAR: &str = "█";
pub const DEFAULT_PROGRESS_PERCENT: f64 = 100.0;
pub const DEFAULT_CURSOR: &str = "▋";
pub const DEFAULT_PROMPT: &str = "$";

/// The default layer. Used whenever neither an explicit option nor a
/// container attribute supplies a usable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub prefix: String,
    pub start_delay: f64,
    pub type_delay: f64,
    pub line_delay: f64,
    pub progress_length: usize,
    pub progress_char: String,
    pub progress_percent: f64,
    pub cursor: String,
    pub prompt: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            start_delay: DEFAULT_START_DELAY,
            type_delay: DEFAULT_TYPE_DELAY,
            line_delay: DEFAULT_LINE_DELAY,
            progress_length: DEFAULT_PROGRESS_LENGTH,
            progress_char: DEFAULT_PROGRESS_CHAR.to_string(),
            progress_percent: DEFAULT_PROGRESS_PERCENT,
            cursor: DEFAULT_CURSOR.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

/// Explicit options supplied by the caller (CLI flags or a script's
/// `options` table). Unset fields fall through to the container attributes.
///
/// Zero is a real setting at every level: `start_delay: Some(0.0)` or
/// `data-ty-startDelay="0"` starts immediately. The browser widget treats a
/// zero option or attribute as unset and uses the built-in default instead.
/// Invalid values (negative delays, a cap outside `1..=100`, a bar longer than
/// [`MAX_PROGRESS_LENGTH`](super::parse::MAX_PROGRESS_LENGTH)) fall through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SequencerOptions {
    pub prefix: Option<String>,
    #[serde(alias = "startDelay")]
    pub start_delay: Option<f64>,
    #[serde(alias = "typeDelay")]
    pub type_delay: Option<f64>,
    #[serde(alias = "lineDelay")]
    pub line_delay: Option<f64>,
    #[serde(alias = "progressLength")]
    pub progress_length: Option<usize>,
    #[serde(alias = "progressChar")]
    pub progress_char: Option<String>,
    #[serde(alias = "progressPercent")]
    pub progress_percent: Option<f64>,
    pub cursor: Option<String>,
    #[serde(alias = "charBeforeInput", alias = "prompt")]
    pub char_before_input: Option<String>,
    /// Lines appended after the declared ones.
    #[serde(skip)]
    pub line_data: Vec<LineData>,
    /// Skip Initialize on construction (visibility-triggered start).
    #[serde(alias = "noInit")]
    pub no_init: bool,
}

impl SequencerOptions {
    /// Layer `self` over `base`: any field set here wins.
    pub fn over(&self, base: &SequencerOptions) -> SequencerOptions {
        let mut line_data = base.line_data.clone();
        line_data.extend(self.line_data.iter().cloned());
        SequencerOptions {
            prefix: self.prefix.clone().or_else(|| base.prefix.clone()),
            start_delay: self.start_delay.or(base.start_delay),
            type_delay: self.type_delay.or(base.type_delay),
            line_delay: self.line_delay.or(base.line_delay),
            progress_length: self.progress_length.or(base.progress_length),
            progress_char: self
                .progress_char
                .clone()
                .or_else(|| base.progress_char.clone()),
            progress_percent: self.progress_percent.or(base.progress_percent),
            cursor: self.cursor.clone().or_else(|| base.cursor.clone()),
            char_before_input: self
                .char_before_input
                .clone()
                .or_else(|| base.char_before_input.clone()),
            line_data,
            no_init: self.no_init || base.no_init,
        }
    }

    /// The attribute prefix, which cannot come from the container itself.
    pub fn prefix_or<'a>(&'a self, defaults: &'a Defaults) -> &'a str {
        self.prefix
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(&defaults.prefix)
    }
}

/// Fully resolved per-instance settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequencerConfig {
    pub prefix: String,
    pub start_delay: f64,
    pub type_delay: f64,
    pub line_delay: f64,
    pub progress_length: usize,
    pub progress_char: String,
    pub progress_percent: f64,
    pub cursor: String,
    pub prompt: String,
}

impl SequencerConfig {
    pub fn resolve(options: &SequencerOptions, container: &Attributes, defaults: &Defaults) -> Self {
        let prefix = options.prefix_or(defaults).to_string();
        let names = AttrNames::new(&prefix);
        let attr = |name: &str| names.setting(name);

        Self {
            start_delay: options
                .start_delay
                .filter(|v| v.is_finite() && *v >= 0.0)
                .or_else(|| parse_setting(container, &attr("startDelay"), parse_delay))
                .unwrap_or(defaults.start_delay),
            type_delay: options
                .type_delay
                .filter(|v| v.is_finite() && *v >= 0.0)
                .or_else(|| parse_setting(container, &attr("typeDelay"), parse_delay))
                .unwrap_or(defaults.type_delay),
            line_delay: options
                .line_delay
                .filter(|v| v.is_finite() && *v >= 0.0)
                .or_else(|| parse_setting(container, &attr("lineDelay"), parse_delay))
                .unwrap_or(defaults.line_delay),
            progress_length: options
                .progress_length
                .filter(|v| valid_length(*v))
                .or_else(|| parse_setting(container, &attr("progressLength"), parse_length))
                .unwrap_or_else(|| defaults.progress_length.min(MAX_PROGRESS_LENGTH)),
            progress_char: options
                .progress_char
                .clone()
                .and_then(|v| parse_glyph(&v))
                .or_else(|| parse_setting(container, &attr("progressChar"), parse_glyph))
                .unwrap_or_else(|| defaults.progress_char.clone()),
            progress_percent: options
                .progress_percent
                .filter(|v| (1.0..=100.0).contains(v))
                .or_else(|| parse_setting(container, &attr("progressPercent"), parse_percent))
                .unwrap_or(defaults.progress_percent),
            cursor: options
                .cursor
                .clone()
                .and_then(|v| parse_glyph(&v))
                .or_else(|| parse_setting(container, &attr("cursor"), parse_glyph))
                .unwrap_or_else(|| defaults.cursor.clone()),
            prompt: options
                .char_before_input
                .clone()
                .and_then(|v| parse_glyph(&v))
                .or_else(|| parse_setting(container, &attr("charBeforeInput"), parse_glyph))
                .unwrap_or_else(|| defaults.prompt.clone()),
            prefix,
        }
    }

    pub fn attr_names(&self) -> AttrNames {
        AttrNames::new(&self.prefix)
    }
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self::resolve(
            &SequencerOptions::default(),
            &Attributes::new(),
            &Defaults::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs.iter().copied().collect()
    }

    #[test]
    fn builtin_defaults_when_nothing_set() {
        let config = SequencerConfig::default();
        assert_eq!(config.prefix, "ty");
        assert_eq!(config.start_delay, 600.0);
        assert_eq!(config.type_delay, 90.0);
        assert_eq!(config.line_delay, 1500.0);
        assert_eq!(config.progress_length, 40);
        assert_eq!(config.progress_char, "█");
        assert_eq!(config.progress_percent, 100.0);
        assert_eq!(config.cursor, "▋");
        assert_eq!(config.prompt, "$");
    }

    #[test]
    fn attribute_beats_default_and_option_beats_attribute() {
        let container = attrs(&[("data-ty-startDelay", "100"), ("data-ty-typeDelay", "20")]);
        let options = SequencerOptions {
            type_delay: Some(5.0),
            ..Default::default()
        };
        let config = SequencerConfig::resolve(&options, &container, &Defaults::default());
        assert_eq!(config.start_delay, 100.0);
        assert_eq!(config.type_delay, 5.0);
        assert_eq!(config.line_delay, 1500.0);
    }

    #[test]
    fn oversized_progress_length_falls_through() {
        let container = attrs(&[("data-ty-progressLength", "12")]);
        let options = SequencerOptions {
            progress_length: Some(usize::MAX),
            ..Default::default()
        };
        let config = SequencerConfig::resolve(&options, &container, &Defaults::default());
        assert_eq!(config.progress_length, 12);

        let container = attrs(&[("data-ty-progressLength", "5000")]);
        let config = SequencerConfig::resolve(&options, &container, &Defaults::default());
        assert_eq!(config.progress_length, 40);
    }

    #[test]
    fn unparsable_attribute_falls_back_to_default() {
        let container = attrs(&[
            ("data-ty-lineDelay", "slow"),
            ("data-ty-progressPercent", "250"),
            ("data-ty-cursor", ""),
        ]);
        let config =
            SequencerConfig::resolve(&SequencerOptions::default(), &container, &Defaults::default());
        assert_eq!(config.line_delay, 1500.0);
        assert_eq!(config.progress_percent, 100.0);
        assert_eq!(config.cursor, "▋");
    }

    #[test]
    fn invalid_explicit_option_falls_through_to_attribute() {
        let container = attrs(&[("data-ty-startDelay", "50")]);
        let options = SequencerOptions {
            start_delay: Some(-1.0),
            progress_percent: Some(0.0),
            ..Default::default()
        };
        let config = SequencerConfig::resolve(&options, &container, &Defaults::default());
        assert_eq!(config.start_delay, 50.0);
        assert_eq!(config.progress_percent, 100.0);
    }

    #[test]
    fn zero_is_an_explicit_value() {
        let options = SequencerOptions {
            start_delay: Some(0.0),
            ..Default::default()
        };
        let config =
            SequencerConfig::resolve(&options, &Attributes::new(), &Defaults::default());
        assert_eq!(config.start_delay, 0.0);
    }

    #[test]
    fn prefix_changes_attribute_namespace() {
        let container = attrs(&[("data-term-typeDelay", "33"), ("data-ty-typeDelay", "99")]);
        let options = SequencerOptions {
            prefix: Some("term".to_string()),
            ..Default::default()
        };
        let config = SequencerConfig::resolve(&options, &container, &Defaults::default());
        assert_eq!(config.prefix, "term");
        assert_eq!(config.type_delay, 33.0);
    }

    #[test]
    fn custom_default_layer_is_used_last() {
        let defaults = Defaults {
            line_delay: 200.0,
            prompt: ">".to_string(),
            ..Defaults::default()
        };
        let config =
            SequencerConfig::resolve(&SequencerOptions::default(), &Attributes::new(), &defaults);
        assert_eq!(config.line_delay, 200.0);
        assert_eq!(config.prompt, ">");
    }

    #[test]
    fn over_prefers_self_and_concatenates_line_data() {
        let base = SequencerOptions {
            type_delay: Some(10.0),
            cursor: Some("_".to_string()),
            line_data: vec![LineData::new().with("value", "a")],
            ..Default::default()
        };
        let top = SequencerOptions {
            type_delay: Some(1.0),
            line_data: vec![LineData::new().with("value", "b")],
            ..Default::default()
        };
        let merged = top.over(&base);
        assert_eq!(merged.type_delay, Some(1.0));
        assert_eq!(merged.cursor.as_deref(), Some("_"));
        assert_eq!(merged.line_data.len(), 2);
    }

    #[test]
    fn options_deserialize_camel_case_aliases() {
        let options: SequencerOptions =
            toml::from_str("typeDelay = 40.0\ncharBeforeInput = \">\"\nnoInit = true").unwrap();
        assert_eq!(options.type_delay, Some(40.0));
        assert_eq!(options.char_before_input.as_deref(), Some(">"));
        assert!(options.no_init);
    }
}
