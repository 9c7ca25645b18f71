//! Settings resolution across explicit options, attributes and defaults

use termynal::sequencer::{Attributes, Defaults, SequencerConfig};
use termynal::SequencerOptions;

fn container(pairs: &[(&str, &str)]) -> Attributes {
    let mut attrs = Attributes::new();
    for (name, value) in pairs {
        attrs.insert(name, *value);
    }
    attrs
}

#[test]
fn explicit_beats_attribute_beats_default() {
    let options = SequencerOptions {
        type_delay: Some(5.0),
        ..Default::default()
    };
    let attrs = container(&[("data-ty-typeDelay", "40"), ("data-ty-lineDelay", "200")]);
    let config = SequencerConfig::resolve(&options, &attrs, &Defaults::default());
    assert_eq!(config.type_delay, 5.0);
    assert_eq!(config.line_delay, 200.0);
    assert_eq!(config.start_delay, 600.0);
}

#[test]
fn user_defaults_replace_built_in_layer() {
    let defaults = Defaults {
        cursor: "_".to_string(),
        line_delay: 10.0,
        ..Defaults::default()
    };
    let attrs = container(&[("data-ty-lineDelay", "300")]);
    let config = SequencerConfig::resolve(&SequencerOptions::default(), &attrs, &defaults);
    assert_eq!(config.cursor, "_");
    assert_eq!(config.line_delay, 300.0);
}

#[test]
fn zero_is_a_usable_value() {
    let attrs = container(&[("data-ty-startDelay", "0")]);
    let config = SequencerConfig::resolve(&SequencerOptions::default(), &attrs, &Defaults::default());
    assert_eq!(config.start_delay, 0.0);
}

#[test]
fn invalid_values_fall_through() {
    let options = SequencerOptions {
        progress_percent: Some(150.0),
        line_delay: Some(-1.0),
        ..Default::default()
    };
    let attrs = container(&[
        ("data-ty-progressPercent", "60"),
        ("data-ty-typeDelay", "fast"),
        ("data-ty-cursor", ""),
    ]);
    let config = SequencerConfig::resolve(&options, &attrs, &Defaults::default());
    assert_eq!(config.progress_percent, 60.0);
    assert_eq!(config.line_delay, 1500.0);
    assert_eq!(config.type_delay, 90.0);
    assert_eq!(config.cursor, "▋");
}

#[test]
fn attribute_names_ignore_case() {
    let attrs = container(&[("DATA-TY-TYPEDELAY", "12")]);
    let config = SequencerConfig::resolve(&SequencerOptions::default(), &attrs, &Defaults::default());
    assert_eq!(config.type_delay, 12.0);
}

#[test]
fn custom_prefix_renames_every_attribute() {
    let options = SequencerOptions {
        prefix: Some("demo".to_string()),
        ..Default::default()
    };
    let attrs = container(&[("data-demo-typeDelay", "7"), ("data-ty-lineDelay", "1")]);
    let config = SequencerConfig::resolve(&options, &attrs, &Defaults::default());
    assert_eq!(config.prefix, "demo");
    assert_eq!(config.type_delay, 7.0);
    assert_eq!(config.line_delay, 1500.0);
}

#[test]
fn layering_keeps_the_upper_value() {
    let script = SequencerOptions {
        type_delay: Some(40.0),
        cursor: Some("|".to_string()),
        ..Default::default()
    };
    let flags = SequencerOptions {
        type_delay: Some(10.0),
        no_init: true,
        ..Default::default()
    };
    let merged = flags.over(&script);
    assert_eq!(merged.type_delay, Some(10.0));
    assert_eq!(merged.cursor.as_deref(), Some("|"));
    assert!(merged.no_init);
}
