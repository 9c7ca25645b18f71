//! Inspect command handler

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;

use termynal::cli::DocumentArgs;
use termynal::sequencer::{Attributes, LineSpec, Sequencer, SequencerConfig};
use termynal::theme::Theme;
use termynal::Config;

use super::load_sequencers;

#[derive(Serialize)]
struct TerminalReport<'a> {
    terminal: usize,
    config: &'a SequencerConfig,
    attributes: &'a Attributes,
    lines: Vec<&'a LineSpec>,
}

fn reports(sequencers: &[Sequencer]) -> Vec<TerminalReport<'_>> {
    sequencers
        .iter()
        .enumerate()
        .map(|(index, seq)| TerminalReport {
            terminal: index + 1,
            config: seq.config(),
            attributes: seq.container().attributes(),
            lines: seq.lines().iter().map(|line| &line.spec).collect(),
        })
        .collect()
}

/// Text report: resolved settings, then one row per line.
pub(crate) fn format_text(sequencers: &[Sequencer], theme: &Theme) -> String {
    let mut out = String::new();
    for (index, seq) in sequencers.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let c = seq.config();
        let _ = writeln!(
            out,
            "{}",
            theme.accent_text(&format!("terminal {}/{}", index + 1, sequencers.len()))
        );
        let _ = writeln!(
            out,
            "  prefix={} start={}ms type={}ms line={}ms",
            c.prefix, c.start_delay, c.type_delay, c.line_delay
        );
        let _ = writeln!(
            out,
            "  progress={}x{} cap={}% cursor={} prompt={}",
            c.progress_length, c.progress_char, c.progress_percent, c.cursor, c.prompt
        );
        for (n, line) in seq.lines().iter().enumerate() {
            let spec = &line.spec;
            let mut extras = Vec::new();
            if let Some(delay) = spec.delay_after {
                extras.push(format!("delay={}ms", delay));
            }
            if let Some(delay) = spec.type_delay {
                extras.push(format!("type={}ms", delay));
            }
            if let Some(class) = &spec.class {
                extras.push(format!("class={}", class));
            }
            let extras = if extras.is_empty() {
                String::new()
            } else {
                format!("  {}", theme.secondary_text(&extras.join(" ")))
            };
            let _ = writeln!(
                out,
                "  {:>3} {:<8} {}{}",
                n + 1,
                spec.kind.as_str(),
                spec.text(),
                extras
            );
        }
    }
    out
}

pub fn handle(document: &DocumentArgs, json: bool) -> Result<()> {
    let config = Config::load()?;
    let sequencers = load_sequencers(document, &config)?;
    if json {
        let output = serde_json::to_string_pretty(&reports(&sequencers))
            .context("Failed to serialize report")?;
        println!("{}", output);
    } else {
        print!("{}", format_text(&sequencers, &Theme::mono()));
    }
    Ok(())
}
