//! CLI definitions for termynal
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages).

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

use crate::sequencer::SequencerOptions;

/// Version string: the package version, plus the commit for dev builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build clap styles using our theme colors.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "termynal")]
#[command(about = "Play animated terminal sessions (typed commands, progress bars, output) in your terminal")]
#[command(
    long_about = "termynal - animated terminal sessions, played in your terminal.

Reads an HTML page with termynal containers (elements matching `.termynal`
whose lines carry `data-ty` attributes) or a TOML/JSON line script, and
plays every terminal: input lines are typed character by character,
progress lines fill a bar, other lines appear after a delay.

QUICK START:
    termynal play demo.html         Play every terminal of a page
    termynal render demo.toml       Print the final transcript
    termynal inspect demo.html      Show the resolved settings and lines

SETTINGS PRECEDENCE:
    command-line flag > container attribute > config [defaults] > built-in

Logs go to stderr, filtered by TERMYNAL_LOG (e.g. TERMYNAL_LOG=debug)."
)]
#[command(version = VERSION)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Explicit sequencer options, the highest precedence level.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct SequencerArgs {
    /// Attribute prefix (data-<prefix>)
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,
    /// Delay before the first line, in ms
    #[arg(long, value_name = "MS")]
    pub start_delay: Option<f64>,
    /// Delay between typed characters, in ms
    #[arg(long, value_name = "MS")]
    pub type_delay: Option<f64>,
    /// Delay after each line, in ms
    #[arg(long, value_name = "MS")]
    pub line_delay: Option<f64>,
    /// Number of characters in a progress bar
    #[arg(long, value_name = "N")]
    pub progress_length: Option<usize>,
    /// Progress bar fill character
    #[arg(long, value_name = "CHAR")]
    pub progress_char: Option<String>,
    /// Percent at which progress bars stop (1-100)
    #[arg(long, value_name = "PERCENT")]
    pub progress_percent: Option<f64>,
    /// Cursor shown on the line being typed
    #[arg(long, value_name = "CHAR")]
    pub cursor: Option<String>,
    /// Prompt shown before input lines
    #[arg(long, value_name = "CHAR")]
    pub prompt: Option<String>,
}

impl SequencerArgs {
    /// Explicit options for every terminal. Construction never initializes;
    /// the page or renderer decides when each terminal starts.
    pub fn to_options(&self) -> SequencerOptions {
        SequencerOptions {
            prefix: self.prefix.clone(),
            start_delay: self.start_delay,
            type_delay: self.type_delay,
            line_delay: self.line_delay,
            progress_length: self.progress_length,
            progress_char: self.progress_char.clone(),
            progress_percent: self.progress_percent,
            cursor: self.cursor.clone(),
            char_before_input: self.prompt.clone(),
            line_data: Vec::new(),
            no_init: true,
        }
    }
}

/// A document and the options applied to its terminals.
#[derive(Args, Debug, Clone)]
pub struct DocumentArgs {
    /// HTML page, or TOML/JSON line script
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
    /// CSS selector matching terminal containers (HTML only)
    #[arg(long, value_name = "SELECTOR")]
    pub selector: Option<String>,
    #[command(flatten)]
    pub options: SequencerArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play every terminal of a document interactively
    #[command(long_about = "Play every terminal of a document in the alternate screen.

Terminals start the first time they scroll into view; --all starts them
all at once.

KEYS:
    f                  Fast-forward the focused terminal
    r                  Restart the focused terminal (once finished)
    Tab / Shift-Tab    Move focus between terminals
    arrows, j/k        Scroll
    PgUp/PgDn, Home/End
    q, Esc, Ctrl-C     Quit

The fast-forward and restart controls can also be clicked.

EXAMPLES:
    termynal play demo.html
    termynal play demo.html --all --type-delay 40
    termynal play script.toml --theme ocean --log-file termynal.log")]
    Play {
        #[command(flatten)]
        document: DocumentArgs,
        /// Start every terminal immediately instead of on first appearance
        #[arg(long)]
        all: bool,
        /// Theme preset (classic, ocean, mono)
        #[arg(long, value_name = "NAME")]
        theme: Option<String>,
    },

    /// Play headlessly and print the result
    #[command(long_about = "Play every terminal on a virtual clock and print the result.

Without flags prints the final transcript of each terminal. --timeline
prints every visible change with its virtual time and row.

EXAMPLES:
    termynal render demo.html
    termynal render demo.toml --timeline
    termynal render demo.html --fast --prompt '>'")]
    Render {
        #[command(flatten)]
        document: DocumentArgs,
        /// Print every visible change with its virtual time
        #[arg(long)]
        timeline: bool,
        /// Fast-forward: every delay is zero
        #[arg(long)]
        fast: bool,
    },

    /// Show resolved settings and lines of every terminal
    #[command(long_about = "Show the resolved settings and lines of every terminal.

EXAMPLES:
    termynal inspect demo.html
    termynal inspect demo.html --json | jq '.[0].config'")]
    Inspect {
        #[command(flatten)]
        document: DocumentArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Generate a shell completion script.

EXAMPLES:
    termynal completions bash > ~/.local/share/bash-completion/completions/termynal
    termynal completions zsh > ~/.zfunc/_termynal")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    #[command(long_about = "Display the effective configuration in TOML format.

Missing values are shown with their defaults.

EXAMPLE:
    termynal config show")]
    Show,
    /// Print the configuration file path
    #[command(long_about = "Print the configuration file path.

Defaults to ~/.config/termynal/config.toml; TERMYNAL_CONFIG overrides it.

EXAMPLE:
    termynal config path")]
    Path,
    /// Write a default configuration file
    #[command(long_about = "Write a configuration file with every default value.

An existing file is left alone unless --force is given.

EXAMPLE:
    termynal config init")]
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
