//! xtask - build tasks for termynal
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: man pages and COMMANDS.md from the clap definitions

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, Command, CommandFactory, Parser, Subcommand};

use termynal::cli::Cli;

const BIN: &str = "termynal";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for termynal")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Only generate man pages
        #[arg(long, conflicts_with = "markdown")]
        man: bool,

        /// Only generate COMMANDS.md
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            let both = !man && !markdown;
            if both || man {
                generate_man_pages(&output)?;
            }
            if both || markdown {
                generate_markdown(&output)?;
            }
        }
    }
    Ok(())
}

/// Visible subcommands, skipping the generated `help`.
fn visible(cmd: &Command) -> impl Iterator<Item = &Command> {
    cmd.get_subcommands()
        .filter(|sub| !sub.is_hide_set() && sub.get_name() != "help")
}

fn documented_args(cmd: &Command) -> impl Iterator<Item = &Arg> {
    cmd.get_arguments().filter(|arg| {
        let id = arg.get_id().as_str();
        id != "help" && id != "version" && !arg.is_hide_set()
    })
}

/// Write one page per command, recursing into nested subcommands.
fn write_man(cmd: &Command, stem: &str, dir: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut buffer)?;
    let path = dir.join(format!("{}.1", stem));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());

    for sub in visible(cmd) {
        write_man(sub, &format!("{}-{}", stem, sub.get_name()), dir)?;
    }
    Ok(())
}

fn generate_man_pages(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;
    write_man(&Cli::command(), BIN, &man_dir)
}

fn flag_label(arg: &Arg) -> String {
    if arg.is_positional() {
        return format!("<{}>", arg.get_id().as_str().to_uppercase());
    }
    match (arg.get_short(), arg.get_long()) {
        (Some(s), Some(l)) => format!("-{}, --{}", s, l),
        (None, Some(l)) => format!("--{}", l),
        (Some(s), None) => format!("-{}", s),
        (None, None) => arg.get_id().as_str().to_string(),
    }
}

fn push_command(out: &mut String, cmd: &Command, path: &str, depth: usize) {
    let hashes = "#".repeat(depth.min(4));
    out.push_str(&format!("{} {}\n\n", hashes, path));
    if let Some(about) = cmd.get_about() {
        out.push_str(&format!("{}\n\n", about));
    }
    if let Some(long_about) = cmd.get_long_about() {
        out.push_str(&format!("```\n{}\n```\n\n", long_about));
    }

    let args: Vec<&Arg> = documented_args(cmd).collect();
    if !args.is_empty() {
        for arg in args {
            out.push_str(&format!("- `{}`", flag_label(arg)));
            if let Some(help) = arg.get_help() {
                out.push_str(&format!(": {}", help));
            }
            out.push('\n');
        }
        out.push('\n');
    }

    for sub in visible(cmd) {
        push_command(out, sub, &format!("{} {}", path, sub.get_name()), depth + 1);
    }
}

/// Generate COMMANDS.md
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut markdown = String::from("# termynal Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");
    for sub in visible(&cmd) {
        let name = sub.get_name();
        markdown.push_str(&format!("- [{}](#{}-{})\n", name, BIN, name));
    }
    markdown.push_str("\n---\n\n");

    for sub in visible(&cmd) {
        push_command(&mut markdown, sub, &format!("{} {}", BIN, sub.get_name()), 2);
        markdown.push_str("---\n\n");
    }
    markdown.push_str("*Generated by `cargo xtask gen-docs`*\n");

    let output_path = output.join("COMMANDS.md");
    fs::write(&output_path, markdown)?;
    println!("Generated: {}", output_path.display());
    Ok(())
}
