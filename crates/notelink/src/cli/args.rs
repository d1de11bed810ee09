//! Clap argument definitions for the `notelink` CLI.

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "notelink")]
#[command(about = "Find and commit missing wikilinks across a note vault")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Supported `notelink` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Scan the vault (or a single note) for unlinked mentions
    Scan(ScanCommand),

    /// Turn a previously reported match into a wikilink
    Apply(ApplyCommand),

    /// Show how notelink parses a note
    Inspect(InspectCommand),

    /// Initialize notelink configuration
    Init(InitCommand),

    /// Validate configuration and diagnose issues
    Check,
}

/// Arguments for `notelink scan`.
#[derive(Args, Debug, Clone)]
pub struct ScanCommand {
    /// Note to scan, as a vault-relative path, file name, or title;
    /// scans the whole vault when omitted
    pub file: Option<String>,

    /// Maximum matches to report per note
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `notelink apply`.
#[derive(Args, Debug, Clone)]
pub struct ApplyCommand {
    /// Note containing the match (vault-relative path, file name, or title)
    pub file: String,

    /// Stable match id as reported by `notelink scan`
    pub id: String,

    /// Link through this alias: `[[match|alias]]` instead of `[[match]]`
    #[arg(long, conflicts_with = "replacement")]
    pub alias: Option<String>,

    /// Replace the span with this exact text instead of a wikilink
    #[arg(long)]
    pub replacement: Option<String>,
}

/// Arguments for `notelink inspect`.
#[derive(Args, Debug, Clone)]
pub struct InspectCommand {
    /// Note file to inspect
    pub file: String,
}

/// Arguments for `notelink init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.notelink.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}
