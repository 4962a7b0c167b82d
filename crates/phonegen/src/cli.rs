//! Clap derive structures for the `phonegen` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// phonegen -- synthetic phone numbers for test data
#[derive(Debug, Parser)]
#[command(
    name = "phonegen",
    version,
    about = "Generate country-formatted phone numbers for test data",
    long_about = "Pick a country, generate a batch of random phone numbers in that\n\
        country's format, then page through, copy, or export them.\n\n\
        The last selected country and count are remembered between runs.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "PHONEGEN_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Saved selection file
    #[arg(long, env = "PHONEGEN_STATE_FILE", global = true, value_name = "PATH")]
    pub state_file: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List or search supported countries
    #[command(alias = "ls", alias = "c")]
    Countries(CountriesArgs),

    /// Select the country used by later generations
    Select(SelectArgs),

    /// Generate a batch of phone numbers
    #[command(alias = "gen", alias = "g")]
    Generate(GenerateArgs),

    /// Show the saved selection
    Status,

    /// Inspect configuration and saved state
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared Page Arguments ────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PageArgs {
    /// Page to show (1-based; clamped to the last page)
    #[arg(
        long,
        short = 'p',
        default_value = "1",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub page: u32,

    /// Show every item instead of a single page
    #[arg(long, short = 'a', conflicts_with = "page")]
    pub all: bool,
}

// ── Countries ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CountriesArgs {
    /// Case-insensitive substring of the name, dial code, or id
    pub query: Option<String>,

    #[command(flatten)]
    pub page: PageArgs,
}

// ── Select ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SelectArgs {
    /// Country id (e.g. "jp"), case-insensitive
    pub country: String,
}

// ── Generate ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Country id; also becomes the saved selection [default: saved selection]
    #[arg(long, short = 'c')]
    pub country: Option<String>,

    /// How many numbers to generate, 1-10000 [default: last used count]
    #[arg(long, short = 'n', allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Seed the random generator for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub page: PageArgs,

    /// Write the whole batch to a .txt file in DIR [default: config export_dir]
    #[arg(long, short = 'e', value_name = "DIR", num_args = 0..=1)]
    pub export: Option<Option<PathBuf>>,

    /// Copy the whole batch to the clipboard (OSC 52)
    #[arg(long, conflicts_with = "copy_one")]
    pub copy: bool,

    /// Copy the Nth number of the batch (1-based) to the clipboard
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub copy_one: Option<u32>,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display current resolved configuration
    Show,

    /// Print the config and state file locations
    Path,

    /// Forget the saved country and count
    ResetState,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
