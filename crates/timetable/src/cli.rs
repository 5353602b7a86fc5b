//! Clap derive structures for the `timetable` CLI.
//!
//! Defines the command tree, global flags, and shared argument groups.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// timetable -- view a school timetable from the command line
#[derive(Debug, Parser)]
#[command(
    name = "timetable",
    version,
    about = "View a school timetable from the command line",
    long_about = "Fetches a timetable payload once and renders it as a day-by-slot grid,\n\
        a flat session list, summary counts or CSV.\n\n\
        The payload comes from a timetable server (see `timetable config init`)\n\
        or from a saved JSON file via --file.",
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
    /// Server profile to use
    #[arg(long, short = 'p', env = "TIMETABLE_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Timetable server URL (overrides profile)
    #[arg(long, short = 'S', env = "TIMETABLE_SERVER", global = true)]
    pub server: Option<String>,

    /// Read the payload from a JSON file instead of a server
    #[arg(long, short = 'f', global = true, conflicts_with = "server")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "TIMETABLE_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "TIMETABLE_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "TIMETABLE_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
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

#[derive(Debug, Clone, ValueEnum)]
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
    /// Show the day-by-slot grid
    #[command(alias = "grid", alias = "g")]
    Show(FilterArgs),

    /// List sessions in grid reading order
    #[command(alias = "ls")]
    Sessions(FilterArgs),

    /// List the teachers named in the payload
    Teachers,

    /// List the students named in the payload
    Students,

    /// Show session, teacher and student counts
    Stats(FilterArgs),

    /// Write the (filtered) sessions as CSV
    Export(ExportArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared Filter Arguments ──────────────────────────────────────────

/// Narrowing criteria shared by every read command.
///
/// Both are exact, case-sensitive matches; giving both requires a session
/// to satisfy each.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Only sessions taught by this teacher
    #[arg(long, short = 't')]
    pub teacher: Option<String>,

    /// Only sessions attended by this student
    #[arg(long, short = 's')]
    pub student: Option<String>,
}

// ── Export ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Write to this file instead of stdout
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create the config file with a single profile
    Init {
        /// Profile name
        #[arg(long, default_value = "default")]
        name: String,

        /// Server URL for the profile
        #[arg(long = "url", default_value = "http://127.0.0.1:8000")]
        url: String,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Display current resolved configuration
    Show,

    /// Print the config file path
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
