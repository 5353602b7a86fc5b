//! `timetable-tui`: interactive terminal view of a class timetable.
//!
//! Built on [ratatui](https://ratatui.rs). One screen shows the day × slot
//! grid under a metrics header and a filter bar; teacher and student
//! filters cycle with `t`/`T` and `s`/`S`, `r` re-fetches the payload.
//!
//! Logs are written to a file (default `/tmp/timetable-tui.log`) to avoid
//! corrupting the terminal UI.

mod action;
mod app;
mod component;
mod data_bridge;
mod event;
mod screens;
mod theme;
mod tui;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use timetable_config::{ConfigError, Profile};
use timetable_core::{FileSource, HttpSource, Source, TimetableSource};

use crate::app::App;

/// Terminal viewer for a class timetable.
#[derive(Parser, Debug)]
#[command(name = "timetable-tui", version, about)]
struct Cli {
    /// Config profile to use
    #[arg(short = 'p', long, env = "TIMETABLE_PROFILE")]
    profile: Option<String>,

    /// Timetable server URL (overrides profile)
    #[arg(short = 'S', long, env = "TIMETABLE_SERVER")]
    server: Option<String>,

    /// Read a saved payload from disk instead of a server
    #[arg(short = 'f', long, conflicts_with = "server")]
    file: Option<PathBuf>,

    /// Accept invalid TLS certificates
    #[arg(short = 'k', long, env = "TIMETABLE_INSECURE")]
    insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "TIMETABLE_TIMEOUT")]
    timeout: Option<u64>,

    /// Log file path (defaults to /tmp/timetable-tui.log)
    #[arg(long, default_value = "/tmp/timetable-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. Logging to stdout/stderr would corrupt the
/// TUI. The returned guard must be held until exit so logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "timetable_tui={log_level},timetable_core={log_level},timetable_api={log_level}"
        ))
    });

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("timetable-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

/// Resolve the payload source: `--file`, else the config profile with flag
/// overrides applied.
fn build_source(cli: &Cli) -> Result<Source> {
    if let Some(ref path) = cli.file {
        return Ok(Source::File(FileSource::new(path.clone())));
    }

    let cfg = timetable_config::load_config_or_default();
    let mut profile = match cfg.resolve_profile(cli.profile.as_deref()) {
        Ok(profile) => profile,
        Err(ConfigError::UnknownProfile { .. }) if cli.server.is_some() => {
            Profile::new(String::new())
        }
        Err(e) => return Err(e).wrap_err("cannot resolve profile"),
    };

    if let Some(ref server) = cli.server {
        profile.server.clone_from(server);
    }
    if cli.insecure {
        profile.insecure = Some(true);
    }
    if let Some(timeout) = cli.timeout {
        profile.timeout = Some(timeout);
    }

    let source_config = timetable_config::profile_to_source_config(&profile, &cfg.defaults)
        .wrap_err("invalid timetable server settings")?;
    let source = HttpSource::new(&source_config).wrap_err("cannot build HTTP client")?;
    Ok(Source::Http(source))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _guard = setup_tracing(&cli);

    tui::install_hooks()?;

    let source = build_source(&cli)?;
    info!(source = %source.describe(), "starting timetable-tui");

    let mut app = App::new(source);
    app.run().await
}
