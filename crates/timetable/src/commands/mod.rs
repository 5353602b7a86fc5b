//! Command dispatch: loads the payload once, then hands it to a handler.

pub mod config_cmd;
pub mod export;
pub mod names;
pub mod sessions;
pub mod show;
pub mod stats;
pub mod util;

use std::sync::Arc;

use timetable_core::{CoreError, PayloadLoader, Timetable, TimetableSource};
use tracing::debug;

use crate::cli::{Command, ExportArgs, FilterArgs, GlobalOpts};
use crate::config;
use crate::error::CliError;

/// Retrieve the payload for a read command: one request, then done.
pub async fn load(global: &GlobalOpts) -> Result<Arc<Timetable>, CliError> {
    let source = config::build_source(global)?;
    let spinner = util::spinner(global, &format!("Loading timetable from {}", source.describe()));

    let mut loader = PayloadLoader::mount(Arc::new(source));
    let state = loader.settled().await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    if let Some(timetable) = state.timetable() {
        debug!(sessions = timetable.session_count(), "payload ready");
        return Ok(Arc::clone(timetable));
    }
    let error = state
        .error()
        .cloned()
        .unwrap_or_else(|| CoreError::Internal("load did not settle".into()));
    Err(error.into())
}

/// Commands that need a loaded payload.
#[derive(Debug)]
pub enum ReadCommand {
    Show(FilterArgs),
    Sessions(FilterArgs),
    Teachers,
    Students,
    Stats(FilterArgs),
    Export(ExportArgs),
}

impl TryFrom<Command> for ReadCommand {
    type Error = Command;

    /// Hands back commands that run without a payload.
    fn try_from(cmd: Command) -> Result<Self, Command> {
        match cmd {
            Command::Show(args) => Ok(Self::Show(args)),
            Command::Sessions(args) => Ok(Self::Sessions(args)),
            Command::Teachers => Ok(Self::Teachers),
            Command::Students => Ok(Self::Students),
            Command::Stats(args) => Ok(Self::Stats(args)),
            Command::Export(args) => Ok(Self::Export(args)),
            other @ (Command::Config(_) | Command::Completions(_)) => Err(other),
        }
    }
}

/// Dispatch a payload-bound command to the appropriate handler.
pub fn dispatch(
    cmd: ReadCommand,
    timetable: Arc<Timetable>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        ReadCommand::Show(args) => show::handle(timetable, &args, global),
        ReadCommand::Sessions(args) => sessions::handle(timetable, &args, global),
        ReadCommand::Teachers => names::handle_teachers(&timetable, global),
        ReadCommand::Students => names::handle_students(&timetable, global),
        ReadCommand::Stats(args) => stats::handle(timetable, &args, global),
        ReadCommand::Export(args) => export::handle(timetable, &args, global),
    }
}
