mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::commands::ReadCommand;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let read = match ReadCommand::try_from(cli.command) {
        Ok(read) => read,

        // Config commands don't need a payload
        Err(Command::Config(args)) => return commands::config_cmd::handle(args, &cli.global),

        Err(Command::Completions(args)) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "timetable", &mut std::io::stdout());
            return Ok(());
        }

        Err(other) => {
            return Err(CliError::Validation {
                field: "command".into(),
                reason: format!("{other:?} cannot run here"),
            });
        }
    };

    // Everything else reads one payload first
    let timetable = commands::load(&cli.global).await?;
    tracing::debug!(command = ?read, "dispatching command");
    commands::dispatch(read, timetable, &cli.global)
}
