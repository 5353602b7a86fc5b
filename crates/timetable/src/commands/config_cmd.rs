//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config::{self, Config, ConfigError, Profile};
use crate::error::CliError;
use crate::output;

fn render_toml(cfg: &Config) -> Result<String, CliError> {
    toml::to_string_pretty(cfg).map_err(|e| CliError::Config(ConfigError::from(e)))
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init { name, url, force } => {
            let path = config::config_path();
            if path.exists() && !force {
                return Err(CliError::ConfigExists {
                    path: path.display().to_string(),
                });
            }

            let profile = Profile::new(url);
            let mut cfg = Config {
                default_profile: Some(name.clone()),
                ..Config::default()
            };
            // Reject unusable URLs before anything is written.
            timetable_config::profile_to_source_config(&profile, &cfg.defaults)?;

            cfg.profiles.insert(name.clone(), profile);
            let written = config::save_config(&cfg)?;
            if !global.quiet {
                eprintln!("Wrote profile '{name}' to {}", written.display());
            }
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let out = match &global.output {
                OutputFormat::Table | OutputFormat::Plain => render_toml(&cfg)?,
                structured => output::serialize(structured, &cfg)?,
            };
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }
    }
}
