//! CLI configuration: thin wrapper around `timetable_config` shared types.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides (--server,
//! --file, --timeout, --insecure).

use timetable_core::{FileSource, HttpSource, Source};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use timetable_config::{
    Config, ConfigError, Profile, config_path, load_config_or_default, save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile, applying CLI flag overrides on top.
///
/// `--server` without a matching profile is enough on its own.
pub fn resolve_profile(global: &GlobalOpts, cfg: &Config) -> Result<Profile, CliError> {
    let mut profile = match cfg.resolve_profile(global.profile.as_deref()) {
        Ok(profile) => profile,
        Err(ConfigError::UnknownProfile { name }) => match global.server {
            Some(ref server) => Profile::new(server.clone()),
            None => {
                let mut names: Vec<_> = cfg.profiles.keys().cloned().collect();
                names.sort();
                let available = if names.is_empty() {
                    "(none)".into()
                } else {
                    names.join(", ")
                };
                return Err(CliError::ProfileNotFound { name, available });
            }
        },
        Err(other) => return Err(other.into()),
    };

    // Flag > env > profile
    if let Some(ref server) = global.server {
        profile.server.clone_from(server);
    }
    if global.insecure {
        profile.insecure = Some(true);
    }
    if let Some(timeout) = global.timeout {
        profile.timeout = Some(timeout);
    }
    Ok(profile)
}

/// Build the payload source for a read command.
pub fn build_source(global: &GlobalOpts) -> Result<Source, CliError> {
    if let Some(ref path) = global.file {
        return Ok(Source::File(FileSource::new(path.clone())));
    }

    let cfg = load_config_or_default();
    let profile = resolve_profile(global, &cfg)?;
    let source_config = timetable_config::profile_to_source_config(&profile, &cfg.defaults)?;
    Ok(Source::Http(HttpSource::new(&source_config)?))
}
