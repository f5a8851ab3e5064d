use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::GeneratorArgs;
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments.
///
/// Values given on the command line or through the environment win over the
/// file.
///
/// # Errors
///
/// Returns an error when a config value is invalid.
pub fn apply_config(
    args: &mut GeneratorArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_explicit(matches, "dest")
        && let Some(dest) = config.dest.as_deref()
    {
        let dest = dest.trim();
        if dest.is_empty() {
            return Err(AppError::config(ConfigError::EmptyDestination));
        }
        args.dest = dest.to_owned();
    }

    if !is_explicit(matches, "request_count")
        && let Some(req) = config.req
    {
        args.request_count = req;
    }

    if !is_explicit(matches, "valid")
        && !is_explicit(matches, "invalid")
        && let Some(valid) = config.valid
    {
        args.valid = valid;
        args.invalid = !valid;
    }

    if !is_explicit(matches, "mode")
        && let Some(mode) = config.mode
    {
        args.mode = mode;
    }

    Ok(())
}

fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}
