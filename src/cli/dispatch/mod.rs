//! Command-line argument dispatch.
//!
//! Maps validated CLI matches to the action the binary should execute.

use crate::cli::actions::{server::Args, Action};
use crate::cli::commands::token::{ARG_TOKEN_SECRET, ARG_TOKEN_TTL_SECONDS};
use anyhow::{Context, Result};

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>("port").copied().unwrap_or(8080);
    let dsn = matches
        .get_one::<String>("dsn")
        .cloned()
        .context("missing required argument: --dsn")?;
    let token_secret = matches
        .get_one::<String>(ARG_TOKEN_SECRET)
        .cloned()
        .context("missing required argument: --token-secret")?;
    let token_ttl_seconds = matches
        .get_one::<i64>(ARG_TOKEN_TTL_SECONDS)
        .copied()
        .unwrap_or(60 * 60 * 24 * 30);

    Ok(Action::Server(Args {
        port,
        dsn,
        token_secret,
        token_ttl_seconds,
    }))
}
