use crate::{api, cli::globals::GlobalArgs};
use anyhow::Result;
use secrecy::SecretString;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub dsn: String,
    pub token_secret: String,
    pub token_ttl_seconds: i64,
}

/// Execute the server action.
///
/// # Errors
/// Returns an error if the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let globals = GlobalArgs::new(
        SecretString::from(args.token_secret),
        args.token_ttl_seconds,
    );

    debug!("Global args: {:?}", globals);

    api::new(args.port, args.dsn, globals).await
}
