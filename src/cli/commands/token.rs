use clap::{Arg, Command};

pub const ARG_TOKEN_SECRET: &str = "token-secret";
pub const ARG_TOKEN_TTL_SECONDS: &str = "token-ttl-seconds";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_TOKEN_SECRET)
                .long("token-secret")
                .help("Secret used to sign session tokens, rotating it invalidates outstanding tokens")
                .env("CLAVIS_TOKEN_SECRET")
                .required(true),
        )
        .arg(
            Arg::new(ARG_TOKEN_TTL_SECONDS)
                .long("token-ttl-seconds")
                .help("Session token TTL in seconds")
                .env("CLAVIS_TOKEN_TTL_SECONDS")
                .default_value("2592000")
                .value_parser(clap::value_parser!(i64)),
        )
}
