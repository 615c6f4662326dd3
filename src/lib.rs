//! # Clavis
//!
//! `clavis` is a small authentication service: email/password registration
//! and login backed by Postgres, with signed bearer tokens for subsequent
//! requests.
//!
//! ## Credentials
//!
//! Emails are normalized to trimmed lowercase before storage and every
//! lookup. Passwords are hashed with Argon2id; only the PHC digest string is
//! stored and it is never serialized in API responses.
//!
//! Login failures are uniform: an unknown email and a wrong password produce
//! the same `401` response, and the unknown-email path burns a dummy hash so
//! the two cases take comparable time.
//!
//! ## Tokens
//!
//! Sessions are stateless HS256 JWTs carrying the user id and an expiry
//! (30 days by default). The signing secret is loaded once at startup from
//! `--token-secret` / `CLAVIS_TOKEN_SECRET`; rotating it invalidates every
//! outstanding token. There is no server-side revocation list.

pub mod api;
pub mod auth;
pub mod cli;
pub mod store;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
