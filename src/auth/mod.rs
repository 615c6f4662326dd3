//! Credential hashing and session token issuance/verification.

pub mod password;
pub mod principal;
pub mod token;

use crate::cli::globals::GlobalArgs;
use secrecy::ExposeSecret;
use std::time::SystemTime;
use tracing::debug;
use uuid::Uuid;

pub(crate) fn now_unix_seconds() -> i64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

/// Mint a signed session token for a verified user identity.
///
/// Pure given the secret and current time; never touches the store.
///
/// # Errors
///
/// Returns an error if claims cannot be encoded or the secret is unusable.
pub fn issue_token(globals: &GlobalArgs, user_id: Uuid) -> Result<String, token::Error> {
    let now = now_unix_seconds();
    let claims = token::SessionClaims {
        sub: user_id.to_string(),
        iat: now,
        exp: now.saturating_add(globals.token_ttl_seconds),
    };

    token::sign_hs256(globals.token_secret.expose_secret().as_bytes(), &claims)
}

/// Verify a bearer token and return its claims, or `None` on any failure.
pub fn verify_token(globals: &GlobalArgs, token: &str) -> Option<token::SessionClaims> {
    match token::verify_hs256(
        token,
        globals.token_secret.expose_secret().as_bytes(),
        now_unix_seconds(),
    ) {
        Ok(claims) => Some(claims),
        Err(e) => {
            debug!("Session token verification failed: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn globals(ttl: i64) -> GlobalArgs {
        GlobalArgs::new(SecretString::from("test-secret".to_string()), ttl)
    }

    #[test]
    fn issued_token_verifies_and_carries_identity() {
        let globals = globals(3600);
        let user_id = Uuid::new_v4();
        let token = issue_token(&globals, user_id).unwrap();

        let claims = verify_token(&globals, &token).expect("token should verify");
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn token_rejected_under_different_secret() {
        let token = issue_token(&globals(3600), Uuid::new_v4()).unwrap();

        let other = GlobalArgs::new(SecretString::from("other-secret".to_string()), 3600);
        assert!(verify_token(&other, &token).is_none());
    }

    #[test]
    fn expired_token_rejected() {
        // Negative TTL puts exp in the past relative to verification time.
        let token = issue_token(&globals(-60), Uuid::new_v4()).unwrap();
        assert!(verify_token(&globals(-60), &token).is_none());
    }
}
