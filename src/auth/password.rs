//! Argon2id password hashing.
//!
//! Plaintext goes in, a PHC digest string comes out; the plaintext is never
//! stored or compared directly.

use anyhow::{anyhow, Result};
use argon2::{password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rand::rngs::OsRng;

// base64("clavisdummysalt"), used only to equalize timing on unknown accounts.
const DUMMY_SALT_B64: &str = "Y2xhdmlzZHVtbXlzYWx0";

/// Hash a password with Argon2id and a fresh random salt.
///
/// # Errors
///
/// Returns an error if hashing fails.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| anyhow!("failed to hash password"))?
        .to_string();
    Ok(hash)
}

/// Compare a password against a stored PHC digest string.
///
/// Any parse or verification failure is `false`.
#[must_use]
pub fn verify_password(password: &str, digest: &str) -> bool {
    PasswordHash::new(digest).is_ok_and(|parsed| {
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
}

/// Burn a hash when the account does not exist so login timing does not
/// reveal which of the two checks failed.
pub fn hash_dummy(password: &str) {
    if let Ok(salt) = SaltString::from_b64(DUMMY_SALT_B64) {
        let _ = Argon2::default().hash_password(password.as_bytes(), &salt);
    }
}
