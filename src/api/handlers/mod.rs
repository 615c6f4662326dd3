//! Request handlers and the shared credential validation policy.

pub mod health;
pub mod me;
pub mod root;
pub mod user_login;
pub mod user_register;

use regex::Regex;
use serde::Serialize;
use utoipa::ToSchema;

/// Minimum accepted password length, counted in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

pub(crate) const MSG_MISSING_FIELDS: &str = "Please enter email and password";
pub(crate) const MSG_INVALID_EMAIL: &str = "Please enter a valid email";
pub(crate) const MSG_SHORT_PASSWORD: &str = "Password must be at least 6 characters";

/// Successful register/login payload.
#[derive(ToSchema, Serialize, Debug)]
pub struct AuthResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub token: String,
    pub msg: String,
}

/// Canonical form used for storage and lookups.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Shape check on an already-normalized email.
#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

/// Password policy is a minimum length, nothing more.
#[must_use]
pub fn valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(normalize_email("  Alice@Example.COM "), "alice@example.com");
        assert_eq!(normalize_email("bob@example.com"), "bob@example.com");
    }

    #[test]
    fn accepts_plausible_emails() {
        assert!(valid_email("alice@example.com"));
        assert!(valid_email("a.b+c@sub.example.co"));
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(!valid_email(""));
        assert!(!valid_email("alice"));
        assert!(!valid_email("alice@example"));
        assert!(!valid_email("@example.com"));
        assert!(!valid_email("alice@"));
        assert!(!valid_email("al ice@example.com"));
    }

    #[test]
    fn password_length_counts_characters() {
        assert!(!valid_password(""));
        assert!(!valid_password("12345"));
        assert!(valid_password("123456"));
        // Six characters even though more than six bytes.
        assert!(valid_password("pässwd"));
    }
}
