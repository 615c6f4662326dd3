//! User records in Postgres.

use anyhow::{Context, Result};
use sqlx::{PgPool, Row};
use tracing::Instrument;
use uuid::Uuid;

/// User row without the password hash, safe to return to clients.
#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// User row plus the stored Argon2 digest. Only the login path sees this.
#[derive(Debug)]
pub struct CredentialRow {
    pub user: UserRow,
    pub password_hash: String,
}

/// Outcome of inserting a new user.
#[derive(Debug)]
pub enum CreateUserOutcome {
    Created(UserRow),
    DuplicateEmail,
}

// Postgres unique_violation
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505"))
}

/// Insert a new user with an already-normalized email and hashed password.
///
/// A duplicate email is a normal outcome, not an error.
///
/// # Errors
///
/// Returns an error on any database failure other than a unique violation.
pub async fn create_user(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
) -> Result<CreateUserOutcome> {
    let query = "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING id, name, email";

    let result = sqlx::query(query)
        .bind(email)
        .bind(password_hash)
        .fetch_one(pool)
        .instrument(tracing::info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "INSERT",
            db.statement = query
        ))
        .await;

    match result {
        Ok(row) => Ok(CreateUserOutcome::Created(UserRow {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
        })),
        Err(err) if is_unique_violation(&err) => Ok(CreateUserOutcome::DuplicateEmail),
        Err(err) => Err(err).context("failed to insert user"),
    }
}

/// Fetch the stored credentials for an email, if the account exists.
///
/// # Errors
///
/// Returns an error on any database failure.
pub async fn find_credentials(pool: &PgPool, email: &str) -> Result<Option<CredentialRow>> {
    let query = "SELECT id, name, email, password_hash FROM users WHERE email = $1";

    let row = sqlx::query(query)
        .bind(email)
        .fetch_optional(pool)
        .instrument(tracing::info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "SELECT",
            db.statement = query
        ))
        .await
        .context("failed to fetch credentials")?;

    Ok(row.map(|row| CredentialRow {
        user: UserRow {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
        },
        password_hash: row.get("password_hash"),
    }))
}

/// Fetch a user by id.
///
/// # Errors
///
/// Returns an error on any database failure.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<UserRow>> {
    let query = "SELECT id, name, email FROM users WHERE id = $1";

    let row = sqlx::query(query)
        .bind(id)
        .fetch_optional(pool)
        .instrument(tracing::info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "SELECT",
            db.statement = query
        ))
        .await
        .context("failed to fetch user by id")?;

    Ok(row.map(|row| UserRow {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
    }))
}
