//! Bearer principal resolution for protected routes.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use sqlx::PgPool;
use tracing::{debug, error};
use uuid::Uuid;

use crate::{
    api::error::ApiError,
    auth::verify_token,
    cli::globals::GlobalArgs,
    store::users,
};

/// Authenticated caller, resolved from a bearer token against the live store.
#[derive(Debug, Clone)]
pub struct Principal {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
}

/// Pull the token out of `Authorization: Bearer <token>`.
fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))?;
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Authenticate a request or fail with a uniform 401.
///
/// The token must verify and the subject must still exist in the store;
/// callers cannot tell which check failed.
///
/// # Errors
///
/// `Unauthorized` for any missing, malformed, invalid, expired, or orphaned
/// token; `Internal` only when the store itself fails.
pub async fn require_auth(
    headers: &HeaderMap,
    pool: &PgPool,
    globals: &GlobalArgs,
) -> Result<Principal, ApiError> {
    let Some(token) = extract_bearer_token(headers) else {
        return Err(ApiError::Unauthorized);
    };

    let Some(claims) = verify_token(globals, &token) else {
        return Err(ApiError::Unauthorized);
    };

    let Ok(user_id) = Uuid::parse_str(&claims.sub) else {
        debug!("Bearer token subject is not a valid user id");
        return Err(ApiError::Unauthorized);
    };

    match users::find_by_id(pool, user_id).await {
        Ok(Some(user)) => Ok(Principal {
            user_id: user.id,
            name: user.name,
            email: user.email,
        }),
        // Token outlived the account.
        Ok(None) => Err(ApiError::Unauthorized),
        Err(err) => {
            error!("Failed to resolve bearer principal: {err:?}");
            Err(ApiError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_bearer_token() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(
            extract_bearer_token(&headers),
            Some("abc.def.ghi".to_string())
        );
    }

    #[test]
    fn accepts_lowercase_scheme() {
        let headers = headers_with("bearer abc.def.ghi");
        assert_eq!(
            extract_bearer_token(&headers),
            Some("abc.def.ghi".to_string())
        );
    }

    #[test]
    fn rejects_missing_or_wrong_scheme() {
        assert_eq!(extract_bearer_token(&HeaderMap::new()), None);
        assert_eq!(extract_bearer_token(&headers_with("Basic abc")), None);
        assert_eq!(extract_bearer_token(&headers_with("Bearer ")), None);
        assert_eq!(extract_bearer_token(&headers_with("Bearer")), None);
    }
}
