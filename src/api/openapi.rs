//! OpenAPI document and documented-route registration.

use super::handlers::{health, me, user_login, user_register};
use utoipa::openapi::{InfoBuilder, OpenApiBuilder, Tag};
use utoipa_axum::{router::OpenApiRouter, routes};

/// Build the OpenAPI document for the service.
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    let (_router, openapi) = api_router().split_for_parts();
    openapi
}

pub(crate) fn api_router() -> OpenApiRouter {
    OpenApiRouter::with_openapi(base_openapi())
        .routes(routes!(health::health))
        .routes(routes!(user_register::register))
        .routes(routes!(user_login::login))
        .routes(routes!(me::me))
}

fn base_openapi() -> utoipa::openapi::OpenApi {
    let info = InfoBuilder::new()
        .title(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .description(Some(env!("CARGO_PKG_DESCRIPTION")))
        .build();

    let mut auth_tag = Tag::new("auth");
    auth_tag.description = Some("Registration and login".to_string());

    let mut me_tag = Tag::new("me");
    me_tag.description = Some("Authenticated profile access".to_string());

    let mut health_tag = Tag::new("health");
    health_tag.description = Some("Service health".to_string());

    OpenApiBuilder::new()
        .info(info)
        .tags(Some(vec![auth_tag, me_tag, health_tag]))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_carries_package_metadata() {
        let doc = openapi();
        assert_eq!(doc.info.title, env!("CARGO_PKG_NAME"));
        assert_eq!(doc.info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn document_carries_tags() {
        let doc = openapi();
        let tags = doc.tags.expect("tags should be set");
        let names: Vec<&str> = tags.iter().map(|tag| tag.name.as_str()).collect();
        assert_eq!(names, vec!["auth", "me", "health"]);
    }

    #[test]
    fn all_routes_are_documented() {
        let doc = openapi();
        for path in ["/health", "/register", "/login", "/me"] {
            assert!(
                doc.paths.paths.contains_key(path),
                "missing path: {path}"
            );
        }
    }
}
