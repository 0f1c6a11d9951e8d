//! Bearer-token authentication middleware

use super::error::{map_domain_error, Problem};
use crate::Backoffice;
use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Extension,
};
use std::sync::Arc;

/// Reject the request unless it carries a valid bearer token.
///
/// On success the verified [`motorparts_auth::Claims`] are inserted into
/// the request extensions for downstream handlers.
pub async fn require_auth(
    Extension(state): Extension<Arc<Backoffice>>,
    mut req: Request,
    next: Next,
) -> Response {
    let token = match bearer_token(&req) {
        Some(token) => token.to_string(),
        None => {
            return Problem::new(StatusCode::UNAUTHORIZED, "Authentication Failed")
                .with_detail("en-tête Authorization manquant ou mal formé")
                .into_response();
        }
    };

    match state.identity.verify_token(&token) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(err) => map_domain_error(err).into_response(),
    }
}

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
