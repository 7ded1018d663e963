/**
 * Current User Handler
 *
 * GET /auth/me
 *
 * Resolves the bearer token from the `Authorization` header to the user it
 * was issued for. A missing header, a malformed header, a bad or expired
 * token, and a token whose subject no longer exists all produce the same
 * 401; the response does not say which.
 */

use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, response::Json};

use crate::auth::handlers::types::UserResponse;
use crate::auth::service::AuthService;
use crate::error::AuthError;

/// Pull the bearer token out of the Authorization header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

/// Current user handler
pub async fn me(
    State(service): State<Arc<AuthService>>,
    headers: HeaderMap,
) -> Result<Json<UserResponse>, AuthError> {
    let token = bearer_token(&headers).ok_or_else(|| {
        tracing::warn!("Missing or malformed authorization header");
        AuthError::Unauthenticated
    })?;

    let user = service
        .current_user(token)
        .await?
        .ok_or(AuthError::Unauthenticated)?;

    Ok(Json(UserResponse::from(user)))
}
