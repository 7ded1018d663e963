/**
 * Login Handler
 *
 * POST /auth/login
 *
 * Verifies the credential pair and returns a bearer token on success.
 *
 * # Security
 *
 * Unknown email and wrong password produce the exact same 401 body; there
 * is no signal a caller could use to enumerate registered emails.
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::auth::service::AuthService;
use crate::error::AuthError;

/// Login handler
pub async fn login(
    State(service): State<Arc<AuthService>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AuthError> {
    tracing::info!("Login request for: {}", request.email);

    let token = service
        .login(&request.email, &request.password)
        .await
        .inspect_err(|err| {
            if matches!(err, AuthError::InvalidCredentials) {
                tracing::warn!("Failed login attempt for: {}", request.email);
            }
        })?;

    tracing::info!("User logged in: {}", request.email);
    Ok(Json(TokenResponse::bearer(token)))
}
