/**
 * Registration Handler
 *
 * POST /auth/register
 *
 * 1. Validate the request shape
 * 2. Hash the password and create the user (via the auth service)
 * 3. Return the created user with 201
 *
 * # Errors
 *
 * * `400 Bad Request` - email, name, or password fails validation
 * * `409 Conflict` - the email is already registered
 * * `500 Internal Server Error` - the backing store failed
 */

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::handlers::types::{RegisterRequest, UserResponse};
use crate::auth::service::AuthService;
use crate::error::AuthError;

/// Reject requests that would never make a valid user.
///
/// The password upper bound matches the hasher's 72-byte truncation limit;
/// anything longer would be silently cut, so the API refuses it outright.
fn validate(request: &RegisterRequest) -> Result<(), AuthError> {
    if !request.email.contains('@') {
        return Err(AuthError::Validation("Invalid email format".to_string()));
    }

    let name_len = request.name.chars().count();
    if !(2..=100).contains(&name_len) {
        return Err(AuthError::Validation(
            "Name must be between 2 and 100 characters".to_string(),
        ));
    }

    let password_len = request.password.chars().count();
    if !(6..=72).contains(&password_len) {
        return Err(AuthError::Validation(
            "Password must be between 6 and 72 characters".to_string(),
        ));
    }

    Ok(())
}

/// Register handler
pub async fn register(
    State(service): State<Arc<AuthService>>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AuthError> {
    tracing::info!("Registration request for: {}", request.email);
    validate(&request)?;

    let user = service
        .register(&request.email, &request.name, &request.password)
        .await
        .inspect_err(|err| {
            if matches!(err, AuthError::EmailTaken) {
                tracing::warn!("Registration rejected, email taken: {}", request.email);
            }
        })?;

    tracing::info!("User registered: {} (ID: {})", user.email, user.id);
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
