/**
 * Error Conversion
 *
 * `IntoResponse` for `AuthError`, so handlers can return it directly.
 *
 * # Response Format
 *
 * Error responses are JSON with a single `detail` field:
 * ```json
 * {
 *   "detail": "Email already registered"
 * }
 * ```
 *
 * Unauthenticated responses additionally carry a `WWW-Authenticate: Bearer`
 * header, since the expected credential is a bearer token.
 */

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::error::types::AuthError;

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Storage and internal details stay in the logs.
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {}", self);
        }

        let body = Json(serde_json::json!({
            "detail": self.public_message(),
        }));

        match self {
            AuthError::Unauthenticated => {
                (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response()
            }
            _ => (status, body).into_response(),
        }
    }
}
