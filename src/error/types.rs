/**
 * Auth Error Types
 *
 * The error vocabulary of the auth service. Registration conflicts and bad
 * credentials get their own variants with stable, deliberately vague
 * messages; storage trouble is carried through unchanged for the HTTP layer
 * to collapse into a generic 500.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::repository::RepositoryError;

/// Errors surfaced by the auth service and its handlers.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration conflict: the email is already registered.
    #[error("Email already registered")]
    EmailTaken,

    /// Authentication failure. Intentionally does not distinguish an
    /// unknown email from a wrong password, to prevent email enumeration.
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// The bearer token was missing, malformed, expired, or referred to a
    /// user that no longer resolves.
    #[error("Invalid or expired token")]
    Unauthenticated,

    /// A request failed schema validation before reaching the service.
    #[error("{0}")]
    Validation(String),

    /// The backing store failed; passed through from the repository layer.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Anything else that should never happen in normal operation, such as
    /// the password hasher or token signer erroring out.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// The HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::EmailTaken => StatusCode::CONFLICT,
            Self::InvalidCredentials | Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            // DuplicateEmail should have been translated by the service;
            // treat a leak of it as the conflict it is.
            Self::Repository(RepositoryError::DuplicateEmail) => StatusCode::CONFLICT,
            Self::Repository(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message exposed to clients.
    ///
    /// Storage and internal errors are flattened to a fixed string; their
    /// details go to the logs, not the response body.
    pub fn public_message(&self) -> String {
        match self {
            Self::Repository(RepositoryError::DuplicateEmail) => Self::EmailTaken.to_string(),
            Self::Repository(_) | Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(AuthError::EmailTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::Validation("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::Repository(RepositoryError::Storage("down".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AuthError::Repository(RepositoryError::DuplicateEmail).status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_storage_details_not_exposed() {
        let err = AuthError::Repository(RepositoryError::Storage(
            "connection refused at 10.0.0.5".to_string(),
        ));
        assert_eq!(err.public_message(), "Internal server error");

        let err = AuthError::Internal("bcrypt exploded".to_string());
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn test_credential_failures_share_one_message() {
        // Unknown email and wrong password must be indistinguishable.
        assert_eq!(
            AuthError::InvalidCredentials.public_message(),
            "Incorrect email or password"
        );
    }
}
