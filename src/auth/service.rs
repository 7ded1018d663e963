/**
 * Auth Service
 *
 * The orchestration layer: register, authenticate, login, and current-user
 * resolution, built on the password hasher, the token codec, and an
 * injected user repository. The service itself holds no persistent state;
 * it keeps one repository handle for its lifetime and never talks to
 * storage or cryptography except through those seams.
 */

use std::sync::Arc;

use crate::auth::password;
use crate::auth::tokens::TokenCodec;
use crate::auth::users::User;
use crate::error::AuthError;
use crate::repository::{RepositoryError, UserRepository};

/// Authentication business logic over a pluggable user store.
pub struct AuthService {
    repository: Arc<dyn UserRepository>,
    codec: TokenCodec,
}

impl AuthService {
    pub fn new(repository: Arc<dyn UserRepository>, codec: TokenCodec) -> Self {
        Self { repository, codec }
    }

    /// Register a new user.
    ///
    /// Hashes the password and delegates creation to the repository. Fails
    /// with [`AuthError::EmailTaken`] when the email is already registered.
    ///
    /// The existence check and the create are sequential, not transactional;
    /// the repository's duplicate rejection is the real guard, the upfront
    /// check just gives the common case a clean error without an insert.
    pub async fn register(
        &self,
        email: &str,
        name: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        if self.repository.get_by_email(email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let hashed_password = password::hash_password(password)
            .map_err(|err| AuthError::Internal(format!("password hashing failed: {err}")))?;

        match self.repository.create(email, name, &hashed_password).await {
            Ok(user) => Ok(user),
            Err(RepositoryError::DuplicateEmail) => Err(AuthError::EmailTaken),
            Err(err) => Err(err.into()),
        }
    }

    /// Verify a credential pair.
    ///
    /// Returns the user only when the email resolves and the password
    /// matches its stored hash. Unknown email and wrong password are both
    /// `None`; callers get no signal which one it was.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, AuthError> {
        let Some(user) = self.repository.get_by_email(email).await? else {
            return Ok(None);
        };

        if password::verify_password(password, &user.hashed_password) {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    /// Authenticate and issue a session token with the default TTL.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let user = self
            .authenticate(email, password)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        self.codec
            .sign(user.id, &user.email)
            .map_err(|err| AuthError::Internal(format!("token signing failed: {err}")))
    }

    /// Resolve the user a session token belongs to.
    ///
    /// `None` when the token fails to decode, its subject is not a valid
    /// id, or no user matches that id anymore.
    pub async fn current_user(&self, token: &str) -> Result<Option<User>, AuthError> {
        let Some(claims) = self.codec.decode(token) else {
            return Ok(None);
        };

        let Ok(user_id) = claims.sub.parse::<i64>() else {
            return Ok(None);
        };

        Ok(self.repository.get_by_id(user_id).await?)
    }
}
