/**
 * Session Tokens
 *
 * JWT issuance and verification for stateless sessions. A token carries the
 * user's id (as the `sub` claim), their email, and an absolute expiry; no
 * session state is kept on the server, so verification is a pure function of
 * the token, the shared secret, and the clock.
 *
 * There is no revocation list: a token stays valid for its whole lifetime
 * once issued.
 */

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID, carried as a string
    pub sub: String,
    /// Email
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Signs and verifies session tokens.
///
/// Built once from [`AuthConfig`] and shared for the process lifetime; the
/// secret and algorithm are never per-call parameters.
#[derive(Clone)]
pub struct TokenCodec {
    header: Header,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    default_ttl: Duration,
}

impl TokenCodec {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(config.algorithm);
        // No clock-skew grace: a token is valid strictly until its exp.
        validation.leeway = 0;

        Self {
            header: Header::new(config.algorithm),
            encoding_key: EncodingKey::from_secret(config.secret_key.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret_key.as_bytes()),
            validation,
            default_ttl: Duration::minutes(config.token_ttl_minutes),
        }
    }

    /// Sign a token for a user with the configured default TTL.
    pub fn sign(&self, user_id: i64, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
        self.sign_with_ttl(user_id, email, self.default_ttl)
    }

    /// Sign a token for a user with an explicit TTL.
    pub fn sign_with_ttl(
        &self,
        user_id: i64,
        email: &str,
        ttl: Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        };
        encode(&self.header, &claims, &self.encoding_key)
    }

    /// Verify and decode a token.
    ///
    /// Returns the claims only if the signature checks out against the
    /// configured secret and the token has not expired. Every failure mode
    /// (tampered, malformed, expired, signed with another secret) collapses
    /// to `None`; callers cannot tell them apart, and no library error
    /// escapes this boundary.
    pub fn decode(&self, token: &str) -> Option<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .ok()
    }
}
