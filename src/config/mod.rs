/**
 * Configuration
 *
 * This module loads the process-wide configuration for the service. All
 * values are read from environment variables exactly once at startup and
 * carried in plain immutable structs that get threaded into the token codec
 * and the repository factory. Nothing else in the crate reads the
 * environment.
 */

use jsonwebtoken::Algorithm;

/// Token signing configuration.
///
/// The secret and algorithm are process-wide: every token issued by this
/// service is signed the same way, and verification uses the same pair.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Shared secret for the HMAC signature
    pub secret_key: String,
    /// Signing algorithm (HMAC family only)
    pub algorithm: Algorithm,
    /// Default token lifetime in minutes
    pub token_ttl_minutes: i64,
}

impl AuthConfig {
    /// Load from `SECRET_KEY`, `ALGORITHM`, and `ACCESS_TOKEN_EXPIRE_MINUTES`.
    ///
    /// Missing variables fall back to development defaults; the default
    /// secret is obviously unfit for production and is logged as such.
    pub fn from_env() -> Self {
        let secret_key = std::env::var("SECRET_KEY").unwrap_or_else(|_| {
            tracing::warn!("SECRET_KEY not set, using the development default");
            "your-secret-key-change-in-production".to_string()
        });

        let algorithm = std::env::var("ALGORITHM")
            .map(|raw| parse_algorithm(&raw))
            .unwrap_or(Algorithm::HS256);

        let token_ttl_minutes = std::env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(30);

        Self {
            secret_key,
            algorithm,
            token_ttl_minutes,
        }
    }
}

/// Map an `ALGORITHM` value onto the HMAC family.
///
/// Tokens here are signed with a shared secret, so only the symmetric
/// algorithms make sense. Anything unrecognized falls back to HS256 with a
/// warning instead of aborting startup.
fn parse_algorithm(raw: &str) -> Algorithm {
    match raw {
        "HS256" => Algorithm::HS256,
        "HS384" => Algorithm::HS384,
        "HS512" => Algorithm::HS512,
        other => {
            tracing::warn!("Unsupported ALGORITHM {:?}, falling back to HS256", other);
            Algorithm::HS256
        }
    }
}

/// Supabase connection settings for the durable user store.
#[derive(Debug, Clone, Default)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Restricted (anon) API key
    pub anon_key: String,
    /// Elevated service key, preferred over the anon key when present
    pub service_key: Option<String>,
}

impl SupabaseConfig {
    /// Load from `SUPABASE_URL`, `SUPABASE_KEY`, and `SUPABASE_SERVICE_KEY`.
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("SUPABASE_URL").unwrap_or_default(),
            anon_key: std::env::var("SUPABASE_KEY").unwrap_or_default(),
            service_key: std::env::var("SUPABASE_SERVICE_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
        }
    }

    /// The API key to authenticate with: service key when present, anon
    /// key otherwise, `None` when neither is usable.
    pub fn api_key(&self) -> Option<&str> {
        self.service_key
            .as_deref()
            .or_else(|| (!self.anon_key.is_empty()).then_some(self.anon_key.as_str()))
    }

    /// Whether the durable backend has enough configuration to try.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && self.api_key().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_algorithm_known_values() {
        assert_eq!(parse_algorithm("HS256"), Algorithm::HS256);
        assert_eq!(parse_algorithm("HS384"), Algorithm::HS384);
        assert_eq!(parse_algorithm("HS512"), Algorithm::HS512);
    }

    #[test]
    fn test_parse_algorithm_unknown_falls_back() {
        assert_eq!(parse_algorithm("RS256"), Algorithm::HS256);
        assert_eq!(parse_algorithm(""), Algorithm::HS256);
    }

    #[test]
    fn test_service_key_preferred() {
        let config = SupabaseConfig {
            url: "https://example.supabase.co".to_string(),
            anon_key: "anon".to_string(),
            service_key: Some("service".to_string()),
        };
        assert_eq!(config.api_key(), Some("service"));
        assert!(config.is_configured());
    }

    #[test]
    fn test_anon_key_fallback() {
        let config = SupabaseConfig {
            url: "https://example.supabase.co".to_string(),
            anon_key: "anon".to_string(),
            service_key: None,
        };
        assert_eq!(config.api_key(), Some("anon"));
    }

    #[test]
    fn test_unconfigured_without_url_or_key() {
        assert!(!SupabaseConfig::default().is_configured());

        let url_only = SupabaseConfig {
            url: "https://example.supabase.co".to_string(),
            ..Default::default()
        };
        assert!(!url_only.is_configured());
        assert_eq!(url_only.api_key(), None);
    }
}
