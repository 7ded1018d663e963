/**
 * Supabase User Repository
 *
 * Durable backend over the Supabase REST interface (PostgREST). The store
 * is a single `users` table with columns matching the `User` record;
 * lookups are `select` calls filtered by column, creation is an insert with
 * `Prefer: return=representation` so the assigned row comes straight back.
 *
 * # Known Gap
 *
 * `create` runs a duplicate-email check and then an insert as two separate
 * requests. That check-then-act window is not atomic, so a racing insert
 * between the two can still land a duplicate; this mirrors the documented
 * behavior of the service and is deliberately not papered over here.
 *
 * # Timestamps
 *
 * Timestamps coming back from the store are parsed defensively: a missing
 * or malformed value is substituted with the current time instead of
 * failing the whole call.
 */

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use super::{RepositoryError, UserRepository};
use crate::auth::users::User;
use crate::config::SupabaseConfig;

/// Request timeout for all store calls; nothing here may hang forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const USERS_TABLE: &str = "users";

/// Row shape returned by PostgREST for the users table.
#[derive(Debug, Deserialize)]
struct UserRow {
    id: i64,
    email: String,
    name: String,
    hashed_password: String,
    created_at: Option<String>,
    updated_at: Option<String>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: self.id,
            email: self.email,
            name: self.name,
            hashed_password: self.hashed_password,
            created_at: parse_timestamp(self.created_at.as_deref()),
            updated_at: parse_timestamp(self.updated_at.as_deref()),
        }
    }
}

/// Parse a timestamp string from the store, substituting the current time
/// for anything missing or unparseable.
///
/// Supabase emits RFC 3339 with an offset, but older rows and some column
/// defaults come back without one, so a naive fallback parse is kept.
fn parse_timestamp(raw: Option<&str>) -> DateTime<Utc> {
    let Some(raw) = raw else {
        return Utc::now();
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Utc);
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.and_utc();
    }

    tracing::warn!("Unparseable timestamp from Supabase: {:?}", raw);
    Utc::now()
}

/// Durable user store backed by a Supabase `users` table.
#[derive(Debug)]
pub struct SupabaseUserRepository {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SupabaseUserRepository {
    /// Build the store client from configuration.
    ///
    /// Fails when the URL or API key is missing, or when the HTTP client
    /// cannot be constructed. No network call is made here.
    pub fn new(config: &SupabaseConfig) -> Result<Self, RepositoryError> {
        if config.url.is_empty() {
            return Err(RepositoryError::Storage(
                "SUPABASE_URL must be configured".to_string(),
            ));
        }
        let api_key = config.api_key().ok_or_else(|| {
            RepositoryError::Storage(
                "SUPABASE_KEY or SUPABASE_SERVICE_KEY must be configured".to_string(),
            )
        })?;

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        tracing::info!(
            "Supabase user store client ready ({} key)",
            if config.service_key.is_some() { "service" } else { "anon" }
        );

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, USERS_TABLE)
    }

    /// Fetch at most one row matching an exact column filter.
    async fn fetch_one(&self, column: &str, value: &str) -> Result<Option<User>, RepositoryError> {
        let filter = format!("eq.{value}");
        let response = self
            .client
            .get(self.table_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(&[("select", "*"), (column, filter.as_str()), ("limit", "1")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RepositoryError::Storage(format!(
                "Supabase select on {column} failed with {status}: {body}"
            )));
        }

        let rows: Vec<UserRow> = response.json().await?;
        Ok(rows.into_iter().next().map(UserRow::into_user))
    }
}

#[async_trait]
impl UserRepository for SupabaseUserRepository {
    async fn create(
        &self,
        email: &str,
        name: &str,
        hashed_password: &str,
    ) -> Result<User, RepositoryError> {
        // Check-then-insert; see the module docs for the race caveat.
        if self.get_by_email(email).await?.is_some() {
            return Err(RepositoryError::DuplicateEmail);
        }

        let response = self
            .client
            .post(self.table_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .json(&serde_json::json!({
                "email": email,
                "name": name,
                "hashed_password": hashed_password,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Supabase insert failed with {}: {}", status, body);
            return Err(RepositoryError::Storage(format!(
                "Supabase insert failed with {status}"
            )));
        }

        let mut rows: Vec<UserRow> = response.json().await?;
        let Some(row) = rows.pop() else {
            // An empty representation usually means the insert was silently
            // rejected (missing table, key permissions, row security).
            tracing::error!("Supabase insert returned an empty representation");
            return Err(RepositoryError::Storage(
                "empty response from Supabase insert".to_string(),
            ));
        };

        let user = row.into_user();
        tracing::info!("User created in Supabase: {} (ID: {})", user.email, user.id);
        Ok(user)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        self.fetch_one("email", email).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        self.fetch_one("id", &id.to_string()).await
    }
}
