/**
 * User Model
 *
 * The identity record handed out by the user repositories. A `User` is a
 * value: once a repository returns one it is never mutated, and the core
 * exposes no update or delete operations.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user.
///
/// The `id` is assigned by the repository on creation and is unique within
/// a store, as is the email (stored exactly as supplied, no normalization).
/// `hashed_password` is the opaque bcrypt hash string, never the raw
/// password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID, assigned by the repository
    pub id: i64,
    /// User email address (unique, case preserved)
    pub email: String,
    /// Display name
    pub name: String,
    /// bcrypt hash of the password
    pub hashed_password: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}
