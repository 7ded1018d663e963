/**
 * Authentication Handler Types
 *
 * Request and response shapes shared by the register, login, and me
 * handlers. Responses never include the password hash or any other
 * sensitive field.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Registration request
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// User's email address
    pub email: String,
    /// Display name (2 to 100 characters)
    pub name: String,
    /// Raw password (6 to 72 characters; hashed before storage)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// Raw password (verified against the stored hash)
    pub password: String,
}

/// Token response returned by login
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// The signed session token
    pub access_token: String,
    /// Transport convention, always `"bearer"`
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// User response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID
    pub id: i64,
    /// User's email address
    pub email: String,
    /// Display name
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}
