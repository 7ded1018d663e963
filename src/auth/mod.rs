//! Authentication Module
//!
//! This module contains the pieces the auth endpoints are built from:
//!
//! - **`password`** - bcrypt hashing and verification
//! - **`tokens`** - JWT issuance and verification
//! - **`users`** - the `User` domain record
//! - **`service`** - the orchestration layer tying hasher, codec, and
//!   repository together
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! The service holds no state of its own beyond an injected repository
//! handle and the token codec; everything here runs fine under concurrent
//! callers.

/// Password hashing and verification
pub mod password;

/// JWT token issuance and verification
pub mod tokens;

/// User domain record
pub mod users;

/// Orchestration of register / authenticate / login / current user
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use service::AuthService;
pub use tokens::{Claims, TokenCodec};
pub use users::User;
