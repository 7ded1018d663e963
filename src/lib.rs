//! authgate - Minimal Authentication Service
//!
//! authgate provides user registration, credential verification, and JWT
//! session issuance on top of a pluggable user store.
//!
//! # Module Structure
//!
//! The library is organized into focused modules:
//!
//! - **`config`** - Process-wide configuration loaded once at startup
//! - **`auth`** - Password hashing, token codec, orchestration service,
//!   and the HTTP handlers for the auth endpoints
//! - **`repository`** - The `UserRepository` trait and its two backends
//!   (in-memory and Supabase REST)
//! - **`error`** - The `AuthError` taxonomy and its HTTP conversion
//! - **`routes`** - Axum router assembly
//!
//! # Authentication Flow
//!
//! 1. **Register**: email + name + password -> user created, password stored
//!    as a bcrypt hash
//! 2. **Login**: email + password -> credentials verified -> JWT returned
//! 3. **Me**: bearer JWT -> token verified -> current user returned
//!
//! # Storage
//!
//! The auth logic only ever talks to storage through the
//! [`repository::UserRepository`] trait. At startup a factory picks the
//! Supabase backend when its connection settings are present, and falls back
//! to the volatile in-memory backend otherwise. Sessions themselves are
//! stateless: a token is valid for its whole lifetime once issued, and
//! verification needs only the token, the shared secret, and the clock.

/// Process-wide configuration
pub mod config;

/// Password hashing, tokens, service, and HTTP handlers
pub mod auth;

/// Error taxonomy and HTTP response conversion
pub mod error;

/// User storage abstraction and backends
pub mod repository;

/// Router assembly
pub mod routes;
