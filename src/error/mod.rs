//! Error Module
//!
//! Defines the auth-layer error taxonomy and its conversion to HTTP
//! responses.
//!
//! # Module Structure
//!
//! - **`types`** - the `AuthError` enum and its status-code mapping
//! - **`conversion`** - `IntoResponse` so handlers can return `AuthError`
//!   directly
//!
//! # Propagation Policy
//!
//! The repository layer raises [`crate::repository::RepositoryError`]; the
//! auth service translates the domain-relevant case (duplicate email) into
//! its own vocabulary and lets everything else pass through as a storage
//! failure. Cryptographic failures never surface as errors at all: password
//! verification collapses to a bool and token decoding to an `Option`, so
//! `InvalidCredentials` and `Unauthenticated` carry no hint of why.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::AuthError;
