//! Authentication Handlers
//!
//! HTTP handlers for the auth endpoints. These are a thin shell over
//! [`crate::auth::AuthService`]: they validate the wire shape, call the
//! service, and map its errors to status codes via
//! [`crate::error::AuthError`]'s `IntoResponse`.
//!
//! - `POST /auth/register` - `register` (201 on success)
//! - `POST /auth/login` - `login` (returns a bearer token)
//! - `GET /auth/me` - `me` (requires a bearer token)

/// Request and response types
pub mod types;

/// User registration handler
pub mod register;

/// User login handler
pub mod login;

/// Current user handler
pub mod me;

pub use login::login;
pub use me::me;
pub use register::register;
pub use types::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};
