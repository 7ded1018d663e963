/**
 * Router Configuration
 *
 * Assembles the Axum router for the service.
 *
 * # Routes
 *
 * - `GET /` - service banner
 * - `POST /auth/register` - user registration
 * - `POST /auth/login` - user login, returns a bearer token
 * - `GET /auth/me` - current user, requires a bearer token
 */

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};

use crate::auth::handlers::{login, me, register};
use crate::auth::service::AuthService;

/// Create the router with all routes configured.
pub fn create_router(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
        .with_state(service)
}

/// Service banner for the root path.
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "authgate",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
