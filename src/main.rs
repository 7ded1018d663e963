/**
 * authgate Server Entry Point
 *
 * Bootstrap order matters here: environment first (dotenv), then logging,
 * then configuration, then the repository selection policy, and only then
 * the router. The repository choice is the one piece of policy that lives
 * outside the core: Supabase when configured, in-memory fallback otherwise.
 */

use std::sync::Arc;

use authgate::auth::{AuthService, TokenCodec};
use authgate::config::{AuthConfig, SupabaseConfig};
use authgate::repository::select_repository;
use authgate::routes::create_router;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env before anything reads them.
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let auth_config = AuthConfig::from_env();
    let supabase_config = SupabaseConfig::from_env();

    let repository = select_repository(&supabase_config);
    let codec = TokenCodec::new(&auth_config);
    let service = Arc::new(AuthService::new(repository, codec));

    let app = create_router(service);

    let port = std::env::var("SERVER_PORT")
        .ok()
        .and_then(|raw| raw.parse::<u16>().ok())
        .unwrap_or(3000);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("Starting authgate on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
