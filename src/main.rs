use hello_world_api::config::CONFIG;
use hello_world_api::{AppState, AuthGate, CredentialStore, InMemoryUserRepository, SecurityRules, app};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&CONFIG.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    info!(config = ?*CONFIG, "Starting hello-world-api");

    let gate = AuthGate::new(SecurityRules::default_rules(), CredentialStore::default_users());
    let state = AppState::new(Arc::new(InMemoryUserRepository::new()), gate);
    let router = app(state, CONFIG.request_timeout);

    // Start server
    let addr = CONFIG.socket_addr();
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
