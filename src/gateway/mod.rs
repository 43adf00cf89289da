//! Gateway server initialization and lifecycle management.
//!
use crate::{
    config,
    gateway::{routes::create_router, state::AppState},
};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod messages;
pub mod operation;
pub mod routes;
pub mod state;

/// Builds the fully layered application for `state`.
pub fn app(state: AppState) -> Router {
    create_router(&state.config.static_dir)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the gateway server.
///
/// This function:
/// 1. Initializes tracing with environment-based log filtering
/// 2. Loads configuration from environment variables
/// 3. Builds the backend client
/// 4. Configures request tracing and static file serving
/// 5. Binds to the configured address and serves HTTP requests
///
/// # Errors
///
/// Returns an error if:
/// - The configuration or the backend address is invalid
/// - The TCP listener cannot bind to the configured address
/// - The server encounters a fatal error while running
pub async fn run() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vote_gateway=info".parse()?),
        )
        .init();

    let config = config::Config::from_env()?;

    let state = AppState::from_config(config.clone())?;
    info!(
        "Forwarding to backend at {} (connect_timeout={:?}, request_timeout={:?})",
        state.backend.base_url(),
        config.backend.connect_timeout,
        config.backend.request_timeout
    );
    info!("Serving static files from {}", config.static_dir.display());

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!("Listening on {}", config.listen_addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
