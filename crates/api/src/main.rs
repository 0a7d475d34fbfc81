use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use sections_core::design_pattern::{DesignPatternManager, DesignPatternRepo};
use sections_db::StoreConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sections_api::app::build_app;
use sections_api::config::ServerConfig;
use sections_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sections_api=debug,sections_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    let store_config = StoreConfig::from_env();
    tracing::info!(backend = ?store_config.backend, "Loaded store configuration");

    // --- Document store ---
    let store = sections_db::connect(&store_config)
        .await
        .expect("Failed to start document store");

    // --- Layers: repository -> service ---
    let repo = DesignPatternRepo::new(store.as_ref());
    let design_patterns = Arc::new(DesignPatternManager::new(repo));

    // --- App state ---
    let state = AppState {
        design_patterns,
        store: Arc::clone(&store),
        config: Arc::new(config.clone()),
    };

    let app = build_app(state);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, closing store");

    let close_timeout = Duration::from_secs(config.shutdown_timeout_secs);
    if tokio::time::timeout(close_timeout, store.close()).await.is_err() {
        tracing::warn!(
            timeout_secs = config.shutdown_timeout_secs,
            "Timed out closing document store"
        );
    }

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
