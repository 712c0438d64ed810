//! # tutorhubd — tutorhub dashboard daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialize the `tracing` subscriber
//! - Construct the backend client and the session storage (adapters)
//! - Build the store, the application services and the axum router
//! - Bind to a TCP port and serve until SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use tracing_subscriber::EnvFilter;
use tutorhub_adapter_http_axum::state::AppState;
use tutorhub_adapter_http_reqwest::ReqwestClient;
use tutorhub_adapter_storage_json::JsonFileStorage;
use tutorhub_app::store::SharedStore;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Adapters
    let client = ReqwestClient::new(&config.backend.url)?;
    let storage = JsonFileStorage::open(&config.storage.path)?;
    tracing::info!(
        backend = client.base_url(),
        storage = %storage.path().display(),
        "adapters ready"
    );

    // HTTP
    let state = AppState::new(client, storage, SharedStore::default());
    let app = tutorhub_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "tutorhubd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("tutorhubd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = signal_or_pending(tokio::signal::ctrl_c(), "ctrl-c");

    #[cfg(unix)]
    let terminate = signal_or_pending(
        async {
            let kind = tokio::signal::unix::SignalKind::terminate();
            tokio::signal::unix::signal(kind)?.recv().await;
            Ok::<(), std::io::Error>(())
        },
        "SIGTERM",
    );

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}

/// Resolve when `signal` fires; a listener that could not be installed
/// never resolves.
async fn signal_or_pending(
    signal: impl Future<Output = std::io::Result<()>>,
    name: &'static str,
) {
    if let Err(err) = signal.await {
        tracing::error!(error = %err, signal = name, "unable to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
