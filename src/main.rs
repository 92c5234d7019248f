//! Product Catalog - a CRUD service with read-through caching
//!
//! Serves Product reads with a per-id cache over a pluggable store, keeping
//! the cache consistent with every mutation.

mod api;
mod cache;
mod config;
mod error;
mod models;
mod service;
mod store;

use std::net::SocketAddr;
use std::process;

use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use config::Config;
use models::NewProduct;

/// Main entry point for the product catalog server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Wire the cached product service over an in-memory store
/// 4. Optionally seed demo catalog entries
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "product_catalog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Product Catalog Server");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, seed_products={}",
        config.server_port, config.seed_products
    );

    // Wire the cached service over the in-memory store
    let state = AppState::in_memory();
    info!("Cached product service initialized");

    if config.seed_products {
        if let Err(err) = seed_demo_products(&state).await {
            error!("Failed to seed demo products: {}", err);
            process::exit(1);
        }
        info!("Demo products seeded");
    }

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind {}: {}", addr, err);
            process::exit(1);
        }
    };
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", err);
        process::exit(1);
    }

    info!("Server shutdown complete");
}

/// Inserts a few catalog entries so a fresh server has data to serve.
async fn seed_demo_products(state: &AppState) -> error::Result<()> {
    let demo = [
        NewProduct::new("Laptop Pro", 1500.0, "Electronics"),
        NewProduct::new("Test Mouse", 25.0, "Accessories"),
        NewProduct::new("Keyboard", 75.0, "Accessories"),
        NewProduct::new("Monitor", 300.0, "Displays"),
    ];

    for draft in demo {
        state.service.create(draft).await?;
    }
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
