use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use workshop_board::config::environment::{ServerConfig, StoreConfig};
use workshop_board::middleware::cors::cors_middleware;
use workshop_board::routes::dashboard_routes;
use workshop_board::state::AppState;
use workshop_board::store::client::{DocumentStoreClient, CUSTOMER_NAME_ORDER};
use workshop_board::store::subscription::subscribe;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🔧 Workshop Board - live service dashboard");
    info!("==========================================");

    let server_config = ServerConfig::from_env();
    let addr: SocketAddr = server_config.bind_address().parse()?;

    let store_config = match StoreConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Terminal Unconfigured state: serve the fixed error page on
            // every route and never attempt a store connection.
            error!("❌ Document store is not configured: {}", e);
            info!("🌐 Serving configuration-error page on http://{}", addr);

            let app = dashboard_routes::create_unconfigured_router().layer(cors_middleware());
            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
            return Ok(());
        }
    };

    let store = Arc::new(DocumentStoreClient::new(&store_config)?);

    // The single subscription for this process's lifetime.
    let (subscription, board_rx) = subscribe(store.clone(), CUSTOMER_NAME_ORDER);
    info!(
        "✅ Subscribed to the vehicles collection (ordered by {})",
        CUSTOMER_NAME_ORDER
    );

    let app_state = AppState::new(store, board_rx);
    let app = dashboard_routes::create_dashboard_router()
        .layer(cors_middleware())
        .with_state(app_state);

    info!("🌐 Server starting on http://{}", addr);
    info!("🔍 Endpoints:");
    info!("   GET  /                            - Workshop dashboard");
    info!("   GET  /events                      - Live board updates (SSE)");
    info!("   GET  /health                      - Health check");
    info!("   POST /api/vehicles                - Book a vehicle in");
    info!("   PUT  /api/vehicles/:id/status     - Change service stage");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Release the live feed on the way out, on every exit path.
    subscription.cancel();

    info!("👋 Server stopped");
    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C received, shutting down...");
        },
        _ = terminate => {
            info!("🛑 Terminate signal received, shutting down...");
        },
    }
}
