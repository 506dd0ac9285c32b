//! Application builder: wires stores, image storage and the router into
//! a running server.

use tokio::net::TcpListener;
use tracing::info;

use smartstock_core::config::AppConfig;
use smartstock_core::error::{AppError, ErrorKind};
use smartstock_database::Stores;
use smartstock_storage::ImageStorage;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application from prepared state.
pub fn build_app(state: AppState) -> axum::Router {
    build_router(state)
}

/// Runs the SmartStock server until `shutdown` resolves.
pub async fn run_server(
    config: AppConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), AppError> {
    info!("Starting SmartStock server...");

    let stores = Stores::connect(&config.database).await?;
    info!(provider = stores.provider_name(), "Stores ready");

    let images = ImageStorage::new(&config.storage.web_root).await?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, stores.clone(), images);
    let app = build_app(state);

    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;
    info!(%addr, "SmartStock listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    stores.close().await;
    info!("SmartStock server stopped");
    Ok(())
}
