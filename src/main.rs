//! SmartStock Server: inventory REST API for products, categories and
//! companies.
//!
//! Main entry point that loads configuration, initialises logging and
//! dispatches the CLI command.

mod cli;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use smartstock_core::config::{AppConfig, DatabaseProvider};
use smartstock_core::error::AppError;
use smartstock_database::DatabasePool;
use smartstock_database::migration::run_migrations;

use cli::{Cli, Command};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load_from(&cli.config_dir, &cli.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %cli.env, dir = %cli.config_dir, "Configuration loaded");

    let outcome = match cli.command() {
        Command::Serve => smartstock_api::run_server(config, shutdown_signal()).await,
        Command::Migrate => migrate(&config).await,
    };

    if let Err(e) = outcome {
        tracing::error!(error = %e, "SmartStock exited with an error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Apply pending migrations against the configured database.
async fn migrate(config: &AppConfig) -> Result<(), AppError> {
    if config.database.provider == DatabaseProvider::Memory {
        tracing::info!("Memory provider configured; nothing to migrate");
        return Ok(());
    }
    let pool = DatabasePool::connect(&config.database).await?;
    run_migrations(pool.pool()).await?;
    pool.close().await;
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
