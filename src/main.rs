use anyhow::Context;
use cafe_reservations::config::CafeConfig;
use cafe_reservations::database::sqlite::{self, SqliteRepository};
use cafe_reservations::services::bootstrap::bootstrap_store;
use cafe_reservations::{AppState, app, logging};
use sqlx::Sqlite;
use sqlx::migrate::MigrateDatabase;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    let config = CafeConfig::from_env()?;
    logging::init_tracing(config.debug);
    let shared_config = Arc::new(config);

    // verify db exists
    if !Sqlite::database_exists(&shared_config.database_url)
        .await
        .unwrap_or(false)
    {
        tracing::info!(url = %shared_config.database_url, "Database missing, creating...");
        Sqlite::create_database(&shared_config.database_url)
            .await
            .with_context(|| {
                format!("Unable to create database at {}", shared_config.database_url)
            })?;
    }

    let pool = sqlite::connect(&shared_config.database_url, shared_config.max_connections).await?;
    let repo = SqliteRepository::new(pool);

    bootstrap_store(&repo, shared_config.seed_on_startup)
        .await
        .context("Failed to bootstrap the store")?;

    let repo = Arc::new(repo);
    let app_state = AppState {
        cafes: repo.clone(),
        reservations: repo,
        config: shared_config.clone(),
    };

    let app = app::build_app(app_state)?;

    let bind_address = shared_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

// Ctrl-C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
