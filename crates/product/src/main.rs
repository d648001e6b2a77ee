use anyhow::{Context, Result};
use product::{
    config::{myconfig::Config, server_config::ServerConfig},
    handler::AppRouter,
    state::AppState,
};
use shared::{config::ConnectionManager, utils::init_logger};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;
    let server_config = ServerConfig::from_config(&config);

    let _log_guard = init_logger("product-service", config.dev_mode, config.enable_file_log);

    info!("🚀 Starting Product Service initialization...");

    let db_pool =
        ConnectionManager::new_pool(&server_config.database_url, server_config.db_max_conn)
            .await
            .context("Failed to initialize database pool")?;

    let state = AppState::new(db_pool.clone())
        .await
        .context("Failed to create AppState")?;

    info!("✅ Application setup completed successfully.");

    AppRouter::serve(&server_config, state)
        .await
        .context("Failed to start server")?;

    db_pool.close().await;

    info!("✅ Product Service shutdown complete.");
    Ok(())
}
