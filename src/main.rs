//! Taproom - single-resource beer catalog service
//!
//! Bootstrap order: config -> logging -> database -> repository -> state ->
//! HTTP server with graceful shutdown.

use std::sync::Arc;

use taproom::config::{load_config, print_config};
use taproom::infrastructure::http::{AppState, HttpServer, ServerConfig};
use taproom::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteBeerRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // the debug flag wins over the configured log level
    let level = if config.server.debug {
        "debug"
    } else {
        config.log.level.as_str()
    };
    let log_filter = format!("{},taproom={},tower_http=debug", level, level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Starting taproom service");
    print_config(&config);

    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    let beer_repo = Arc::new(SqliteBeerRepository::new(pool));

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(beer_repo);

    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
