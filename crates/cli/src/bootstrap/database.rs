use dnsbl_tracker_domain::config::DatabaseConfig;
use dnsbl_tracker_infrastructure::database::{create_pool, reset_if_not_persistent};
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    reset_if_not_persistent(cfg).map_err(|e| {
        error!(path = %cfg.path, error = %e, "Failed to remove non-persistent database");
        anyhow::anyhow!(e)
    })?;

    let database_url = format!("sqlite:{}", cfg.path);
    info!("Initializing database: {}", database_url);

    let pool = create_pool(&database_url, cfg).await.map_err(|e| {
        error!("Failed to initialize database pool: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(
        max_connections = cfg.max_connections,
        persist = cfg.persist,
        "Database initialized successfully"
    );

    Ok(pool)
}
