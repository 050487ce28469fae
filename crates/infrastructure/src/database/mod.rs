use dnsbl_tracker_domain::config::DatabaseConfig;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn create_pool(
    database_url: &str,
    cfg: &DatabaseConfig,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(cfg.busy_timeout_secs));

    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.max_connections)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Deletes the database file (and its WAL side files) when the config asks
/// for a fresh store. Returns true if anything was removed.
pub fn reset_if_not_persistent(cfg: &DatabaseConfig) -> std::io::Result<bool> {
    if cfg.persist {
        return Ok(false);
    }

    let mut removed = false;
    for suffix in ["", "-wal", "-shm"] {
        let path = format!("{}{}", cfg.path, suffix);
        if Path::new(&path).exists() {
            std::fs::remove_file(&path)?;
            removed = true;
        }
    }

    if removed {
        info!(path = %cfg.path, "Removed non-persistent database");
    }
    Ok(removed)
}
