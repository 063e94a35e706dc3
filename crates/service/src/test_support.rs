#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use configs::DatabaseConfig;
use models::db::connect_with_config;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

fn test_config() -> anyhow::Result<DatabaseConfig> {
    let mut cfg = models::db::config_from_env()?;
    cfg.max_connections = cfg.max_connections.max(10);
    cfg.min_connections = cfg.min_connections.min(1);
    cfg.connect_timeout_secs = 5;
    cfg.acquire_timeout_secs = 5;
    Ok(cfg)
}

/// Migrated connection, or `None` when `SKIP_DB_TESTS` is set or no database is reachable.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(None); }

    // Run migrations exactly once, with a throwaway connection
    let ready = *MIGRATED
        .get_or_init(|| async {
            let cfg = match test_config() {
                Ok(cfg) => cfg,
                Err(e) => {
                    eprintln!("skip: invalid database config: {}", e);
                    return false;
                }
            };
            let db = match connect_with_config(&cfg).await {
                Ok(db) => db,
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {}", e);
                    return false;
                }
            };
            if let Err(e) = migration::Migrator::up(&db, None).await {
                eprintln!("skip: migrate up failed: {}", e);
                return false;
            }
            true
        })
        .await;
    if !ready { return Ok(None); }

    // Return a fresh connection for the current test's runtime
    let db = connect_with_config(&test_config()?).await?;
    Ok(Some(db))
}
