use common::types::Health;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging() -> Option<configs::AppConfig> {
    // Load .env early so RUST_LOG and DATABASE_URL take effect
    dotenv().ok();
    let cfg = configs::AppConfig::load_and_validate();
    let format = cfg.as_ref().map(|c| c.logging.format).unwrap_or_default();
    common::utils::logging::init_logging(format);
    info!(service = "migrate", event = "logger_init", "tracing subscriber initialized");
    match cfg {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            error!(service = "migrate", event = "config_invalid", error = %e, "invalid configuration");
            None
        }
    }
}

async fn run(cfg: &configs::AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    let pending = migration::Migrator::get_pending_migrations(&db).await?;
    info!(service = "migrate", event = "pending", count = pending.len(), "applying migrations");
    migration::Migrator::up(&db, None).await?;

    let health = Health::from_check(&db.ping().await);
    info!(service = "migrate", event = "db_health", status = health.status, "database health after migration");
    if !health.is_ok() {
        anyhow::bail!("database unavailable after migration");
    }
    Ok(())
}

fn main() -> std::process::ExitCode {
    let Some(cfg) = init_logging() else {
        return std::process::ExitCode::FAILURE;
    };

    let run_id = Uuid::new_v4();
    let version = env!("CARGO_PKG_VERSION");

    // Panic hook: log instead of a bare stderr dump
    std::panic::set_hook(Box::new(move |info| {
        error!(service = "migrate", event = "panic", %run_id, message = %info, "unhandled panic occurred");
    }));

    let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "migrate", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(service = "migrate", event = "start", %run_id, version, "migration run starting");
    match rt.block_on(run(&cfg)) {
        Ok(()) => {
            info!(service = "migrate", event = "done", %run_id, "migrations applied");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "migrate", event = "run_failed", %run_id, error = %e, "migration run failed");
            std::process::ExitCode::FAILURE
        }
    }
}
