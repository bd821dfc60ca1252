use pdsql_domain::config::DatabaseConfig;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn create_pool(
    database_url: &str,
    cfg: &DatabaseConfig,
) -> Result<SqlitePool, sqlx::Error> {
    let mut options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(cfg.busy_timeout_secs));

    if !cfg.log_statements {
        options = options.disable_statement_logging();
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.max_connections)
        .connect_with(options)
        .await?;

    if cfg.run_migrations {
        run_migrations(&pool).await?;
    }

    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    MIGRATOR.run(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}
