use pdsql_domain::Config;
use pdsql_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(config: &Config) -> anyhow::Result<SqlitePool> {
    let database_url = config.database_url();
    info!("Initializing database: {}", database_url);

    let pool = create_pool(&database_url, &config.database)
        .await
        .map_err(|e| {
            error!("Failed to initialize database pool: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!(
        "Database initialized successfully (max_connections={})",
        config.database.max_connections
    );

    Ok(pool)
}
