use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: u64,

    /// Log every SQL statement at debug level.
    #[serde(default)]
    pub log_statements: bool,

    /// Apply the embedded schema migrations on startup.
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            max_connections: default_max_connections(),
            busy_timeout_secs: default_busy_timeout_secs(),
            log_statements: false,
            run_migrations: true,
        }
    }
}

fn default_db_path() -> String {
    "./pdsql.db".to_string()
}

fn default_max_connections() -> u32 {
    8
}

fn default_busy_timeout_secs() -> u64 {
    5
}

fn default_true() -> bool {
    true
}
