use serde::{Deserialize, Serialize};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Targets that stay at `warn` unless `RUST_LOG` says otherwise. hickory
/// logs every accepted connection at `debug`.
const QUIET_TARGETS: &[&str] = &["hickory_server", "hickory_proto"];

/// `[logging]` section.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default level for pdsql's own targets and sqlx.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit one JSON object per event instead of human-readable lines.
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    pub fn is_valid_level(&self) -> bool {
        LOG_LEVELS.contains(&self.level.to_ascii_lowercase().as_str())
    }

    /// `EnvFilter` directive for the configured level, e.g.
    /// `debug,hickory_server=warn,hickory_proto=warn`.
    pub fn filter_directive(&self) -> String {
        let mut directive = self.level.to_ascii_lowercase();
        for target in QUIET_TARGETS {
            directive.push_str(&format!(",{}=warn", target));
        }
        directive
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
