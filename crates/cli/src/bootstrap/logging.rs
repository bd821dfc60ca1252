use pdsql_domain::Config;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over the configured level when set.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.filter_directive()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.logging.json {
        builder.json().init();
    } else {
        builder.with_target(false).init();
    }
}
