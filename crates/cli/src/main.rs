use clap::Parser;
use pdsql_domain::CliOverrides;
use pdsql_infrastructure::dns::DnsServerHandler;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "pdsql")]
#[command(version)]
#[command(about = "Authoritative DNS server backed by a PowerDNS-style SQLite record database")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        database_path: cli.database,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting pdsql v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config).await?;

    let repos = di::Repositories::new(pool);
    let dns_services = di::DnsServices::new(&repos);

    let dns_handler = DnsServerHandler::new(dns_services.chain);
    server::start_dns_server(&config, dns_handler).await?;

    info!("Server shutdown complete");
    Ok(())
}
