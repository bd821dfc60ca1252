use hickory_server::ServerFuture;
use pdsql_domain::Config;
use pdsql_infrastructure::dns::DnsServerHandler;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tracing::info;

pub async fn start_dns_server(config: &Config, handler: DnsServerHandler) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = config.dns_bind_address().parse()?;
    let tcp_timeout = Duration::from_secs(config.server.tcp_timeout_secs);

    let udp_socket = UdpSocket::bind(socket_addr).await?;
    let tcp_listener = TcpListener::bind(socket_addr).await?;

    let mut server = ServerFuture::new(handler);
    server.register_socket(udp_socket);
    server.register_listener(tcp_listener, tcp_timeout);

    info!(bind_address = %socket_addr, "DNS server ready (UDP + TCP)");

    server.block_until_done().await?;
    Ok(())
}
