use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Idle timeout for TCP connections.
    #[serde(default = "default_tcp_timeout_secs")]
    pub tcp_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dns_port: default_dns_port(),
            bind_address: default_bind_address(),
            tcp_timeout_secs: default_tcp_timeout_secs(),
        }
    }
}

fn default_dns_port() -> u16 {
    53
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_tcp_timeout_secs() -> u64 {
    10
}
