//! Server configuration.
//!
//! The listening port is the only setting; it comes from `--port` or the
//! `PORT` environment variable. The bind host is fixed.

use std::net::{Ipv4Addr, SocketAddr};

use clap::Parser;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server")]
#[command(about = "In-memory todo list HTTP API", long_about = None)]
pub struct ServerConfig {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_port_is_8080() {
        assert_eq!(ServerConfig::default().port, 8080);
    }

    #[test]
    fn port_flag_overrides_default() {
        let config = ServerConfig::try_parse_from(["todo-server", "--port", "9090"]).unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.bind_address().to_string(), "0.0.0.0:9090");
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        assert!(ServerConfig::try_parse_from(["todo-server", "--port", "http"]).is_err());
    }
}
