use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Listener settings, read from flags, the environment, or a `.env` file.
#[derive(Debug, Clone, Parser)]
#[command(name = "stats-api")]
#[command(about = "Mean, median and mode over comma-separated numbers")]
#[command(version)]
pub struct ServerConfig {
    /// Port the server listens on
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "PORT")]
    pub port: u16,

    /// Address the server binds to
    #[arg(short = 'b', long, default_value = DEFAULT_HOST, env = "HOST")]
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_port_3000() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().unwrap(), "0.0.0.0:3000".parse().unwrap());
    }

    #[test]
    fn flags_override_defaults() {
        let config =
            ServerConfig::try_parse_from(["stats-api", "--port", "8081", "-b", "127.0.0.1"])
                .unwrap();
        assert_eq!(config.socket_addr().unwrap(), "127.0.0.1:8081".parse().unwrap());
    }

    #[test]
    fn rejects_unparseable_host() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..ServerConfig::default()
        };
        let err = config.socket_addr().unwrap_err();
        assert!(err.to_string().contains("not a host:3000"));
    }
}
