//! Server Configuration
//!
//! Read from environment variables at startup:
//! - `PORT` (default 8000)
//! - `BIND_ADDR` (default 0.0.0.0)
//! - `CORS_ORIGINS`, comma-separated (default the local front end)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),

    #[error("invalid BIND_ADDR '{0}'")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Origins allowed to call the API with credentials
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            cors_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; missing or blank keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(port) = get("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }

        if let Some(addr) = get("BIND_ADDR") {
            config.bind_addr = addr
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr(addr.clone()))?;
        }

        if let Some(origins) = get("CORS_ORIGINS") {
            config.cors_origins = origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PORT", "9100"),
            ("BIND_ADDR", "127.0.0.1"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9100");
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[("PORT", "  ")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])),
            Err(ConfigError::InvalidPort("eighty".to_string()))
        );
        assert_eq!(
            ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])),
            Err(ConfigError::InvalidBindAddr("localhost".to_string()))
        );
    }
}
