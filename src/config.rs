//! Server configuration loaded from environment variables.
//!
//! - `HOST` - bind address (default `0.0.0.0`)
//! - `PORT` - bind port (default `5000`)
//! - `DEV_MODE` - `true`/`1` enables permissive CORS for local front-end work
//!
//! Log filtering is handled separately through `RUST_LOG`.

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid PORT value '{0}': expected a number between 0 and 65535")]
    InvalidPort(String),
}

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Development mode relaxes CORS.
    pub dev_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            dev_mode: false,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            _ => DEFAULT_PORT,
        };

        let dev_mode = lookup("DEV_MODE")
            .map(|v| parse_bool(&v))
            .unwrap_or(false);

        Ok(Self {
            host,
            port,
            dev_mode,
        })
    }

    /// `host:port` string suitable for binding a listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DEV_MODE", "TRUE"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert!(config.dev_mode);
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref p) if p == "http"));
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[("HOST", "  "), ("PORT", "")])).unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
