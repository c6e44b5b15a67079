//! Server configuration parsed from environment variables.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid HOST: {0}")]
    InvalidHost(String),

    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    /// Missing or malformed `[package.metadata.leptos]` / `LEPTOS_*` settings.
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Overrides the Leptos site root (where `/pkg` assets are read from).
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default `3000`
    /// - `SITE_ROOT`: default from the Leptos configuration
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("HOST").ok().as_deref(),
            std::env::var("PORT").ok().as_deref(),
            std::env::var("SITE_ROOT").ok().as_deref(),
        )
    }

    fn from_values(host: Option<&str>, port: Option<&str>, site_root: Option<&str>) -> Result<Self, ConfigError> {
        let host = host.map(str::trim).filter(|h| !h.is_empty()).unwrap_or(DEFAULT_HOST);
        let ip: IpAddr = host.parse().map_err(|_| ConfigError::InvalidHost(host.to_owned()))?;
        let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
            None => DEFAULT_PORT,
        };
        let site_root = site_root.map(str::trim).filter(|r| !r.is_empty()).map(PathBuf::from);
        Ok(Self { addr: SocketAddr::new(ip, port), site_root })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
