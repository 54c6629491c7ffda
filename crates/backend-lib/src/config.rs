// ============================
// radvault-backend-lib/src/config.rs
// ============================
//! Configuration management.
use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Server bind address
    pub bind_addr: SocketAddr,
    /// SQLite connection URL
    pub database_url: String,
    /// Log level
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".parse().unwrap(),
            database_url: "sqlite::memory:".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Load settings from `config.toml` and `RADVAULT_`-prefixed
/// environment variables, on top of the defaults.
pub fn load_settings() -> Result<Settings> {
    let settings = Figment::from(Serialized::defaults(Settings::default()))
        .merge(Toml::file("config.toml"))
        .merge(Env::prefixed("RADVAULT_"))
        .extract()?;

    Ok(settings)
}

/// Load settings from an explicit config file path.
pub fn load_settings_from(path: impl AsRef<Path>) -> Result<Settings> {
    let settings = Figment::from(Serialized::defaults(Settings::default()))
        .merge(Toml::file(path.as_ref()))
        .merge(Env::prefixed("RADVAULT_"))
        .extract()?;

    Ok(settings)
}
