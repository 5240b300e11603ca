// src/config.rs
use crate::error::ConfigError;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_DATA_DIR: &str = "data";

/// Runtime settings, read once at startup after `.env` has been loaded.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base: String,
    pub bind_addr: SocketAddr,
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = lookup("SCHEMES_API_BASE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidValue {
                name: "BIND_ADDR",
                value: bind_raw.clone(),
            })?;

        let data_dir = lookup("SCHEMES_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        Ok(Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            bind_addr,
            data_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.api_base, "http://localhost:8000");
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn api_base_trailing_slash_is_dropped() {
        let config = config_from(&[("SCHEMES_API_BASE", "http://api.local:9000/")]).unwrap();
        assert_eq!(config.api_base, "http://api.local:9000");
    }

    #[test]
    fn rejects_bad_bind_addr() {
        let err = config_from(&[("BIND_ADDR", "not-an-address")]).unwrap_err();
        assert!(err.to_string().contains("BIND_ADDR"));
    }
}
