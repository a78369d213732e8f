//! Load server config from environment variables (after `.env` has been applied by the binary).

use crate::config::types::{DeleteStyle, ServerConfig};
use crate::error::ConfigError;
use std::path::PathBuf;
use std::str::FromStr;

pub const ADDR_VAR: &str = "ACME_ADDR";
pub const STATIC_DIR_VAR: &str = "ACME_STATIC_DIR";
pub const DELETE_STYLE_VAR: &str = "ACME_DELETE_STYLE";
pub const ENABLE_CUSTOMERS_VAR: &str = "ACME_ENABLE_CUSTOMERS";
pub const SEED_SAMPLE_VAR: &str = "ACME_SEED_SAMPLE";
pub const BODY_LIMIT_VAR: &str = "ACME_BODY_LIMIT";

impl ServerConfig {
    /// Read config from the process environment. Unset or empty variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        let mut config = ServerConfig::default();

        if let Some(v) = get(ADDR_VAR) {
            config.addr = v.parse().map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                var: ADDR_VAR,
                value: v.clone(),
                reason: e.to_string(),
            })?;
        }
        if let Some(v) = get(STATIC_DIR_VAR) {
            config.static_dir = PathBuf::from(v);
        }
        if let Some(v) = get(DELETE_STYLE_VAR) {
            config.delete_style = DeleteStyle::from_str(&v)?;
        }
        if let Some(v) = get(ENABLE_CUSTOMERS_VAR) {
            config.enable_customers = parse_flag(ENABLE_CUSTOMERS_VAR, &v)?;
        }
        if let Some(v) = get(SEED_SAMPLE_VAR) {
            config.seed_sample = parse_flag(SEED_SAMPLE_VAR, &v)?;
        }
        if let Some(v) = get(BODY_LIMIT_VAR) {
            config.body_limit = v.parse().map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                var: BODY_LIMIT_VAR,
                value: v.clone(),
                reason: e.to_string(),
            })?;
        }
        Ok(config)
    }
}

fn parse_flag(var: &'static str, s: &str) -> Result<bool, ConfigError> {
    match s.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: s.to_string(),
            reason: "expected true or false".into(),
        }),
    }
}
