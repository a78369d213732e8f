//! Server configuration types.

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;

/// How a successful DELETE answers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeleteStyle {
    /// 200 with `{"message": "<Kind> deleted successfully"}`.
    #[default]
    Message,
    /// 204 with an empty body.
    NoContent,
}

impl std::str::FromStr for DeleteStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "message" => Ok(DeleteStyle::Message),
            "no_content" | "no-content" => Ok(DeleteStyle::NoContent),
            _ => Err(ConfigError::InvalidValue {
                var: super::loader::DELETE_STYLE_VAR,
                value: s.to_string(),
                reason: "expected message or no_content".into(),
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Directory searched for `index.html` and `favicon.ico`.
    pub static_dir: PathBuf,
    pub delete_style: DeleteStyle,
    pub enable_customers: bool,
    /// Load the sample packages at startup.
    pub seed_sample: bool,
    pub body_limit: usize,
}

pub const DEFAULT_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            delete_style: DeleteStyle::default(),
            enable_customers: true,
            seed_sample: false,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}
