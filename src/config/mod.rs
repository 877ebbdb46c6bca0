//! Configuration loading and management
//!
//! Settings come from an optional YAML file and can be overridden through
//! environment variables:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `EMPLOYEE_API_CONFIG` | unset | path of a YAML config file |
//! | `EMPLOYEE_API_HOST` | `127.0.0.1` | bind host |
//! | `EMPLOYEE_API_PORT` | `3000` | bind port |
//! | `EMPLOYEE_API_CORS` | `true` | allow any origin, method and header |
//! | `RUST_LOG` | `info` | tracing filter |

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_PATH_VAR: &str = "EMPLOYEE_API_CONFIG";
pub const HOST_VAR: &str = "EMPLOYEE_API_HOST";
pub const PORT_VAR: &str = "EMPLOYEE_API_PORT";
pub const CORS_VAR: &str = "EMPLOYEE_API_CORS";
pub const LOG_VAR: &str = "RUST_LOG";

/// Server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host or IP to bind
    pub host: String,

    /// TCP port to bind
    pub port: u16,

    /// Attach a permissive CORS layer
    pub cors_allow_all: bool,

    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            cors_allow_all: true,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path))?;
        Self::from_yaml_str(&content).with_context(|| format!("failed to parse {}", path))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load from `EMPLOYEE_API_CONFIG` when set, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };
        Ok(config.with_env_overrides())
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup
    ///
    /// Values that fail to parse leave the current setting in place.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(host) = lookup(HOST_VAR) {
            self.host = host;
        }
        if let Some(port) = lookup(PORT_VAR).and_then(|p| p.parse().ok()) {
            self.port = port;
        }
        if let Some(cors) = lookup(CORS_VAR).and_then(|c| parse_flag(&c)) {
            self.cors_allow_all = cors;
        }
        if let Some(level) = lookup(LOG_VAR) {
            self.log_level = level;
        }
        self
    }

    /// `host:port` string for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
