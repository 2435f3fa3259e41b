//! Configuration management for the contact relay.
//!
//! Configuration is read from the environment exactly once at startup and
//! passed around as an immutable [`Config`]. Request handlers never touch
//! `std::env` themselves.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;

/// Placeholder value shipped in sample `.env` files. A webhook URL equal to
/// this is treated as not configured.
pub const WEBHOOK_PLACEHOLDER: &str = "your_webhook_url_here";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Configuration for the contact relay.
#[derive(Debug, Clone)]
pub struct Config {
    /// Raw CRM webhook URL as supplied by the environment.
    /// Use [`Config::webhook_url`] to get the effective target.
    pub crm_webhook_url: Option<String>,

    /// Address the HTTP server binds to (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,

    /// Outbound request timeout in seconds; `None` keeps the HTTP client default
    pub request_timeout: Option<u64>,

    /// Maximum accepted request body size in bytes (default: 64 KiB)
    pub max_body_bytes: usize,

    /// Log level used when `RUST_LOG` is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CRM_WEBHOOK_URL`: Webhook that receives validated submissions
    /// - `BIND_ADDR`: Listen address (default: 0.0.0.0:3000)
    /// - `REQUEST_TIMEOUT`: Outbound HTTP timeout in seconds (default: client default)
    /// - `MAX_BODY_BYTES`: Inbound body limit (default: 65536)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine; real deployments set the environment directly
        let _ = dotenvy::dotenv();

        let crm_webhook_url = env::var("CRM_WEBHOOK_URL").ok();
        if let Some(url) = crm_webhook_url.as_deref() {
            if is_configured(url) && !url.starts_with("http://") && !url.starts_with("https://")
            {
                return Err(ConfigError::InvalidValue {
                    var: "CRM_WEBHOOK_URL".to_string(),
                    reason: "Must start with http:// or https://".to_string(),
                });
            }
        }

        let bind_addr = match env::var("BIND_ADDR") {
            Ok(val) => val.parse::<SocketAddr>().map_err(|_| ConfigError::InvalidValue {
                var: "BIND_ADDR".to_string(),
                reason: format!("Must be a socket address like 0.0.0.0:3000, got: {}", val),
            })?,
            Err(_) => SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        };

        let request_timeout = match env::var("REQUEST_TIMEOUT") {
            Ok(_) => {
                let secs = Self::parse_env_u64("REQUEST_TIMEOUT", 0)?;
                if secs == 0 {
                    return Err(ConfigError::InvalidValue {
                        var: "REQUEST_TIMEOUT".to_string(),
                        reason: "Must be greater than zero".to_string(),
                    });
                }
                Some(secs)
            }
            Err(_) => None,
        };

        let max_body_bytes = Self::parse_env_usize("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            crm_webhook_url,
            bind_addr,
            request_timeout,
            max_body_bytes,
            log_level,
        })
    }

    /// Create a config that forwards to `url`, everything else default.
    pub fn with_webhook(url: impl Into<String>) -> Self {
        Config {
            crm_webhook_url: Some(url.into()),
            ..Config::default()
        }
    }

    /// The effective webhook target.
    ///
    /// Returns `None` when the URL is absent, blank, or still the
    /// placeholder sentinel.
    pub fn webhook_url(&self) -> Option<&str> {
        self.crm_webhook_url
            .as_deref()
            .filter(|url| is_configured(url))
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

fn is_configured(url: &str) -> bool {
    let url = url.trim();
    !url.is_empty() && url != WEBHOOK_PLACEHOLDER
}

impl Default for Config {
    fn default() -> Self {
        Config {
            crm_webhook_url: None,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            request_timeout: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log_level: "info".to_string(),
        }
    }
}
