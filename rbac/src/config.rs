//! Configuration
//!
//! Loads configuration from environment variables.

use std::env;
use std::str::FromStr;

use anyhow::{bail, Result};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable multi-line output.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => bail!("Unknown LOG_FORMAT {other:?} (expected \"json\" or \"pretty\")"),
        }
    }
}

/// Configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing` filter directive (e.g., `cw_rbac=debug`)
    pub log_filter: String,

    /// Log output format (default: json)
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "cw_rbac=info".into(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `LOG_FILTER`: `tracing` filter directive (default: `cw_rbac=info`)
    /// - `LOG_FORMAT`: `json` or `pretty` (default: `json`)
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            log_filter: env::var("LOG_FILTER")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_filter),
            log_format: match env::var("LOG_FORMAT") {
                Ok(v) => v.parse()?,
                Err(_) => defaults.log_format,
            },
        })
    }
}
