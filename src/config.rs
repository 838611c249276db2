use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_STATE_FILE, DEFAULT_USAGE_FILE};
use crate::error::{ReporterError, Result};

/// Runtime configuration, resolved from the environment once at startup and
/// passed explicitly into each step. Business logic never reads the
/// environment itself.
#[derive(Debug, Clone)]
pub struct Config {
    /// Discord webhook the report is published to.
    pub webhook_url: String,
    /// Local usage JSON exported from Railway.
    pub usage_file: PathBuf,
    /// Optional remote endpoint serving the same counters; takes precedence
    /// over the local file when set.
    pub usage_url: Option<String>,
    /// Where the reporter keeps its state between runs.
    pub state_file: PathBuf,
}

impl Config {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        let webhook_url = env::var("DISCORD_WEBHOOK")
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ReporterError::Configuration {
                var: "DISCORD_WEBHOOK".to_string(),
            })?;

        Ok(Self {
            webhook_url,
            usage_file: env::var("USAGE_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_USAGE_FILE)),
            usage_url: env::var("USAGE_URL").ok().filter(|v| !v.is_empty()),
            state_file: env::var("RUR_STATE_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATE_FILE)),
        })
    }
}
