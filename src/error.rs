use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReporterError {
    // Startup errors
    #[error("Environment variable '{var}' not set")]
    Configuration { var: String },

    // Usage source errors
    #[error("Usage file unavailable: {path}")]
    UsageFileUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Usage endpoint unavailable: {url}")]
    UsageEndpointUnavailable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Malformed usage data from {context}")]
    MalformedData {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    // Notification errors
    #[error("Webhook request failed")]
    SendTransport(#[from] reqwest::Error),

    #[error("Webhook rejected the request with status {status}: {body}")]
    SendRejected { status: u16, body: String },

    // State persistence errors
    #[error("Failed to write state file: {path}")]
    StateWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode state")]
    StateEncode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReporterError>;
