use serde::{Deserialize, Serialize};
use std::fmt;

/// NewType wrapper for the webhook message ID returned by the sink
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct WebhookMessageId(String);

impl WebhookMessageId {
    /// Create a new WebhookMessageId
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume self and return the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for WebhookMessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for WebhookMessageId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for WebhookMessageId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for WebhookMessageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
