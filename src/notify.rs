use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ReporterError, Result};
use crate::types::WebhookMessageId;

/// Body sent on both create and edit.
#[derive(Serialize)]
struct WebhookBody<'a> {
    content: &'a str,
}

/// The message object the webhook returns from a create with `wait=true`.
#[derive(Deserialize)]
struct MessagePayload {
    id: String,
}

/// Outcome of an edit attempt. `Missing` never leaves this module: it is
/// always recovered by falling back to create.
enum EditOutcome {
    Updated,
    Missing,
}

/// Publishes the report to the webhook, editing the previously created
/// message when one still exists.
pub struct Notifier {
    http: reqwest::Client,
    webhook_url: String,
}

impl Notifier {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            webhook_url: webhook_url.into(),
        }
    }

    /// Publish `content`, reusing `previous` when possible.
    ///
    /// With no prior message this creates one. With a prior message it edits
    /// in place; only a 404 (the message was deleted out-of-band) falls back
    /// to create. Any other edit failure is fatal, so a transient outage is
    /// reported instead of masked by duplicate messages.
    ///
    /// Returns the id of the message now carrying the report.
    pub async fn publish(
        &self,
        content: &str,
        previous: Option<&WebhookMessageId>,
    ) -> Result<WebhookMessageId> {
        if let Some(id) = previous {
            match self.edit(id, content).await? {
                EditOutcome::Updated => return Ok(id.clone()),
                EditOutcome::Missing => {
                    warn!(message_id = %id, "previous message is gone, creating a new one");
                }
            }
        }
        self.create(content).await
    }

    async fn create(&self, content: &str) -> Result<WebhookMessageId> {
        // wait=true makes the webhook return the created message object
        let url = format!("{}?wait=true", self.webhook_url);
        let response = self
            .http
            .post(&url)
            .json(&WebhookBody { content })
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let payload: MessagePayload = response.json().await?;
        info!(message_id = %payload.id, "created report message");
        Ok(WebhookMessageId::from(payload.id))
    }

    async fn edit(&self, id: &WebhookMessageId, content: &str) -> Result<EditOutcome> {
        let url = format!("{}/messages/{}", self.webhook_url, id);
        let response = self
            .http
            .patch(&url)
            .json(&WebhookBody { content })
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(EditOutcome::Missing);
        }
        Self::check_status(response).await?;

        debug!(message_id = %id, "edited report message");
        Ok(EditOutcome::Updated)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ReporterError::SendRejected { status, body });
        }
        Ok(response)
    }
}
