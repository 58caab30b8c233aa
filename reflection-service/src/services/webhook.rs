//! Best-effort forwarding of contact submissions to a spreadsheet webhook.

use crate::models::ContactRecord;
use reqwest::Client;

/// What happened to a forward attempt. Never surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForwardOutcome {
    /// No webhook configured.
    Disabled,
    /// The webhook answered; the status is not interpreted.
    Delivered(u16),
    /// The request could not be sent.
    Failed(String),
}

#[derive(Clone)]
pub struct SheetWebhook {
    url: Option<String>,
    client: Client,
}

impl SheetWebhook {
    pub fn new(url: Option<String>) -> Self {
        Self::with_client(url, Client::new())
    }

    pub fn with_client(url: Option<String>, client: Client) -> Self {
        Self { url, client }
    }

    pub fn is_enabled(&self) -> bool {
        self.url.is_some()
    }

    /// POST the record once. Awaited, never retried, never an error.
    pub async fn forward(&self, record: &ContactRecord) -> ForwardOutcome {
        let Some(url) = &self.url else {
            tracing::debug!("Sheet webhook not configured, skipping forward");
            return ForwardOutcome::Disabled;
        };

        match self.client.post(url).json(record).send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    tracing::info!(status = status.as_u16(), "Contact forwarded to sheet webhook");
                } else {
                    tracing::warn!(
                        status = status.as_u16(),
                        "Sheet webhook answered with non-success status"
                    );
                }
                ForwardOutcome::Delivered(status.as_u16())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to forward contact to sheet webhook");
                ForwardOutcome::Failed(e.to_string())
            }
        }
    }
}
