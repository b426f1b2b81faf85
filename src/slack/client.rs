//! Slack incoming-webhook client

use async_trait::async_trait;
use reqwest::Client;
use tracing::{error, info};

use super::SummaryNotifier;
use super::response_builder::create_webhook_payload;
use crate::core::config::AppConfig;
use crate::errors::SummaryError;

/// Posts messages to a single Slack incoming webhook.
pub struct WebhookClient {
    http: Client,
    webhook_url: Option<String>,
}

impl WebhookClient {
    #[must_use]
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            http: Client::new(),
            webhook_url,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.slack_webhook_url.clone())
    }

    /// # Errors
    ///
    /// Returns `NotificationError` if no webhook is configured, the request
    /// cannot be sent, or Slack answers with a non-success status.
    pub async fn post_message(&self, message: &str) -> Result<(), SummaryError> {
        let Some(url) = self.webhook_url.as_deref() else {
            return Err(SummaryError::NotificationError(
                "SLACK_WEBHOOK_URL is not set".to_string(),
            ));
        };

        let response = self
            .http
            .post(url)
            .json(&create_webhook_payload(message))
            .send()
            .await
            .map_err(|e| {
                SummaryError::NotificationError(format!(
                    "Slack webhook request failed: {}",
                    e.without_url()
                ))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            error!(
                "Slack webhook POST failed: status={} body={}",
                status, body_text
            );
            return Err(SummaryError::NotificationError(format!(
                "Slack webhook error (status {status}): {body_text}"
            )));
        }

        info!("Posted {} characters to Slack webhook", message.chars().count());
        Ok(())
    }
}

#[async_trait]
impl SummaryNotifier for WebhookClient {
    async fn notify(&self, message: &str) -> Result<(), SummaryError> {
        self.post_message(message).await
    }
}
