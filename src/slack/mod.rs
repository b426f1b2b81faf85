//! All Slack-specific functionality

pub mod client;
pub mod response_builder;

use async_trait::async_trait;

use crate::errors::SummaryError;

// Re-export main types for convenience
pub use client::WebhookClient;

/// Delivers a finished summary to the notification channel.
#[async_trait]
pub trait SummaryNotifier: Send + Sync {
    async fn notify(&self, message: &str) -> Result<(), SummaryError>;
}
