//! Payloads sent to Slack.

use serde_json::{Value, json};

/// Create the JSON body for a Slack incoming webhook.
///
/// The text is forwarded as-is; Slack applies its own mrkdwn rendering.
///
/// # Examples
///
/// ```
/// use todo_summary::slack::response_builder::create_webhook_payload;
///
/// let payload = create_webhook_payload("Buy milk and call mom");
/// assert_eq!(payload["text"], "Buy milk and call mom");
/// ```
#[must_use]
pub fn create_webhook_payload(text: &str) -> Value {
    json!({ "text": text })
}
