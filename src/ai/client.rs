//! LLM (`OpenAI`) API client module
//!
//! Encapsulates the chat completion call used to summarize todos.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{debug, info};

use super::SummaryGenerator;
use super::prompt_builder::build_messages;
use crate::core::config::AppConfig;
use crate::core::models::{PromptRequest, SummaryResult};
use crate::errors::SummaryError;

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// Convert chat messages into the JSON shape expected by `/v1/chat/completions`.
#[must_use]
pub fn build_chat_input_from_prompt(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .map(|msg| {
            let role_str = match msg.role {
                MessageRole::system => "system",
                MessageRole::user => "user",
                MessageRole::assistant => "assistant",
                MessageRole::function => "function",
                MessageRole::tool => "tool",
            };

            let content_val = match &msg.content {
                Content::Text(text) => json!(text),
                Content::ImageUrl(_) => Value::Null,
            };

            json!({
                "role": role_str,
                "content": content_val
            })
        })
        .collect()
}

/// Pull the first choice's message text out of a chat completion response.
#[must_use]
pub fn extract_completion_text(response_json: &Value) -> Option<String> {
    response_json
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .map(std::string::ToString::to_string)
}

/// LLM API client for generating summaries
pub struct LlmClient {
    http: Client,
    api_key: Option<String>,
    org_id: Option<String>,
    model_name: String,
    endpoint: String,
}

impl LlmClient {
    #[must_use]
    pub fn new(
        api_key: Option<String>,
        org_id: Option<String>,
        model_name: String,
        endpoint: String,
    ) -> Self {
        Self {
            http: Client::new(),
            api_key,
            org_id,
            model_name,
            endpoint,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.openai_api_key.clone(),
            config.openai_org_id.clone(),
            config.model(),
            config.chat_completions_url(),
        )
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// # Errors
    ///
    /// Returns `SummarizationError` if the request cannot be sent, the
    /// endpoint answers with a non-success status, or the response has no
    /// generated content.
    pub async fn generate_summary(
        &self,
        prompt: Vec<ChatCompletionMessage>,
    ) -> Result<String, SummaryError> {
        #[cfg(feature = "debug-logs")]
        info!("Using ChatGPT prompt:\n{:?}", prompt);

        let estimated_input_tokens = prompt
            .iter()
            .map(|msg| estimate_tokens(&format!("{:?}", msg.content)))
            .sum::<usize>();

        info!(
            model = %self.model_name,
            "Requesting summary, estimated input tokens: {}", estimated_input_tokens
        );

        let request_body = json!({
            "model": self.model_name,
            "messages": build_chat_input_from_prompt(&prompt),
        });

        let mut request = self.http.post(&self.endpoint).json(&request_body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        if let Some(org) = &self.org_id {
            request = request.header("OpenAI-Organization", org);
        }

        let response = request.send().await.map_err(|e| {
            SummaryError::SummarizationError(format!("OpenAI API request failed: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(SummaryError::SummarizationError(format!(
                "OpenAI API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            SummaryError::SummarizationError(format!("Failed to parse OpenAI response: {e}"))
        })?;

        debug!("OpenAI response: {}", response_json);

        extract_completion_text(&response_json).ok_or_else(|| {
            SummaryError::SummarizationError("No generated content in OpenAI response".to_string())
        })
    }
}

#[async_trait]
impl SummaryGenerator for LlmClient {
    async fn summarize(&self, prompt: &PromptRequest) -> Result<SummaryResult, SummaryError> {
        let text = self.generate_summary(build_messages(prompt)).await?;
        Ok(SummaryResult { text })
    }
}
