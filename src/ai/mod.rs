//! All AI/LLM functionality

pub mod client;
pub mod prompt_builder;

use async_trait::async_trait;

use crate::core::models::{PromptRequest, SummaryResult};
use crate::errors::SummaryError;

// Re-export main types for convenience
pub use client::{LlmClient, estimate_tokens};

/// Turns a composed prompt into a summary.
#[async_trait]
pub trait SummaryGenerator: Send + Sync {
    async fn summarize(&self, prompt: &PromptRequest) -> Result<SummaryResult, SummaryError>;
}
