//! Prompt composition for todo summaries

use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};

use crate::core::models::{PromptRequest, Todo};

/// Leading instruction placed before the todo list in the user turn.
pub const SUMMARY_INSTRUCTION: &str = "Summarize these todos:";

/// Compose the prompt body from the incomplete todos, in the order given.
#[must_use]
pub fn compose_prompt(todos: &[Todo]) -> PromptRequest {
    PromptRequest::from_todos(todos)
}

/// The single user-turn text sent to the model.
///
/// An empty prompt body is not special-cased: the model is still asked to
/// summarize an empty list.
#[must_use]
pub fn instruction_text(prompt: &PromptRequest) -> String {
    format!("{SUMMARY_INSTRUCTION}\n{}", prompt.content)
}

#[must_use]
pub fn build_messages(prompt: &PromptRequest) -> Vec<ChatCompletionMessage> {
    vec![ChatCompletionMessage {
        role: MessageRole::user,
        content: Content::Text(instruction_text(prompt)),
        name: None,
        tool_calls: None,
        tool_call_id: None,
    }]
}
