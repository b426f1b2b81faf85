use serde::{Deserialize, Serialize};

/// A persisted todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    pub id: i32,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Prompt body handed to the summarization service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub content: String,
}

impl PromptRequest {
    /// Join the text of each todo with a newline, preserving input order.
    pub fn from_todos(todos: &[Todo]) -> Self {
        let content = todos
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        Self { content }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryResult {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub success: bool,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeFailure {
    pub success: bool,
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i32, text: &str) -> Todo {
        Todo {
            id,
            text: text.to_string(),
            completed: false,
        }
    }

    #[test]
    fn prompt_joins_texts_with_newlines() {
        let prompt = PromptRequest::from_todos(&[todo(1, "buy milk"), todo(2, "call mom")]);
        assert_eq!(prompt.content, "buy milk\ncall mom");
    }

    #[test]
    fn prompt_for_no_todos_is_empty() {
        assert_eq!(PromptRequest::from_todos(&[]).content, "");
    }

    #[test]
    fn update_request_completed_is_optional() {
        let req: UpdateTodoRequest = serde_json::from_str(r#"{"text":"x"}"#).unwrap();
        assert_eq!(req.text, "x");
        assert!(req.completed.is_none());
    }
}
