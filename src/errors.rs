use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Failed to access the todo store: {0}")]
    StoreError(String),

    #[error("Todo {0} not found")]
    NotFound(i32),

    #[error("Failed to access OpenAI API: {0}")]
    SummarizationError(String),

    #[error("Failed to deliver Slack notification: {0}")]
    NotificationError(String),
}

impl SummaryError {
    /// The underlying message, without the category prefix used in logs.
    ///
    /// This is what callers of the HTTP API see in the `error` field.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            SummaryError::StoreError(msg)
            | SummaryError::SummarizationError(msg)
            | SummaryError::NotificationError(msg) => msg.clone(),
            SummaryError::NotFound(_) => self.to_string(),
        }
    }
}

impl From<sqlx::Error> for SummaryError {
    fn from(error: sqlx::Error) -> Self {
        SummaryError::StoreError(error.to_string())
    }
}
