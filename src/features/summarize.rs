use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use crate::ai::SummaryGenerator;
use crate::ai::prompt_builder::compose_prompt;
use crate::core::models::SummaryResult;
use crate::errors::SummaryError;
use crate::slack::SummaryNotifier;
use crate::store::TodoStore;

/// The summarize pipeline: incomplete todos, prompt, summary, Slack.
///
/// Each step runs only after the previous one succeeded. The first failure
/// ends the run; nothing already done is undone. When delivery fails the
/// generated summary is dropped and the caller only sees the error.
#[derive(Clone)]
pub struct SummarizePipeline {
    store: Arc<dyn TodoStore>,
    generator: Arc<dyn SummaryGenerator>,
    notifier: Arc<dyn SummaryNotifier>,
}

impl SummarizePipeline {
    pub fn new(
        store: Arc<dyn TodoStore>,
        generator: Arc<dyn SummaryGenerator>,
        notifier: Arc<dyn SummaryNotifier>,
    ) -> Self {
        Self {
            store,
            generator,
            notifier,
        }
    }

    pub async fn run(&self) -> Result<SummaryResult, SummaryError> {
        let correlation_id = Uuid::new_v4();
        info!("Summarizing incomplete todos (corr_id={})", correlation_id);

        let todos = self.store.list_incomplete().await.map_err(|e| {
            error!("Failed to load incomplete todos: {} (corr_id={})", e, correlation_id);
            e
        })?;
        let prompt = compose_prompt(&todos);

        info!(
            "Requesting summary of {} todos (corr_id={})",
            todos.len(),
            correlation_id
        );
        let summary = self.generator.summarize(&prompt).await.map_err(|e| {
            error!("Failed to generate summary: {} (corr_id={})", e, correlation_id);
            e
        })?;

        info!("Sending summary to Slack (corr_id={})", correlation_id);
        self.notifier.notify(&summary.text).await.map_err(|e| {
            error!("Failed to deliver summary: {} (corr_id={})", e, correlation_id);
            e
        })?;

        info!("Summary delivered (corr_id={})", correlation_id);
        Ok(summary)
    }
}
