//! Todo Summary - a REST API over a list of todos that can summarize the
//! outstanding ones with ChatGPT and post the result to Slack.
//!
//! # Architecture
//!
//! The service uses:
//! - axum for the HTTP API
//! - sqlx with Postgres for todo persistence
//! - the `OpenAI` chat completions API for summaries
//! - a Slack incoming webhook for delivery
//! - Tokio for async runtime
//!
//! `POST /summarize` runs [`features::SummarizePipeline`], which is built
//! from three injected collaborators so each can be replaced in tests.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use todo_summary::ai::LlmClient;
//! use todo_summary::core::config::AppConfig;
//! use todo_summary::features::SummarizePipeline;
//! use todo_summary::slack::WebhookClient;
//! use todo_summary::store::PgTodoStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     todo_summary::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let store = Arc::new(PgTodoStore::connect_lazy(config.database_url.as_deref())?);
//!     let pipeline = SummarizePipeline::new(
//!         store,
//!         Arc::new(LlmClient::from_config(&config)),
//!         Arc::new(WebhookClient::from_config(&config)),
//!     );
//!
//!     let summary = pipeline.run().await?;
//!     println!("Summary: {}", summary.text);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod features;
pub mod slack;
pub mod store;
pub mod utils;

pub use errors::SummaryError;

const DEFAULT_LOG_FILTER: &str = "todo_summary=info,tower_http=info";

/// Configure structured logging.
///
/// Honors `RUST_LOG` for filtering and `LOG_FORMAT=json` for JSON lines;
/// anything else gets the human-readable formatter. Safe to call more than
/// once: later calls are ignored.
///
/// # Example
///
/// ```
/// todo_summary::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    let _ = if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };
}
