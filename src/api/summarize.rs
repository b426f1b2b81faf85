use axum::{extract::State, response::Response};
use tracing::info;

use super::helpers;
use super::routes::AppState;

/// POST /summarize
pub async fn summarize(State(state): State<AppState>) -> Response {
    info!("Attempting to summarize todos...");
    match state.pipeline.run().await {
        Ok(summary) => helpers::ok_summary(summary.text),
        Err(e) => helpers::err_summary(e.message()),
    }
}
