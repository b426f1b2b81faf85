//! API route definitions

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::{helpers, summarize, todos};
use crate::features::SummarizePipeline;
use crate::store::TodoStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
    pub pipeline: SummarizePipeline,
}

impl AppState {
    pub fn new(store: Arc<dyn TodoStore>, pipeline: SummarizePipeline) -> Self {
        Self { store, pipeline }
    }
}

async fn index() -> &'static str {
    helpers::INDEX_MESSAGE
}

/// Build the complete API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/todos", get(todos::list_todos).post(todos::create_todo))
        .route(
            "/todos/{id}",
            put(todos::update_todo).delete(todos::delete_todo),
        )
        .route("/summarize", post(summarize::summarize))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
