//! Todo CRUD endpoint handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;

use super::error::ApiResult;
use super::routes::AppState;
use crate::core::models::{CreateTodoRequest, Todo, UpdateTodoRequest};

/// GET /todos
pub async fn list_todos(State(state): State<AppState>) -> ApiResult<Json<Vec<Todo>>> {
    let todos = state.store.list_all().await?;
    info!("Fetched {} todos", todos.len());
    Ok(Json(todos))
}

/// POST /todos
pub async fn create_todo(
    State(state): State<AppState>,
    Json(req): Json<CreateTodoRequest>,
) -> ApiResult<Json<Todo>> {
    let todo = state.store.insert(&req.text).await?;
    info!("Created todo {}", todo.id);
    Ok(Json(todo))
}

/// PUT /todos/{id}
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateTodoRequest>,
) -> ApiResult<Json<Todo>> {
    let todo = state
        .store
        .update_by_id(id, &req.text, req.completed)
        .await?;
    info!("Updated todo {}", todo.id);
    Ok(Json(todo))
}

/// DELETE /todos/{id}
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    state.store.delete_by_id(id).await?;
    info!("Deleted todo {}", id);
    Ok(StatusCode::NO_CONTENT)
}
