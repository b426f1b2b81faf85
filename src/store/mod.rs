//! Todo persistence
//!
//! `TodoStore` is the seam the HTTP handlers and the summarize pipeline
//! depend on; `PgTodoStore` is the Postgres implementation used in
//! production.

pub mod postgres;

use async_trait::async_trait;

use crate::core::models::Todo;
use crate::errors::SummaryError;

pub use postgres::PgTodoStore;

#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All todos ordered by id ascending.
    async fn list_all(&self) -> Result<Vec<Todo>, SummaryError>;

    /// Insert a new, incomplete todo.
    async fn insert(&self, text: &str) -> Result<Todo, SummaryError>;

    /// Delete a todo. Deleting a missing id is not an error.
    async fn delete_by_id(&self, id: i32) -> Result<(), SummaryError>;

    /// Replace the text of a todo, optionally setting its completion flag.
    ///
    /// Returns `SummaryError::NotFound` when no row has that id.
    async fn update_by_id(
        &self,
        id: i32,
        text: &str,
        completed: Option<bool>,
    ) -> Result<Todo, SummaryError>;

    /// Todos with `completed = false`, ordered by id ascending.
    async fn list_incomplete(&self) -> Result<Vec<Todo>, SummaryError>;
}
