use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::{info, warn};

use super::TodoStore;
use crate::core::models::Todo;
use crate::errors::SummaryError;

const MAX_CONNECTIONS: u32 = 10;

// `completed` is nullable in tables created before this service; every
// query reads a NULL flag as incomplete.
const LIST_ALL_SQL: &str =
    "SELECT id, text, COALESCE(completed, FALSE) AS completed FROM todos ORDER BY id";

const LIST_INCOMPLETE_SQL: &str = "SELECT id, text, COALESCE(completed, FALSE) AS completed FROM todos
     WHERE COALESCE(completed, FALSE) = FALSE ORDER BY id";

const CREATE_TODOS_TABLE: &str = "CREATE TABLE IF NOT EXISTS todos (
    id SERIAL PRIMARY KEY,
    text TEXT NOT NULL,
    completed BOOLEAN DEFAULT FALSE
)";

/// Postgres-backed todo store.
#[derive(Clone)]
pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    /// Build a store whose pool connects on first use.
    ///
    /// With no URL the driver falls back to the standard `PG*` environment
    /// variables. Connectivity problems surface per query as `StoreError`.
    ///
    /// # Errors
    ///
    /// Returns an error if `database_url` cannot be parsed.
    pub fn connect_lazy(database_url: Option<&str>) -> Result<Self, SummaryError> {
        let options = match database_url {
            Some(url) => url
                .parse::<PgConnectOptions>()
                .map_err(|e| SummaryError::StoreError(format!("Invalid DATABASE_URL: {}", e)))?,
            None => PgConnectOptions::new(),
        };

        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_lazy_with(options);

        Ok(Self { pool })
    }

    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Round-trip to the server and return its clock.
    pub async fn ping(&self) -> Result<DateTime<Utc>, SummaryError> {
        let (now,): (DateTime<Utc>,) = sqlx::query_as("SELECT NOW()")
            .fetch_one(&self.pool)
            .await?;
        Ok(now)
    }

    /// Create the `todos` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), SummaryError> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT FROM information_schema.tables
                WHERE table_schema = 'public' AND table_name = 'todos'
            )",
        )
        .fetch_one(&self.pool)
        .await?;

        if exists {
            info!("\"todos\" table exists");
            return Ok(());
        }

        warn!("\"todos\" table does not exist, creating it");
        sqlx::query(CREATE_TODOS_TABLE).execute(&self.pool).await?;
        info!("\"todos\" table created");
        Ok(())
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn list_all(&self) -> Result<Vec<Todo>, SummaryError> {
        let todos = sqlx::query_as::<_, Todo>(LIST_ALL_SQL)
            .fetch_all(&self.pool)
            .await?;
        Ok(todos)
    }

    async fn insert(&self, text: &str) -> Result<Todo, SummaryError> {
        let todo = sqlx::query_as::<_, Todo>(
            "INSERT INTO todos (text, completed) VALUES ($1, FALSE)
             RETURNING id, text, COALESCE(completed, FALSE) AS completed",
        )
        .bind(text)
        .fetch_one(&self.pool)
        .await?;
        Ok(todo)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), SummaryError> {
        sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update_by_id(
        &self,
        id: i32,
        text: &str,
        completed: Option<bool>,
    ) -> Result<Todo, SummaryError> {
        sqlx::query_as::<_, Todo>(
            "UPDATE todos SET text = $1, completed = COALESCE($2, completed) WHERE id = $3
             RETURNING id, text, COALESCE(completed, FALSE) AS completed",
        )
        .bind(text)
        .bind(completed)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(SummaryError::NotFound(id))
    }

    async fn list_incomplete(&self) -> Result<Vec<Todo>, SummaryError> {
        let todos = sqlx::query_as::<_, Todo>(LIST_INCOMPLETE_SQL)
            .fetch_all(&self.pool)
            .await?;
        Ok(todos)
    }
}
