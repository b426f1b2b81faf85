//! HTTP API: todo CRUD and the summarize endpoint

pub mod error;
pub mod helpers;
pub mod routes;
pub mod summarize;
pub mod todos;

// Re-export the router for the binary
pub use routes::{AppState, create_router};
