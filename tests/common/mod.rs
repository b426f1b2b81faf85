#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use todo_summary::ai::SummaryGenerator;
use todo_summary::api::{AppState, create_router};
use todo_summary::core::models::{PromptRequest, SummaryResult, Todo};
use todo_summary::errors::SummaryError;
use todo_summary::features::SummarizePipeline;
use todo_summary::slack::SummaryNotifier;
use todo_summary::store::TodoStore;

/// In-memory store with Postgres-like id assignment.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<(i32, Vec<Todo>)>,
}

impl InMemoryStore {
    pub fn with_todos(todos: &[(&str, bool)]) -> Self {
        let store = Self::default();
        {
            let mut guard = store.state.lock().unwrap();
            for (text, completed) in todos {
                guard.0 += 1;
                let id = guard.0;
                guard.1.push(Todo {
                    id,
                    text: (*text).to_string(),
                    completed: *completed,
                });
            }
        }
        store
    }

    pub fn snapshot(&self) -> Vec<Todo> {
        self.state.lock().unwrap().1.clone()
    }
}

#[async_trait]
impl TodoStore for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Todo>, SummaryError> {
        let mut todos = self.snapshot();
        todos.sort_by_key(|t| t.id);
        Ok(todos)
    }

    async fn insert(&self, text: &str) -> Result<Todo, SummaryError> {
        let mut guard = self.state.lock().unwrap();
        guard.0 += 1;
        let todo = Todo {
            id: guard.0,
            text: text.to_string(),
            completed: false,
        };
        guard.1.push(todo.clone());
        Ok(todo)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), SummaryError> {
        self.state.lock().unwrap().1.retain(|t| t.id != id);
        Ok(())
    }

    async fn update_by_id(
        &self,
        id: i32,
        text: &str,
        completed: Option<bool>,
    ) -> Result<Todo, SummaryError> {
        let mut guard = self.state.lock().unwrap();
        let todo = guard
            .1
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(SummaryError::NotFound(id))?;
        todo.text = text.to_string();
        if let Some(done) = completed {
            todo.completed = done;
        }
        Ok(todo.clone())
    }

    async fn list_incomplete(&self) -> Result<Vec<Todo>, SummaryError> {
        let mut todos: Vec<Todo> = self
            .snapshot()
            .into_iter()
            .filter(|t| !t.completed)
            .collect();
        todos.sort_by_key(|t| t.id);
        Ok(todos)
    }
}

/// Store whose every call fails as if the database were down.
pub struct DownStore;

fn down() -> SummaryError {
    SummaryError::StoreError("connection refused".to_string())
}

#[async_trait]
impl TodoStore for DownStore {
    async fn list_all(&self) -> Result<Vec<Todo>, SummaryError> {
        Err(down())
    }

    async fn insert(&self, _text: &str) -> Result<Todo, SummaryError> {
        Err(down())
    }

    async fn delete_by_id(&self, _id: i32) -> Result<(), SummaryError> {
        Err(down())
    }

    async fn update_by_id(
        &self,
        _id: i32,
        _text: &str,
        _completed: Option<bool>,
    ) -> Result<Todo, SummaryError> {
        Err(down())
    }

    async fn list_incomplete(&self) -> Result<Vec<Todo>, SummaryError> {
        Err(down())
    }
}

/// Generator that records prompts and replies with a fixed outcome.
pub struct FakeGenerator {
    reply: Result<String, String>,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummaryGenerator for FakeGenerator {
    async fn summarize(&self, prompt: &PromptRequest) -> Result<SummaryResult, SummaryError> {
        self.prompts.lock().unwrap().push(prompt.content.clone());
        match &self.reply {
            Ok(text) => Ok(SummaryResult { text: text.clone() }),
            Err(msg) => Err(SummaryError::SummarizationError(msg.clone())),
        }
    }
}

/// Notifier that records messages and optionally fails.
#[derive(Default)]
pub struct FakeNotifier {
    failure: Option<String>,
    pub messages: Mutex<Vec<String>>,
}

impl FakeNotifier {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummaryNotifier for FakeNotifier {
    async fn notify(&self, message: &str) -> Result<(), SummaryError> {
        self.messages.lock().unwrap().push(message.to_string());
        match &self.failure {
            Some(msg) => Err(SummaryError::NotificationError(msg.clone())),
            None => Ok(()),
        }
    }
}

pub fn pipeline(
    store: Arc<dyn TodoStore>,
    generator: Arc<FakeGenerator>,
    notifier: Arc<FakeNotifier>,
) -> SummarizePipeline {
    SummarizePipeline::new(store, generator, notifier)
}

pub fn router(
    store: Arc<dyn TodoStore>,
    generator: Arc<FakeGenerator>,
    notifier: Arc<FakeNotifier>,
) -> axum::Router {
    let pipeline = pipeline(store.clone(), generator, notifier);
    create_router(AppState::new(store, pipeline))
}
