use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info, warn};

use todo_summary::ai::LlmClient;
use todo_summary::api::{AppState, create_router};
use todo_summary::core::config::AppConfig;
use todo_summary::features::SummarizePipeline;
use todo_summary::slack::WebhookClient;
use todo_summary::store::PgTodoStore;
use todo_summary::utils::mask_database_url;

/// Check connectivity and create the table if needed. Failures are logged
/// only; the API still starts and requests report store errors.
async fn check_database(store: &PgTodoStore) {
    match store.ping().await {
        Ok(now) => {
            info!("Database connected successfully at: {}", now);
            if let Err(e) = store.ensure_schema().await {
                error!("Failed to ensure todos table: {}", e);
            }
        }
        Err(e) => {
            error!("Database connection error: {}", e);
            warn!("Please check DATABASE_URL");
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    todo_summary::setup_logging();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    match config.database_url.as_deref() {
        Some(url) => info!("Database URL pattern: {}", mask_database_url(url)),
        None => warn!("DATABASE_URL not set, using PG* environment defaults"),
    }
    if config.slack_webhook_url.is_none() {
        warn!("SLACK_WEBHOOK_URL not set, /summarize will fail to deliver");
    }

    let store = Arc::new(PgTodoStore::connect_lazy(config.database_url.as_deref())?);
    check_database(&store).await;

    let llm_client = LlmClient::from_config(&config);
    info!("Using OpenAI model {}", llm_client.model_name());

    let pipeline = SummarizePipeline::new(
        store.clone(),
        Arc::new(llm_client),
        Arc::new(WebhookClient::from_config(&config)),
    );
    let app = create_router(AppState::new(store, pipeline));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running on port {}", config.port);

    axum::serve(listener, app).await?;
    Ok(())
}
