use std::env;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Process configuration read from the environment.
///
/// Outbound settings are optional: a missing key or webhook
/// shows up as a failed `/summarize` call, not as a refusal to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub openai_api_key: Option<String>,
    pub openai_org_id: Option<String>,
    pub openai_model: Option<String>,
    pub openai_api_url: Option<String>,
    pub slack_webhook_url: Option<String>,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| format!("PORT: {}", e))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: get("DATABASE_URL"),
            openai_api_key: get("OPENAI_API_KEY"),
            openai_org_id: get("OPENAI_ORG_ID"),
            openai_model: get("OPENAI_MODEL"),
            openai_api_url: get("OPENAI_API_URL"),
            slack_webhook_url: get("SLACK_WEBHOOK_URL"),
            port,
        })
    }

    #[must_use]
    pub fn model(&self) -> String {
        self.openai_model
            .clone()
            .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string())
    }

    #[must_use]
    pub fn chat_completions_url(&self) -> String {
        self.openai_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_OPENAI_API_URL.to_string())
    }
}
