use crate::openai::DetailLevel;
use crate::translation::TemplateMode;
use anyhow::{Context, Result};
use std::time::Duration;

pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_GENERIC_TRANSLATE_URL: &str =
    "https://translate.googleapis.com/translate_a/single";

#[derive(Debug, Clone)]
pub struct Config {
    // OpenAI
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_api_url: String,
    pub openai_temperature: f32,

    // Translation backends
    pub indictrans_url: Option<String>,
    pub generic_translate_url: String,
    pub backend_timeout_secs: u64,
    pub template_mode: TemplateMode,

    // Summarisation
    pub summary_detail: DetailLevel,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // OpenAI (optional: without a key the LLM backend stays unavailable)
            openai_api_key: non_empty_var("OPENAI_API_KEY"),
            openai_model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            openai_api_url: std::env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_API_URL.to_string()),
            openai_temperature: std::env::var("OPENAI_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.3),

            // Translation backends
            indictrans_url: non_empty_var("INDICTRANS_URL"),
            generic_translate_url: std::env::var("GENERIC_TRANSLATE_URL")
                .unwrap_or_else(|_| DEFAULT_GENERIC_TRANSLATE_URL.to_string()),
            backend_timeout_secs: std::env::var("BACKEND_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(30),
            template_mode: std::env::var("TEMPLATE_MODE")
                .unwrap_or_else(|_| "annotated".to_string())
                .parse()
                .context("Invalid TEMPLATE_MODE")?,

            // Summarisation
            summary_detail: std::env::var("SUMMARY_DETAIL")
                .unwrap_or_else(|_| "detailed".to_string())
                .parse()
                .context("Invalid SUMMARY_DETAIL")?,
        })
    }

    /// Per-attempt budget for each translation backend.
    pub fn backend_timeout(&self) -> Duration {
        Duration::from_secs(self.backend_timeout_secs)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
