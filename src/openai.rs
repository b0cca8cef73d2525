//! OpenAI chat-completions client and legal document summarisation.

use crate::config::Config;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, error};

/// Characters of document text sent for summarisation (about 15k tokens).
pub const MAX_SUMMARY_INPUT_CHARS: usize = 60_000;
pub const TRUNCATION_MARKER: &str = "[Document truncated due to length]";

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_completion_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

/// Check if a model is a reasoning model that doesn't support temperature
fn is_reasoning_model(model: &str) -> bool {
    model.starts_with("gpt-5")
        || model.starts_with("o1")
        || model.starts_with("o3")
        || model.starts_with("o4")
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("OPENAI_API_KEY is not configured")]
    MissingApiKey,

    #[error("OpenAI quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("OpenAI API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Failed to reach OpenAI API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("OpenAI response contained no content")]
    EmptyResponse,
}

impl ChatError {
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, ChatError::QuotaExceeded(_))
    }
}

/// A 429 is a quota failure when the body says so; otherwise it is a
/// transient rate limit.
fn classify_error(status: u16, body: String) -> ChatError {
    if status == 429 {
        let lower = body.to_lowercase();
        if lower.contains("insufficient_quota") || lower.contains("quota") {
            return ChatError::QuotaExceeded(body);
        }
    }
    ChatError::Api { status, body }
}

/// Chat-completions client.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    api_key: Option<String>,
    api_url: String,
    model: String,
    temperature: f32,
}

impl ChatClient {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            api_key: config.openai_api_key.clone(),
            api_url: config.openai_api_url.clone(),
            model: config.openai_model.clone(),
            temperature: config.openai_temperature,
        }
    }

    /// Whether an API key is configured.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one system + user exchange and return the assistant's reply.
    pub async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> Result<String, ChatError> {
        let api_key = self.api_key.as_deref().ok_or(ChatError::MissingApiKey)?;

        // Reasoning models need higher token limits and don't support temperature
        let is_reasoning = is_reasoning_model(&self.model);
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                },
            ],
            max_completion_tokens: if is_reasoning { 16000 } else { max_tokens },
            temperature: if is_reasoning {
                None
            } else {
                Some(self.temperature)
            },
        };

        debug!(model = %self.model, "Sending chat completion request");

        let response = self
            .http
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            let err = classify_error(status, body);
            if err.is_quota_exceeded() {
                error!("OpenAI quota exhausted");
            }
            return Err(err);
        }

        let chat_response: ChatResponse = response.json().await?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(ChatError::EmptyResponse)
    }
}

/// How much detail a summary carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    /// Plain-language key points
    Simple,
    /// Sectioned summary with legal terminology
    Detailed,
}

impl FromStr for DetailLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(DetailLevel::Simple),
            "detailed" => Ok(DetailLevel::Detailed),
            other => anyhow::bail!("expected 'simple' or 'detailed', got '{}'", other),
        }
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailLevel::Simple => f.write_str("simple"),
            DetailLevel::Detailed => f.write_str("detailed"),
        }
    }
}

fn build_summary_system_prompt(detail: DetailLevel) -> &'static str {
    match detail {
        DetailLevel::Simple => {
            "You are a legal assistant that simplifies complex legal documents. \
Create a concise, easy-to-understand summary in plain language. \
Avoid legal jargon when possible, and explain any necessary legal terms. \
Focus on the key points, obligations, rights, and conclusions only."
        }
        DetailLevel::Detailed => {
            r#"You are a legal assistant that summarizes legal documents. Create a comprehensive summary with the following sections:
1. Overview: Brief description of the document type and purpose
2. Key Facts: Important dates, parties, case numbers, etc.
3. Main Arguments/Points: Primary legal arguments or clauses
4. Conclusions/Rulings: Final decisions, judgments, obligations
5. Important Legal Principles: Notable precedents or legal concepts

Use proper legal terminology while still being clear."#
        }
    }
}

/// Cut `text` to the summary input budget, appending the truncation marker.
fn truncate_for_summary(text: &str) -> String {
    match text.char_indices().nth(MAX_SUMMARY_INPUT_CHARS) {
        Some((byte_idx, _)) => format!("{}\n\n{}", &text[..byte_idx], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}

/// Summarize a legal document.
pub async fn summarize_document(
    client: &ChatClient,
    text: &str,
    detail: DetailLevel,
) -> Result<String, ChatError> {
    if text.trim().is_empty() {
        return Ok("No text to summarize.".to_string());
    }

    let user_prompt = format!(
        "Summarize this legal document:\n\n{}",
        truncate_for_summary(text)
    );

    client
        .complete(build_summary_system_prompt(detail), &user_prompt, 2000)
        .await
}
