//! Hosted LLM translation backend.

use crate::i18n::Language;
use crate::openai::{ChatClient, ChatError};
use crate::translation::{BackendFailure, TranslationBackend, TranslationMethod};
use async_trait::async_trait;

/// Build the system prompt for translation
fn build_translation_system_prompt(source: Language, target: Language) -> String {
    format!(
        r#"You are a professional legal translator. Translate the following text from {} to {}.

## Translation Rules

### Preserve exactly:
- Legal terminology and its precise meaning; do not simplify terms of art
- Names of parties, courts, statutes and case citations
- Numbers, amounts, dates, clause and section numbering
- URLs and e-mail addresses

### Formatting:
- Keep the same structure, headings and list layout as the original
- Preserve markdown formatting

### Output:
- Return only the translation, with no commentary
- If a legal term has no established equivalent, keep the English term in parentheses after your translation"#,
        source.display_name(),
        target.display_name()
    )
}

/// Translation through the chat-completions API.
pub struct HostedLlmBackend {
    client: ChatClient,
}

impl HostedLlmBackend {
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TranslationBackend for HostedLlmBackend {
    fn method(&self) -> TranslationMethod {
        TranslationMethod::HostedLlm
    }

    fn is_available(&self) -> bool {
        self.client.is_configured()
    }

    async fn attempt(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, BackendFailure> {
        let system_prompt = build_translation_system_prompt(source, target);

        match self.client.complete(&system_prompt, text, 4000).await {
            Ok(translated) => Ok(translated),
            Err(e @ ChatError::QuotaExceeded(_)) => {
                Err(BackendFailure::permanent(self.method(), e.to_string()))
            }
            Err(e) => Err(BackendFailure::soft(self.method(), e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::openai::DetailLevel;
    use crate::translation::TemplateMode;
    use wiremock::{
        matchers::{body_string_contains, method},
        Mock, MockServer, ResponseTemplate,
    };

    fn create_backend(server: &MockServer, api_key: Option<&str>) -> HostedLlmBackend {
        let config = Config {
            openai_api_key: api_key.map(str::to_string),
            openai_model: "gpt-4o".to_string(),
            openai_api_url: format!("{}/v1/chat/completions", server.uri()),
            openai_temperature: 0.3,
            indictrans_url: None,
            generic_translate_url: "http://localhost:1/translate".to_string(),
            backend_timeout_secs: 5,
            template_mode: TemplateMode::Annotated,
            summary_detail: DetailLevel::Detailed,
        };
        HostedLlmBackend::new(ChatClient::new(reqwest::Client::new(), &config))
    }

    fn create_openai_response(content: &str) -> serde_json::Value {
        serde_json::json!({
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": content}, "finish_reason": "stop"}
            ]
        })
    }

    #[test]
    fn test_system_prompt_names_languages() {
        let prompt = build_translation_system_prompt(Language::English, Language::Kannada);
        assert!(prompt.contains("from English to Kannada"));
        assert!(prompt.contains("Legal terminology"));
    }

    #[tokio::test]
    async fn test_unavailable_without_key() {
        let server = MockServer::start().await;
        assert!(!create_backend(&server, None).is_available());
        assert!(create_backend(&server, Some("k")).is_available());
    }

    #[tokio::test]
    async fn test_attempt_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("from English to Hindi"))
            .respond_with(ResponseTemplate::new(200).set_body_json(create_openai_response("समझौता")))
            .expect(1)
            .mount(&server)
            .await;

        let result = create_backend(&server, Some("k"))
            .attempt("Agreement", Language::English, Language::Hindi)
            .await
            .unwrap();
        assert_eq!(result, "समझौता");
    }

    #[tokio::test]
    async fn test_quota_is_permanent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
                "error": {"type": "insufficient_quota", "code": "insufficient_quota"}
            })))
            .mount(&server)
            .await;

        let failure = create_backend(&server, Some("k"))
            .attempt("Agreement", Language::English, Language::Hindi)
            .await
            .unwrap_err();
        assert!(failure.is_permanent());
        assert_eq!(failure.method, TranslationMethod::HostedLlm);
    }

    #[tokio::test]
    async fn test_rate_limit_is_soft() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("Rate limit reached"))
            .mount(&server)
            .await;

        let failure = create_backend(&server, Some("k"))
            .attempt("Agreement", Language::English, Language::Hindi)
            .await
            .unwrap_err();
        assert!(!failure.is_permanent());
    }
}
