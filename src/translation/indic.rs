//! Specialized Indic translation through an IndicTrans2 inference server.

use crate::i18n::Language;
use crate::translation::{BackendFailure, TranslationBackend, TranslationMethod};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// An English-anchored Indic translation model.
#[async_trait]
pub trait IndicEngine: Send + Sync {
    fn is_available(&self) -> bool;

    /// Translate between English and one Indic language.
    async fn translate(&self, text: &str, source: Language, target: Language) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct IndicTransRequest<'a> {
    text: &'a str,
    src_lang: &'a str,
    tgt_lang: &'a str,
}

#[derive(Debug, Deserialize)]
struct IndicTransResponse {
    translation: String,
}

/// HTTP client for a self-hosted IndicTrans2 server.
///
/// Availability is decided once, by the health check in [`IndicTransClient::connect`].
#[derive(Debug, Clone)]
pub struct IndicTransClient {
    http: reqwest::Client,
    base_url: String,
    available: bool,
}

impl IndicTransClient {
    /// Probe `{base_url}/health` and build a client.
    ///
    /// An unreachable, unhealthy or slower-than-`timeout` server gives an
    /// unavailable client rather than an error.
    pub async fn connect(http: reqwest::Client, base_url: &str, timeout: Duration) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let available = match http
            .get(format!("{}/health", base_url))
            .timeout(timeout)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => {
                info!(url = %base_url, "IndicTrans2 server is available");
                true
            }
            Ok(response) => {
                warn!(url = %base_url, status = %response.status(), "IndicTrans2 health check failed");
                false
            }
            Err(e) if e.is_timeout() => {
                warn!(url = %base_url, ?timeout, "IndicTrans2 health check timed out");
                false
            }
            Err(e) => {
                warn!(url = %base_url, error = %e, "IndicTrans2 server unreachable");
                false
            }
        };

        Self {
            http,
            base_url,
            available,
        }
    }
}

#[async_trait]
impl IndicEngine for IndicTransClient {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn translate(&self, text: &str, source: Language, target: Language) -> Result<String> {
        let request = IndicTransRequest {
            text,
            src_lang: source.config().flores_code,
            tgt_lang: target.config().flores_code,
        };

        let response = self
            .http
            .post(format!("{}/translate", self.base_url))
            .json(&request)
            .send()
            .await
            .context("Failed to send request to IndicTrans2 server")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            anyhow::bail!("IndicTrans2 error ({}): {}", status, body);
        }

        let parsed: IndicTransResponse = response
            .json()
            .await
            .context("Failed to parse IndicTrans2 response")?;

        Ok(parsed.translation)
    }
}

/// Backend for English↔Indic pairs; Indic↔Indic goes through English.
pub struct SpecializedIndicBackend {
    engine: Box<dyn IndicEngine>,
}

impl SpecializedIndicBackend {
    pub fn new(engine: Box<dyn IndicEngine>) -> Self {
        Self { engine }
    }

    async fn hop(&self, text: &str, source: Language, target: Language) -> Result<String, BackendFailure> {
        let translated = self
            .engine
            .translate(text, source, target)
            .await
            .map_err(|e| {
                BackendFailure::soft(
                    TranslationMethod::SpecializedIndic,
                    format!("{} -> {}: {:#}", source, target, e),
                )
            })?;

        if translated.trim().is_empty() {
            return Err(BackendFailure::soft(
                TranslationMethod::SpecializedIndic,
                format!("{} -> {}: empty output", source, target),
            ));
        }
        Ok(translated)
    }
}

#[async_trait]
impl TranslationBackend for SpecializedIndicBackend {
    fn method(&self) -> TranslationMethod {
        TranslationMethod::SpecializedIndic
    }

    fn is_available(&self) -> bool {
        self.engine.is_available()
    }

    fn supports(&self, source: Language, target: Language) -> bool {
        source != target && (source.is_indic() || target.is_indic())
    }

    async fn attempt(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, BackendFailure> {
        if source.is_indic() && target.is_indic() {
            debug!(%source, %target, "Routing Indic pair through English");
            let english = self.hop(text, source, Language::English).await?;
            return self.hop(&english, Language::English, target).await;
        }
        self.hop(text, source, target).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

    /// Records every hop and answers "<text>@<target code>".
    struct RecordingEngine {
        available: bool,
        hops: Mutex<Vec<(Language, Language)>>,
    }

    impl RecordingEngine {
        fn new(available: bool) -> Self {
            Self {
                available,
                hops: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl IndicEngine for RecordingEngine {
        fn is_available(&self) -> bool {
            self.available
        }

        async fn translate(&self, text: &str, source: Language, target: Language) -> Result<String> {
            self.hops.lock().unwrap().push((source, target));
            Ok(format!("{}@{}", text, target.code()))
        }
    }

    // ==================== Routing Tests ====================

    #[test]
    fn test_supports_pairs() {
        let backend = SpecializedIndicBackend::new(Box::new(RecordingEngine::new(true)));
        assert!(backend.supports(Language::English, Language::Hindi));
        assert!(backend.supports(Language::Tamil, Language::English));
        assert!(backend.supports(Language::Tamil, Language::Hindi));
        assert!(!backend.supports(Language::English, Language::English));
        assert!(!backend.supports(Language::Tamil, Language::Tamil));
    }

    #[tokio::test]
    async fn test_direct_pair_is_one_hop() {
        let engine = Box::new(RecordingEngine::new(true));
        let backend = SpecializedIndicBackend::new(engine);
        let result = backend
            .attempt("contract", Language::English, Language::Hindi)
            .await
            .unwrap();
        assert_eq!(result, "contract@hi");
    }

    #[tokio::test]
    async fn test_indic_pair_pivots_through_english() {
        let backend = SpecializedIndicBackend::new(Box::new(RecordingEngine::new(true)));
        let result = backend
            .attempt("ஒப்பந்தம்", Language::Tamil, Language::Hindi)
            .await
            .unwrap();
        assert_eq!(result, "ஒப்பந்தம்@en@hi");
    }

    #[test]
    fn test_availability_follows_engine() {
        let backend = SpecializedIndicBackend::new(Box::new(RecordingEngine::new(false)));
        assert!(!backend.is_available());
    }

    // ==================== HTTP Client Tests ====================

    #[tokio::test]
    async fn test_connect_healthy_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            IndicTransClient::connect(reqwest::Client::new(), &server.uri(), HEALTH_TIMEOUT).await;
        assert!(client.is_available());
    }

    #[tokio::test]
    async fn test_connect_unhealthy_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client =
            IndicTransClient::connect(reqwest::Client::new(), &server.uri(), HEALTH_TIMEOUT).await;
        assert!(!client.is_available());
    }

    #[tokio::test]
    async fn test_connect_slow_server_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(600)))
            .mount(&server)
            .await;

        let client = tokio::time::timeout(
            Duration::from_secs(10),
            IndicTransClient::connect(
                reqwest::Client::new(),
                &server.uri(),
                Duration::from_millis(200),
            ),
        )
        .await
        .expect("health check should give up after its own timeout");
        assert!(!client.is_available());
    }

    #[tokio::test]
    async fn test_translate_uses_flores_codes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/translate"))
            .and(body_json(serde_json::json!({
                "text": "The agreement",
                "src_lang": "eng_Latn",
                "tgt_lang": "ory_Orya"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"translation": "ଚୁକ୍ତି"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = IndicTransClient::connect(
            reqwest::Client::new(),
            &format!("{}/", server.uri()),
            HEALTH_TIMEOUT,
        )
        .await;
        let translated = client
            .translate("The agreement", Language::English, Language::Odia)
            .await
            .unwrap();
        assert_eq!(translated, "ଚୁକ୍ତି");
    }

    #[tokio::test]
    async fn test_empty_translation_is_soft_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"translation": " "})),
            )
            .mount(&server)
            .await;

        let client =
            IndicTransClient::connect(reqwest::Client::new(), &server.uri(), HEALTH_TIMEOUT).await;
        let backend = SpecializedIndicBackend::new(Box::new(client));
        let failure = backend
            .attempt("The agreement", Language::English, Language::Hindi)
            .await
            .unwrap_err();
        assert!(!failure.is_permanent());
        assert!(failure.message.contains("empty output"));
    }
}
