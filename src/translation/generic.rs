//! Generic hosted translation over the public `translate_a/single` endpoint.

use crate::i18n::Language;
use crate::translation::{BackendFailure, TranslationBackend, TranslationMethod};
use async_trait::async_trait;
use serde_json::Value;

pub struct GenericHostedBackend {
    http: reqwest::Client,
    url: String,
}

impl GenericHostedBackend {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    fn fail(&self, message: impl Into<String>) -> BackendFailure {
        BackendFailure::soft(TranslationMethod::GenericHosted, message)
    }
}

/// Concatenate `result[0][i][0]` over every sentence segment.
fn extract_translation(body: &Value) -> String {
    body.get(0)
        .and_then(Value::as_array)
        .map(|segments| {
            segments
                .iter()
                .filter_map(|segment| segment.get(0).and_then(Value::as_str))
                .collect::<String>()
        })
        .unwrap_or_default()
}

#[async_trait]
impl TranslationBackend for GenericHostedBackend {
    fn method(&self) -> TranslationMethod {
        TranslationMethod::GenericHosted
    }

    async fn attempt(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, BackendFailure> {
        let response = self
            .http
            .get(&self.url)
            .query(&[
                ("client", "gtx"),
                ("sl", source.code()),
                ("tl", target.code()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| self.fail(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(self.fail(format!("HTTP {}", response.status())));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| self.fail(format!("invalid response: {}", e)))?;

        let translated = extract_translation(&body);
        if translated.trim().is_empty() {
            return Err(self.fail("empty output"));
        }
        Ok(translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    #[test]
    fn test_extract_translation_joins_segments() {
        let body = serde_json::json!([
            [["यह समझौता है। ", "This is the agreement. ", null], ["भुगतान देय है।", "Payment is due.", null]],
            null,
            "en"
        ]);
        assert_eq!(extract_translation(&body), "यह समझौता है। भुगतान देय है।");
    }

    #[test]
    fn test_extract_translation_unexpected_shape() {
        assert_eq!(extract_translation(&serde_json::json!({"error": "x"})), "");
        assert_eq!(extract_translation(&serde_json::json!([])), "");
    }

    #[tokio::test]
    async fn test_attempt_sends_language_codes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .and(query_param("client", "gtx"))
            .and(query_param("sl", "en"))
            .and(query_param("tl", "ta"))
            .and(query_param("q", "Agreement"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([[["ஒப்பந்தம்", "Agreement"]]])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let backend = GenericHostedBackend::new(
            reqwest::Client::new(),
            format!("{}/translate_a/single", server.uri()),
        );
        let result = backend
            .attempt("Agreement", Language::English, Language::Tamil)
            .await
            .unwrap();
        assert_eq!(result, "ஒப்பந்தம்");
    }

    #[tokio::test]
    async fn test_non_200_is_soft_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let backend = GenericHostedBackend::new(reqwest::Client::new(), server.uri());
        let failure = backend
            .attempt("Agreement", Language::English, Language::Tamil)
            .await
            .unwrap_err();
        assert!(!failure.is_permanent());
        assert!(failure.message.contains("503"));
    }

    #[tokio::test]
    async fn test_empty_output_is_soft_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([[]])))
            .mount(&server)
            .await;

        let backend = GenericHostedBackend::new(reqwest::Client::new(), server.uri());
        let failure = backend
            .attempt("Agreement", Language::English, Language::Tamil)
            .await
            .unwrap_err();
        assert_eq!(failure.message, "empty output");
    }
}
