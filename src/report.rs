//! End-to-end document analysis: detection, risk, summary, translation.

use crate::config::Config;
use crate::detect::LanguageDetector;
use crate::i18n::Language;
use crate::openai::{summarize_document, ChatClient, DetailLevel};
use crate::risk::{RiskAssessment, RiskScorer};
use crate::translation::{TranslationMethod, TranslationOrchestrator, TranslationResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write;
use std::sync::Arc;
use tracing::{info, warn};

/// Reported as the translation when a target was given but no summary exists.
pub const NO_SUMMARY_TO_TRANSLATE: &str =
    "Translation unavailable: only document summaries are translated, and no summary was produced.";

/// What to do beyond detection and risk scoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisOptions {
    pub summarize: bool,
    pub target: Option<Language>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub detected_language: Language,
    pub risk: RiskAssessment,
    pub summary: Option<String>,
    pub summary_error: Option<String>,
    pub translation: Option<TranslationResult>,
    pub generated_at: DateTime<Utc>,
}

impl DocumentReport {
    /// Human-readable rendering for the terminal.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Detected language: {} ({})",
            self.detected_language.display_name(),
            self.detected_language.code()
        );
        let _ = writeln!(
            out,
            "Risk level: {} (score {:.1})",
            self.risk.level, self.risk.score
        );
        for factor in &self.risk.factors {
            let _ = writeln!(out, "  - {}", factor);
        }

        if let Some(summary) = &self.summary {
            let _ = write!(out, "\nSummary:\n{}\n", summary);
        }
        if let Some(error) = &self.summary_error {
            let _ = writeln!(out, "\nSummary unavailable: {}", error);
        }
        if let Some(translation) = &self.translation {
            let _ = write!(
                out,
                "\nTranslation [{}]:\n{}\n",
                translation.method, translation.text
            );
        }
        out
    }
}

pub struct DocumentAnalyzer {
    detector: LanguageDetector,
    scorer: RiskScorer,
    chat: ChatClient,
    detail: DetailLevel,
    orchestrator: Arc<TranslationOrchestrator>,
}

impl DocumentAnalyzer {
    pub fn new(
        detector: LanguageDetector,
        scorer: RiskScorer,
        chat: ChatClient,
        detail: DetailLevel,
        orchestrator: Arc<TranslationOrchestrator>,
    ) -> Self {
        Self {
            detector,
            scorer,
            chat,
            detail,
            orchestrator,
        }
    }

    /// Standard analyzer: whatlang detection, default scoring and the
    /// configured backend chain sharing one HTTP client.
    pub async fn from_config(config: &Config) -> Self {
        let http = reqwest::Client::new();
        let orchestrator = TranslationOrchestrator::from_config(config, http.clone()).await;
        Self::new(
            LanguageDetector::default(),
            RiskScorer::default(),
            ChatClient::new(http, config),
            config.summary_detail,
            Arc::new(orchestrator),
        )
    }

    pub fn orchestrator(&self) -> &Arc<TranslationOrchestrator> {
        &self.orchestrator
    }

    pub async fn analyze(&self, text: &str, options: AnalysisOptions) -> DocumentReport {
        let detected_language = self.detector.detect(text);
        let risk = self.scorer.assess(text);
        info!(language = %detected_language, risk = %risk.level, "Document assessed");

        let (summary, summary_error) = if options.summarize {
            match summarize_document(&self.chat, text, self.detail).await {
                Ok(summary) => (Some(summary), None),
                Err(e) => {
                    if e.is_quota_exceeded() {
                        self.orchestrator
                            .mark_permanently_unavailable(TranslationMethod::HostedLlm);
                    }
                    warn!(error = %e, "Summarization failed");
                    (None, Some(e.to_string()))
                }
            }
        } else {
            (None, None)
        };

        // Only the English summary is translated, never the raw document
        let translation = match (options.target, &summary) {
            (Some(target), Some(summary)) => Some(
                self.orchestrator
                    .translate_from(summary, Language::canonical(), target)
                    .await,
            ),
            (Some(target), None) => {
                warn!(%target, "Translation requested without a summary");
                Some(TranslationResult::new(
                    NO_SUMMARY_TO_TRANSLATE,
                    TranslationMethod::Failed,
                ))
            }
            (None, _) => None,
        };

        DocumentReport {
            detected_language,
            risk,
            summary,
            summary_error,
            translation,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::{DetectionError, LanguageIdentifier};
    use crate::risk::RiskLevel;
    use crate::translation::{BackendStatus, HostedLlmBackend, TemplateMode, TemplateTranslator};
    use std::time::Duration;
    use wiremock::{
        matchers::{body_string_contains, method},
        Mock, MockServer, ResponseTemplate,
    };

    struct English;

    impl LanguageIdentifier for English {
        fn identify(&self, _text: &str) -> Result<String, DetectionError> {
            Ok("eng".to_string())
        }
    }

    fn create_test_config(api_url: &str, api_key: Option<&str>) -> Config {
        Config {
            openai_api_key: api_key.map(str::to_string),
            openai_model: "gpt-4o".to_string(),
            openai_api_url: api_url.to_string(),
            openai_temperature: 0.3,
            indictrans_url: None,
            generic_translate_url: "http://localhost:1/translate".to_string(),
            backend_timeout_secs: 5,
            template_mode: TemplateMode::Annotated,
            summary_detail: DetailLevel::Simple,
        }
    }

    fn create_analyzer(config: &Config) -> DocumentAnalyzer {
        let http = reqwest::Client::new();
        let orchestrator = TranslationOrchestrator::new(
            TemplateTranslator::new(config.template_mode),
            Duration::from_secs(5),
        )
        .with_backend(Box::new(HostedLlmBackend::new(ChatClient::new(
            http.clone(),
            config,
        ))));

        DocumentAnalyzer::new(
            LanguageDetector::new(Box::new(English)),
            RiskScorer::default(),
            ChatClient::new(http, config),
            config.summary_detail,
            Arc::new(orchestrator),
        )
    }

    fn create_openai_response(content: &str) -> serde_json::Value {
        serde_json::json!({
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": content}, "finish_reason": "stop"}
            ]
        })
    }

    const LEASE: &str = "This lease agreement may terminate for breach of the payment terms.";

    #[tokio::test]
    async fn test_analyze_without_options() {
        let analyzer = create_analyzer(&create_test_config("http://localhost:1", None));
        let report = analyzer.analyze(LEASE, AnalysisOptions::default()).await;

        assert_eq!(report.detected_language, Language::English);
        assert_ne!(report.risk.level, RiskLevel::Unknown);
        assert!(report.summary.is_none());
        assert!(report.translation.is_none());
    }

    #[tokio::test]
    async fn test_summary_is_translated() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("Summarize this legal document"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(create_openai_response("A lease summary")),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(body_string_contains("A lease summary"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(create_openai_response("पट्टा सारांश")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let analyzer = create_analyzer(&create_test_config(&server.uri(), Some("k")));
        let report = analyzer
            .analyze(
                LEASE,
                AnalysisOptions {
                    summarize: true,
                    target: Some(Language::Hindi),
                },
            )
            .await;

        assert_eq!(report.summary.as_deref(), Some("A lease summary"));
        let translation = report.translation.unwrap();
        assert_eq!(translation.method, TranslationMethod::HostedLlm);
        assert_eq!(translation.text, "पट्टा सारांश");
    }

    #[tokio::test]
    async fn test_summary_quota_latches_llm_translation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
                "error": {"code": "insufficient_quota"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let analyzer = create_analyzer(&create_test_config(&server.uri(), Some("k")));
        let report = analyzer
            .analyze(
                LEASE,
                AnalysisOptions {
                    summarize: true,
                    target: Some(Language::Tamil),
                },
            )
            .await;

        assert!(report.summary.is_none());
        assert!(report.summary_error.unwrap().contains("quota"));
        assert_eq!(
            analyzer.orchestrator().status(TranslationMethod::HostedLlm),
            Some(BackendStatus::PermanentlyUnavailable)
        );
        let translation = report.translation.unwrap();
        assert_eq!(translation.method, TranslationMethod::Failed);
        assert_eq!(translation.text, NO_SUMMARY_TO_TRANSLATE);

        // Later translations go straight to the template
        let later = analyzer
            .orchestrator()
            .translate("The lease", Language::Tamil)
            .await;
        assert_eq!(later.method, TranslationMethod::Template);
        assert!(later.text.contains("lease (குத்தகை)"));
    }

    #[tokio::test]
    async fn test_document_text_is_never_translated() {
        struct Hindi;

        impl LanguageIdentifier for Hindi {
            fn identify(&self, _text: &str) -> Result<String, DetectionError> {
                Ok("hin".to_string())
            }
        }

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(create_openai_response("x")))
            .expect(0)
            .mount(&server)
            .await;

        let config = create_test_config(&server.uri(), Some("k"));
        let http = reqwest::Client::new();
        let orchestrator = TranslationOrchestrator::new(
            TemplateTranslator::new(config.template_mode),
            Duration::from_secs(5),
        )
        .with_backend(Box::new(HostedLlmBackend::new(ChatClient::new(
            http.clone(),
            &config,
        ))));
        let analyzer = DocumentAnalyzer::new(
            LanguageDetector::new(Box::new(Hindi)),
            RiskScorer::default(),
            ChatClient::new(http, &config),
            config.summary_detail,
            Arc::new(orchestrator),
        );

        let report = analyzer
            .analyze(
                "यह पट्टा समझौता दोनों पक्षों के बीच किया गया है।",
                AnalysisOptions {
                    summarize: false,
                    target: Some(Language::English),
                },
            )
            .await;

        assert_eq!(report.detected_language, Language::Hindi);
        let translation = report.translation.unwrap();
        assert_eq!(translation.method, TranslationMethod::Failed);
        assert_eq!(translation.text, NO_SUMMARY_TO_TRANSLATE);
        assert_eq!(analyzer.orchestrator().metrics().requests(), 0);
    }

    #[tokio::test]
    async fn test_report_serializes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("Summarize this legal document"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(create_openai_response("The lease agreement ends")),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(body_string_contains("from English to Tamil"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&server)
            .await;

        let analyzer = create_analyzer(&create_test_config(&server.uri(), Some("k")));
        let report = analyzer
            .analyze(
                LEASE,
                AnalysisOptions {
                    summarize: true,
                    target: Some(Language::Tamil),
                },
            )
            .await;

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["translation"]["method"], "template");
        assert!(json["generated_at"].is_string());

        let text = report.render_text();
        assert!(text.starts_with("Detected language: English (en)"));
        assert!(text.contains("Summary:\nThe lease agreement ends"));
        assert!(text.contains("Translation [template]"));
        assert!(text.contains("agreement (ஒப்பந்தம்)"));
    }
}
