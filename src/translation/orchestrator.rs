//! Priority-ordered backend resolution with template fallback.

use crate::config::Config;
use crate::i18n::{Language, TranslationMetrics, TranslationValidator};
use crate::openai::ChatClient;
use crate::translation::{
    BackendFailure, BackendStatus, GenericHostedBackend, HostedLlmBackend, IndicTransClient,
    SpecializedIndicBackend, StatusCell, TemplateTranslator, TranslationBackend,
    TranslationMethod, TranslationResult,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Appended to the original text when no method could translate it.
pub const UNAVAILABLE_MARKER: &str = "[Translation unavailable]";

struct BackendSlot {
    backend: Box<dyn TranslationBackend>,
    status: StatusCell,
}

/// Tries each backend in order and returns the first accepted translation.
///
/// Never fails: the template translator answers when every backend is
/// skipped or soft-fails. Shared across tasks behind an `Arc`.
pub struct TranslationOrchestrator {
    slots: Vec<BackendSlot>,
    template: TemplateTranslator,
    timeout: Duration,
    metrics: Arc<TranslationMetrics>,
}

impl TranslationOrchestrator {
    /// An orchestrator with no networked backends (template only).
    pub fn new(template: TemplateTranslator, timeout: Duration) -> Self {
        Self {
            slots: Vec::new(),
            template,
            timeout,
            metrics: Arc::new(TranslationMetrics::new()),
        }
    }

    /// Append a backend at the lowest priority so far.
    pub fn with_backend(mut self, backend: Box<dyn TranslationBackend>) -> Self {
        self.slots.push(BackendSlot {
            backend,
            status: StatusCell::new(),
        });
        self
    }

    /// Build the standard chain from configuration:
    /// specialized-indic (if `INDICTRANS_URL` is set), hosted-llm, generic-hosted.
    pub async fn from_config(config: &Config, http: reqwest::Client) -> Self {
        let mut orchestrator = Self::new(
            TemplateTranslator::new(config.template_mode),
            config.backend_timeout(),
        );

        if let Some(url) = &config.indictrans_url {
            let client =
                IndicTransClient::connect(http.clone(), url, config.backend_timeout()).await;
            orchestrator =
                orchestrator.with_backend(Box::new(SpecializedIndicBackend::new(Box::new(client))));
        } else {
            debug!("INDICTRANS_URL not set, specialized Indic backend disabled");
        }

        let chat = ChatClient::new(http.clone(), config);
        if !chat.is_configured() {
            info!("OPENAI_API_KEY not set, hosted LLM backend unavailable");
        }

        orchestrator
            .with_backend(Box::new(HostedLlmBackend::new(chat)))
            .with_backend(Box::new(GenericHostedBackend::new(
                http,
                config.generic_translate_url.clone(),
            )))
    }

    pub fn metrics(&self) -> &TranslationMetrics {
        &self.metrics
    }

    /// Current status of the backend reporting `method`, if it is in the chain.
    pub fn status(&self, method: TranslationMethod) -> Option<BackendStatus> {
        self.slot(method).map(|slot| slot.status.load())
    }

    /// Latch a backend off for the rest of the process.
    ///
    /// Used when another component (e.g. summarisation) sees a definitive
    /// failure of the same service.
    pub fn mark_permanently_unavailable(&self, method: TranslationMethod) {
        if let Some(slot) = self.slot(method) {
            if slot.status.mark_permanent() {
                error!(backend = %method, "Backend marked permanently unavailable");
            }
        }
    }

    fn slot(&self, method: TranslationMethod) -> Option<&BackendSlot> {
        self.slots
            .iter()
            .find(|slot| slot.backend.method() == method)
    }

    /// Translate English `text` into `target`.
    pub async fn translate(&self, text: &str, target: Language) -> TranslationResult {
        self.translate_from(text, Language::canonical(), target).await
    }

    /// Translate into a target given by name or code.
    ///
    /// An unknown target yields an explanatory message embedding `text`.
    pub async fn translate_by_name(&self, text: &str, target: &str) -> TranslationResult {
        match target.parse::<Language>() {
            Ok(language) => self.translate(text, language).await,
            Err(e) => {
                warn!(target = %target, "Translation requested for unsupported language");
                TranslationResult::new(format!("{}\n\n{}", e, text), TranslationMethod::Failed)
            }
        }
    }

    /// Translate `text` from `source` into `target`.
    pub async fn translate_from(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> TranslationResult {
        self.metrics.record_request();

        if text.trim().is_empty() {
            return TranslationResult::new(text, TranslationMethod::None);
        }
        if source == target {
            debug!(language = %target, "Source equals target, skipping translation");
            return TranslationResult::new(text, TranslationMethod::None);
        }

        for slot in &self.slots {
            let method = slot.backend.method();

            if slot.status.is_permanently_unavailable() {
                debug!(backend = %method, "Skipping latched backend");
                self.metrics.record_skip(method);
                continue;
            }
            if !slot.backend.is_available() {
                debug!(backend = %method, "Skipping unavailable backend");
                self.metrics.record_skip(method);
                continue;
            }
            if !slot.backend.supports(source, target) {
                debug!(backend = %method, %source, %target, "Backend does not support pair");
                self.metrics.record_skip(method);
                continue;
            }

            self.metrics.record_attempt(method);
            match self.attempt(slot, text, source, target).await {
                Ok(translated) => {
                    slot.status.mark_ready();
                    self.metrics.record_success(method);
                    info!(backend = %method, %target, "Translation succeeded");
                    return TranslationResult::new(translated, method);
                }
                Err(failure) if failure.is_permanent() => {
                    if slot.status.mark_permanent() {
                        error!(backend = %method, reason = %failure.message, "Backend permanently unavailable");
                    }
                    self.metrics.record_permanent_failure(method);
                }
                Err(failure) => {
                    slot.status.mark_transient_failure();
                    self.metrics.record_soft_failure(method);
                    warn!(backend = %method, reason = %failure.message, "Backend failed, trying next");
                }
            }
        }

        self.metrics.record_attempt(TranslationMethod::Template);
        let templated = self.template.translate(text, target);
        if !templated.trim().is_empty() {
            self.metrics.record_success(TranslationMethod::Template);
            self.metrics.record_template_fallback();
            info!(%target, "Using template translation");
            return TranslationResult::new(templated, TranslationMethod::Template);
        }

        self.metrics.record_soft_failure(TranslationMethod::Template);
        self.metrics.record_exhausted();
        error!(%target, "Every translation method failed");
        TranslationResult::new(
            format!("{}\n\n{}", text, UNAVAILABLE_MARKER),
            TranslationMethod::Failed,
        )
    }

    /// One bounded attempt plus result validation.
    async fn attempt(
        &self,
        slot: &BackendSlot,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, BackendFailure> {
        let method = slot.backend.method();
        let translated =
            match tokio::time::timeout(self.timeout, slot.backend.attempt(text, source, target))
                .await
            {
                Ok(result) => result?,
                Err(_) => {
                    return Err(BackendFailure::soft(
                        method,
                        format!("timed out after {:?}", self.timeout),
                    ))
                }
            };

        let validation = TranslationValidator::validate(text, &translated, target);
        if validation.has_warnings() {
            warn!(
                backend = %method,
                "Translation validation warnings for {} ({}): {:?}",
                target.name(),
                target.code(),
                validation.warnings
            );
        }
        if validation.has_errors() {
            return Err(BackendFailure::soft(
                method,
                format!("rejected: {}", validation.errors.join("; ")),
            ));
        }

        Ok(translated)
    }
}
