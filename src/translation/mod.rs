//! Multi-backend translation.
//!
//! The [`TranslationOrchestrator`] walks a priority-ordered list of
//! [`TranslationBackend`]s (specialized Indic model, hosted LLM, generic hosted
//! endpoint) and falls back to the lexicon-driven [`TemplateTranslator`].
//! Every call produces a string plus the label of the method that produced it.

mod backend;
mod generic;
mod indic;
mod llm;
mod orchestrator;
mod template;

pub use backend::{BackendFailure, BackendStatus, FailureKind, StatusCell, TranslationBackend};
pub use generic::GenericHostedBackend;
pub use indic::{IndicEngine, IndicTransClient, SpecializedIndicBackend};
pub use llm::HostedLlmBackend;
pub use orchestrator::{TranslationOrchestrator, UNAVAILABLE_MARKER};
pub use template::{TemplateMode, TemplateTranslator};

use serde::Serialize;
use std::fmt;

/// Which method produced a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TranslationMethod {
    #[serde(rename = "specialized-indic")]
    SpecializedIndic,
    #[serde(rename = "hosted-llm")]
    HostedLlm,
    #[serde(rename = "generic-hosted")]
    GenericHosted,
    #[serde(rename = "template")]
    Template,
    /// No translation was needed (same language or empty input)
    #[serde(rename = "none")]
    None,
    /// Input was rejected or every method failed
    #[serde(rename = "failed")]
    Failed,
}

impl TranslationMethod {
    /// Translating methods, in priority order.
    pub const BACKENDS: [TranslationMethod; 4] = [
        TranslationMethod::SpecializedIndic,
        TranslationMethod::HostedLlm,
        TranslationMethod::GenericHosted,
        TranslationMethod::Template,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TranslationMethod::SpecializedIndic => "specialized-indic",
            TranslationMethod::HostedLlm => "hosted-llm",
            TranslationMethod::GenericHosted => "generic-hosted",
            TranslationMethod::Template => "template",
            TranslationMethod::None => "none",
            TranslationMethod::Failed => "failed",
        }
    }
}

impl fmt::Display for TranslationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A translated text and the method that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationResult {
    pub text: String,
    pub method: TranslationMethod,
}

impl TranslationResult {
    pub fn new(text: impl Into<String>, method: TranslationMethod) -> Self {
        Self {
            text: text.into(),
            method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_labels() {
        let labels: Vec<_> = [
            TranslationMethod::SpecializedIndic,
            TranslationMethod::HostedLlm,
            TranslationMethod::GenericHosted,
            TranslationMethod::Template,
            TranslationMethod::None,
            TranslationMethod::Failed,
        ]
        .iter()
        .map(|m| m.to_string())
        .collect();
        assert_eq!(
            labels,
            vec![
                "specialized-indic",
                "hosted-llm",
                "generic-hosted",
                "template",
                "none",
                "failed"
            ]
        );
    }

    #[test]
    fn test_method_serializes_as_label() {
        for method in TranslationMethod::BACKENDS {
            let json = serde_json::to_string(&method).unwrap();
            assert_eq!(json, format!("\"{}\"", method.label()));
        }
    }

    #[test]
    fn test_result_serializes() {
        let result = TranslationResult::new("नमस्ते", TranslationMethod::HostedLlm);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["text"], "नमस्ते");
        assert_eq!(json["method"], "hosted-llm");
    }
}
