//! Language detection with a default-to-English policy.
//!
//! Short or ambiguous samples, identifier failures and languages outside the
//! registry all resolve to English. Detection only labels the document; it
//! never drives translation routing.

use crate::i18n::{Language, LanguageRegistry};
use thiserror::Error;
use tracing::debug;
use whatlang::Detector;

/// Samples shorter than this (in characters) are not classified.
pub const MIN_DETECTION_CHARS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectionError {
    #[error("Language could not be identified")]
    Ambiguous,

    #[error("Language identifier failed: {0}")]
    Failed(String),
}

/// A statistical language-identification function.
pub trait LanguageIdentifier: Send + Sync {
    /// Identify the language of `text`, as an ISO 639-3 code.
    fn identify(&self, text: &str) -> Result<String, DetectionError>;
}

/// Trigram identifier backed by `whatlang`.
pub struct WhatlangIdentifier {
    detector: Detector,
}

impl WhatlangIdentifier {
    pub fn new() -> Self {
        Self {
            detector: Detector::new(),
        }
    }
}

impl Default for WhatlangIdentifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageIdentifier for WhatlangIdentifier {
    fn identify(&self, text: &str) -> Result<String, DetectionError> {
        let info = self.detector.detect(text).ok_or(DetectionError::Ambiguous)?;
        Ok(info.lang().code().to_string())
    }
}

/// Maps identifier output onto the supported language set.
pub struct LanguageDetector {
    identifier: Box<dyn LanguageIdentifier>,
}

impl LanguageDetector {
    pub fn new(identifier: Box<dyn LanguageIdentifier>) -> Self {
        Self { identifier }
    }

    /// Detect the language of `text`. Never fails: falls back to English.
    pub fn detect(&self, text: &str) -> Language {
        if text.chars().count() < MIN_DETECTION_CHARS {
            debug!("Sample too short for detection, defaulting to English");
            return Language::English;
        }

        match self.identifier.identify(text) {
            Ok(code) => match LanguageRegistry::get().get_by_iso639_3(&code) {
                Some(config) => config.language,
                None => {
                    debug!(code = %code, "Detected unsupported language, defaulting to English");
                    Language::English
                }
            },
            Err(e) => {
                debug!(error = %e, "Detection failed, defaulting to English");
                Language::English
            }
        }
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new(Box::new(WhatlangIdentifier::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FixedIdentifier {
        result: Result<String, DetectionError>,
        calls: Arc<AtomicUsize>,
    }

    impl LanguageIdentifier for FixedIdentifier {
        fn identify(&self, _text: &str) -> Result<String, DetectionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn detector(result: Result<String, DetectionError>) -> (LanguageDetector, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let identifier = FixedIdentifier {
            result,
            calls: calls.clone(),
        };
        (LanguageDetector::new(Box::new(identifier)), calls)
    }

    const LONG_SAMPLE: &str = "a sample that is comfortably longer than the threshold";

    #[test]
    fn test_short_text_defaults_without_calling_identifier() {
        let (detector, calls) = detector(Ok("tam".to_string()));
        assert_eq!(detector.detect(""), Language::English);
        assert_eq!(detector.detect("short text"), Language::English);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_threshold_counts_characters_not_bytes() {
        // 19 Tamil characters take more than 20 bytes
        let (detector, calls) = detector(Ok("tam".to_string()));
        let text: String = "த".repeat(19);
        assert_eq!(detector.detect(&text), Language::English);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let text: String = "த".repeat(20);
        assert_eq!(detector.detect(&text), Language::Tamil);
    }

    #[test]
    fn test_supported_code_is_mapped() {
        let (detector, _) = detector(Ok("hin".to_string()));
        assert_eq!(detector.detect(LONG_SAMPLE), Language::Hindi);
    }

    #[test]
    fn test_unsupported_code_defaults_to_english() {
        let (detector, _) = detector(Ok("fra".to_string()));
        assert_eq!(detector.detect(LONG_SAMPLE), Language::English);
    }

    #[test]
    fn test_identifier_error_defaults_to_english() {
        let (detector, _) = detector(Err(DetectionError::Ambiguous));
        assert_eq!(detector.detect(LONG_SAMPLE), Language::English);
    }

    #[test]
    fn test_whatlang_detects_english() {
        let detector = LanguageDetector::default();
        let text = "This agreement is entered into by and between the parties named below.";
        assert_eq!(detector.detect(text), Language::English);
    }

    #[test]
    fn test_whatlang_detects_tamil() {
        let detector = LanguageDetector::default();
        let text = "இந்த ஒப்பந்தம் இரு தரப்பினருக்கும் இடையே கையெழுத்திடப்பட்டது மற்றும் உடனடியாக நடைமுறைக்கு வருகிறது";
        assert_eq!(detector.detect(text), Language::Tamil);
    }
}
