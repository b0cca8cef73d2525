//! Translation quality validation module.
//!
//! Every backend result passes through here before the orchestrator accepts
//! it. Errors reject the result (the orchestrator moves on to the next
//! backend); warnings are only logged.

use crate::i18n::Language;
use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make the translation unusable
    pub errors: Vec<String>,

    /// Non-critical warnings about potential issues
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation quality.
pub struct TranslationValidator;

static URL_REGEX: OnceLock<Regex> = OnceLock::new();
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate a translation of `original` into `target`.
    ///
    /// Errors:
    /// - the translation is empty or whitespace
    /// - the translation is the untouched source text (non-English target)
    ///
    /// Warnings:
    /// - URLs or e-mail addresses were not carried over
    /// - numeric figures (amounts, dates, clause numbers) went missing
    /// - an Indic target contains no characters of its script
    pub fn validate(original: &str, translated: &str, target: Language) -> ValidationReport {
        let mut report = ValidationReport::new();

        if translated.trim().is_empty() {
            report.errors.push("Translation is empty".to_string());
            return report;
        }

        if target != Language::English && translated.trim() == original.trim() {
            report.errors.push(format!(
                "Translation into {} is identical to the source text",
                target.display_name()
            ));
        }

        let missing_urls = Self::missing(Self::extract_urls(original), translated);
        if !missing_urls.is_empty() {
            report.warnings.push(format!(
                "URL mismatch: {} URLs not preserved: {:?}",
                missing_urls.len(),
                missing_urls
            ));
        }

        let missing_emails = Self::missing(Self::extract_emails(original), translated);
        if !missing_emails.is_empty() {
            report.warnings.push(format!(
                "E-mail mismatch: {:?} not preserved",
                missing_emails
            ));
        }

        let missing_numbers = Self::missing(Self::extract_numbers(original), translated);
        if !missing_numbers.is_empty() {
            report.warnings.push(format!(
                "Number mismatch: {:?} missing from translation",
                missing_numbers
            ));
        }

        if target.is_indic() && !translated.chars().any(|c| target.uses_script_char(c)) {
            report.warnings.push(format!(
                "Script mismatch: no {} script characters in translation",
                target.display_name()
            ));
        }

        report
    }

    fn missing(items: Vec<String>, translated: &str) -> Vec<String> {
        items
            .into_iter()
            .filter(|item| !translated.contains(item.as_str()))
            .collect()
    }

    /// Extract all URLs from text
    fn extract_urls(text: &str) -> Vec<String> {
        let regex = URL_REGEX.get_or_init(|| Regex::new(r"https?://[^\s)\]]+").unwrap());

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Extract all e-mail addresses from text
    fn extract_emails(text: &str) -> Vec<String> {
        let regex = EMAIL_REGEX
            .get_or_init(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Extract numeric figures (1,00,000 / 12.5 / 2024) from text
    fn extract_numbers(text: &str) -> Vec<String> {
        let regex =
            NUMBER_REGEX.get_or_init(|| Regex::new(r"\b\d+(?:[.,]\d+)*\b").unwrap());

        let mut numbers: Vec<String> = regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        numbers.dedup();
        numbers
    }
}
