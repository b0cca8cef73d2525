//! Language type: the closed set of languages the assistant understands.
//!
//! `Language` is a plain `Copy` enum; all metadata (codes, names, family) lives
//! in the registry and is reached through [`Language::config`].

use crate::i18n::{LanguageConfig, LanguageFamily, LanguageRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Hindi,
    Tamil,
    Bengali,
    Marathi,
    Telugu,
    Gujarati,
    Kannada,
    Malayalam,
    Punjabi,
    Urdu,
    Odia,
}

/// Error returned when a name or code does not identify a supported language.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported language: '{input}'. Supported languages are: {supported}")]
pub struct LanguageError {
    pub input: String,
    pub supported: String,
}

impl Language {
    /// Every supported language, in registry order.
    pub const ALL: [Language; 12] = [
        Language::English,
        Language::Hindi,
        Language::Tamil,
        Language::Bengali,
        Language::Marathi,
        Language::Telugu,
        Language::Gujarati,
        Language::Kannada,
        Language::Malayalam,
        Language::Punjabi,
        Language::Urdu,
        Language::Odia,
    ];

    /// Get the canonical (source) language.
    ///
    /// This is the language summaries are generated in, and from which all
    /// translations are derived.
    pub fn canonical() -> Language {
        LanguageRegistry::get().canonical().language
    }

    /// Look up a language by its two-letter code (e.g., "ta").
    pub fn from_code(code: &str) -> Result<Language, LanguageError> {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|config| config.language)
            .ok_or_else(|| unsupported(code))
    }

    /// Look up a language by its canonical name (e.g., "tamil").
    pub fn from_name(name: &str) -> Result<Language, LanguageError> {
        LanguageRegistry::get()
            .get_by_name(name)
            .map(|config| config.language)
            .ok_or_else(|| unsupported(name))
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language is missing from the registry. The default table
    /// covers every variant, which the registry tests assert.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .config_for(*self)
            .expect("Every language variant should have a registry entry")
    }

    /// ISO 639-1 code (e.g., "hi").
    pub fn code(&self) -> &'static str {
        self.config().code
    }

    /// Canonical lowercase name (e.g., "hindi").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// English display name (e.g., "Hindi").
    pub fn display_name(&self) -> &'static str {
        self.config().display_name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn family(&self) -> LanguageFamily {
        self.config().family
    }

    pub fn is_indic(&self) -> bool {
        self.family() == LanguageFamily::Indic
    }

    /// Check if this is the canonical language.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }

    /// Whether `c` belongs to this language's primary script block.
    pub fn uses_script_char(&self, c: char) -> bool {
        let (start, end) = self.config().script;
        (start..=end).contains(&c)
    }
}

fn unsupported(input: &str) -> LanguageError {
    LanguageError {
        input: input.to_string(),
        supported: LanguageRegistry::get().supported_names(),
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    /// Accepts either a canonical name ("tamil") or a code ("ta"), any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_name(s).or_else(|_| Language::from_code(s))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
