//! Language registry: Single source of truth for all supported languages.
//!
//! This module provides a centralized registry of every language the assistant
//! can detect or translate into. It uses a singleton pattern with `OnceLock` to
//! ensure thread-safe initialization and read-only access afterwards.

use crate::i18n::Language;
use std::sync::OnceLock;

/// Routing family of a language.
///
/// Only `Indic` languages are eligible for the specialized Indic backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageFamily {
    English,
    Indic,
}

/// Configuration for a supported language.
///
/// Contains all metadata for a specific language: its identifiers in the
/// different coding schemes used by the backends, its names, and its family.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// The language this entry describes
    pub language: Language,

    /// Canonical lowercase name (e.g., "hindi"); the user-facing identifier
    pub name: &'static str,

    /// English display name (e.g., "Hindi")
    pub display_name: &'static str,

    /// Native name of the language (e.g., "हिन्दी")
    pub native_name: &'static str,

    /// Two-letter ISO 639-1 code (e.g., "hi")
    pub code: &'static str,

    /// Three-letter ISO 639-3 code, as reported by the statistical detector
    pub iso639_3: &'static str,

    /// FLORES-200 code used by IndicTrans2 (e.g., "hin_Deva")
    pub flores_code: &'static str,

    /// Routing family
    pub family: LanguageFamily,

    /// First and last code point of the primary script's Unicode block
    pub script: (char, char),

    /// Whether this is the canonical/source language (only one should be true)
    pub is_canonical: bool,
}

/// Global language registry singleton.
///
/// Initialized once on first access and immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get the configuration of a language.
    ///
    /// Every `Language` variant has exactly one entry, so this never fails for
    /// the default table.
    pub fn config_for(&self, language: Language) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.language == language)
    }

    /// Get a language configuration by its two-letter code (case-insensitive).
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages
            .iter()
            .find(|lang| lang.code.eq_ignore_ascii_case(code.trim()))
    }

    /// Get a language configuration by its canonical name (case-insensitive).
    pub fn get_by_name(&self, name: &str) -> Option<&LanguageConfig> {
        self.languages
            .iter()
            .find(|lang| lang.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Get a language configuration by its ISO 639-3 code.
    pub fn get_by_iso639_3(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages
            .iter()
            .find(|lang| lang.iso639_3.eq_ignore_ascii_case(code.trim()))
    }

    /// Get all languages, in declaration order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get all languages of the given family.
    pub fn list_family(&self, family: LanguageFamily) -> Vec<&LanguageConfig> {
        self.languages
            .iter()
            .filter(|lang| lang.family == family)
            .collect()
    }

    /// Get the canonical language configuration.
    ///
    /// # Panics
    /// Panics if no canonical language is found or if multiple canonical
    /// languages are defined (this indicates a configuration error).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }

    /// Comma-separated list of canonical names, for user-facing messages.
    pub fn supported_names(&self) -> String {
        self.languages
            .iter()
            .map(|lang| lang.name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[allow(clippy::too_many_arguments)]
fn indic(
    language: Language,
    name: &'static str,
    display_name: &'static str,
    native_name: &'static str,
    code: &'static str,
    iso639_3: &'static str,
    flores_code: &'static str,
    script: (char, char),
) -> LanguageConfig {
    LanguageConfig {
        language,
        name,
        display_name,
        native_name,
        code,
        iso639_3,
        flores_code,
        family: LanguageFamily::Indic,
        script,
        is_canonical: false,
    }
}

const DEVANAGARI: (char, char) = ('\u{0900}', '\u{097F}');

/// Default language configurations: English (canonical) plus eleven Indian languages.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            language: Language::English,
            name: "english",
            display_name: "English",
            native_name: "English",
            code: "en",
            iso639_3: "eng",
            flores_code: "eng_Latn",
            family: LanguageFamily::English,
            script: ('\u{0041}', '\u{007A}'),
            is_canonical: true,
        },
        indic(Language::Hindi, "hindi", "Hindi", "हिन्दी", "hi", "hin", "hin_Deva", DEVANAGARI),
        indic(
            Language::Tamil,
            "tamil",
            "Tamil",
            "தமிழ்",
            "ta",
            "tam",
            "tam_Taml",
            ('\u{0B80}', '\u{0BFF}'),
        ),
        indic(
            Language::Bengali,
            "bengali",
            "Bengali",
            "বাংলা",
            "bn",
            "ben",
            "ben_Beng",
            ('\u{0980}', '\u{09FF}'),
        ),
        indic(Language::Marathi, "marathi", "Marathi", "मराठी", "mr", "mar", "mar_Deva", DEVANAGARI),
        indic(
            Language::Telugu,
            "telugu",
            "Telugu",
            "తెలుగు",
            "te",
            "tel",
            "tel_Telu",
            ('\u{0C00}', '\u{0C7F}'),
        ),
        indic(
            Language::Gujarati,
            "gujarati",
            "Gujarati",
            "ગુજરાતી",
            "gu",
            "guj",
            "guj_Gujr",
            ('\u{0A80}', '\u{0AFF}'),
        ),
        indic(
            Language::Kannada,
            "kannada",
            "Kannada",
            "ಕನ್ನಡ",
            "kn",
            "kan",
            "kan_Knda",
            ('\u{0C80}', '\u{0CFF}'),
        ),
        indic(
            Language::Malayalam,
            "malayalam",
            "Malayalam",
            "മലയാളം",
            "ml",
            "mal",
            "mal_Mlym",
            ('\u{0D00}', '\u{0D7F}'),
        ),
        indic(
            Language::Punjabi,
            "punjabi",
            "Punjabi",
            "ਪੰਜਾਬੀ",
            "pa",
            "pan",
            "pan_Guru",
            ('\u{0A00}', '\u{0A7F}'),
        ),
        indic(
            Language::Urdu,
            "urdu",
            "Urdu",
            "اردو",
            "ur",
            "urd",
            "urd_Arab",
            ('\u{0600}', '\u{06FF}'),
        ),
        indic(
            Language::Odia,
            "odia",
            "Odia",
            "ଓଡ଼ିଆ",
            "or",
            "ori",
            "ory_Orya",
            ('\u{0B00}', '\u{0B7F}'),
        ),
    ]
}
