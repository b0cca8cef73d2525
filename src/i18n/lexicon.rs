//! Lexicon store: per-language legal terminology used by the template translator.
//!
//! Lexicons are static tables, gathered into a process-wide map on first
//! access and never mutated afterwards.

use crate::i18n::lexicon_data;
use crate::i18n::Language;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

/// How much of the legal vocabulary a lexicon covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexiconCoverage {
    /// Comprehensive term and header tables; complete replacement is attempted.
    Full,
    /// Small generic term set; output is always annotated.
    Generic,
}

/// Localized legal vocabulary for one target language.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub language: Language,
    pub coverage: LexiconCoverage,

    /// "Legal Document Summary" equivalent
    pub header: &'static str,

    /// "The summary of this legal document is as follows:" equivalent
    pub intro: &'static str,

    /// Disclaimer that the output is not a full translation
    pub footnote: &'static str,

    /// English section header -> localized header
    pub section_headers: &'static [(&'static str, &'static str)],

    /// English legal term (lowercase) -> localized term
    pub terms: &'static [(&'static str, &'static str)],
}

impl Lexicon {
    /// Localized equivalent of an English term (case-insensitive).
    pub fn term(&self, english: &str) -> Option<&'static str> {
        self.terms
            .iter()
            .find(|(source, _)| source.eq_ignore_ascii_case(english))
            .map(|(_, target)| *target)
    }

    /// Localized equivalent of an English section header (case-insensitive).
    pub fn section_header(&self, english: &str) -> Option<&'static str> {
        self.section_headers
            .iter()
            .find(|(source, _)| source.eq_ignore_ascii_case(english))
            .map(|(_, target)| *target)
    }
}

/// Header, intro and footnote wrapped around a template translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFrame {
    pub header: Cow<'static, str>,
    pub intro: Cow<'static, str>,
    pub footnote: Cow<'static, str>,
}

/// Global lexicon store singleton.
pub struct LexiconStore {
    lexicons: HashMap<Language, Lexicon>,
}

static STORE: OnceLock<LexiconStore> = OnceLock::new();

impl LexiconStore {
    /// Get the global lexicon store, building it on first call.
    pub fn get() -> &'static LexiconStore {
        STORE.get_or_init(|| LexiconStore {
            lexicons: lexicon_data::all_lexicons()
                .into_iter()
                .map(|lexicon| (lexicon.language, lexicon))
                .collect(),
        })
    }

    /// The lexicon for a language, if one exists (English has none).
    pub fn lexicon(&self, language: Language) -> Option<&Lexicon> {
        self.lexicons.get(&language)
    }

    /// Languages that have a lexicon.
    pub fn languages(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|language| self.lexicons.contains_key(language))
            .collect()
    }

    /// The header/intro/footnote triple for a language.
    ///
    /// Languages without a lexicon get an English frame naming the language.
    pub fn frame(&self, language: Language) -> TemplateFrame {
        match self.lexicon(language) {
            Some(lexicon) => TemplateFrame {
                header: Cow::Borrowed(lexicon.header),
                intro: Cow::Borrowed(lexicon.intro),
                footnote: Cow::Borrowed(lexicon.footnote),
            },
            None => TemplateFrame {
                header: Cow::Owned(format!(
                    "Legal Document Summary ({})",
                    language.display_name()
                )),
                intro: Cow::Owned(format!(
                    "The summary of this legal document is as follows ({}):",
                    language.display_name()
                )),
                footnote: Cow::Borrowed(
                    "Note: This is not a complete translation, provided with the original English text.",
                ),
            },
        }
    }
}
