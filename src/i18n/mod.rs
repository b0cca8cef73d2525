//! Internationalization (i18n) module for multi-language support.
//!
//! Everything language-related lives here: the closed set of supported
//! languages, the legal lexicons used by the template translator, and the
//! quality checks and counters applied to translations.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe `Language` enum backed by the registry
//! - `lexicon`: Per-language legal terminology and document frame strings
//! - `validator`: Translation quality validation
//! - `metrics`: Per-backend translation counters
//!
//! # Example
//!
//! ```rust,ignore
//! use nyaya_assist::i18n::{Language, LexiconStore};
//!
//! let tamil: Language = "ta".parse()?;
//! let lexicon = LexiconStore::get().lexicon(tamil);
//! ```

mod language;
mod lexicon;
mod lexicon_data;
mod metrics;
mod registry;
mod validator;

pub use language::{Language, LanguageError};
pub use lexicon::{Lexicon, LexiconCoverage, LexiconStore, TemplateFrame};
pub use metrics::{BackendReport, MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageFamily, LanguageRegistry};
pub use validator::{TranslationValidator, ValidationReport};
