//! Lexicon-driven template translation. No network, never fails.
//!
//! Section headers standing alone on a line are swapped for their localized
//! equivalent, and legal terms are replaced (complete mode) or annotated with
//! their translation (annotated mode). The body is wrapped in the target
//! language's header, intro and disclaimer.

use crate::i18n::{Language, Lexicon, LexiconCoverage, LexiconStore, TemplateFrame};
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

const DIVIDER: &str = "----";

/// How matched terms are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateMode {
    /// `Agreement (ஒப்பந்தம்)`
    Annotated,
    /// `ஒப்பந்தம்`
    Complete,
}

impl FromStr for TemplateMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "annotated" => Ok(TemplateMode::Annotated),
            "complete" => Ok(TemplateMode::Complete),
            other => anyhow::bail!("expected 'annotated' or 'complete', got '{}'", other),
        }
    }
}

struct CompiledLexicon {
    /// Matches a whole line holding one section header
    headers: Regex,
    /// Longest-first alternation of every term, whole words only
    terms: Regex,
}

static COMPILED: OnceLock<HashMap<Language, Result<CompiledLexicon, regex::Error>>> =
    OnceLock::new();

fn alternation<'a>(keys: impl Iterator<Item = &'a str>) -> String {
    let mut keys: Vec<&str> = keys.collect();
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    keys.iter()
        .map(|key| regex::escape(key))
        .collect::<Vec<_>>()
        .join("|")
}

fn compile(lexicon: &Lexicon) -> Result<CompiledLexicon, regex::Error> {
    let headers = Regex::new(&format!(
        r"(?i)^\s*(?:(?P<num>\d+\.)\s*)?(?P<hdr>{})\s*[:.]?\s*$",
        alternation(lexicon.section_headers.iter().map(|(source, _)| *source))
    ))?;
    let terms = Regex::new(&format!(
        r"(?i)\b(?:{})\b",
        alternation(lexicon.terms.iter().map(|(source, _)| *source))
    ))?;
    Ok(CompiledLexicon { headers, terms })
}

fn compiled(language: Language) -> Result<&'static CompiledLexicon, String> {
    let all = COMPILED.get_or_init(|| {
        let store = LexiconStore::get();
        store
            .languages()
            .into_iter()
            .filter_map(|language| {
                store
                    .lexicon(language)
                    .map(|lexicon| (language, compile(lexicon)))
            })
            .collect()
    });
    match all.get(&language) {
        Some(Ok(compiled)) => Ok(compiled),
        Some(Err(e)) => Err(e.to_string()),
        None => Err(format!("no compiled lexicon for {}", language)),
    }
}

/// Deterministic dictionary-based translator.
#[derive(Debug, Clone, Copy)]
pub struct TemplateTranslator {
    mode: TemplateMode,
}

impl TemplateTranslator {
    pub fn new(mode: TemplateMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> TemplateMode {
        self.mode
    }

    /// The mode actually used for `target`: generic lexicons are always annotated.
    pub fn effective_mode(&self, target: Language) -> TemplateMode {
        match LexiconStore::get().lexicon(target) {
            Some(lexicon) if lexicon.coverage == LexiconCoverage::Full => self.mode,
            _ => TemplateMode::Annotated,
        }
    }

    /// Translate `text` into `target`. Non-empty input gives non-empty output.
    pub fn translate(&self, text: &str, target: Language) -> String {
        let store = LexiconStore::get();
        let frame = store.frame(target);

        let Some(lexicon) = store.lexicon(target) else {
            return wrap(&frame, text);
        };

        let compiled = match compiled(target) {
            Ok(compiled) => compiled,
            Err(e) => {
                warn!(language = %target, error = %e, "Template lexicon unusable, returning framed original");
                return frame_only(&frame, text);
            }
        };

        let mode = self.effective_mode(target);
        let mut body = render(text, lexicon, compiled, mode);
        if mode == TemplateMode::Complete && is_malformed(&body, text) {
            debug!(language = %target, "Complete template output malformed, using annotated mode");
            body = render(text, lexicon, compiled, TemplateMode::Annotated);
        }

        wrap(&frame, &body)
    }
}

impl Default for TemplateTranslator {
    fn default() -> Self {
        Self::new(TemplateMode::Annotated)
    }
}

fn render(text: &str, lexicon: &Lexicon, compiled: &CompiledLexicon, mode: TemplateMode) -> String {
    text.split('\n')
        .map(|line| match compiled.headers.captures(line) {
            Some(caps) => render_header(&caps, lexicon, mode),
            None => compiled
                .terms
                .replace_all(line, |caps: &Captures| {
                    let matched = &caps[0];
                    match (lexicon.term(matched), mode) {
                        (Some(term), TemplateMode::Complete) => term.to_string(),
                        (Some(term), TemplateMode::Annotated) => format!("{} ({})", matched, term),
                        (None, _) => matched.to_string(),
                    }
                })
                .into_owned(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_header(caps: &Captures, lexicon: &Lexicon, mode: TemplateMode) -> String {
    let english = &caps["hdr"];
    let localized = lexicon.section_header(english).unwrap_or(english);
    let label = match mode {
        TemplateMode::Complete => localized.to_string(),
        TemplateMode::Annotated => format!("{} ({})", english, localized),
    };
    match caps.name("num") {
        Some(num) => format!("{} {}:", num.as_str(), label),
        None => format!("{}:", label),
    }
}

/// Complete-mode output is malformed when it lost all content, or gained
/// replacement characters or unbalanced parentheses the original did not
/// have. Only lexicon data can introduce these.
fn is_malformed(body: &str, original: &str) -> bool {
    const REPLACEMENT: char = '\u{FFFD}';

    let lost_content = body.trim().is_empty() && !original.trim().is_empty();
    let gained_replacement = body.contains(REPLACEMENT) && !original.contains(REPLACEMENT);
    let gained_imbalance = paren_balance(body) != paren_balance(original);
    lost_content || gained_replacement || gained_imbalance
}

fn paren_balance(text: &str) -> i64 {
    text.chars().fold(0, |balance, c| match c {
        '(' => balance + 1,
        ')' => balance - 1,
        _ => balance,
    })
}

fn wrap(frame: &TemplateFrame, body: &str) -> String {
    format!(
        "{}\n\n{}\n\n{}\n\n{}\n\n{}\n\n{}",
        frame.header, frame.intro, DIVIDER, body, DIVIDER, frame.footnote
    )
}

/// Last-resort output: header, untouched text, disclaimer.
fn frame_only(frame: &TemplateFrame, text: &str) -> String {
    format!("{}\n\n{}\n\n{}", frame.header, text, frame.footnote)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAMIL_NOTE: &str = "குறிப்பு: இது முழுமையான மொழிபெயர்ப்பு அல்ல, மேலும் முக்கிய சட்ட சொற்களுக்கான பொருள் மட்டுமே வழங்கப்படுகிறது.";

    fn body(output: &str) -> &str {
        output.split("\n\n----\n\n").nth(1).unwrap()
    }

    // ==================== Framing Tests ====================

    #[test]
    fn test_tamil_agreement_annotated() {
        let output = TemplateTranslator::default().translate("Agreement", Language::Tamil);

        assert!(output.contains("Agreement"));
        assert!(output.contains("ஒப்பந்தம்"));
        assert!(output.contains(TAMIL_NOTE));
        assert_eq!(body(&output), "Agreement (ஒப்பந்தம்)");
    }

    #[test]
    fn test_output_structure() {
        let output = TemplateTranslator::default().translate("Agreement", Language::Hindi);
        let parts: Vec<_> = output.split("\n\n----\n\n").collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(
            parts[0],
            "कानूनी दस्तावेज़ सारांश\n\nइस कानूनी दस्तावेज़ का सारांश निम्नलिखित है:"
        );
        assert_eq!(parts[1], "Agreement (समझौता)");
        assert!(parts[2].starts_with("नोट:"));
    }

    #[test]
    fn test_english_target_uses_default_frame() {
        let output = TemplateTranslator::default().translate("The agreement", Language::English);
        assert!(output.starts_with("Legal Document Summary (English)"));
        assert_eq!(body(&output), "The agreement");
    }

    #[test]
    fn test_frame_only_fallback() {
        let frame = LexiconStore::get().frame(Language::Tamil);
        let output = frame_only(&frame, "Original text");
        assert_eq!(
            output,
            format!("சட்ட ஆவண சுருக்கம்\n\nOriginal text\n\n{}", TAMIL_NOTE)
        );
    }

    // ==================== Term Tests ====================

    #[test]
    fn test_complete_mode_replaces_terms() {
        let translator = TemplateTranslator::new(TemplateMode::Complete);
        let output = translator.translate("The Agreement binds the parties", Language::Tamil);
        let body = body(&output);

        assert_eq!(body, "The ஒப்பந்தம் binds the கட்சிகள்");
    }

    #[test]
    fn test_longest_term_wins() {
        let output =
            TemplateTranslator::default().translate("The Supreme Court ruled", Language::Tamil);
        assert_eq!(body(&output), "The Supreme Court (உச்ச நீதிமன்றம்) ruled");
    }

    #[test]
    fn test_whole_words_only() {
        let output = TemplateTranslator::default().translate("The contractor", Language::Tamil);
        assert_eq!(body(&output), "The contractor");
    }

    #[test]
    fn test_annotation_preserves_case() {
        let output = TemplateTranslator::default().translate("AGREEMENT", Language::Tamil);
        assert_eq!(body(&output), "AGREEMENT (ஒப்பந்தம்)");
    }

    #[test]
    fn test_generic_lexicon_always_annotated() {
        let translator = TemplateTranslator::new(TemplateMode::Complete);
        assert_eq!(translator.effective_mode(Language::Bengali), TemplateMode::Annotated);
        assert_eq!(translator.effective_mode(Language::Tamil), TemplateMode::Complete);

        let output = translator.translate("Agreement", Language::Bengali);
        assert_eq!(body(&output), "Agreement (চুক্তি)");
    }

    // ==================== Header Tests ====================

    #[test]
    fn test_numbered_header_complete() {
        let translator = TemplateTranslator::new(TemplateMode::Complete);
        let output = translator.translate("1. Overview:\nA lease.", Language::Tamil);
        assert_eq!(body(&output), "1. கண்ணோட்டம்:\nA குத்தகை.");
    }

    #[test]
    fn test_header_annotated() {
        let output =
            TemplateTranslator::default().translate("Governing Law\nIndian law applies", Language::Hindi);
        assert_eq!(
            body(&output),
            "Governing Law (शासी कानून):\nIndian law (कानून) applies"
        );
    }

    #[test]
    fn test_header_inside_sentence_is_a_term() {
        let output = TemplateTranslator::default().translate("Payment is due", Language::Tamil);
        assert_eq!(body(&output), "Payment (கட்டணம்) is due");
    }

    // ==================== Mode Tests ====================

    #[test]
    fn test_template_mode_parse() {
        assert_eq!("annotated".parse::<TemplateMode>().unwrap(), TemplateMode::Annotated);
        assert_eq!("Complete".parse::<TemplateMode>().unwrap(), TemplateMode::Complete);
        assert!("full".parse::<TemplateMode>().is_err());
    }

    #[test]
    fn test_is_malformed() {
        assert!(is_malformed("", "text"));
        assert!(is_malformed("bad \u{FFFD}", "text"));
        assert!(is_malformed("ஒப்பந்தம் (", "Agreement"));
        assert!(!is_malformed("ஒப்பந்தம்", "Agreement"));
    }

    #[test]
    fn test_is_malformed_ignores_what_the_original_had() {
        assert!(!is_malformed("ஒப்பந்தம் \u{FFFD}", "Agreement \u{FFFD}"));
        assert!(!is_malformed("(ஒப்பந்தம்", "(Agreement"));
        assert!(!is_malformed("", "   "));
    }

    #[test]
    fn test_complete_mode_keeps_replacement_char_from_input() {
        let translator = TemplateTranslator::new(TemplateMode::Complete);
        let output = translator.translate("Agreement \u{FFFD} (draft", Language::Tamil);
        assert_eq!(body(&output), "ஒப்பந்தம் \u{FFFD} (draft");
    }

    #[test]
    fn test_every_lexicon_compiles() {
        for language in LexiconStore::get().languages() {
            assert!(compiled(language).is_ok(), "{} failed to compile", language);
        }
    }
}
