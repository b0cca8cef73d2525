//! Pattern-based risk scoring for legal text.
//!
//! The score is a fixed, inspectable heuristic: weighted counts of high,
//! medium and low risk vocabulary, a bonus per dangerous clause shape, and a
//! bonus for long documents. Weights and thresholds live in [`ScoringConfig`].

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

const MAX_FACTORS: usize = 5;

const HIGH_RISK_TERMS: &[&str] = &[
    "terminate",
    "termination",
    "damages",
    "liability",
    "unlimited liability",
    "indemnity",
    "indemnification",
    "lawsuit",
    "litigation",
    "arbitration",
    "penalty",
    "penalties",
    "punitive",
    "confidential information",
    "trade secret",
    "intellectual property",
    "data breach",
    "security breach",
    "dispute",
    "legal action",
    "non-compliance",
    "breach of contract",
    "violation",
    "revoke",
    "revocation",
    "void",
    "compensation",
    "fine",
    "legal proceedings",
    "injunction",
    "liquidated damages",
    "default",
    "claim",
    "sue",
    "court proceeding",
];

// "compliance" is listed twice and therefore weighs double.
const MEDIUM_RISK_TERMS: &[&str] = &[
    "amendment",
    "modify",
    "cancellation",
    "disclaim",
    "disclaimer",
    "warranty",
    "guarantee",
    "limited liability",
    "insurance",
    "regulation",
    "compliance",
    "policy",
    "governance",
    "confidentiality",
    "non-disclosure",
    "exclusion",
    "restriction",
    "obligation",
    "compliance",
    "right to",
    "subject to",
    "approval",
    "permission",
    "consent",
    "notification",
    "privacy",
    "personal data",
    "protection",
    "ownership",
    "title",
];

const LOW_RISK_TERMS: &[&str] = &[
    "agreement",
    "contract",
    "term",
    "condition",
    "service",
    "product",
    "payment",
    "fee",
    "renewal",
    "extension",
    "standard",
    "guideline",
    "notice",
    "communication",
    "cooperation",
    "support",
    "maintenance",
    "schedule",
    "delivery",
    "acceptance",
    "process",
    "procedure",
];

const RISK_PATTERNS: &[(&str, &str)] = &[
    (
        r"termin.*\s.{0,20}(immediately|without.*notice)",
        "Immediate termination clause",
    ),
    (
        r"disclaim.*\s.{0,30}(all|any).{0,30}(warrant|liab)",
        "Broad warranty disclaimer",
    ),
    (
        r"indemnif.*\s.{0,50}(all|any).{0,50}(loss|damage|claim)",
        "Broad indemnification requirement",
    ),
    (
        r"confiden.*\s.{0,50}(perpet|indef|surviv)",
        "Perpetual confidentiality clause",
    ),
    (
        r"non.{0,3}compl.*\s.{0,30}(termin|penal)",
        "Non-compliance penalties",
    ),
    (r"damage.{0,20}exceed", "Unlimited damages clause"),
    (
        r"liab.*\s.{0,30}(unlimit|not.{0,10}limit)",
        "Unlimited liability clause",
    ),
];

static COMPILED_PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();

fn patterns() -> &'static [(Regex, &'static str)] {
    COMPILED_PATTERNS.get_or_init(|| {
        RISK_PATTERNS
            .iter()
            .map(|(pattern, description)| (Regex::new(pattern).unwrap(), *description))
            .collect()
    })
}

/// Qualitative risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RiskLevel {
    Unknown,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Unknown => "Unknown",
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    /// Display colour for the level.
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::High => "#FF4B4B",
            RiskLevel::Medium => "#FFA726",
            RiskLevel::Low => "#4CAF50",
            RiskLevel::Unknown => "#9E9E9E",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weights and thresholds of the scoring rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub high_term_weight: f64,
    pub pattern_weight: f64,
    pub medium_term_weight: f64,
    /// Subtracted per low-risk occurrence
    pub low_term_weight: f64,

    pub long_document_chars: usize,
    pub long_document_bonus: f64,
    pub medium_document_chars: usize,
    pub medium_document_bonus: f64,

    /// Score above which the level is High
    pub high_score: f64,
    /// Score above which the level is at least Medium
    pub medium_score: f64,
    /// High-risk occurrences above which the level is High
    pub high_terms_for_high: usize,
    /// Medium-risk occurrences above which the level is at least Medium
    pub medium_terms_for_medium: usize,
    /// High-risk occurrences above which the level is at least Medium
    pub high_terms_for_medium: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            high_term_weight: 3.0,
            pattern_weight: 5.0,
            medium_term_weight: 1.0,
            low_term_weight: 0.5,
            long_document_chars: 10_000,
            long_document_bonus: 5.0,
            medium_document_chars: 5_000,
            medium_document_bonus: 2.0,
            high_score: 20.0,
            medium_score: 10.0,
            high_terms_for_high: 10,
            medium_terms_for_medium: 15,
            high_terms_for_medium: 5,
        }
    }
}

/// Raw signal counts behind a score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RiskSignals {
    pub high_terms: usize,
    pub medium_terms: usize,
    pub low_terms: usize,
    /// Number of distinct clause patterns present
    pub patterns: usize,
    pub length_chars: usize,
}

/// Result of assessing a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,

    /// At most five factors, high-risk first
    pub factors: Vec<String>,

    pub score: f64,
    pub signals: RiskSignals,
}

impl RiskAssessment {
    fn unknown() -> Self {
        Self {
            level: RiskLevel::Unknown,
            factors: Vec::new(),
            score: 0.0,
            signals: RiskSignals::default(),
        }
    }
}

/// Scores legal text with a [`ScoringConfig`].
#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    config: ScoringConfig,
}

impl RiskScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Assess `text`. Empty text is `Unknown` with no factors.
    pub fn assess(&self, text: &str) -> RiskAssessment {
        if text.is_empty() {
            return RiskAssessment::unknown();
        }

        let lower = text.to_lowercase();

        // Substring counts: "sue" also counts inside "issue". Lexicon
        // substitution uses word boundaries; counting does not.
        let high_counts = count_terms(&lower, HIGH_RISK_TERMS);
        let medium_counts = count_terms(&lower, MEDIUM_RISK_TERMS);
        let low_total: usize = count_terms(&lower, LOW_RISK_TERMS)
            .iter()
            .map(|(_, n)| n)
            .sum();
        let high_total: usize = high_counts.iter().map(|(_, n)| n).sum();
        let medium_total: usize = medium_counts.iter().map(|(_, n)| n).sum();

        let matched: Vec<&'static str> = patterns()
            .iter()
            .filter(|(regex, _)| regex.is_match(&lower))
            .map(|(_, description)| *description)
            .collect();

        let signals = RiskSignals {
            high_terms: high_total,
            medium_terms: medium_total,
            low_terms: low_total,
            patterns: matched.len(),
            length_chars: text.chars().count(),
        };

        let score = self.score(&signals);
        let level = self.classify(score, &signals);

        let mut factors: Vec<String> = Vec::new();
        factors.extend(
            high_counts
                .iter()
                .filter(|(_, n)| *n > 0)
                .map(|(term, n)| format!("High-risk term: '{}' found {} times", capitalize(term), n)),
        );
        factors.extend(
            medium_counts
                .iter()
                .filter(|(_, n)| *n > 2)
                .map(|(term, n)| {
                    format!("Medium-risk term: '{}' found {} times", capitalize(term), n)
                }),
        );
        factors.extend(
            matched
                .iter()
                .map(|description| format!("High-risk pattern: {}", description)),
        );

        // Stable: insertion order is kept within a tier.
        factors.sort_by_key(|factor| std::cmp::Reverse(severity(factor)));
        factors.truncate(MAX_FACTORS);

        tracing::debug!(
            level = %level,
            score,
            high = signals.high_terms,
            medium = signals.medium_terms,
            low = signals.low_terms,
            patterns = signals.patterns,
            "Risk assessed"
        );

        RiskAssessment {
            level,
            factors,
            score,
            signals,
        }
    }

    fn score(&self, signals: &RiskSignals) -> f64 {
        let c = &self.config;
        let mut score = signals.high_terms as f64 * c.high_term_weight
            + signals.patterns as f64 * c.pattern_weight
            + signals.medium_terms as f64 * c.medium_term_weight
            - signals.low_terms as f64 * c.low_term_weight;

        if signals.length_chars > c.long_document_chars {
            score += c.long_document_bonus;
        } else if signals.length_chars > c.medium_document_chars {
            score += c.medium_document_bonus;
        }
        score
    }

    fn classify(&self, score: f64, signals: &RiskSignals) -> RiskLevel {
        let c = &self.config;
        if score > c.high_score || signals.patterns > 0 || signals.high_terms > c.high_terms_for_high {
            RiskLevel::High
        } else if score > c.medium_score
            || signals.medium_terms > c.medium_terms_for_medium
            || signals.high_terms > c.high_terms_for_medium
        {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// Assess `text` with the default scoring configuration.
pub fn assess(text: &str) -> RiskAssessment {
    RiskScorer::default().assess(text)
}

fn count_terms(lower: &str, terms: &[&'static str]) -> Vec<(&'static str, usize)> {
    terms
        .iter()
        .map(|term| (*term, lower.matches(term).count()))
        .collect()
}

fn severity(factor: &str) -> u8 {
    if factor.contains("High-risk") {
        2
    } else if factor.contains("Medium-risk") {
        1
    } else {
        0
    }
}

fn capitalize(term: &str) -> String {
    let mut chars = term.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
