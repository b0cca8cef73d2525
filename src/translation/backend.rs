//! The backend capability interface and the per-backend status cell.

use crate::i18n::Language;
use crate::translation::TranslationMethod;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU8, Ordering};
use thiserror::Error;

/// Whether a failure ends this attempt only, or the backend for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Move on to the next backend; try this one again next request
    Soft,
    /// Latch the backend off for the rest of the process
    Permanent,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{method} failed: {message}")]
pub struct BackendFailure {
    pub method: TranslationMethod,
    pub kind: FailureKind,
    pub message: String,
}

impl BackendFailure {
    pub fn soft(method: TranslationMethod, message: impl Into<String>) -> Self {
        Self {
            method,
            kind: FailureKind::Soft,
            message: message.into(),
        }
    }

    pub fn permanent(method: TranslationMethod, message: impl Into<String>) -> Self {
        Self {
            method,
            kind: FailureKind::Permanent,
            message: message.into(),
        }
    }

    pub fn is_permanent(&self) -> bool {
        self.kind == FailureKind::Permanent
    }
}

/// A translation service the orchestrator can try.
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Label reported when this backend produces the result.
    fn method(&self) -> TranslationMethod;

    /// Readiness (credentials present, health check passed).
    fn is_available(&self) -> bool {
        true
    }

    /// Whether the backend handles this language pair.
    fn supports(&self, _source: Language, _target: Language) -> bool {
        true
    }

    /// One translation attempt. No retries.
    async fn attempt(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, BackendFailure>;
}

/// Health of a backend as seen by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BackendStatus {
    Ready = 0,
    /// Last attempt soft-failed; still tried on the next request
    TransientlyFailing = 1,
    /// Latched off until restart
    PermanentlyUnavailable = 2,
}

impl BackendStatus {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => BackendStatus::Ready,
            1 => BackendStatus::TransientlyFailing,
            _ => BackendStatus::PermanentlyUnavailable,
        }
    }
}

/// Atomic holder of a [`BackendStatus`].
///
/// `PermanentlyUnavailable` is absorbing: once stored, no update leaves it.
#[derive(Debug)]
pub struct StatusCell(AtomicU8);

impl StatusCell {
    pub fn new() -> Self {
        Self(AtomicU8::new(BackendStatus::Ready as u8))
    }

    pub fn load(&self) -> BackendStatus {
        BackendStatus::from_u8(self.0.load(Ordering::Acquire))
    }

    pub fn is_permanently_unavailable(&self) -> bool {
        self.load() == BackendStatus::PermanentlyUnavailable
    }

    pub fn mark_ready(&self) {
        self.transition(BackendStatus::Ready);
    }

    pub fn mark_transient_failure(&self) {
        self.transition(BackendStatus::TransientlyFailing);
    }

    /// Latch the backend off. Returns true if this call set the latch.
    pub fn mark_permanent(&self) -> bool {
        let previous = self
            .0
            .swap(BackendStatus::PermanentlyUnavailable as u8, Ordering::AcqRel);
        previous != BackendStatus::PermanentlyUnavailable as u8
    }

    fn transition(&self, next: BackendStatus) {
        let _ = self
            .0
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                if current == BackendStatus::PermanentlyUnavailable as u8 {
                    None
                } else {
                    Some(next as u8)
                }
            });
    }
}

impl Default for StatusCell {
    fn default() -> Self {
        Self::new()
    }
}
