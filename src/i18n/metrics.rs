//! Translation metrics and observability module.
//!
//! Each orchestrator owns one `TranslationMetrics`, with a set of counters per
//! backend in the priority chain.

use crate::translation::TranslationMethod;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
struct BackendCounters {
    attempts: AtomicUsize,
    successes: AtomicUsize,
    soft_failures: AtomicUsize,
    permanent_failures: AtomicUsize,
    skipped: AtomicUsize,
}

/// Counters for translation requests and backend attempts.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Number of `translate` calls
    requests: AtomicUsize,

    /// Number of requests answered by the template fallback
    template_fallbacks: AtomicUsize,

    /// Number of requests where every backend, template included, failed
    exhausted: AtomicUsize,

    backends: [BackendCounters; 4],
}

fn slot(method: TranslationMethod) -> Option<usize> {
    TranslationMethod::BACKENDS.iter().position(|m| *m == method)
}

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    fn counters(&self, method: TranslationMethod) -> Option<&BackendCounters> {
        slot(method).map(|i| &self.backends[i])
    }

    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_template_fallback(&self) {
        self.template_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_exhausted(&self) {
        self.exhausted.fetch_add(1, Ordering::Relaxed);
    }

    /// Record that a backend was called.
    pub fn record_attempt(&self, method: TranslationMethod) {
        if let Some(c) = self.counters(method) {
            c.attempts.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record that a backend produced an accepted translation.
    pub fn record_success(&self, method: TranslationMethod) {
        if let Some(c) = self.counters(method) {
            c.successes.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a soft failure (error, timeout, empty or rejected output).
    pub fn record_soft_failure(&self, method: TranslationMethod) {
        if let Some(c) = self.counters(method) {
            c.soft_failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a failure that latched the backend off.
    pub fn record_permanent_failure(&self, method: TranslationMethod) {
        if let Some(c) = self.counters(method) {
            c.permanent_failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record that a backend was skipped (latched, unavailable or unsupported pair).
    pub fn record_skip(&self, method: TranslationMethod) {
        if let Some(c) = self.counters(method) {
            c.skipped.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }

    pub fn attempts(&self, method: TranslationMethod) -> usize {
        self.counters(method)
            .map_or(0, |c| c.attempts.load(Ordering::Relaxed))
    }

    pub fn successes(&self, method: TranslationMethod) -> usize {
        self.counters(method)
            .map_or(0, |c| c.successes.load(Ordering::Relaxed))
    }

    pub fn skipped(&self, method: TranslationMethod) -> usize {
        self.counters(method)
            .map_or(0, |c| c.skipped.load(Ordering::Relaxed))
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let backends = TranslationMethod::BACKENDS
            .iter()
            .zip(self.backends.iter())
            .map(|(method, c)| {
                let attempts = c.attempts.load(Ordering::Relaxed);
                let successes = c.successes.load(Ordering::Relaxed);
                let success_rate = if attempts > 0 {
                    (successes as f64 / attempts as f64) * 100.0
                } else {
                    0.0
                };
                BackendReport {
                    backend: method.label(),
                    attempts,
                    successes,
                    soft_failures: c.soft_failures.load(Ordering::Relaxed),
                    permanent_failures: c.permanent_failures.load(Ordering::Relaxed),
                    skipped: c.skipped.load(Ordering::Relaxed),
                    success_rate,
                }
            })
            .collect();

        MetricsReport {
            requests: self.requests(),
            template_fallbacks: self.template_fallbacks.load(Ordering::Relaxed),
            exhausted: self.exhausted.load(Ordering::Relaxed),
            backends,
        }
    }
}

/// Counters for a single backend.
#[derive(Debug, Clone, Serialize)]
pub struct BackendReport {
    pub backend: &'static str,
    pub attempts: usize,
    pub successes: usize,
    pub soft_failures: usize,
    pub permanent_failures: usize,
    pub skipped: usize,

    /// Accepted results per attempt, as a percentage (0-100)
    pub success_rate: f64,
}

/// Metrics report containing current translation statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub requests: usize,
    pub template_fallbacks: usize,
    pub exhausted: usize,

    /// One entry per backend, in priority order
    pub backends: Vec<BackendReport>,
}

impl MetricsReport {
    pub fn backend(&self, method: TranslationMethod) -> Option<&BackendReport> {
        self.backends.iter().find(|b| b.backend == method.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Counter Tests ====================

    #[test]
    fn test_record_attempt_and_success() {
        let metrics = TranslationMetrics::new();

        assert_eq!(metrics.attempts(TranslationMethod::HostedLlm), 0);
        metrics.record_attempt(TranslationMethod::HostedLlm);
        metrics.record_success(TranslationMethod::HostedLlm);
        assert_eq!(metrics.attempts(TranslationMethod::HostedLlm), 1);
        assert_eq!(metrics.successes(TranslationMethod::HostedLlm), 1);
        assert_eq!(metrics.attempts(TranslationMethod::SpecializedIndic), 0);
    }

    #[test]
    fn test_non_backend_methods_are_ignored() {
        let metrics = TranslationMetrics::new();
        metrics.record_attempt(TranslationMethod::None);
        metrics.record_skip(TranslationMethod::Failed);

        let report = metrics.report();
        assert!(report.backends.iter().all(|b| b.attempts == 0 && b.skipped == 0));
    }

    #[test]
    fn test_record_request_and_fallback() {
        let metrics = TranslationMetrics::new();
        metrics.record_request();
        metrics.record_request();
        metrics.record_template_fallback();

        let report = metrics.report();
        assert_eq!(report.requests, 2);
        assert_eq!(report.template_fallbacks, 1);
        assert_eq!(report.exhausted, 0);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_empty() {
        let report = TranslationMetrics::new().report();

        assert_eq!(report.requests, 0);
        assert_eq!(report.backends.len(), 4);
        for backend in &report.backends {
            assert_eq!(backend.attempts, 0);
            assert_eq!(backend.success_rate, 0.0);
        }
    }

    #[test]
    fn test_report_success_rate() {
        let metrics = TranslationMetrics::new();

        // 4 attempts, 3 successes = 75%
        for _ in 0..4 {
            metrics.record_attempt(TranslationMethod::GenericHosted);
        }
        for _ in 0..3 {
            metrics.record_success(TranslationMethod::GenericHosted);
        }
        metrics.record_soft_failure(TranslationMethod::GenericHosted);

        let report = metrics.report();
        let generic = report.backend(TranslationMethod::GenericHosted).unwrap();
        assert_eq!(generic.attempts, 4);
        assert_eq!(generic.soft_failures, 1);
        assert_eq!(generic.success_rate, 75.0);
    }

    #[test]
    fn test_report_backends_in_priority_order() {
        let report = TranslationMetrics::new().report();
        let labels: Vec<_> = report.backends.iter().map(|b| b.backend).collect();
        assert_eq!(
            labels,
            vec!["specialized-indic", "hosted-llm", "generic-hosted", "template"]
        );
    }

    #[test]
    fn test_report_serializes() {
        let metrics = TranslationMetrics::new();
        metrics.record_permanent_failure(TranslationMethod::HostedLlm);
        let json = serde_json::to_value(metrics.report()).unwrap();
        assert_eq!(json["backends"][1]["backend"], "hosted-llm");
        assert_eq!(json["backends"][1]["permanent_failures"], 1);
    }
}
