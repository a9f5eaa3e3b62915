//! Resolution metrics and observability module.
//!
//! Missing i18n keys are an expected, frequent condition (raw data fields
//! double as fallback text), so resolution misses are never logged. They are
//! counted here instead, and the report surfaces in the job's debug output.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Counters for i18n key resolution.
pub struct ResolutionMetrics {
    /// Number of lookups that produced localized text
    hits: AtomicUsize,

    /// Number of lookups that missed (absent segment or non-text leaf)
    misses: AtomicUsize,

    /// Number of misses where a caller-supplied fallback was used
    fallbacks: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<ResolutionMetrics> = OnceLock::new();

impl ResolutionMetrics {
    /// A fresh, zeroed metrics instance.
    pub fn new() -> Self {
        Self {
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
            fallbacks: AtomicUsize::new(0),
        }
    }

    /// Get the global resolution metrics instance.
    pub fn global() -> &'static ResolutionMetrics {
        METRICS.get_or_init(ResolutionMetrics::new)
    }

    /// Record a lookup that produced localized text.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that missed.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a miss that was covered by a fallback value.
    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> ResolutionReport {
        let hits = self.hits();
        let misses = self.misses();
        let total = hits + misses;
        let hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        ResolutionReport {
            hits,
            misses,
            hit_rate,
            fallbacks: self.fallbacks(),
        }
    }
}

impl Default for ResolutionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Report containing current resolution statistics.
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionReport {
    /// Number of lookups that produced localized text
    pub hits: usize,

    /// Number of lookups that missed
    pub misses: usize,

    /// Hit rate as a percentage (0-100)
    pub hit_rate: f64,

    /// Number of misses covered by a fallback
    pub fallbacks: usize,
}
