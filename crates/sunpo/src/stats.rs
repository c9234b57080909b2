use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::error::ScaleError;

/// Counters for degraded code paths.
///
/// The lossy operations on [`Metrics`](crate::Metrics) bump exactly one
/// counter per warning they log, so tests and diagnostics can assert on
/// degradation without scraping log output.
#[derive(Debug, Default)]
pub struct ScaleStats {
    invalid_percents: AtomicU64,
    invalid_sizes: AtomicU64,
    invalid_font_sizes: AtomicU64,
    dimension_fallbacks: AtomicU64,
}

impl ScaleStats {
    pub(crate) fn record(&self, err: &ScaleError) {
        let counter = match err {
            ScaleError::InvalidPercent(_) => &self.invalid_percents,
            ScaleError::InvalidSize(_) => &self.invalid_sizes,
            ScaleError::InvalidFontSize(_) => &self.invalid_font_sizes,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_dimension_fallback(&self) {
        self.dimension_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Copy the current counter values.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            invalid_percents: self.invalid_percents.load(Ordering::Relaxed),
            invalid_sizes: self.invalid_sizes.load(Ordering::Relaxed),
            invalid_font_sizes: self.invalid_font_sizes.load(Ordering::Relaxed),
            dimension_fallbacks: self.dimension_fallbacks.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the [`ScaleStats`] counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    /// Percentages rejected for being outside 0..=100.
    pub invalid_percents: u64,
    /// Sizes rejected for being negative or non-numeric.
    pub invalid_sizes: u64,
    /// Font sizes rejected for being non-positive or non-numeric.
    pub invalid_font_sizes: u64,
    /// Screen reads served from the fallback window size.
    pub dimension_fallbacks: u64,
}

impl StatsSnapshot {
    /// Total number of warnings and fallbacks recorded.
    pub fn total(&self) -> u64 {
        self.invalid_percents + self.invalid_sizes + self.invalid_font_sizes + self.dimension_fallbacks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_routes_to_matching_counter() {
        let stats = ScaleStats::default();
        stats.record(&ScaleError::InvalidPercent(150.0));
        stats.record(&ScaleError::InvalidFontSize(0.0));
        stats.record_dimension_fallback();

        let snap = stats.snapshot();
        assert_eq!(snap.invalid_percents, 1);
        assert_eq!(snap.invalid_sizes, 0);
        assert_eq!(snap.invalid_font_sizes, 1);
        assert_eq!(snap.dimension_fallbacks, 1);
        assert_eq!(snap.total(), 3);
    }

    #[test]
    fn fresh_stats_are_zero() {
        assert_eq!(ScaleStats::default().snapshot(), StatsSnapshot::default());
    }
}
