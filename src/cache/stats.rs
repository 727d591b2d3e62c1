//! Page cache statistics tracking.

use std::fmt;

use crate::cache::policy::AccessOutcome;

/// Hit, miss and eviction counters for one cache.
///
/// The cache is driven by a single caller, so the counters are plain
/// integers updated through `&mut`. Copy the struct out to keep a
/// point-in-time snapshot.
///
/// # Example
/// ```
/// use pagecache::{AccessOutcome, CacheStats};
///
/// let mut stats = CacheStats::new();
/// stats.record(AccessOutcome::Hit);
/// stats.record(AccessOutcome::Miss { evicted: None });
/// assert_eq!(stats.hit_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Accesses that found the page resident.
    pub hits: u64,

    /// Accesses that had to load the page.
    pub misses: u64,

    /// Misses that displaced another page.
    pub evictions: u64,
}

impl CacheStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one access outcome.
    pub fn record(&mut self, outcome: AccessOutcome) {
        match outcome {
            AccessOutcome::Hit => self.hits += 1,
            AccessOutcome::Miss { evicted } => {
                self.misses += 1;
                if evicted.is_some() {
                    self.evictions += 1;
                }
            }
        }
    }

    /// Total accesses recorded.
    pub fn accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Calculate cache hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.accesses();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, misses: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.misses,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PageId;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.accesses(), 0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_stats_record() {
        let mut stats = CacheStats::new();
        for _ in 0..7 {
            stats.record(AccessOutcome::Hit);
        }
        stats.record(AccessOutcome::Miss { evicted: None });
        stats.record(AccessOutcome::Miss { evicted: None });
        stats.record(AccessOutcome::Miss {
            evicted: Some(PageId::new(1)),
        });

        assert_eq!(stats.hits, 7);
        assert_eq!(stats.misses, 3);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.hit_rate(), 0.7);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = CacheStats::new();
        stats.record(AccessOutcome::Hit);
        stats.reset();
        assert_eq!(stats, CacheStats::default());
    }

    #[test]
    fn test_stats_display() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            evictions: 5,
        };
        let display = format!("{}", stats);

        assert!(display.contains("hits: 80"));
        assert!(display.contains("misses: 20"));
        assert!(display.contains("80.00%"));
    }
}
