//! Page Cache - the engine callers drive.
//!
//! The [`PageCache`] provides:
//! - Hit/miss determination for every page access
//! - Victim selection through a pluggable eviction policy
//! - Eviction reporting and statistics
//! - Read-only snapshots of the frames for display

use std::fmt;

use log::debug;

use crate::cache::frame::FrameView;
use crate::cache::policy::{build_policy, AccessOutcome, EvictionPolicy};
use crate::cache::stats::CacheStats;
use crate::common::{CacheConfig, PageId, PolicyKind, Result};

/// A fixed-capacity page cache running one eviction policy.
///
/// # Architecture
/// ```text
/// ┌───────────────────────────────────────────────────────┐
/// │                      PageCache                        │
/// │  access(page) ──▶ ┌───────────────────────────────┐   │
/// │                   │ policy: Box<dyn EvictionPolicy>│   │
/// │                   │  FIFO | LRU | CLOCK | LFU      │   │
/// │                   │  (owns its frame store)        │   │
/// │                   └───────────────┬───────────────┘   │
/// │                                   ▼                   │
/// │  ┌──────────────┐        AccessOutcome                │
/// │  │ stats        │◀── Hit | Miss { evicted }           │
/// │  └──────────────┘                                     │
/// └───────────────────────────────────────────────────────┘
/// ```
///
/// # Usage
/// ```
/// use pagecache::{PageCache, PageId, PolicyKind};
///
/// let mut cache = PageCache::with_policy(PolicyKind::Fifo, 2)?;
/// cache.access(PageId::new(1));
/// cache.access(PageId::new(2));
///
/// let outcome = cache.access(PageId::new(3));
/// assert_eq!(outcome.evicted(), Some(PageId::new(1)));
/// # Ok::<(), pagecache::Error>(())
/// ```
pub struct PageCache {
    /// Active eviction policy and its frames.
    policy: Box<dyn EvictionPolicy>,

    /// Access statistics.
    stats: CacheStats,
}

impl PageCache {
    /// Create a page cache from a config.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `config.capacity` is 0
    pub fn new(config: CacheConfig) -> Result<Self> {
        let policy = build_policy(config.policy, config.capacity)?;
        debug!(
            "created {} page cache with {} frames",
            config.policy, config.capacity
        );

        Ok(Self {
            policy,
            stats: CacheStats::new(),
        })
    }

    /// Create a page cache running `policy` over `capacity` frames.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn with_policy(policy: PolicyKind, capacity: usize) -> Result<Self> {
        Self::new(CacheConfig::new(policy).with_capacity(capacity))
    }

    // ========================================================================
    // Public API: Access
    // ========================================================================

    /// Access a page.
    ///
    /// A resident page is a hit and never evicts. A missing page is loaded;
    /// if every frame is occupied the policy's victim is evicted first.
    pub fn access(&mut self, page: PageId) -> AccessOutcome {
        let outcome = self.policy.access(page);
        self.stats.record(outcome);
        outcome
    }

    /// Access every page of a workload in order.
    ///
    /// Returns one outcome per access.
    pub fn run<I>(&mut self, pages: I) -> Vec<AccessOutcome>
    where
        I: IntoIterator,
        I::Item: Into<PageId>,
    {
        pages
            .into_iter()
            .map(|page| self.access(page.into()))
            .collect()
    }

    // ========================================================================
    // Public API: Inspection
    // ========================================================================

    /// Frames in the policy's natural order.
    ///
    /// Load order for FIFO and LFU, most-recent-first for LRU, ring order
    /// for Clock.
    pub fn snapshot(&self) -> Vec<FrameView> {
        self.policy.snapshot()
    }

    /// Check if `page` is resident without counting an access.
    pub fn contains(&self, page: PageId) -> bool {
        self.policy.contains(page)
    }

    /// Number of occupied frames.
    pub fn len(&self) -> usize {
        self.policy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policy.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.policy.is_full()
    }

    /// Number of frames (immutable after construction).
    pub fn capacity(&self) -> usize {
        self.policy.capacity()
    }

    /// The active eviction policy.
    pub fn policy(&self) -> PolicyKind {
        self.policy.kind()
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Panic if the active policy's frame store is corrupt.
    pub fn assert_invariants(&self) {
        self.policy.assert_invariants();
    }

    // ========================================================================
    // Public API: Teardown
    // ========================================================================

    /// Release every frame.
    ///
    /// The cache stays usable and starts over empty. Statistics are kept.
    pub fn teardown(&mut self) {
        debug!(
            "tearing down {} page cache ({} resident)",
            self.policy.kind(),
            self.policy.len()
        );
        self.policy.clear();
    }
}

impl fmt::Debug for PageCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageCache")
            .field("policy", &self.policy.kind())
            .field("capacity", &self.policy.capacity())
            .field("len", &self.policy.len())
            .field("stats", &self.stats)
            .finish()
    }
}
