//! Eviction policy implementations.
//!
//! Each policy owns its frame store and implements [`EvictionPolicy`]:
//! - [`FifoPolicy`] - evict in load order, hits change nothing
//! - [`LruPolicy`] - evict the least recently touched page
//! - [`ClockPolicy`] - second-chance sweep over a ring of reference bits
//! - [`LfuPolicy`] - evict the least frequently accessed page
//!
//! Policies are selected at construction through [`PolicyKind`]:
//! ```
//! use pagecache::cache::policy::build_policy;
//! use pagecache::{PageId, PolicyKind};
//!
//! let mut policy = build_policy(PolicyKind::Clock, 2).unwrap();
//! assert!(!policy.access(PageId::new(1)).is_hit());
//! assert!(policy.access(PageId::new(1)).is_hit());
//! ```

mod clock;
mod fifo;
mod lfu;
mod lru;

use std::fmt;

use crate::cache::frame::FrameView;
use crate::common::{PageId, PolicyKind, Result};

pub use clock::ClockPolicy;
pub use fifo::FifoPolicy;
pub use lfu::LfuPolicy;
pub use lru::LruPolicy;

/// Result of a single page access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The page was already resident.
    Hit,
    /// The page was loaded. `evicted` names the victim if the cache was full.
    Miss { evicted: Option<PageId> },
}

impl AccessOutcome {
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, AccessOutcome::Hit)
    }

    #[inline]
    pub fn is_miss(&self) -> bool {
        !self.is_hit()
    }

    /// The page evicted by this access, if any.
    #[inline]
    pub fn evicted(&self) -> Option<PageId> {
        match self {
            AccessOutcome::Hit => None,
            AccessOutcome::Miss { evicted } => *evicted,
        }
    }
}

impl fmt::Display for AccessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessOutcome::Hit => write!(f, "hit"),
            AccessOutcome::Miss { evicted: None } => write!(f, "miss"),
            AccessOutcome::Miss {
                evicted: Some(page),
            } => write!(f, "miss, evicted {}", page),
        }
    }
}

/// A page replacement policy together with the frames it manages.
///
/// Implementations decide hit or miss, pick the victim when full and
/// mutate their own frame store. They never fail: broken internal state
/// panics instead.
pub trait EvictionPolicy: fmt::Debug + Send {
    /// Which policy this is.
    fn kind(&self) -> PolicyKind;

    /// Access `page`, loading it (and evicting if full) on a miss.
    fn access(&mut self, page: PageId) -> AccessOutcome;

    /// Check if `page` is resident. Does not count as an access.
    fn contains(&self, page: PageId) -> bool;

    /// Number of occupied frames.
    fn len(&self) -> usize;

    /// Fixed number of frames.
    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Frames in the policy's natural order.
    fn snapshot(&self) -> Vec<FrameView>;

    /// Release every frame, returning to the freshly built state.
    fn clear(&mut self);

    /// Panic if any structural invariant is broken.
    fn assert_invariants(&self);
}

/// Build the policy named by `kind` with `capacity` frames.
///
/// # Errors
/// - `Error::InvalidCapacity` if `capacity` is 0
pub fn build_policy(kind: PolicyKind, capacity: usize) -> Result<Box<dyn EvictionPolicy>> {
    let policy: Box<dyn EvictionPolicy> = match kind {
        PolicyKind::Fifo => Box::new(FifoPolicy::new(capacity)?),
        PolicyKind::Lru => Box::new(LruPolicy::new(capacity)?),
        PolicyKind::Clock => Box::new(ClockPolicy::new(capacity)?),
        PolicyKind::Lfu => Box::new(LfuPolicy::new(capacity)?),
    };
    Ok(policy)
}
