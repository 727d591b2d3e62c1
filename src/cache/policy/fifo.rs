//! FIFO (First-In-First-Out) replacement policy.
//!
//! Evicts pages in the order they were loaded. A hit leaves the order
//! untouched; that is the only thing separating FIFO from LRU.

use log::{debug, trace};

use crate::cache::frame::{Frame, FrameMeta, FrameView};
use crate::cache::frame_list::FrameList;
use crate::cache::policy::{AccessOutcome, EvictionPolicy};
use crate::cache::store::FrameStore;
use crate::common::{PageId, PolicyKind, Result};

/// FIFO eviction over an insertion-ordered list.
///
/// Head is the oldest loaded frame, tail the newest.
#[derive(Debug, Clone)]
pub struct FifoPolicy {
    frames: FrameList,
}

impl FifoPolicy {
    /// Create a FIFO policy with `capacity` frames.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            frames: FrameList::new(capacity)?,
        })
    }
}

impl EvictionPolicy for FifoPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn access(&mut self, page: PageId) -> AccessOutcome {
        if self.frames.find(page).is_some() {
            trace!("FIFO hit on {}", page);
            return AccessOutcome::Hit;
        }

        trace!("FIFO miss on {}", page);
        let evicted = if self.frames.is_full() {
            let victim = self.frames.pop_front().resident_page();
            debug!("FIFO evicting {} for {}", victim, page);
            Some(victim)
        } else {
            None
        };

        self.frames.push_back(Frame::loaded(page, ()));
        AccessOutcome::Miss { evicted }
    }

    fn contains(&self, page: PageId) -> bool {
        self.frames.find(page).is_some()
    }

    fn len(&self) -> usize {
        self.frames.count()
    }

    fn capacity(&self) -> usize {
        self.frames.capacity()
    }

    fn snapshot(&self) -> Vec<FrameView> {
        self.frames
            .iter()
            .map(|(_, frame)| FrameView::new(frame, FrameMeta::Ordered))
            .collect()
    }

    fn clear(&mut self) {
        self.frames.clear();
    }

    fn assert_invariants(&self) {
        self.frames.assert_invariants();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(policy: &mut FifoPolicy, pages: &[u32]) {
        for &p in pages {
            policy.access(PageId::new(p));
        }
    }

    fn resident(policy: &FifoPolicy) -> Vec<u32> {
        policy.snapshot().iter().map(|v| v.page.0).collect()
    }

    #[test]
    fn test_fifo_rejects_zero_capacity() {
        let err = FifoPolicy::new(0).unwrap_err();
        assert_eq!(err, crate::common::Error::InvalidCapacity(0));
    }

    #[test]
    fn test_fifo_basic() {
        let mut policy = FifoPolicy::new(3).unwrap();
        load(&mut policy, &[1, 2, 3]);
        assert_eq!(resident(&policy), vec![1, 2, 3]);

        // Should evict in FIFO order
        let outcome = policy.access(PageId::new(4));
        assert_eq!(outcome.evicted(), Some(PageId::new(1)));
        let outcome = policy.access(PageId::new(5));
        assert_eq!(outcome.evicted(), Some(PageId::new(2)));
        assert_eq!(resident(&policy), vec![3, 4, 5]);
        policy.assert_invariants();
    }

    #[test]
    fn test_fifo_reaccess_no_reorder() {
        let mut policy = FifoPolicy::new(2).unwrap();
        load(&mut policy, &[1, 2]);

        // Access again - should NOT reorder
        assert!(policy.access(PageId::new(1)).is_hit());
        assert_eq!(resident(&policy), vec![1, 2]);

        // FIFO: page 1 was first, should be evicted first
        let outcome = policy.access(PageId::new(3));
        assert_eq!(outcome.evicted(), Some(PageId::new(1)));
    }

    #[test]
    fn test_fifo_miss_with_space_evicts_nothing() {
        let mut policy = FifoPolicy::new(2).unwrap();
        assert_eq!(
            policy.access(PageId::new(8)),
            AccessOutcome::Miss { evicted: None }
        );
        assert_eq!(policy.len(), 1);
    }

    #[test]
    fn test_fifo_snapshot_meta() {
        let mut policy = FifoPolicy::new(2).unwrap();
        load(&mut policy, &[4]);
        let snapshot = policy.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot[0].occupied);
        assert_eq!(snapshot[0].meta, FrameMeta::Ordered);
    }

    #[test]
    fn test_fifo_clear() {
        let mut policy = FifoPolicy::new(2).unwrap();
        load(&mut policy, &[1, 2]);
        policy.clear();
        assert!(policy.is_empty());
        assert!(!policy.contains(PageId::new(1)));
        policy.clear();
        policy.assert_invariants();
    }
}
