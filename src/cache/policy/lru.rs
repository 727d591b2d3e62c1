//! LRU (Least-Recently-Used) replacement policy.
//!
//! Frames sit in a recency-ordered list: head is the most recently
//! touched page, tail the least. A hit relinks the frame to the head in
//! O(1); a miss on a full cache drops the tail.
//!
//! ```text
//!   access 1,2,3,4         head → [4] [3] [2] [1] ← tail
//!   access 1 (hit)         head → [1] [4] [3] [2] ← tail
//!   access 5 (evict 2)     head → [5] [1] [4] [3] ← tail
//! ```

use log::{debug, trace};

use crate::cache::frame::{Frame, FrameMeta, FrameView};
use crate::cache::frame_list::FrameList;
use crate::cache::policy::{AccessOutcome, EvictionPolicy};
use crate::cache::store::FrameStore;
use crate::common::{PageId, PolicyKind, Result};

/// LRU eviction over a recency-ordered list.
#[derive(Debug, Clone)]
pub struct LruPolicy {
    frames: FrameList,
}

impl LruPolicy {
    /// Create an LRU policy with `capacity` frames.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            frames: FrameList::new(capacity)?,
        })
    }

    /// The page that would be evicted next, if any.
    pub fn peek_lru(&self) -> Option<PageId> {
        self.frames
            .tail()
            .and_then(|id| self.frames.get(id))
            .and_then(Frame::page)
    }
}

impl EvictionPolicy for LruPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn access(&mut self, page: PageId) -> AccessOutcome {
        if let Some(id) = self.frames.find(page) {
            trace!("LRU hit on {}", page);
            self.frames.move_to_front(id);
            return AccessOutcome::Hit;
        }

        trace!("LRU miss on {}", page);
        let evicted = if self.frames.is_full() {
            let victim = self.frames.pop_back().resident_page();
            debug!("LRU evicting {} for {}", victim, page);
            Some(victim)
        } else {
            None
        };

        self.frames.push_front(Frame::loaded(page, ()));
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
