//! LFU (Least-Frequently-Used) replacement policy.
//!
//! Every frame carries an access count: 1 when loaded, +1 per hit. On a
//! full miss the frame with the smallest count is dropped; among equal
//! counts the one loaded earliest wins. Counts never decay, so a page that
//! was hot long ago can outstay pages in current use.

use log::{debug, trace};

use crate::cache::frame::{Frame, FrameMeta, FrameView};
use crate::cache::frame_list::FrameList;
use crate::cache::policy::{AccessOutcome, EvictionPolicy};
use crate::cache::store::FrameStore;
use crate::common::{FrameId, PageId, PolicyKind, Result};

/// LFU eviction over an insertion-ordered list of counted frames.
#[derive(Debug, Clone)]
pub struct LfuPolicy {
    frames: FrameList<u64>,
}

impl LfuPolicy {
    /// Create an LFU policy with `capacity` frames.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            frames: FrameList::new(capacity)?,
        })
    }

    /// Access count of a resident page.
    pub fn frequency(&self, page: PageId) -> Option<u64> {
        self.frames
            .find(page)
            .and_then(|id| self.frames.get(id))
            .map(|frame| *frame.meta())
    }

    /// Frame with the strictly smallest count, first in load order on ties.
    fn min_frequency_frame(&self) -> Option<FrameId> {
        let mut best: Option<(FrameId, u64)> = None;
        for (id, frame) in self.frames.iter() {
            let count = *frame.meta();
            let lower = match best {
                None => true,
                Some((_, min)) => count < min,
            };
            if lower {
                best = Some((id, count));
            }
        }
        best.map(|(id, _)| id)
    }
}

impl EvictionPolicy for LfuPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lfu
    }

    fn access(&mut self, page: PageId) -> AccessOutcome {
        if let Some(id) = self.frames.find(page) {
            let frame = self.frames.frame_mut(id);
            *frame.meta_mut() += 1;
            trace!("LFU hit on {} (count {})", page, frame.meta());
            return AccessOutcome::Hit;
        }

        trace!("LFU miss on {}", page);
        let evicted = if self.frames.is_full() {
            let Some(id) = self.min_frequency_frame() else {
                panic!("LFU eviction from an empty frame list");
            };
            let victim = self.frames.remove(id);
            debug!(
                "LFU evicting {} (count {}) for {}",
                victim.resident_page(),
                victim.meta(),
                page
            );
            Some(victim.resident_page())
        } else {
            None
        };

        self.frames.push_back(Frame::loaded(page, 1));
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
            .map(|(_, frame)| FrameView::new(frame, FrameMeta::Frequency(*frame.meta())))
            .collect()
    }

    fn clear(&mut self) {
        self.frames.clear();
    }

    fn assert_invariants(&self) {
        self.frames.assert_invariants();
        for (id, frame) in self.frames.iter() {
            assert!(*frame.meta() >= 1, "{} has a zero access count", id);
        }
    }
}
