//! CLOCK (Second-Chance) replacement policy.
//!
//! Frames form a ring of exactly `capacity` positions; "next" is
//! `(i + 1) % capacity`, so the ring never needs cyclic links. A hand
//! (cursor) marks where the next sweep starts.
//!
//! ```text
//!              hand
//!               │
//!               ▼
//!        ┌──▶ [1|R] ──▶ [2|R] ──┐
//!        │                      │
//!        └─── [4|R] ◀── [3|R] ◀─┘
//! ```
//!
//! On a full miss the hand sweeps: a set reference bit is cleared and the
//! frame skipped, a clear bit marks the victim. The victim frame is
//! overwritten in place; ring slots are never freed once filled. A sweep
//! ends within two revolutions because the first one clears every bit.
//!
//! Freshly loaded pages start with the bit set, exactly like a hit. So
//! with no hits in between, the first eviction clears all bits and then
//! takes the frame under the hand.

use log::{debug, trace};

use crate::cache::frame::{Frame, FrameMeta, FrameView};
use crate::cache::policy::{AccessOutcome, EvictionPolicy};
use crate::cache::store::FrameStore;
use crate::common::{Error, FrameId, PageId, PolicyKind, Result};

/// The fixed ring of Clock frames. Metadata is the reference bit.
#[derive(Debug, Clone)]
pub struct ClockRing {
    /// Ring positions, all allocated up front.
    slots: Box<[Frame<bool>]>,

    /// Positions `0..filled` are occupied.
    filled: usize,

    /// Current sweep position.
    hand: FrameId,
}

impl ClockRing {
    /// Create a ring of `capacity` empty positions.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            slots: (0..capacity).map(|_| Frame::empty()).collect(),
            filled: 0,
            hand: FrameId::new(0),
        })
    }

    /// Position the next sweep starts from.
    #[inline]
    pub fn hand(&self) -> FrameId {
        self.hand
    }

    /// Occupied positions in ring order.
    fn occupied(&self) -> &[Frame<bool>] {
        &self.slots[..self.filled]
    }

    /// Set the reference bit of the frame at `id`.
    fn reference(&mut self, id: FrameId) {
        *self.slots[id.0].meta_mut() = true;
    }

    /// Load `page` into the next unfilled position.
    fn insert(&mut self, page: PageId) {
        assert!(
            self.filled < self.slots.len(),
            "clock ring overflow: capacity {}",
            self.slots.len()
        );
        self.slots[self.filled].replace(page, true);
        self.filled += 1;
    }

    /// Sweep from the hand, clearing set bits, until a clear bit is found.
    /// The victim is overwritten with `page` and the hand moves past it.
    ///
    /// Returns the evicted page.
    fn sweep_and_replace(&mut self, page: PageId) -> PageId {
        assert_eq!(
            self.filled,
            self.slots.len(),
            "clock sweep on a ring that is not full"
        );

        // Two revolutions always suffice; a third means the ring is corrupt.
        for _ in 0..2 * self.slots.len() + 1 {
            let pos = self.hand;
            self.hand = pos.wrapping_next(self.slots.len());
            let frame = &mut self.slots[pos.0];

            if *frame.meta() {
                trace!("CLOCK clearing reference bit of {}", frame.resident_page());
                *frame.meta_mut() = false;
                continue;
            }

            return match frame.replace(page, true) {
                Some(victim) => victim,
                None => panic!("clock hand reached empty {}", pos),
            };
        }
        panic!("clock sweep did not terminate");
    }

    fn clear(&mut self) {
        self.slots.iter_mut().for_each(Frame::reset);
        self.filled = 0;
        self.hand = FrameId::new(0);
    }

    fn assert_invariants(&self) {
        assert!(self.hand.0 < self.slots.len(), "clock hand out of range");
        assert!(self.filled <= self.slots.len(), "clock ring overfilled");

        let mut seen = std::collections::HashSet::with_capacity(self.filled);
        for (pos, frame) in self.slots.iter().enumerate() {
            if pos < self.filled {
                assert!(frame.is_occupied(), "ring position {} is empty", pos);
                let page = frame.resident_page();
                assert!(
                    seen.insert(page),
                    "{} resident in more than one frame",
                    page
                );
            } else {
                assert!(!frame.is_occupied(), "ring position {} past fill", pos);
            }
        }
    }
}

impl FrameStore for ClockRing {
    fn find(&self, page: PageId) -> Option<FrameId> {
        self.occupied()
            .iter()
            .position(|frame| frame.holds(page))
            .map(FrameId::new)
    }

    fn count(&self) -> usize {
        self.filled
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }
}

/// Second-chance eviction over a [`ClockRing`].
#[derive(Debug, Clone)]
pub struct ClockPolicy {
    ring: ClockRing,
}

impl ClockPolicy {
    /// Create a Clock policy with `capacity` frames.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            ring: ClockRing::new(capacity)?,
        })
    }

    /// Ring position the next sweep starts from.
    pub fn hand(&self) -> FrameId {
        self.ring.hand()
    }
}

impl EvictionPolicy for ClockPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Clock
    }

    fn access(&mut self, page: PageId) -> AccessOutcome {
        if let Some(id) = self.ring.find(page) {
            trace!("CLOCK hit on {}", page);
            self.ring.reference(id);
            return AccessOutcome::Hit;
        }

        trace!("CLOCK miss on {}", page);
        if !self.ring.is_full() {
            self.ring.insert(page);
            return AccessOutcome::Miss { evicted: None };
        }

        let victim = self.ring.sweep_and_replace(page);
        debug!("CLOCK evicting {} for {}", victim, page);
        AccessOutcome::Miss {
            evicted: Some(victim),
        }
    }

    fn contains(&self, page: PageId) -> bool {
        self.ring.find(page).is_some()
    }

    fn len(&self) -> usize {
        self.ring.count()
    }

    fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    fn snapshot(&self) -> Vec<FrameView> {
        self.ring
            .occupied()
            .iter()
            .map(|frame| FrameView::new(frame, FrameMeta::Referenced(*frame.meta())))
            .collect()
    }

    fn clear(&mut self) {
        self.ring.clear();
    }

    fn assert_invariants(&self) {
        self.ring.assert_invariants();
    }
}
