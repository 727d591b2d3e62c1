//! Frame slot identifiers.

use std::fmt;

/// Position of a frame in its store.
///
/// In a [`FrameList`](crate::cache::FrameList) it is the arena slot; in the
/// Clock ring it is the ring position, and [`FrameId::wrapping_next`] gives
/// the position the hand moves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub usize);

impl FrameId {
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }

    /// The next position in a ring of `ring_len` frames.
    ///
    /// # Panics
    /// Panics if `ring_len` is 0.
    #[inline]
    pub fn wrapping_next(self, ring_len: usize) -> FrameId {
        FrameId((self.0 + 1) % ring_len)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}
