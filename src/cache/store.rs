//! The lookup contract shared by every frame store.

use crate::common::{FrameId, PageId};

/// Read-only queries over a fixed-capacity set of frames.
///
/// `find` is a linear scan. Capacities are small and fixed, so O(capacity)
/// lookups are the expected cost.
pub trait FrameStore {
    /// Locate the frame holding `page`.
    fn find(&self, page: PageId) -> Option<FrameId>;

    /// Number of occupied frames.
    fn count(&self) -> usize;

    /// Maximum number of occupied frames.
    fn capacity(&self) -> usize;

    /// Check if every frame is occupied.
    fn is_full(&self) -> bool {
        self.count() >= self.capacity()
    }

    /// Check if no frame is occupied.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
