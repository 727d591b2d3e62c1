//! Frame - a physical slot in the page cache.
//!
//! A [`Frame`] holds one page identifier plus the metadata its policy needs:
//! - nothing extra for FIFO and LRU (order is the list position)
//! - a reference bit for Clock
//! - an access frequency for LFU
//!
//! [`FrameView`] is the read-only, policy-independent form handed to callers.

use std::fmt;

use crate::common::PageId;

/// A frame holding one page and policy metadata `M`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<M = ()> {
    /// Resident page. `None` while the frame is empty.
    page: Option<PageId>,

    /// Policy-specific metadata.
    meta: M,
}

impl<M: Default> Frame<M> {
    /// Create a new empty frame.
    pub fn empty() -> Self {
        Self {
            page: None,
            meta: M::default(),
        }
    }

    /// Reset the frame to empty state.
    pub fn reset(&mut self) {
        self.page = None;
        self.meta = M::default();
    }
}

impl<M> Frame<M> {
    /// Create an occupied frame holding `page`.
    pub fn loaded(page: PageId, meta: M) -> Self {
        Self {
            page: Some(page),
            meta,
        }
    }

    /// The resident page, or `None` if the frame is empty.
    #[inline]
    pub fn page(&self) -> Option<PageId> {
        self.page
    }

    /// The resident page of a frame that must be occupied.
    ///
    /// # Panics
    /// Panics if the frame is empty. Stores only hand out occupied frames,
    /// so an empty one here means the store is corrupt.
    #[inline]
    pub fn resident_page(&self) -> PageId {
        match self.page {
            Some(page) => page,
            None => panic!("expected an occupied frame"),
        }
    }

    /// Check if the frame holds a page.
    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.page.is_some()
    }

    /// Check if this frame holds `page`.
    #[inline]
    pub fn holds(&self, page: PageId) -> bool {
        self.page == Some(page)
    }

    #[inline]
    pub fn meta(&self) -> &M {
        &self.meta
    }

    #[inline]
    pub fn meta_mut(&mut self) -> &mut M {
        &mut self.meta
    }

    /// Overwrite the frame in place with a new page.
    ///
    /// Returns the page that was resident before, if any.
    pub fn replace(&mut self, page: PageId, meta: M) -> Option<PageId> {
        self.meta = meta;
        self.page.replace(page)
    }
}

impl<M: Default> Default for Frame<M> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Policy metadata as reported in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameMeta {
    /// FIFO/LRU: meaning carried by the position in the snapshot.
    Ordered,
    /// Clock reference bit.
    Referenced(bool),
    /// LFU access count.
    Frequency(u64),
}

/// Read-only view of one occupied frame, as produced by `snapshot()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameView {
    pub page: PageId,
    pub occupied: bool,
    pub meta: FrameMeta,
}

impl FrameView {
    pub(crate) fn new<M>(frame: &Frame<M>, meta: FrameMeta) -> Self {
        Self {
            page: frame.resident_page(),
            occupied: frame.is_occupied(),
            meta,
        }
    }
}

impl fmt::Display for FrameView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.occupied { "Occupied" } else { "Empty" };
        write!(f, "Page: {}, {}", self.page.0, state)?;
        match self.meta {
            FrameMeta::Ordered => Ok(()),
            FrameMeta::Referenced(bit) => write!(f, ", Ref: {}", u8::from(bit)),
            FrameMeta::Frequency(count) => write!(f, ", Freq: {}", count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_empty() {
        let frame: Frame<bool> = Frame::empty();
        assert!(!frame.is_occupied());
        assert_eq!(frame.page(), None);
        assert!(!*frame.meta());
        assert!(!frame.holds(PageId::new(0)));
        assert!(!frame.holds(PageId::new(u32::MAX)));
    }

    #[test]
    fn test_frame_holds_max_page() {
        let frame = Frame::loaded(PageId::new(u32::MAX), ());
        assert!(frame.is_occupied());
        assert_eq!(frame.page(), Some(PageId::new(u32::MAX)));
        assert_eq!(frame.resident_page(), PageId::new(u32::MAX));
    }

    #[test]
    #[should_panic(expected = "expected an occupied frame")]
    fn test_resident_page_of_empty_frame_panics() {
        let frame: Frame = Frame::empty();
        frame.resident_page();
    }

    #[test]
    fn test_frame_replace_in_place() {
        let mut frame: Frame<bool> = Frame::empty();
        assert_eq!(frame.replace(PageId::new(1), true), None);
        assert!(frame.holds(PageId::new(1)));

        assert_eq!(frame.replace(PageId::new(2), false), Some(PageId::new(1)));
        assert!(frame.holds(PageId::new(2)));
        assert!(!*frame.meta());
    }

    #[test]
    fn test_frame_reset() {
        let mut frame = Frame::loaded(PageId::new(9), 3u64);
        *frame.meta_mut() += 1;
        assert_eq!(*frame.meta(), 4);

        frame.reset();
        assert!(!frame.is_occupied());
        assert_eq!(frame.page(), None);
        assert_eq!(*frame.meta(), 0);
    }

    #[test]
    fn test_frame_view_display() {
        let frame = Frame::loaded(PageId::new(3), ());
        assert_eq!(
            FrameView::new(&frame, FrameMeta::Referenced(true)).to_string(),
            "Page: 3, Occupied, Ref: 1"
        );
        assert_eq!(
            FrameView::new(&frame, FrameMeta::Frequency(2)).to_string(),
            "Page: 3, Occupied, Freq: 2"
        );
        assert_eq!(
            FrameView::new(&frame, FrameMeta::Ordered).to_string(),
            "Page: 3, Occupied"
        );
    }
}
