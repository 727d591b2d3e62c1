//! Page identifiers.

use std::fmt;

/// An opaque page number.
///
/// Every `u32` names a real page; there is no reserved value. Whether a
/// frame holds a page is tracked by the frame itself, see
/// [`Frame::page`](crate::cache::Frame::page).
///
/// ```
/// use pagecache::PageId;
///
/// assert_eq!(PageId::from(u32::MAX).to_string(), "Page(4294967295)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }
}

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}
