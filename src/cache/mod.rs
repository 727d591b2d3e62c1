//! Page cache engine.
//!
//! The page cache holds a fixed set of frames and decides, on every page
//! access, whether the page is resident and which page to discard when a
//! new one must be loaded into a full set of frames.
//!
//! # Components
//! - [`PageCache`] - The engine callers drive with `access(page)`
//! - [`Frame`] - A slot holding one page + policy metadata
//! - [`FrameStore`] - Lookup contract shared by all frame stores
//! - [`FrameList`] - Index-arena linked list used by FIFO, LRU and LFU
//! - [`CacheStats`] - Hit/miss/eviction counters
//! - [`policy`] - Eviction policy implementations

mod frame;
mod frame_list;
mod page_cache;
pub mod policy;
mod stats;
mod store;

pub use frame::{Frame, FrameMeta, FrameView};
pub use frame_list::FrameList;
pub use page_cache::PageCache;
pub use policy::{AccessOutcome, EvictionPolicy};
pub use stats::CacheStats;
pub use store::FrameStore;
