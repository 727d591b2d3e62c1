//! pagecache - A page cache simulator with interchangeable eviction policies.
//!
//! Models how an operating system's page-replacement subsystem decides which
//! resident page to discard when a new page must be loaded into a full set
//! of physical frames.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           pagecache                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Callers (CLI, SharedPageCache, tests)             │   │
//! │  │          access(page) → AccessOutcome, snapshot()        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │       Page Cache (cache/)  [Selected at construction]    │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  Eviction Policies: FIFO | LRU | CLOCK | LFU    │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │      PageCache + CacheStats                              │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Frame Stores (cache/)                          │   │
//! │  │     FrameList (index arena) + ClockRing + Frame          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`cache`] - Page cache engine, frame stores and eviction policies
//! - [`sync`] - Mutex-wrapped handle for multi-threaded callers
//!
//! # Quick Start
//! ```
//! use pagecache::{PageCache, PageId, PolicyKind};
//!
//! let mut cache = PageCache::with_policy(PolicyKind::Lru, 4)?;
//! cache.run([1u32, 2, 3, 4, 1]);
//!
//! // Page 2 is now the least recently used
//! let outcome = cache.access(PageId::new(5));
//! assert_eq!(outcome.evicted(), Some(PageId::new(2)));
//! # Ok::<(), pagecache::Error>(())
//! ```

pub mod cache;
pub mod common;
pub mod sync;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_CAPACITY, DEFAULT_WORKLOAD_LEN};
pub use common::{CacheConfig, Error, FrameId, PageId, PolicyKind, Result};

pub use cache::{AccessOutcome, CacheStats, EvictionPolicy, FrameMeta, FrameView, PageCache};
pub use sync::SharedPageCache;
