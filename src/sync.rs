//! Shared handle for driving one cache from several threads.
//!
//! [`PageCache`] assumes a single caller. [`SharedPageCache`] puts the whole
//! cache behind one mutex so each `access` runs to completion before the
//! next caller gets in.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::{AccessOutcome, CacheStats, FrameView, PageCache};
use crate::common::{CacheConfig, PageId, Result};

/// Clonable, thread-safe handle to a [`PageCache`].
///
/// # Example
/// ```
/// use pagecache::{CacheConfig, PageId, PolicyKind, SharedPageCache};
///
/// let cache = SharedPageCache::new(CacheConfig::new(PolicyKind::Lru))?;
/// let handle = cache.clone();
/// std::thread::spawn(move || handle.access(PageId::new(1)))
///     .join()
///     .unwrap();
/// assert!(cache.access(PageId::new(1)).is_hit());
/// # Ok::<(), pagecache::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SharedPageCache {
    inner: Arc<Mutex<PageCache>>,
}

impl SharedPageCache {
    /// Build a new cache and wrap it.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `config.capacity` is 0
    pub fn new(config: CacheConfig) -> Result<Self> {
        Ok(Self::from(PageCache::new(config)?))
    }

    pub fn access(&self, page: PageId) -> AccessOutcome {
        self.inner.lock().access(page)
    }

    pub fn snapshot(&self) -> Vec<FrameView> {
        self.inner.lock().snapshot()
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    pub fn teardown(&self) {
        self.inner.lock().teardown();
    }

    /// Run `f` with exclusive access to the cache.
    pub fn with<R>(&self, f: impl FnOnce(&mut PageCache) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl From<PageCache> for SharedPageCache {
    fn from(cache: PageCache) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }
}
