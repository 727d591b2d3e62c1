//! Configuration for a page cache instance.

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, Result};

/// Number of frames used when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 4;

/// Length of the reference workloads the simulator was built around.
pub const DEFAULT_WORKLOAD_LEN: usize = 10;

/// The eviction policies a cache can be built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    /// First-In-First-Out: evict the oldest loaded page.
    Fifo,
    /// Least-Recently-Used: evict the page untouched for longest.
    Lru,
    /// Second-Chance: sweep a ring of reference bits.
    Clock,
    /// Least-Frequently-Used: evict the page with the fewest accesses.
    Lfu,
}

impl PolicyKind {
    /// All supported policies, in a stable order.
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Fifo,
        PolicyKind::Lru,
        PolicyKind::Clock,
        PolicyKind::Lfu,
    ];

    /// Short lower-case name, the form accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "fifo",
            PolicyKind::Lru => "lru",
            PolicyKind::Clock => "clock",
            PolicyKind::Lfu => "lfu",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name().to_ascii_uppercase())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            "clock" | "second-chance" => Ok(PolicyKind::Clock),
            "lfu" => Ok(PolicyKind::Lfu),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

/// Construction parameters for a [`PageCache`](crate::PageCache).
///
/// # Example
/// ```
/// use pagecache::{CacheConfig, PolicyKind};
///
/// let config = CacheConfig::new(PolicyKind::Lru).with_capacity(8);
/// assert_eq!(config.capacity, 8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Number of frames. Fixed for the lifetime of the cache.
    pub capacity: usize,
    /// Eviction policy to run.
    pub policy: PolicyKind,
}

impl CacheConfig {
    /// Config for `policy` with [`DEFAULT_CAPACITY`] frames.
    pub fn new(policy: PolicyKind) -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            policy,
        }
    }

    /// Set the number of frames.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Check the config can build a cache.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::InvalidCapacity(self.capacity));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new(PolicyKind::Lru)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parse() {
        assert_eq!("fifo".parse::<PolicyKind>(), Ok(PolicyKind::Fifo));
        assert_eq!("LRU".parse::<PolicyKind>(), Ok(PolicyKind::Lru));
        assert_eq!(" Clock ".parse::<PolicyKind>(), Ok(PolicyKind::Clock));
        assert_eq!("second-chance".parse::<PolicyKind>(), Ok(PolicyKind::Clock));
        assert_eq!("lfu".parse::<PolicyKind>(), Ok(PolicyKind::Lfu));
        assert_eq!(
            "mru".parse::<PolicyKind>(),
            Err(Error::UnknownPolicy("mru".to_string()))
        );
    }

    #[test]
    fn test_policy_display_round_trips_through_name() {
        for kind in PolicyKind::ALL {
            assert_eq!(kind.to_string().parse::<PolicyKind>(), Ok(kind));
        }
        assert_eq!(PolicyKind::Lfu.to_string(), "LFU");
    }

    #[test]
    fn test_config_defaults() {
        let config = CacheConfig::default();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert_eq!(config.policy, PolicyKind::Lru);
    }

    #[test]
    fn test_config_rejects_zero_capacity() {
        let config = CacheConfig::new(PolicyKind::Fifo).with_capacity(0);
        assert_eq!(config.validate(), Err(Error::InvalidCapacity(0)));
    }
}
