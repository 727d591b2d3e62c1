//! Error types for the page cache.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Recoverable errors raised by the page cache.
///
/// Page accesses never fail: every page identifier is valid input. Errors
/// only arise while building a cache. Corrupted internal state is not an
/// error value; it panics at the point of detection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A cache was requested with no frames.
    #[error("Invalid capacity {0}: a cache needs at least one frame")]
    InvalidCapacity(usize),

    /// A policy name did not match any known eviction policy.
    #[error("Unknown eviction policy: {0:?} (expected fifo, lru, clock or lfu)")]
    UnknownPolicy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidCapacity(0);
        assert_eq!(
            format!("{}", err),
            "Invalid capacity 0: a cache needs at least one frame"
        );

        let err = Error::UnknownPolicy("mru".to_string());
        assert!(format!("{}", err).contains("\"mru\""));
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Err(Error::InvalidCapacity(0))
        }

        assert_eq!(might_fail(), Err(Error::InvalidCapacity(0)));
    }
}
