//! Common types shared across the page cache.
//!
//! This module contains the fundamental primitives used throughout the crate:
//! - Configuration ([`CacheConfig`], [`PolicyKind`])
//! - Error types
//! - Identifiers (PageId, FrameId)

pub mod config;
pub mod error;
mod frame_id;
mod page_id;

pub use config::{CacheConfig, PolicyKind};
pub use error::{Error, Result};
pub use frame_id::FrameId;
pub use page_id::PageId;
