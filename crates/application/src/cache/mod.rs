//! Two-tier read-through cache.
//!
//! The local tier is a sharded LRU bounded by entry count; the distributed
//! tier sits behind the [`DistributedCache`](crate::ports::DistributedCache)
//! port and is strictly best-effort. Expired local entries are retained as
//! stale shadows until the LRU pushes them out, which is what makes the
//! stale-read fallback under an open circuit possible.

pub mod local;
pub mod tiered;

pub use local::LocalCache;
pub use tiered::{CacheStats, TieredCache};
