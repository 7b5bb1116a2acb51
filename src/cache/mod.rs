//! Cache Module
//!
//! Provides the bounded in-memory flag cache with LRU eviction.

mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::FlagEntry;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::FlagStore;

// == Public Constants ==
/// Number of flags kept in memory unless configured otherwise
pub const DEFAULT_CAPACITY: usize = 1024;
