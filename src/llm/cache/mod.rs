/// In-memory memoisation cache keyed by the full request tuple.
pub mod memory;

pub use memory::{CacheConfig, CacheMetrics, MemoCache};
