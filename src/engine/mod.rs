//! Query helpers layered on top of the graph — path result caching.

pub mod cache;

pub use cache::{CacheStats, PathCache};
