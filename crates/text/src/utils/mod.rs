//! Utility modules.

pub mod cache;

pub use cache::{CacheStats, PhonemeCache};
