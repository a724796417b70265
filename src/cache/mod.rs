//! Memoization tables for the evaluators.
//!
//! | Implementation | Key | Clear | Used for |
//! |----------------|-----|-------|----------|
//! | [`HashMapCache`] | any `Hash + Eq` key | O(n) | `(name, assignment)` and `(node, partial assignment)` caches |
//! | [`NodeMemo`] | [`ExprId`](crate::ast::ExprId) | O(1) | per-row node memo of the exact evaluator |
//!
//! Both count hits and misses; [`CacheStats`] is what gets logged after each
//! table.

use std::fmt;

mod hashmap;
mod memo;

pub use hashmap::HashMapCache;
pub use memo::NodeMemo;

/// Default cache implementation.
pub type Cache<K, V> = HashMapCache<K, V>;

/// Hit/miss counters of a cache.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}

impl CacheStats {
    pub fn lookups(&self) -> usize {
        self.hits + self.misses
    }

    pub fn hit_rate(&self) -> f64 {
        let total = self.lookups();
        if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hits, {} misses ({:.1}%)",
            self.hits,
            self.misses,
            self.hit_rate() * 100.0
        )
    }
}
