//! Dense per-node memo with generation-based O(1) clearing.
//!
//! Slots are indexed directly by [`ExprId`]. Each stored value is stamped with
//! the current generation; [`clear`](NodeMemo::clear) just bumps the
//! generation, so stale slots read as empty. The exact evaluator clears the
//! memo at every row, which makes it a "node evaluated at most once per full
//! assignment" table without touching the slots.

use crate::ast::ExprId;

use super::CacheStats;

#[derive(Debug, Default, Copy, Clone)]
struct Slot<V> {
    value: V,
    /// 0 means never written.
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct NodeMemo<V> {
    slots: Vec<Slot<V>>,
    generation: u64,
    hits: usize,
    misses: usize,
}

impl<V> Default for NodeMemo<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> NodeMemo<V> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            generation: 1,
            hits: 0,
            misses: 0,
        }
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
        }
    }

    /// Forget every stored value.
    pub fn clear(&mut self) {
        self.generation += 1;
    }
}

impl<V> NodeMemo<V>
where
    V: Copy + Default,
{
    /// Creates a memo with slots for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        let mut memo = Self::new();
        memo.slots.resize_with(nodes, Slot::default);
        memo
    }

    #[inline]
    pub fn get(&mut self, id: ExprId) -> Option<V> {
        match self.slots.get(id.index()) {
            Some(slot) if slot.generation == self.generation => {
                self.hits += 1;
                Some(slot.value)
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    #[inline]
    pub fn insert(&mut self, id: ExprId, value: V) {
        let index = id.index();
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, Slot::default);
        }
        self.slots[index] = Slot {
            value,
            generation: self.generation,
        };
    }
}
