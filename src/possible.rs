//! Possible-value analysis under a partial assignment.
//!
//! [`Analyzer::possible_values`] over-approximates the set of values an
//! expression can take once the partial assignment is completed: it never
//! omits a reachable value but may include unreachable ones (e.g. `a and not a`
//! with `a` unbound yields `{true, false}`). The enumeration engine only uses
//! it to abandon `show_ones` subtrees, never to compute output values.

use crate::assignment::Assignment;
use crate::ast::{Expr, ExprId};
use crate::cache::{Cache, CacheStats};
use crate::eval::Context;
use crate::outcome::Outcome;
use crate::scope::Binding;

pub struct Analyzer<'a> {
    ctx: Context<'a>,
    cache: Cache<(ExprId, Assignment), Outcome>,
}

impl<'a> Analyzer<'a> {
    pub fn new(ctx: Context<'a>, cache_bits: usize) -> Self {
        Self {
            ctx,
            cache: Cache::new(cache_bits),
        }
    }

    pub fn possible_values(&mut self, id: ExprId, partial: &Assignment) -> Outcome {
        let key = (id, partial.clone());
        if let Some(outcome) = self.cache.get(&key) {
            return outcome;
        }
        let arena = self.ctx.arena;
        let outcome = match arena.get(id) {
            Expr::Const(value) => Outcome::of(*value),
            Expr::Var(name) => match self.ctx.binding(name) {
                Binding::Free(position) => partial.get(position).map_or(Outcome::BOTH, Outcome::of),
                Binding::Derived(expr) => self.possible_values(expr, partial),
            },
            Expr::Not(inner) => !self.possible_values(*inner, partial),
            Expr::And(lhs, rhs) => {
                let left = self.possible_values(*lhs, partial);
                if left.is_exactly(false) {
                    Outcome::FALSE
                } else {
                    left & self.possible_values(*rhs, partial)
                }
            }
            Expr::Or(lhs, rhs) => {
                let left = self.possible_values(*lhs, partial);
                if left.is_exactly(true) {
                    Outcome::TRUE
                } else {
                    left | self.possible_values(*rhs, partial)
                }
            }
        };
        self.cache.insert(key, outcome);
        outcome
    }

    /// True if at least one of `outputs` can still evaluate to true.
    pub fn any_can_be_true(&mut self, outputs: &[ExprId], partial: &Assignment) -> bool {
        outputs
            .iter()
            .any(|&output| self.possible_values(output, partial).can_be_true())
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
