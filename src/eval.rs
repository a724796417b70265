//! Exact evaluation under a complete assignment.
//!
//! [`Evaluator`] walks an expression with short-circuit `and`/`or`, resolving
//! free variables from the assignment and derived variables through their
//! expressions. Two caches avoid recomputation:
//!
//! - a per-row node memo keyed by [`ExprId`], cleared by
//!   [`start_row`](Evaluator::start_row), so every node is evaluated at most
//!   once per assignment;
//! - a `(derived name, assignment)` cache that lives as long as the evaluator,
//!   i.e. one table.

use crate::assignment::Assignment;
use crate::ast::{Expr, ExprArena, ExprId};
use crate::cache::{Cache, CacheStats, NodeMemo};
use crate::scope::{Binding, Scope};

/// Read-only view of a validated program shared by the evaluators.
#[derive(Debug, Copy, Clone)]
pub struct Context<'a> {
    pub arena: &'a ExprArena,
    pub scope: &'a Scope,
}

impl<'a> Context<'a> {
    pub fn new(arena: &'a ExprArena, scope: &'a Scope) -> Self {
        Self { arena, scope }
    }

    pub(crate) fn binding(&self, name: &str) -> Binding {
        match self.scope.resolve(name) {
            Some(binding) => binding,
            None => panic!("variable '{}' passed validation but is not bound", name),
        }
    }
}

pub struct Evaluator<'a> {
    ctx: Context<'a>,
    node_memo: NodeMemo<bool>,
    derived_cache: Cache<(&'a str, Assignment), bool>,
}

impl<'a> Evaluator<'a> {
    pub fn new(ctx: Context<'a>, cache_bits: usize) -> Self {
        Self {
            ctx,
            node_memo: NodeMemo::with_capacity(ctx.arena.len()),
            derived_cache: Cache::new(cache_bits),
        }
    }

    /// Begin evaluating under a new assignment.
    pub fn start_row(&mut self) {
        self.node_memo.clear();
    }

    /// Value of the variable `name`.
    pub fn value_of(&mut self, name: &'a str, assignment: &Assignment) -> bool {
        match self.ctx.binding(name) {
            Binding::Free(position) => free_value(name, position, assignment),
            Binding::Derived(expr) => self.derived_value(name, expr, assignment),
        }
    }

    /// Value of the expression `id`.
    ///
    /// `assignment` must bind every free variable the expression depends on.
    pub fn evaluate(&mut self, id: ExprId, assignment: &Assignment) -> bool {
        if let Some(value) = self.node_memo.get(id) {
            return value;
        }
        let arena = self.ctx.arena;
        let value = match arena.get(id) {
            Expr::Const(value) => *value,
            Expr::Var(name) => self.value_of(name, assignment),
            Expr::Not(inner) => !self.evaluate(*inner, assignment),
            Expr::And(lhs, rhs) => self.evaluate(*lhs, assignment) && self.evaluate(*rhs, assignment),
            Expr::Or(lhs, rhs) => self.evaluate(*lhs, assignment) || self.evaluate(*rhs, assignment),
        };
        self.node_memo.insert(id, value);
        value
    }

    fn derived_value(&mut self, name: &'a str, expr: ExprId, assignment: &Assignment) -> bool {
        let key = (name, assignment.clone());
        if let Some(value) = self.derived_cache.get(&key) {
            return value;
        }
        let value = self.evaluate(expr, assignment);
        self.derived_cache.insert(key, value);
        value
    }

    /// Statistics of the node memo and the derived-variable cache.
    pub fn stats(&self) -> (CacheStats, CacheStats) {
        (self.node_memo.stats(), self.derived_cache.stats())
    }
}

fn free_value(name: &str, position: usize, assignment: &Assignment) -> bool {
    match assignment.get(position) {
        Some(value) => value,
        None => panic!("free variable '{}' is not bound by {}", name, assignment),
    }
}
