//! Semantic validation of declarations and assignments.
//!
//! A [`Scope`] is built instruction by instruction, in source order. It holds
//! the free variables (in declaration order) and the derived variables with
//! their expressions. Every name is bound at most once, and an assigned
//! expression may only reference names that are bound before it.

use std::collections::HashMap;

use crate::ast::{Expr, ExprArena, ExprId};
use crate::error::SemanticError;

/// What a name refers to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Binding {
    /// A free variable, with its position in declaration order.
    Free(usize),
    /// A derived variable defined by an expression.
    Derived(ExprId),
}

#[derive(Debug, Default, Clone)]
pub struct Scope {
    free: Vec<String>,
    bindings: HashMap<String, Binding>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Free variables in declaration order.
    pub fn free_vars(&self) -> &[String] {
        &self.free
    }

    pub fn num_free(&self) -> usize {
        self.free.len()
    }

    pub fn resolve(&self, name: &str) -> Option<Binding> {
        self.bindings.get(name).copied()
    }

    /// Expression of a derived variable.
    pub fn derived(&self, name: &str) -> Option<ExprId> {
        match self.resolve(name)? {
            Binding::Derived(expr) => Some(expr),
            Binding::Free(_) => None,
        }
    }

    /// Handle `var names;`.
    pub fn declare(&mut self, names: &[String]) -> Result<(), SemanticError> {
        for name in names {
            match self.resolve(name) {
                Some(Binding::Free(_)) => return Err(SemanticError::DuplicateDeclaration(name.clone())),
                Some(Binding::Derived(_)) => return Err(SemanticError::Redefinition(name.clone())),
                None => {}
            }
            self.bindings.insert(name.clone(), Binding::Free(self.free.len()));
            self.free.push(name.clone());
        }
        Ok(())
    }

    /// Handle `name = expr;`.
    pub fn assign(&mut self, arena: &ExprArena, name: &str, expr: ExprId) -> Result<(), SemanticError> {
        if self.resolve(name).is_some() {
            return Err(SemanticError::Redefinition(name.to_string()));
        }
        self.check_expr(arena, expr)?;
        self.bindings.insert(name.to_string(), Binding::Derived(expr));
        Ok(())
    }

    /// Every variable inside `expr` must already be bound.
    ///
    /// The whole tree is checked, including operands that short-circuit
    /// evaluation would never reach.
    fn check_expr(&self, arena: &ExprArena, expr: ExprId) -> Result<(), SemanticError> {
        let mut stack = vec![expr];
        while let Some(id) = stack.pop() {
            let node = arena.get(id);
            if let Expr::Var(name) = node {
                if self.resolve(name).is_none() {
                    return Err(SemanticError::UndefinedVariable(name.clone()));
                }
            }
            // Push right child first so that the leftmost undefined name is reported.
            let children: Vec<ExprId> = node.children().collect();
            stack.extend(children.into_iter().rev());
        }
        Ok(())
    }

    /// Resolve the targets of `show`/`show_ones` to their expressions.
    pub fn check_outputs(&self, outputs: &[String]) -> Result<Vec<ExprId>, SemanticError> {
        outputs
            .iter()
            .map(|name| {
                self.derived(name)
                    .ok_or_else(|| SemanticError::UnassignedOutput(name.clone()))
            })
            .collect()
    }
}
