//! Expression trees and programs.
//!
//! Expressions are stored in an [`ExprArena`]: every node is appended once and
//! never mutated, so its [`ExprId`] is a stable identity that the evaluators
//! use as a memoization key.

use std::fmt;
use std::ops::Index;

/// Index of an expression node inside an [`ExprArena`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ExprId(usize);

impl ExprId {
    /// Return the position of the node in its arena.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A boolean expression node. Children are referenced by [`ExprId`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Expr {
    Const(bool),
    Var(String),
    Not(ExprId),
    And(ExprId, ExprId),
    Or(ExprId, ExprId),
}

impl Expr {
    /// Direct children of the node, left to right.
    pub fn children(&self) -> impl Iterator<Item = ExprId> {
        let (a, b) = match *self {
            Expr::Const(_) | Expr::Var(_) => (None, None),
            Expr::Not(a) => (Some(a), None),
            Expr::And(a, b) | Expr::Or(a, b) => (Some(a), Some(b)),
        };
        a.into_iter().chain(b)
    }
}

/// Append-only storage for expression nodes.
#[derive(Debug, Default, Clone)]
pub struct ExprArena {
    exprs: Vec<Expr>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    pub fn get(&self, id: ExprId) -> &Expr {
        &self.exprs[id.0]
    }

    fn alloc(&mut self, expr: Expr) -> ExprId {
        let id = ExprId(self.exprs.len());
        self.exprs.push(expr);
        id
    }

    pub fn mk_const(&mut self, value: bool) -> ExprId {
        self.alloc(Expr::Const(value))
    }

    pub fn mk_var(&mut self, name: impl Into<String>) -> ExprId {
        self.alloc(Expr::Var(name.into()))
    }

    pub fn mk_not(&mut self, inner: ExprId) -> ExprId {
        self.alloc(Expr::Not(inner))
    }

    pub fn mk_and(&mut self, lhs: ExprId, rhs: ExprId) -> ExprId {
        self.alloc(Expr::And(lhs, rhs))
    }

    pub fn mk_or(&mut self, lhs: ExprId, rhs: ExprId) -> ExprId {
        self.alloc(Expr::Or(lhs, rhs))
    }

    /// Render the expression rooted at `id` in source syntax.
    ///
    /// Binary nodes are always parenthesized, so the output parses back to
    /// the same tree shape.
    pub fn display(&self, id: ExprId) -> ExprDisplay<'_> {
        ExprDisplay { arena: self, id }
    }
}

impl Index<ExprId> for ExprArena {
    type Output = Expr;

    fn index(&self, id: ExprId) -> &Self::Output {
        self.get(id)
    }
}

pub struct ExprDisplay<'a> {
    arena: &'a ExprArena,
    id: ExprId,
}

impl fmt::Display for ExprDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sub = |id| self.arena.display(id);
        match self.arena.get(self.id) {
            Expr::Const(true) => write!(f, "True"),
            Expr::Const(false) => write!(f, "False"),
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Not(a) => write!(f, "not {}", sub(*a)),
            Expr::And(a, b) => write!(f, "({} and {})", sub(*a), sub(*b)),
            Expr::Or(a, b) => write!(f, "({} or {})", sub(*a), sub(*b)),
        }
    }
}

/// A single top-level statement.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Instruction {
    /// `var a b c;`
    Declare(Vec<String>),
    /// `name = expr;`
    Assign { name: String, expr: ExprId },
    /// `show a b;`
    Show(Vec<String>),
    /// `show_ones a b;`
    ShowOnes(Vec<String>),
}

/// A parsed program: instructions in source order plus the arena that owns
/// their expressions.
#[derive(Debug, Default, Clone)]
pub struct Program {
    pub arena: ExprArena,
    pub instructions: Vec<Instruction>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare<S: Into<String>>(&mut self, names: impl IntoIterator<Item = S>) {
        let names = names.into_iter().map(Into::into).collect();
        self.instructions.push(Instruction::Declare(names));
    }

    pub fn assign(&mut self, name: impl Into<String>, expr: ExprId) {
        self.instructions.push(Instruction::Assign {
            name: name.into(),
            expr,
        });
    }

    pub fn show<S: Into<String>>(&mut self, outputs: impl IntoIterator<Item = S>) {
        let outputs = outputs.into_iter().map(Into::into).collect();
        self.instructions.push(Instruction::Show(outputs));
    }

    pub fn show_ones<S: Into<String>>(&mut self, outputs: impl IntoIterator<Item = S>) {
        let outputs = outputs.into_iter().map(Into::into).collect();
        self.instructions.push(Instruction::ShowOnes(outputs));
    }
}
