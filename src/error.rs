//! Error types for every stage of a run.
//!
//! All errors are fatal: the first one aborts the whole run and no tables are
//! produced.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Malformed source text detected while tokenizing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character {ch:?} at line {line}, column {column}")]
    UnexpectedCharacter { ch: char, line: usize, column: usize },
}

/// Malformed token stream detected while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found} at line {line}, column {column}")]
    UnexpectedToken {
        expected: String,
        found: String,
        line: usize,
        column: usize,
    },
}

/// Invalid declarations, assignments or output requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    /// The same name appears in two `var` declarations.
    #[error("variable '{0}' is declared more than once")]
    DuplicateDeclaration(String),

    /// An assignment (or declaration) targets a name that is already bound.
    #[error("identifier '{0}' has already been declared or assigned")]
    Redefinition(String),

    /// An expression references a name that is not bound yet.
    #[error("undefined variable '{0}' used in expression")]
    UndefinedVariable(String),

    /// A `show`/`show_ones` target is not a derived variable.
    #[error("variable '{0}' was not assigned to an expression")]
    UnassignedOutput(String),
}

/// Any error produced while running a program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Semantic(#[from] SemanticError),
}

impl ParseError {
    pub fn unexpected(expected: impl Into<String>, found: impl Into<String>, line: usize, column: usize) -> Self {
        ParseError::UnexpectedToken {
            expected: expected.into(),
            found: found.into(),
            line,
            column,
        }
    }

    /// Source position of the offending token.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ParseError::UnexpectedToken { line, column, .. } => (*line, *column),
        }
    }
}
