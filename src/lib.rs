//! # truth-rs: truth tables for a tiny boolean-logic language
//!
//! A program declares free variables, defines derived variables as boolean
//! expressions over previously bound names, and asks for truth tables:
//!
//! ```text
//! var a b;            # free variables
//! c = a and not b;    # derived variable
//! show c;             # every row
//! show_ones c;        # only rows where some output is 1
//! ```
//!
//! Each `show` prints one row per assignment of the free variables declared
//! so far, rows sorted by the binary number their input bits spell. `show_ones`
//! keeps only rows with at least one true output, and uses a three-valued
//! possible-value analysis to skip whole subtrees of assignments that cannot
//! produce such a row.
//!
//! ## Basic Usage
//!
//! ```rust
//! let output = truth_rs::run("var a b; c = a or b; show_ones c;").unwrap();
//! assert_eq!(output, "0 1 | 1\n1 0 | 1\n1 1 | 1\n\n");
//! ```
//!
//! Errors are reported through [`Error`], and no table is produced when any
//! step fails:
//!
//! ```rust
//! let err = truth_rs::run("var a; show a;").unwrap_err();
//! assert_eq!(err.to_string(), "variable 'a' was not assigned to an expression");
//! ```
//!
//! ## Core Components
//!
//! - **[`lexer`]** and **[`parser`]**: source text to a [`Program`](ast::Program).
//! - **[`scope`]**: declaration and assignment validation.
//! - **[`eval`]**: exact evaluation with per-row and per-table memoization.
//! - **[`possible`]**: sound over-approximation of reachable values.
//! - **[`engine`]**: backtracking enumeration, pruning and collection.
//! - **[`solver`]**: the driver tying it all together.

pub mod assignment;
pub mod ast;
pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod outcome;
pub mod parser;
pub mod possible;
pub mod scope;
pub mod solver;
pub mod table;

pub use config::Config;
pub use engine::ShowMode;
pub use error::{Error, Result};
pub use parser::parse;
pub use solver::{run, run_with_config, Solver};
pub use table::TruthTable;
