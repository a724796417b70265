//! Backtracking enumeration of assignments.
//!
//! The [`Enumerator`] walks the binary tree of assignments to the free
//! variables depth-first, trying `true` before `false` for each variable. In
//! [`ShowMode::Ones`] a subtree is abandoned as soon as the [`Analyzer`] proves
//! that no output can become true under the partial assignment. Rows reaching
//! a leaf are evaluated exactly by the [`Evaluator`] and collected into a
//! [`TruthTable`], which is sorted before it is returned.

use std::fmt;

use log::{debug, trace};

use crate::assignment::Assignment;
use crate::ast::ExprId;
use crate::config::Config;
use crate::error::SemanticError;
use crate::eval::{Context, Evaluator};
use crate::possible::Analyzer;
use crate::table::{Row, TruthTable};

/// Which rows a table keeps.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShowMode {
    /// Every assignment (`show`).
    All,
    /// Only assignments where at least one output is true (`show_ones`).
    Ones,
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct EnumerationStats {
    /// Complete assignments evaluated.
    pub leaves: usize,
    /// Subtrees cut by the possible-value analysis.
    pub pruned: usize,
    /// Complete assignments dropped because every output was false.
    pub rejected: usize,
}

impl fmt::Display for EnumerationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} leaves, {} pruned, {} rejected",
            self.leaves, self.pruned, self.rejected
        )
    }
}

pub struct Enumerator<'a> {
    ctx: Context<'a>,
    outputs: &'a [String],
    output_exprs: Vec<ExprId>,
    mode: ShowMode,
    pruning: bool,
    evaluator: Evaluator<'a>,
    analyzer: Analyzer<'a>,
    table: TruthTable,
    stats: EnumerationStats,
}

impl<'a> Enumerator<'a> {
    /// Prepare the enumeration of `outputs` over the free variables of `ctx`.
    ///
    /// Fails if some output is not a derived variable.
    pub fn new(ctx: Context<'a>, outputs: &'a [String], mode: ShowMode, config: &Config) -> Result<Self, SemanticError> {
        let output_exprs = ctx.scope.check_outputs(outputs)?;
        let table = TruthTable::new(ctx.scope.free_vars().to_vec(), outputs.to_vec()).with_header(config.header);
        Ok(Self {
            ctx,
            outputs,
            output_exprs,
            mode,
            pruning: config.pruning && mode == ShowMode::Ones,
            evaluator: Evaluator::new(ctx, config.cache_bits),
            analyzer: Analyzer::new(ctx, config.cache_bits),
            table,
            stats: EnumerationStats::default(),
        })
    }

    /// Enumerate every assignment and return the sorted table.
    pub fn run(mut self) -> TruthTable {
        let num_free = self.ctx.scope.num_free();
        let mut assignment = Assignment::with_capacity(num_free);
        self.explore(&mut assignment, num_free);
        self.table.sort();

        debug!("enumeration of {:?} ({:?}): {}", self.outputs, self.mode, self.stats);
        let (memo, derived) = self.evaluator.stats();
        debug!("node memo: {}", memo);
        debug!("derived cache: {}", derived);
        if self.pruning {
            debug!("possible-value cache: {}", self.analyzer.stats());
        }
        self.table
    }

    fn explore(&mut self, assignment: &mut Assignment, num_free: usize) {
        if assignment.len() == num_free {
            self.collect(assignment);
            return;
        }
        for value in [true, false] {
            assignment.push(value);
            if self.pruning && !self.analyzer.any_can_be_true(&self.output_exprs, assignment) {
                trace!("prune at {}", assignment);
                self.stats.pruned += 1;
            } else {
                self.explore(assignment, num_free);
            }
            assignment.pop();
        }
    }

    fn collect(&mut self, assignment: &Assignment) {
        self.stats.leaves += 1;
        self.evaluator.start_row();
        let outputs = self.outputs;
        let values: Vec<bool> = outputs
            .iter()
            .map(|name| self.evaluator.value_of(name, assignment))
            .collect();
        if self.mode == ShowMode::Ones && !values.iter().any(|&v| v) {
            self.stats.rejected += 1;
            return;
        }
        self.table.push(Row::new(assignment, values));
    }

    pub fn stats(&self) -> EnumerationStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::ast::{Instruction, Program};
    use crate::parser::parse;
    use crate::scope::Scope;

    fn load(source: &str) -> (Program, Scope) {
        let program = parse(source).unwrap();
        let mut scope = Scope::new();
        for instruction in &program.instructions {
            match instruction {
                Instruction::Declare(names) => scope.declare(names).unwrap(),
                Instruction::Assign { name, expr } => scope.assign(&program.arena, name, *expr).unwrap(),
                _ => {}
            }
        }
        (program, scope)
    }

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn rendered(table: &TruthTable) -> Vec<String> {
        table.rows().iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn test_show_all() {
        let (program, scope) = load("var a b; c = a and b;");
        let outputs = names(&["c"]);
        let ctx = Context::new(&program.arena, &scope);
        let table = Enumerator::new(ctx, &outputs, ShowMode::All, &Config::default())
            .unwrap()
            .run();
        assert_eq!(rendered(&table), ["0 0 | 0", "0 1 | 0", "1 0 | 0", "1 1 | 1"]);
    }

    #[test]
    fn test_show_ones() {
        let (program, scope) = load("var a b; c = a or b;");
        let outputs = names(&["c"]);
        let ctx = Context::new(&program.arena, &scope);
        let table = Enumerator::new(ctx, &outputs, ShowMode::Ones, &Config::default())
            .unwrap()
            .run();
        assert_eq!(rendered(&table), ["0 1 | 1", "1 0 | 1", "1 1 | 1"]);
    }

    #[test]
    fn test_no_free_variables() {
        let (program, scope) = load("x = True;");
        let outputs = names(&["x"]);
        let ctx = Context::new(&program.arena, &scope);
        let table = Enumerator::new(ctx, &outputs, ShowMode::All, &Config::default())
            .unwrap()
            .run();
        assert_eq!(rendered(&table), [" | 1"]);
    }

    #[test]
    fn test_unassigned_output() {
        let (program, scope) = load("var a;");
        let outputs = names(&["a"]);
        let ctx = Context::new(&program.arena, &scope);
        let result = Enumerator::new(ctx, &outputs, ShowMode::All, &Config::default());
        assert!(matches!(result, Err(SemanticError::UnassignedOutput(name)) if name == "a"));
    }

    #[test]
    fn test_pruning_cuts_subtrees() {
        // Only a=1, b=1 can make c true: the a=0 subtree is cut right away.
        let (program, scope) = load("var a b c; d = a and b and c;");
        let outputs = names(&["d"]);
        let ctx = Context::new(&program.arena, &scope);
        let mut enumerator = Enumerator::new(ctx, &outputs, ShowMode::Ones, &Config::default()).unwrap();
        let mut assignment = Assignment::new();
        enumerator.explore(&mut assignment, 3);
        let stats = enumerator.stats();
        assert_eq!(stats.leaves, 1);
        assert_eq!(stats.pruned, 3);
        assert_eq!(stats.rejected, 0);
        assert_eq!(rendered(&enumerator.table), ["1 1 1 | 1"]);
    }

    #[test]
    fn test_pruning_disabled() {
        let (program, scope) = load("var a b c; d = a and b and c;");
        let outputs = names(&["d"]);
        let ctx = Context::new(&program.arena, &scope);
        let config = Config::default().with_pruning(false);
        let mut enumerator = Enumerator::new(ctx, &outputs, ShowMode::Ones, &config).unwrap();
        let mut assignment = Assignment::new();
        enumerator.explore(&mut assignment, 3);
        let stats = enumerator.stats();
        assert_eq!(stats.leaves, 8);
        assert_eq!(stats.pruned, 0);
        assert_eq!(stats.rejected, 7);
    }

    #[test]
    fn test_multiple_outputs() {
        let (program, scope) = load("var a; x = a; y = not a;");
        let outputs = names(&["x", "y", "x"]);
        let ctx = Context::new(&program.arena, &scope);
        let table = Enumerator::new(ctx, &outputs, ShowMode::Ones, &Config::default())
            .unwrap()
            .run();
        assert_eq!(rendered(&table), ["0 | 0 1 0", "1 | 1 0 1"]);
        assert_eq!(table.outputs(), &outputs[..]);
    }
}
