//! Program driver.
//!
//! The [`Solver`] processes the instructions of a parsed [`Program`] in source
//! order. Declarations and assignments extend the [`Scope`]; each `show` or
//! `show_ones` is enumerated against the scope as it stands at that point, so
//! variables declared afterwards do not appear in its table.

use log::{debug, info};

use crate::ast::{Instruction, Program};
use crate::config::Config;
use crate::engine::{Enumerator, ShowMode};
use crate::error::Result;
use crate::eval::Context;
use crate::parser::parse;
use crate::scope::Scope;
use crate::table::TruthTable;

pub struct Solver<'p> {
    program: &'p Program,
    config: Config,
}

impl<'p> Solver<'p> {
    pub fn new(program: &'p Program) -> Self {
        Self::with_config(program, Config::default())
    }

    pub fn with_config(program: &'p Program, config: Config) -> Self {
        Self { program, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate the program and compute one table per show instruction.
    ///
    /// Stops at the first semantic error.
    pub fn solve(&self) -> Result<Vec<TruthTable>> {
        let mut scope = Scope::new();
        let mut tables = Vec::new();
        for instruction in &self.program.instructions {
            match instruction {
                Instruction::Declare(names) => {
                    debug!("declare {:?}", names);
                    scope.declare(names)?;
                }
                Instruction::Assign { name, expr } => {
                    debug!("assign {} = {}", name, self.program.arena.display(*expr));
                    scope.assign(&self.program.arena, name, *expr)?;
                }
                Instruction::Show(outputs) => {
                    tables.push(self.enumerate(&scope, outputs, ShowMode::All)?);
                }
                Instruction::ShowOnes(outputs) => {
                    tables.push(self.enumerate(&scope, outputs, ShowMode::Ones)?);
                }
            }
        }
        Ok(tables)
    }

    fn enumerate<'a>(&'a self, scope: &'a Scope, outputs: &'a [String], mode: ShowMode) -> Result<TruthTable> {
        info!(
            "enumerating {:?} ({:?}) over {} free variables",
            outputs,
            mode,
            scope.num_free()
        );
        let ctx = Context::new(&self.program.arena, scope);
        let table = Enumerator::new(ctx, outputs, mode, &self.config)?.run();
        info!("table has {} rows", table.len());
        Ok(table)
    }
}

/// Parse, validate and evaluate `source`, returning every table rendered.
pub fn run(source: &str) -> Result<String> {
    run_with_config(source, Config::default())
}

pub fn run_with_config(source: &str, config: Config) -> Result<String> {
    let program = parse(source)?;
    info!("parsed {} instructions", program.instructions.len());
    let tables = Solver::with_config(&program, config).solve()?;
    Ok(tables.iter().map(|table| table.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::error::{Error, SemanticError};

    #[test]
    fn test_run() {
        let output = run("var a b; c = a and b; show c;").unwrap();
        assert_eq!(output, "0 0 | 0\n0 1 | 0\n1 0 | 0\n1 1 | 1\n\n");
    }

    #[test]
    fn test_tables_in_order() {
        let program = parse("var a; x = a; show_ones x; y = not a; show y;").unwrap();
        let tables = Solver::new(&program).solve().unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].to_string(), "1 | 1\n\n");
        assert_eq!(tables[1].to_string(), "0 | 1\n1 | 0\n\n");
    }

    #[test]
    fn test_scope_at_show_time() {
        let program = parse("var a; x = not a; show x; var b; show x;").unwrap();
        let tables = Solver::new(&program).solve().unwrap();
        assert_eq!(tables[0].inputs(), ["a".to_string()]);
        assert_eq!(tables[1].inputs(), ["a".to_string(), "b".to_string()]);
        assert_eq!(tables[1].len(), 4);
    }

    #[test]
    fn test_error_discards_tables() {
        let result = run("var a; x = a; show x; show y;");
        assert_eq!(
            result,
            Err(Error::Semantic(SemanticError::UnassignedOutput("y".to_string())))
        );
    }

    #[test]
    fn test_header() {
        let config = Config::default().with_header(true);
        let output = run_with_config("var a; x = not a; show_ones x;", config).unwrap();
        assert_eq!(output, "a | x\n0 | 1\n\n");
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(run("").unwrap(), "");
        assert_eq!(run("# nothing to show\nvar a;").unwrap(), "");
    }
}
