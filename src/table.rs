//! Collected truth tables.
//!
//! A [`TruthTable`] holds the rows produced for one `show`/`show_ones`
//! instruction. Rows are pushed in discovery order and [`sorted`](TruthTable::sort)
//! by the binary number their input bits spell, first free variable being the
//! most significant bit.

use std::fmt;

use num_bigint::BigUint;

use crate::assignment::Assignment;

/// One line of a truth table.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    /// Input bits read as a binary number.
    pub key: BigUint,
    pub inputs: Vec<bool>,
    pub outputs: Vec<bool>,
}

impl Row {
    pub fn new(assignment: &Assignment, outputs: Vec<bool>) -> Self {
        Self {
            key: assignment.key(),
            inputs: assignment.iter().collect(),
            outputs,
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", bits(&self.inputs), bits(&self.outputs))
    }
}

fn bits(values: &[bool]) -> String {
    values
        .iter()
        .map(|&b| if b { "1" } else { "0" })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct TruthTable {
    inputs: Vec<String>,
    outputs: Vec<String>,
    rows: Vec<Row>,
    header: bool,
}

impl TruthTable {
    pub fn new(inputs: Vec<String>, outputs: Vec<String>) -> Self {
        Self {
            inputs,
            outputs,
            rows: Vec::new(),
            header: false,
        }
    }

    /// Render a line naming the columns above the rows.
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Names of the free variables, in declaration order.
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    /// Names of the shown variables, as listed in the instruction.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push(&mut self, row: Row) {
        debug_assert_eq!(row.inputs.len(), self.inputs.len());
        debug_assert_eq!(row.outputs.len(), self.outputs.len());
        self.rows.push(row);
    }

    /// Order rows by ascending key.
    pub fn sort(&mut self) {
        self.rows.sort_by(|a, b| a.key.cmp(&b.key));
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.header {
            writeln!(f, "{} | {}", self.inputs.join(" "), self.outputs.join(" "))?;
        }
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        writeln!(f)
    }
}
