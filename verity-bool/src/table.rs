/*! Implements truth tables: the enumeration of every truth assignment over a set
of equations' variables, and the evaluation of each equation on each row. */

use crate::{
    eval::{self, Assignment},
    syntax::Equation,
};
use itertools::Itertools;

/// Represents a truth table over a set of equations. The columns are the union of
/// the equations' variables in alphabetical order; the rows cover every truth
/// assignment of those variables.
///
/// **Example**:
/// ```rust
/// use verity_bool::{syntax::Equation, table::TruthTable};
///
/// let equations: Vec<Equation> = vec!["A*B".parse().unwrap(), "B*A".parse().unwrap()];
/// let table = TruthTable::new(&equations);
///
/// assert_eq!(&['A', 'B'], table.variables());
/// assert_eq!(4, table.row_count());
/// assert_eq!(true, table.equivalent().unwrap());
/// ```
pub struct TruthTable<'a> {
    equations: &'a [Equation],
    variables: Vec<char>,
}

impl<'a> TruthTable<'a> {
    /// Creates a truth table over `equations`.
    pub fn new(equations: &'a [Equation]) -> Self {
        let variables = equations
            .iter()
            .flat_map(|eqn| eqn.variables())
            .copied()
            .unique()
            .sorted();

        Self {
            equations,
            variables,
        }
    }

    /// Returns the variable columns of the receiver, in alphabetical order.
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// Returns the equations tabulated by the receiver.
    pub fn equations(&self) -> &[Equation] {
        self.equations
    }

    /// Returns the number of rows of the receiver: 2^N for N variables.
    pub fn row_count(&self) -> usize {
        1 << self.variables.len()
    }

    /// Returns an iterator over the rows of the receiver. Rows are produced
    /// lazily; the first variable carries the most significant bit of the row
    /// index, so the all-false assignment comes first and the all-true one last.
    ///
    /// An equation whose reverse-Polish form cannot be evaluated turns its rows
    /// into errors; generation of the remaining rows is up to the caller.
    pub fn rows(&self) -> Rows {
        Rows {
            table: self,
            index: 0,
        }
    }

    /// Returns true if all equations of the receiver produce identical results on
    /// every row. Tables over fewer than two equations are vacuously equivalent.
    pub fn equivalent(&self) -> Result<bool, eval::Error> {
        for row in self.rows() {
            if !row?.uniform() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn assignment(&self, index: usize) -> Assignment {
        let count = self.variables.len();
        self.variables
            .iter()
            .enumerate()
            .map(|(i, &variable)| (variable, index >> (count - 1 - i) & 1 == 1))
            .collect()
    }
}

/// Is a single row of a truth table: one truth value per variable column and one
/// result per equation.
pub struct Row {
    inputs: Vec<bool>,
    outputs: Vec<bool>,
}

impl Row {
    /// Returns the truth values assigned to the variable columns.
    pub fn inputs(&self) -> &[bool] {
        &self.inputs
    }

    /// Returns the result of each equation under this row's assignment.
    pub fn outputs(&self) -> &[bool] {
        &self.outputs
    }

    /// Returns true if every equation produced the same result on this row.
    pub fn uniform(&self) -> bool {
        self.outputs.windows(2).all(|pair| pair[0] == pair[1])
    }
}

/// Is an iterator over the rows of a [`TruthTable`].
pub struct Rows<'a> {
    table: &'a TruthTable<'a>,
    index: usize,
}

impl Iterator for Rows<'_> {
    type Item = Result<Row, eval::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.table.row_count() {
            return None;
        }

        let assignment = self.table.assignment(self.index);
        self.index += 1;

        let inputs = self
            .table
            .variables
            .iter()
            .map(|&variable| assignment.value(variable))
            .collect();
        let outputs: Result<Vec<bool>, _> = self
            .table
            .equations
            .iter()
            .map(|eqn| eqn.evaluate(&assignment))
            .collect();

        Some(outputs.map(|outputs| Row { inputs, outputs }))
    }
}
