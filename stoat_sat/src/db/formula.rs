//! The formula database.
//!
//! The clause literal data, fixed at construction and exposed read-only.
//! Clauses are indexed `0..clause_count`, and each clause is a fixed sequence of literals in the order given at construction.
//!
//! The stored order is authoritative: the [status database](crate::db::status) is shaped cell-for-cell to the layout held here.

use crate::{
    db::ClauseIndex,
    structures::{
        clause::{CClause, Clause},
        literal::Literal,
        variable::Variable,
    },
};

/// The formula database.
pub struct FormulaDB {
    /// The clauses of the formula, in the order given at construction.
    clauses: Vec<CClause>,

    /// The count of variables in the formula.
    variable_count: Variable,
}

impl FormulaDB {
    /// A new [FormulaDB] from checked parts.
    ///
    /// Validation of the parts happens in the [builder](crate::builder) --- the database itself only stores.
    pub(crate) fn new(variable_count: Variable, clauses: Vec<CClause>) -> Self {
        FormulaDB {
            clauses,
            variable_count,
        }
    }

    /// The count of variables in the formula.
    pub fn variable_count(&self) -> Variable {
        self.variable_count
    }

    /// The count of clauses in the formula.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// The clause at the given index.
    ///
    /// # Panics
    /// If the index is not an index of the formula.
    pub fn clause(&self, index: ClauseIndex) -> &[Literal] {
        &self.clauses[index as usize]
    }

    /// An iterator over the clauses of the formula, in index order.
    pub fn clauses(&self) -> impl Iterator<Item = &CClause> {
        self.clauses.iter()
    }
}

impl std::fmt::Display for FormulaDB {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "p cnf {} {}", self.variable_count, self.clauses.len())?;
        for clause in &self.clauses {
            writeln!(f, "{}", clause.as_dimacs(true))?;
        }
        Ok(())
    }
}
