/*!
The status database --- a mutable overlay on the formula, recording the runtime status of each literal occurrence.

The database holds one [OccurrenceStatus] cell per literal position of the formula, shaped cell-for-cell to the layout of the [formula database](crate::db::formula).
Cells are written during [assign](crate::context::Context::assign) and cleared during [retract](crate::context::Context::retract).

Two invariants tie the overlay to the valuation:
- A cell is [Unvalued](OccurrenceStatus::Unvalued) whenever the variable of its literal has no value.
- Otherwise the cell reflects the variable's value and the literal's polarity --- [Satisfying](OccurrenceStatus::Satisfying) on a match, [Falsified](OccurrenceStatus::Falsified) on a mismatch.

A qualification to the second invariant: cells of a clause which was already removed from the active frame may remain [Unvalued](OccurrenceStatus::Unvalued) under later assignments, as assignment scans only the active frame.
Emptiness of a clause is still read correctly from such cells --- a removed clause holds a [Satisfying](OccurrenceStatus::Satisfying) cell, so it can never report empty.
*/

use crate::db::ClauseIndex;

/// The status of a single literal occurrence under the current (partial) valuation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OccurrenceStatus {
    /// The occurrence has no recorded status.
    #[default]
    Unvalued,

    /// The literal is false under the current valuation.
    /// The clause may still be satisfied through another position.
    Falsified,

    /// The literal is true under the current valuation, and so the whole clause is satisfied.
    Satisfying,
}

/// The status database.
pub struct StatusDB {
    /// One row of cells per clause, shaped to the formula.
    cells: Vec<Vec<OccurrenceStatus>>,
}

impl StatusDB {
    /// A new [StatusDB] with one [Unvalued](OccurrenceStatus::Unvalued) cell per literal position of the given clause shapes.
    pub(crate) fn new(shapes: impl Iterator<Item = usize>) -> Self {
        StatusDB {
            cells: shapes
                .map(|size| vec![OccurrenceStatus::default(); size])
                .collect(),
        }
    }

    /// The status of the cell at the given clause and position.
    ///
    /// # Panics
    /// If the pair is not a position of the formula.
    pub fn status(&self, clause: ClauseIndex, position: usize) -> OccurrenceStatus {
        self.cells[clause as usize][position]
    }

    /// The row of cells for the given clause.
    pub fn clause_row(&self, clause: ClauseIndex) -> &[OccurrenceStatus] {
        &self.cells[clause as usize]
    }

    /// Sets the cell at the given clause and position.
    pub(crate) fn set(&mut self, clause: ClauseIndex, position: usize, status: OccurrenceStatus) {
        self.cells[clause as usize][position] = status;
    }

    /// True iff the clause at the given index is empty: every cell [Falsified](OccurrenceStatus::Falsified), none [Satisfying](OccurrenceStatus::Satisfying).
    ///
    /// A zero-length clause is vacuously empty, under any valuation.
    pub fn clause_is_empty(&self, clause: ClauseIndex) -> bool {
        self.cells[clause as usize]
            .iter()
            .all(|status| *status == OccurrenceStatus::Falsified)
    }

    /// A count of rows (clauses) in the database.
    pub fn clause_count(&self) -> usize {
        self.cells.len()
    }
}
