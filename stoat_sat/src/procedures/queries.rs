//! Queries on the clause state, composed by a driver into a search.

use crate::{context::Context, db::ClauseIndex};

impl Context {
    /// True iff the clause at the given index is empty: every literal occurrence falsified, none satisfying.
    ///
    /// Read from the status overlay alone, independent of whether the clause is on the active frame.
    /// A zero-length clause is vacuously empty, under any valuation --- see [Config::empty_clause](crate::config::Config::empty_clause) for rejecting such clauses at load instead.
    pub fn clause_is_empty(&self, clause: ClauseIndex) -> bool {
        self.status_db.clause_is_empty(clause)
    }

    /// True iff some clause of the formula is empty.
    ///
    /// An empty clause cannot be satisfied by any extension of the current valuation, so this is the conflict signal a driver uses to trigger backtracking.
    /// The scan covers all clauses, not only the active frame --- a clause satisfied earlier holds a satisfying cell and correctly reports not-empty.
    pub fn has_empty_clause(&self) -> bool {
        (0..self.formula_db.clause_count() as ClauseIndex)
            .any(|clause| self.status_db.clause_is_empty(clause))
    }

    /// True iff the active frame has no members: every clause is satisfied on the current (possibly partial) valuation.
    pub fn formula_satisfied(&self) -> bool {
        self.frame_stack.top().is_empty()
    }
}
