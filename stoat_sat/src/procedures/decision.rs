//! The choice of a variable to branch on.
//!
//! The choice is deterministic: the smallest variable without a value.
//! No activity, no phase saving, no randomness --- ties always break to the lowest index, so a search is reproducible run to run.

use crate::{context::Context, structures::variable::Variable};

impl Context {
    /// The smallest variable without a value, if one exists.
    ///
    /// `None` signals a full valuation: every variable has a value, and no further decision is possible.
    pub fn branch_variable(&self) -> Option<Variable> {
        self.variable_db.first_unvalued()
    }
}
