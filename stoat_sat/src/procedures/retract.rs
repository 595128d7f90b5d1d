//! Retraction of the most recent assignment, restoring the previous active-clause view.

use crate::{
    context::Context,
    db::{status::OccurrenceStatus, ClauseIndex},
    misc::log::targets::{self},
    structures::variable::Variable,
    types::err::{self, ContractError},
};

impl Context {
    /// Clears the value of `variable`, pops the frame its assignment pushed, and clears every status cell of the variable.
    ///
    /// The cell sweep covers the whole formula, not only the restored frame: a clause removed from the active view by an *earlier* assignment may still hold cells for this variable, and those cells must be unvalued once the variable is, wherever the clause sits.
    ///
    /// Retraction is bound to stack discipline: only the most recently assigned variable may be retracted, so a sequence of retractions unwinds assignments in exact reverse order.
    /// Violations --- a retraction out of order, of an unassigned variable, or with only the base frame on the stack --- are [contract errors](err::ContractError), returned before any database is touched.
    ///
    /// ```rust
    /// # use stoat_sat::config::Config;
    /// # use stoat_sat::context::Context;
    /// # use stoat_sat::structures::literal::Literal;
    /// # let p = Literal::new(1, true);
    /// # let q = Literal::new(2, true);
    /// # let mut the_context =
    /// #     Context::from_parts(2, 2, vec![vec![p, q], vec![-p, -q]], Config::default()).unwrap();
    /// the_context.assign(1, true).unwrap();
    /// the_context.assign(2, false).unwrap();
    ///
    /// // 1 is not the most recent assignment.
    /// assert!(the_context.retract(1).is_err());
    ///
    /// assert!(the_context.retract(2).is_ok());
    /// assert!(the_context.retract(1).is_ok());
    ///
    /// // Depth zero: the base frame holds every clause.
    /// assert_eq!(the_context.frame_stack.top(), &[0, 1]);
    /// ```
    pub fn retract(&mut self, variable: Variable) -> Result<(), err::ErrorKind> {
        match self.trail.last_assignment() {
            None => return Err(err::ErrorKind::from(ContractError::BaseFrame)),

            Some(literal) if literal.variable() != variable => {
                // Distinguish a misordered retraction from a retraction of a variable with no value.
                return match self.variable_db.value_of(variable) {
                    None => Err(err::ErrorKind::from(ContractError::VariableOutOfRange(
                        variable,
                    ))),
                    Some(None) => Err(err::ErrorKind::from(ContractError::UnassignedRetraction(
                        variable,
                    ))),
                    Some(Some(_)) => Err(err::ErrorKind::from(ContractError::OutOfOrderRetraction(
                        variable,
                    ))),
                };
            }

            Some(_) => {}
        }

        self.variable_db.retract(variable)?;
        self.trail.forget_last();

        self.frame_stack.pop()?;
        log::trace!(target: targets::FRAME, "Frame popped to depth {}", self.frame_stack.depth());

        // Formula-wide sweep, decoupled from frame membership.
        for clause_index in 0..self.formula_db.clause_count() as ClauseIndex {
            let clause = self.formula_db.clause(clause_index);
            for (occurrence, literal) in clause.iter().enumerate() {
                if literal.variable() == variable {
                    self.status_db
                        .set(clause_index, occurrence, OccurrenceStatus::Unvalued);
                }
            }
        }

        self.counters.total_retractions += 1;

        Ok(())
    }

    /// Retracts every assignment, in reverse trail order, restoring the depth-zero state.
    ///
    /// The base frame then holds every clause index and every variable and status cell is unvalued.
    pub fn retract_all(&mut self) -> Result<(), err::ErrorKind> {
        while let Some(literal) = self.trail.last_assignment() {
            self.retract(literal.variable())?;
        }
        Ok(())
    }
}
