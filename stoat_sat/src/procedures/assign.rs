//! Assignment of a value to a variable, with incremental maintenance of the active-clause view.

use crate::{
    context::Context,
    db::status::OccurrenceStatus,
    misc::log::targets::{self},
    structures::{literal::Literal, variable::Variable},
    types::err::{self},
};

impl Context {
    /// Gives `variable` the value `value`, pushes a fresh active-clause frame, and updates the status overlay.
    ///
    /// Only the clauses of the (fresh) top frame are scanned:
    /// - An occurrence of the variable whose polarity matches the value is [Satisfying](OccurrenceStatus::Satisfying), and satisfies its whole clause --- the clause is removed from the top frame in the same pass.
    /// - An occurrence whose polarity conflicts with the value is [Falsified](OccurrenceStatus::Falsified), and its clause stays active.
    /// - Occurrences of other variables are untouched, as are all frames below the top.
    ///
    /// The variable must be part of the formula and must not already have a value --- violations are [contract errors](err::ContractError), returned before any database is touched.
    ///
    /// ```rust
    /// # use stoat_sat::config::Config;
    /// # use stoat_sat::context::Context;
    /// # use stoat_sat::structures::literal::Literal;
    /// # let p = Literal::new(1, true);
    /// # let q = Literal::new(2, true);
    /// # let mut the_context =
    /// #     Context::from_parts(2, 2, vec![vec![p, q], vec![-p, -q]], Config::default()).unwrap();
    /// assert!(the_context.assign(1, true).is_ok());
    ///
    /// // Clause 0 is satisfied through 1, clause 1 stays active with -1 falsified.
    /// assert_eq!(the_context.frame_stack.top(), &[1]);
    ///
    /// // A second value for the variable is refused.
    /// assert!(the_context.assign(1, false).is_err());
    /// ```
    pub fn assign(&mut self, variable: Variable, value: bool) -> Result<(), err::ErrorKind> {
        self.variable_db.assign(variable, value)?;
        self.trail.store_assignment(Literal::new(variable, value));

        self.frame_stack.duplicate_top();
        log::trace!(target: targets::FRAME, "Frame pushed at depth {}", self.frame_stack.depth());

        // Scan the fresh top frame.
        // On removal the swapped-in index lands at the scan position, so the position is re-examined rather than advanced past.
        let mut position = 0;
        while position < self.frame_stack.top().len() {
            let clause_index = self.frame_stack.top()[position];
            let clause = self.formula_db.clause(clause_index);

            let mut satisfied = false;

            for (occurrence, literal) in clause.iter().enumerate() {
                if literal.variable() == variable {
                    match literal.polarity() == value {
                        true => {
                            self.status_db
                                .set(clause_index, occurrence, OccurrenceStatus::Satisfying);
                            satisfied = true;
                        }
                        false => {
                            self.status_db
                                .set(clause_index, occurrence, OccurrenceStatus::Falsified);
                        }
                    }
                }
            }

            match satisfied {
                true => {
                    self.frame_stack.swap_remove_top(position);
                    log::trace!(target: targets::FRAME, "Clause {clause_index} satisfied");
                }
                false => position += 1,
            }
        }

        Ok(())
    }
}
