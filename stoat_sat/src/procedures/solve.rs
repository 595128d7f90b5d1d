//! Determines the satisfiability of the formula in a context.
//!
//! # Overview
//!
//! [solve](crate::context::Context::solve) is a depth-first search over partial valuations, driven entirely through the public query/mutation surface:
//!
//! - A conflict ([has_empty_clause](crate::context::Context::has_empty_clause)) backtracks: assignments are retracted until one is found whose other polarity is untried, and that polarity is tried.
//! - Success ([formula_satisfied](crate::context::Context::formula_satisfied)) ends the solve with the witnessing valuation in place.
//! - Otherwise a decision is made: the [branch variable](crate::context::Context::branch_variable) is assigned, true first.
//!
//! Roughly, the loop is as diagrammed:
//!
//! ```none
//!           +-----------------+
//!   +-------| assign (decide) |
//!   |       +-----------------+
//!   |               ⌃
//!   |               |
//!   |               | if no clause is empty, and some clause is active
//!   |               |
//!   |               |              +-----> satisfiable, if no clause is active
//!   ⌄   +--------------------+     |
//! --+-->|  inspect clauses   |-----+
//!   ⌃   +--------------------+     |
//!   |               |              +-----> unsatisfiable, if every decision is exhausted
//!   |               |
//!   |               | if some clause is empty
//!   |               |
//!   |               ⌄
//!   |   +--------------------+
//!   +---| retract (backtrack)|
//!       +--------------------+
//! ```
//!
//! The search is iterative --- decisions are kept on an explicit ledger, not the call stack --- so the core protocol stays purely state-based and any other driver (recursive, or otherwise) may be written against the same surface.
//!
//! # Termination
//!
//! Each decision either leads to a satisfying valuation, or is eventually flipped, and a flipped decision is never revisited.
//! So the search visits each partial valuation at most once, and on an unsatisfiable formula unwinds completely: the context is returned at depth zero, every assignment retracted.
//!
//! A [time limit](crate::config::Config::time_limit), if configured, is examined only at decision points, and expiry reports [Unknown](Report::Unknown) with assignments left in place.

use crate::{
    context::{Context, ContextState},
    misc::log::targets::{self},
    reports::Report,
    structures::variable::Variable,
    types::err::{self},
};

/// A decision on the ledger of a solve.
struct Decision {
    /// The variable decided on.
    variable: Variable,

    /// The value assigned by the decision.
    value: bool,

    /// True if the other polarity has already been tried (and failed).
    flipped: bool,
}

impl Context {
    /// Determines the satisfiability of the formula in the context.
    ///
    /// On [Satisfiable](Report::Satisfiable) the witnessing valuation is left in place, readable through [valuation](Context::valuation) or [value_of](Context::value_of).
    /// On [Unsatisfiable](Report::Unsatisfiable) every assignment made by the solve has been retracted.
    ///
    /// Errors are internal: the solve obeys the assign/retract contract, so a contract error surfacing from a solve marks a defect in the library rather than in the caller.
    pub fn solve(&mut self) -> Result<Report, err::ErrorKind> {
        let total_time = std::time::Instant::now();
        self.state = ContextState::Solving;

        let mut ledger: Vec<Decision> = Vec::with_capacity(self.variable_count() as usize);

        'solve_loop: loop {
            self.counters.total_iterations += 1;
            log::trace!(target: targets::SOLVE, "Iteration {}", self.counters.total_iterations);

            self.counters.time = total_time.elapsed();
            if self
                .config
                .time_limit
                .is_some_and(|limit| self.counters.time > limit)
            {
                self.state = ContextState::Input;
                return Ok(Report::Unknown);
            }

            if self.has_empty_clause() {
                self.counters.total_conflicts += 1;

                // Backtrack: unwind to the deepest decision with an untried polarity.
                loop {
                    match ledger.pop() {
                        None => {
                            self.state = ContextState::Unsatisfiable;
                            break 'solve_loop;
                        }

                        Some(decision) => {
                            self.retract(decision.variable)?;

                            if !decision.flipped {
                                let flipped_value = !decision.value;
                                log::trace!(target: targets::SOLVE, "Flipped {} to {flipped_value}", decision.variable);

                                self.assign(decision.variable, flipped_value)?;
                                ledger.push(Decision {
                                    variable: decision.variable,
                                    value: flipped_value,
                                    flipped: true,
                                });
                                continue 'solve_loop;
                            }
                        }
                    }
                }
            }

            if self.formula_satisfied() {
                self.state = ContextState::Satisfiable;
                break 'solve_loop;
            }

            match self.branch_variable() {
                Some(variable) => {
                    self.counters.total_decisions += 1;
                    log::trace!(target: targets::SOLVE, "Decision {variable} -> true");

                    self.assign(variable, true)?;
                    ledger.push(Decision {
                        variable,
                        value: true,
                        flipped: false,
                    });
                }

                // A full valuation with an active, non-empty, clause cannot happen:
                // an active clause under a full valuation has every occurrence falsified.
                None => return Err(err::ErrorKind::InvalidState),
            }
        }

        self.counters.time = total_time.elapsed();
        Ok(self.report())
    }
}
