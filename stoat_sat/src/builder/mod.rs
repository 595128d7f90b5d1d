/*!
Tools for building a context.

A context is built in one shot: the complete clause data is supplied, validated, and on success every database of the context is initialised together.
There is no way to add a clause to a built context --- the formula database is fixed for the life of the context, and the frame stack's base frame (holding every clause index) is pushed here and never popped.

Two entry points:
- [from_parts](crate::context::Context::from_parts), for clause data already in structured form.
- [from_dimacs](crate::context::Context::from_dimacs), for a DIMACS-style description (see [dimacs]).

# Example

```rust
# use stoat_sat::config::Config;
# use stoat_sat::context::Context;
# use stoat_sat::reports::Report;
# use stoat_sat::structures::literal::Literal;
let p = Literal::new(1, true);
let q = Literal::new(2, true);

let clause_a = vec![p, -q];
let clause_b = vec![-p, q];

let mut the_context = Context::from_parts(2, 2, vec![clause_a, clause_b], Config::default()).unwrap();
the_context.solve();
assert_eq!(the_context.report(), Report::Satisfiable)
```
*/

pub mod dimacs;

use crate::{
    config::{Config, EmptyClauseTreatment},
    context::{Context, ContextState, Counters},
    db::{
        formula::FormulaDB, frame::FrameStack, status::StatusDB, trail::Trail,
        variable::VariableDB, ClauseIndex,
    },
    structures::{
        clause::{CClause, Clause},
        variable::{Variable, VARIABLE_MAX},
    },
    types::err::{self, BuildError},
};

impl Context {
    /// A context from a variable count, a declared clause count, and the clauses themselves.
    ///
    /// Validation happens before any database is built:
    /// - The declared clause count must match the clauses supplied.
    /// - Every literal must be over a variable of `1..=variable_count`.
    /// - Zero-length clauses are rejected or stored per [Config::empty_clause].
    ///
    /// On success the valuation and every status cell are unvalued, and the base frame holds every clause index.
    pub fn from_parts(
        variable_count: Variable,
        clause_count: usize,
        clauses: Vec<CClause>,
        config: Config,
    ) -> Result<Context, err::ErrorKind> {
        if variable_count > VARIABLE_MAX {
            return Err(err::ErrorKind::from(BuildError::VariablesExhausted));
        }

        if clauses.len() != clause_count {
            return Err(err::ErrorKind::from(BuildError::ClauseCountMismatch {
                declared: clause_count,
                found: clauses.len(),
            }));
        }

        for (index, clause) in clauses.iter().enumerate() {
            if clause.is_empty() && config.empty_clause == EmptyClauseTreatment::Reject {
                return Err(err::ErrorKind::from(BuildError::EmptyClause(
                    index as ClauseIndex,
                )));
            }

            for literal in clause.literals() {
                let variable = literal.variable();
                if variable == 0 || variable > variable_count {
                    return Err(err::ErrorKind::from(BuildError::LiteralOutOfRange {
                        clause: index as ClauseIndex,
                        literal: literal.as_int(),
                    }));
                }
            }
        }

        let status_db = StatusDB::new(clauses.iter().map(|clause| clause.len()));
        let frame_stack = FrameStack::new(clauses.len());
        let formula_db = FormulaDB::new(variable_count, clauses);
        let variable_db = VariableDB::new(variable_count);

        Ok(Context {
            config,
            counters: Counters::default(),
            state: ContextState::Input,
            formula_db,
            status_db,
            frame_stack,
            variable_db,
            trail: Trail::default(),
        })
    }
}
