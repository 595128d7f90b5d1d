/*!
The context --- to which a formula is given and within which solves take place, etc.

A context bundles the four databases of a solve (see [db](crate::db)) with a [configuration](crate::config), [counters](Counters), and a [state](ContextState).
Contexts are built through the [builder](crate::builder), and a built context always holds a complete, consistent, formula --- there is no way to obtain a context with a partially loaded formula.

# Example
```rust
# use stoat_sat::config::Config;
# use stoat_sat::context::Context;
# use stoat_sat::reports::Report;
# use stoat_sat::structures::literal::Literal;
let p = Literal::new(1, true);
let q = Literal::new(2, true);

let mut the_context = Context::from_parts(2, 2, vec![vec![p, q], vec![-p]], Config::default()).unwrap();

assert!(the_context.solve().is_ok());
assert_eq!(the_context.report(), Report::Satisfiable);

assert_eq!(the_context.value_of(1), Some(Some(false)));
assert_eq!(the_context.value_of(2), Some(Some(true)));
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::{
        formula::FormulaDB, frame::FrameStack, status::StatusDB, trail::Trail,
        variable::VariableDB,
    },
    reports::Report,
    structures::{valuation::Valuation, variable::Variable},
};

/// The state of a context.
#[derive(Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context holds a formula, and no solve has finished.
    Input,

    /// A solve is underway.
    Solving,

    /// The formula of the context is known to be satisfiable, with a witnessing valuation in place.
    Satisfiable,

    /// The formula of the context is known to be unsatisfiable.
    Unsatisfiable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}

/// A context.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The status of the context.
    pub state: ContextState,

    /// The formula database.
    /// See [db::formula](crate::db::formula) for details.
    pub formula_db: FormulaDB,

    /// The status database.
    /// See [db::status](crate::db::status) for details.
    pub status_db: StatusDB,

    /// The frame stack.
    /// See [db::frame](crate::db::frame) for details.
    pub frame_stack: FrameStack,

    /// The variable database.
    /// See [db::variable](crate::db::variable) for details.
    pub variable_db: VariableDB,

    /// The trail of assignments, in assignment order.
    pub trail: Trail,
}

impl Context {
    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        match self.state {
            ContextState::Input | ContextState::Solving => Report::Unknown,
            ContextState::Satisfiable => Report::Satisfiable,
            ContextState::Unsatisfiable => Report::Unsatisfiable,
        }
    }

    /// The current valuation, as some structure which implements the valuation trait.
    pub fn valuation(&self) -> &impl Valuation {
        self.variable_db.valuation()
    }

    /// Some value of a variable under the current valuation, or otherwise nothing.
    pub fn value_of(&self, variable: Variable) -> Option<Option<bool>> {
        self.variable_db.value_of(variable)
    }

    /// The count of variables in the formula of the context.
    pub fn variable_count(&self) -> Variable {
        self.formula_db.variable_count()
    }

    /// The count of clauses in the formula of the context.
    pub fn clause_count(&self) -> usize {
        self.formula_db.clause_count()
    }
}
