/*!
Configuration of a context.

All configuration for a context is held in a [Config], fixed when the context is built.

The configuration is intentionally small: the search made by the library is deterministic, and what remains to configure is how degenerate input is treated and whether a solve is bounded in time.
*/

use std::time::Duration;

/// How a zero-length clause in the input is treated.
///
/// A clause with no literals has no way to be satisfied, so a formula containing one is unsatisfiable regardless of any assignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyClauseTreatment {
    /// Store the clause.
    /// The clause reports empty under every valuation, so a conflict is signalled before any assignment is made.
    #[default]
    Conflict,

    /// Reject the clause when the context is built, as a [BuildError](crate::types::err::BuildError::EmptyClause).
    Reject,
}

/// The primary configuration structure.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// How a zero-length clause in the input is treated.
    pub empty_clause: EmptyClauseTreatment,

    /// The time limit for a solve.
    ///
    /// The limit is only examined at decision points, so a solve may overrun the limit by the cost of one assignment sweep.
    pub time_limit: Option<Duration>,
}
