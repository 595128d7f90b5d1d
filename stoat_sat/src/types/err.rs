//! Error types used in the library.
//!
//! - Load errors ([BuildError], [ParseError]) are fatal to construction of a context.
//!   Construction either returns a fully built context or an error, never a partially built context.
//! - Contract errors ([ContractError]) mark a violation of the assign/retract protocol by a driver.
//!   The offending call is aborted before any database is touched, so the context remains consistent and may continue to be used.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::{db::ClauseIndex, structures::variable::Variable};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Build(BuildError),
    Parse(ParseError),
    Contract(ContractError),

    /// A state which should be unreachable while the databases are consistent.
    InvalidState,
}

/// Noted errors when building a context from clause data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// The declared clause count does not match the clauses supplied.
    ClauseCountMismatch {
        /// The count declared (e.g. on the problem line of a DIMACS file).
        declared: usize,

        /// The count of clauses actually supplied.
        found: usize,
    },

    /// A literal mentions a variable outside `1..=variable_count`.
    LiteralOutOfRange {
        /// The clause the literal occurs in.
        clause: ClauseIndex,

        /// The literal, in integer form.
        literal: isize,
    },

    /// A clause with no literals, with the context configured to reject these.
    EmptyClause(ClauseIndex),

    /// The variable count exceeds the maximum representable variable.
    VariablesExhausted,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors during parsing of a DIMACS description.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem line of a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// Clause data was read before any problem line.
    MisplacedProblem(usize),

    /// A literal token which is not a (nonzero) integer.
    Literal(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Violations of the assign/retract protocol.
///
/// Each of these marks a programming error in a driver.
/// The reference for the protocol is stack discipline: retractions must happen in exact reverse order of assignments.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContractError {
    /// The variable is not part of the formula.
    VariableOutOfRange(Variable),

    /// An assignment to a variable which already has a value.
    Reassignment(Variable),

    /// A retraction of a variable which has no value.
    UnassignedRetraction(Variable),

    /// A retraction of a variable other than the most recently assigned variable.
    OutOfOrderRetraction(Variable),

    /// A retraction with only the base frame on the stack.
    BaseFrame,
}

impl From<ContractError> for ErrorKind {
    fn from(e: ContractError) -> Self {
        ErrorKind::Contract(e)
    }
}
