//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! stoat_sat determines satisfiability with the classic DPLL backtracking procedure, stripped of every refinement --- no propagation, no learning, no heuristics --- so that the structure which remains is easy to inspect: a clause state maintained incrementally under assignment and restored exactly under retraction.
//!
//! stoat_sat is developed to help researchers, developers, or anyone curious, to investigate the backtracking skeleton shared by more sophisticated solvers, whether as a novice or through instrumenting the state as a search walks the assignment tree.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](crate::context).
//!
//! Contexts are built with a configuration and a complete formula, either [programmatically](crate::context::Context::from_parts) or from the [DIMACS](crate::context::Context::from_dimacs) representation of a formula.
//!
//! Internally, and at a high-level, a solve is viewed in terms of manipulation of, and relationships between, a handful of databases which instantiate core theoretical objects.
//! Notably:
//! - A formula is stored in a formula database, fixed at construction.
//! - A valuation is stored in a variable database.
//! - The status of each literal occurrence under the valuation is stored in a status database, shaped to the formula.
//! - The clauses not yet satisfied are stored as frames on a frame stack, one frame per assignment.
//!
//! An assignment extends the valuation, writes status cells, and pushes a frame recording which clauses remain active.
//! A retraction undoes exactly one assignment, and the frame stack is what makes the restoration cheap: the previous active-clause view is popped into place rather than recomputed.
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [database module](crate::db) to inspect the data considered during a solve.
//! - The [structures](crate::structures) to familiarise yourself with the abstract elements of a solve and their representation (formulas, clauses, etc.)
//!
//! If you're in search of cnf formulas consider:
//! - The SATLIB benchmark problems at [www.cs.ubc.ca/~hoos/SATLIB/benchm.html](https://www.cs.ubc.ca/~hoos/SATLIB/benchm.html)
//! - The Global Benchmark Database at [benchmark-database.de](https://benchmark-database.de)
//!
//! # Examples
//!
//! + Build a formula programmatically and read a witness.
//!
//! ```rust
//! use stoat_sat::config::Config;
//! use stoat_sat::context::Context;
//! use stoat_sat::reports::Report;
//! use stoat_sat::structures::literal::Literal;
//!
//! let p = Literal::new(1, true);
//! let q = Literal::new(2, true);
//!
//! let clauses = vec![vec![p, q], vec![-p, -q], vec![-p, q]];
//! let mut the_context = Context::from_parts(2, 3, clauses, Config::default()).unwrap();
//!
//! assert!(the_context.solve().is_ok());
//! assert_eq!(the_context.report(), Report::Satisfiable);
//!
//! assert_eq!(the_context.value_of(1), Some(Some(false)));
//! assert_eq!(the_context.value_of(2), Some(Some(true)));
//! ```
//!
//! + Parse and solve a DIMACS formula.
//!
//! ```rust
//! # use stoat_sat::config::Config;
//! # use stoat_sat::context::Context;
//! # use stoat_sat::reports::Report;
//! # use std::io::Write;
//! let mut dimacs = vec![];
//! let _ = dimacs.write(b"
//! p cnf 2 4
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ");
//!
//! let mut the_context = Context::from_dimacs(dimacs.as_slice(), Config::default()).unwrap();
//! assert!(the_context.solve().is_ok());
//! assert_eq!(the_context.report(), Report::Unsatisfiable);
//! ```
//!
//! # Guiding principles
//!
//! - The assign/retract pair preserves an exact invariant: retraction restores the valuation, the status overlay, and the active-clause view to precisely their state before the matching assignment.
//!   The integration tests state this as a round-trip law.
//! - Violations of the protocol by a driver are checked errors, never silent corruption.
//! - Use of external crates is limited to crates which help support modularity, such as [log](https://docs.rs/log/latest/log/).
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! As logging is only built on request, and further can be requested by level, logs are verbose.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/), logs related to the [frame stack](crate::db::frame) can be filtered with `RUST_LOG=frame …`

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;
pub mod reports;
