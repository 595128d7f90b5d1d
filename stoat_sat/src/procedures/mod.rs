/*!
Procedures over the databases of a context.

The mutating pair:
- [assign](crate::context::Context::assign) --- give a variable a value, push a fresh active-clause frame, and update the status overlay.
- [retract](crate::context::Context::retract) --- clear the most recently assigned variable, pop the frame its assignment pushed, and re-normalise the overlay.

The queries a driver composes with the pair:
- [clause_is_empty](crate::context::Context::clause_is_empty), [has_empty_clause](crate::context::Context::has_empty_clause) --- conflict detection.
- [formula_satisfied](crate::context::Context::formula_satisfied) --- success detection.
- [branch_variable](crate::context::Context::branch_variable) --- the next variable to decide.

And a driver built from nothing but that surface:
- [solve](crate::context::Context::solve) --- iterative depth-first search with chronological backtracking.

The pair is the heart of the library: for any sequence of calls obeying stack discipline, a retract restores the valuation, the overlay, and the active-clause view to exactly their state before the matching assign.
*/

pub mod assign;
pub mod decision;
pub mod queries;
pub mod retract;
pub mod solve;
