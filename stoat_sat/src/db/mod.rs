/*!
Databases for holding the state of a solve, accessed via fields on a [context](crate::context::Context).

Things include:
- The [formula database](formula), holding the immutable literal layout of every clause.
- The [status database](status), a mutable overlay shaped identically to the formula, recording the runtime status of each literal occurrence.
- The [frame stack](frame), a stack of active-clause frames, one frame per assignment plus a base frame.
- The [variable database](variable), holding the current (partial) valuation.
- The [trail](trail), recording assignments in order so retractions can be checked for stack discipline.

The formula database is fixed at construction.
The other databases are mutated only through [assign](crate::context::Context::assign) and [retract](crate::context::Context::retract), and together they support the invariant that retracting a variable restores exactly the state which held before the variable was assigned.
*/

pub mod formula;
pub mod frame;
pub mod status;
pub mod trail;
pub mod variable;

/// An index to a clause in the formula database.
pub type ClauseIndex = u32;
