/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to a valuation
    pub const VALUATION: &str = "valuation";

    /// Logs related to the [frame stack](crate::db::frame)
    pub const FRAME: &str = "frame";

    /// Logs related to [the solve procedure](crate::procedures::solve)
    pub const SOLVE: &str = "solve";

    /// Logs related to parsing
    pub const PARSER: &str = "parser";
}
