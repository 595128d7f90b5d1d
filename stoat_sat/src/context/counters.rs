use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Default)]
pub struct Counters {
    /// A count of all decisions made.
    pub total_decisions: usize,

    /// A count of every conflict seen during a solve.
    pub total_conflicts: usize,

    /// A count of all retractions, whether from conflicts or from unwinding a finished solve.
    pub total_retractions: usize,

    /// The total number of iterations through a solve.
    pub total_iterations: usize,

    /// The time taken during a solve.
    pub time: Duration,
}
