use crate::error::Result;
use crate::solving::propagation::Conflict;

/// What became of the search after a conflict was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backjump {
    /// The conflict occurred at depth 0: nothing can be undone, the problem is unsat.
    Unsatisfiable,
    /// The trail was rolled back to the given depth and the search can resume from there.
    Resume(usize),
}

// -----------------------------------------------------------------------------------------------
/// # Backtracking
/// This trait specifies the interface of a solver must fulfill in order to backtrack wrong choices
/// that have been made earlier.
// -----------------------------------------------------------------------------------------------
pub trait Backtracking {
    /// Learns from `conflict` and rolls the search back to the shallowest point where the learned
    /// clause becomes unit.
    fn backtrack(&mut self, conflict: Conflict) -> Result<Backjump>;

    /// Rolls back the trail (and the pending implications) until no entry deeper than `depth`
    /// remains.
    fn rollback(&mut self, depth: usize);
}
