use crate::cnf::*;
use crate::error::Result;
use crate::solving::propagation::Conflict;

// -----------------------------------------------------------------------------------------------
/// # Conflict Analysis
/// This trait specifies the interface of a solver capable of analyzing a conflict (through a
/// backwards traversal of the implication graph) and to derive a new clause from the conflict.
// -----------------------------------------------------------------------------------------------
pub trait ConflictAnalysis {
    /// Derives the clause to learn from `conflict`, detected while the trail was at `depth`.
    ///
    /// The antecedents of the conflict are resolved together, then the result is resolved with
    /// the justification of its most recently implied literal of level `depth`, and so on until
    /// exactly one literal of level `depth` remains (first unique implication point).
    ///
    /// # Return Value
    /// The learned clause, which is falsified by the current trail and holds exactly one literal
    /// assigned at `depth`.
    ///
    /// # Errors
    /// Only when the solver invariants are broken (see `SolverError`).
    fn analyze_conflict(&self, conflict: &Conflict, depth: usize) -> Result<Clause>;
}
