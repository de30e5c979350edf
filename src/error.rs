//! Errors that can occur while solving. Note that finding out that a problem is unsatisfiable is
//! *not* an error: it is one of the two regular outcomes of a search.

use thiserror::Error;

use crate::cnf::Variable;

/// Misuse of the assignment trail. These indicate a bug in the driver, never a problem with the
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrailError {
    /// `pop` or `peek` on a trail that holds no entry at all
    #[error("the trail is empty")]
    Empty,
    /// `pop` when all the remaining entries are permanent (depth 0) facts
    #[error("the trail only holds permanent (depth 0) entries")]
    Permanent,
}

/// Internal invariant breaches detected during a search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Two clauses without any variable of opposite polarity were given to the resolution rule
    #[error("cannot resolve `{left}` with `{right}`: no variable occurs with opposite polarities")]
    Resolution { left: String, right: String },

    /// Conflict analysis went over the whole current decision level without reducing the
    /// working clause to a single literal of that level
    #[error("conflict analysis at depth {depth} ended with `{clause}`, which has no single literal at that depth")]
    NoAssertingLiteral { clause: String, depth: usize },

    /// A conflict was reported without any way to explain it (no pivot variable)
    #[error("conflict on `{clause}` has no implied variable to analyze")]
    MissingPivot { clause: String },

    /// A trail operation was used outside of its contract
    #[error("trail misuse: {0}")]
    Trail(#[from] TrailError),

    /// The final model check found a clause which is not satisfied by the reported solution
    #[error("claimed model leaves clause `{clause}` {value}")]
    UnsatisfiedClause { clause: String, value: crate::cnf::Bool },

    /// An assignment was pushed for a variable that already holds the opposite value while no
    /// clause explains the existing value
    #[error("variable {variable} was assigned twice with different values")]
    InconsistentAssignment { variable: Variable },
}

pub type Result<T> = std::result::Result<T, SolverError>;
