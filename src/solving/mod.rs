pub mod traits;
pub mod trail;
pub mod clause_database;
pub mod propagation;
pub mod analysis;
pub mod solver;

pub use self::trail::{AssignmentEntry, Trail};
pub use self::clause_database::{compute_validity, ClauseDatabase, Origin};
pub use self::propagation::{classify, ClauseStatus, Conflict, Deduction, Implication, Implications};
pub use self::analysis::resolve;
pub use self::solver::{Outcome, Solver};
