//! `rcdcl` is a conflict driven clause learning (CDCL) SAT solver. It decides whether a
//! propositional formula in conjunctive normal form admits a satisfying assignment and, when it
//! does, hands that assignment back as a trail of decisions and implications.
//!
//! ```
//! use rcdcl::*;
//! use std::convert::TryFrom;
//!
//! let mut solver = Solver::new();
//! solver.add_clause(Clause::try_from(vec![1, 2]).unwrap());
//! solver.add_clause(Clause::try_from(vec![-1]).unwrap());
//!
//! let outcome = solver.solve().unwrap();
//! assert!(outcome.model().unwrap().value_of(var(2)));
//! ```

pub mod cnf;
pub mod config;
pub mod error;
pub mod format;
pub mod solving;

// re-export
pub use self::cnf::*;
pub use self::config::SolverConfig;
pub use self::error::{SolverError, TrailError};
pub use self::solving::traits::*;
pub use self::solving::{AssignmentEntry, ClauseDatabase, Conflict, Deduction, Implication, Outcome, Solver, Trail};
