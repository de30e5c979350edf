use crate::error::Result;
use crate::solving::solver::Outcome;

// -----------------------------------------------------------------------------------------------
/// # Search
/// This trait specifies the public interface of a solver. So far it is very scarce (only solve
/// method enforced).
// -----------------------------------------------------------------------------------------------
pub trait Search {
    /// This is the core method of the solver, it determines the satisfiability of the
    /// problem through a CDCL based solving.
    ///
    /// # Return Value
    /// `Outcome::Satisfiable` with the complete trail if there exist an assignment satisfying
    /// the clauses, `Outcome::Unsatisfiable` if there exists no such assignment.
    ///
    /// # Note
    /// The cnf problem is not given as an argument of this method. It means that the clauses
    /// need to be added before calling solve. (Otherwise, a vacuously true answer is to be
    /// expected).
    fn solve(&mut self) -> Result<Outcome>;
}
