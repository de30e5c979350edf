use crate::cnf::*;

// -----------------------------------------------------------------------------------------------
/// # Valuation
/// This trait encapsulates the idea of a (partial) assignment of Variables to boolean values.
/// Implementers only need to tell the value of a variable; the value of literals and clauses
/// follow.
// -----------------------------------------------------------------------------------------------
pub trait Valuation {
    /// The value currently assigned to `v`, None when `v` is unassigned.
    fn var_value(&self, v: Variable) -> Option<bool>;

    /// Tells the truth value of the given literal `l` in the current assignment
    fn get_value(&self, l: Literal) -> Bool {
        Bool::from(self.var_value(l.var()).map(|v| l.polarity().is_satisfied_by(v)))
    }

    /// Tells whether `l` was set to True
    fn is_true (&self, l: Literal) -> bool { self.get_value(l) == Bool::True  }
}
