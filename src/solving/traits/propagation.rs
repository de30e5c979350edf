use crate::solving::propagation::Deduction;

// -----------------------------------------------------------------------------------------------
/// # Propagation
/// This trait communicates the intent that object implementing this trait will perform some
/// propagation in order to carry out inference.
// -----------------------------------------------------------------------------------------------
pub trait Propagation {
    /// Performs *one* scan of the clause database against the current trail.
    ///
    /// # Return Value
    /// - `Deduction::Implications` with every variable forced by some unit clause (each variable
    ///   at most once). The trail is left untouched: pushing them is the caller's job.
    /// - `Deduction::Conflict` as soon as one clause is falsified or two clauses force opposite
    ///   values on the same variable.
    ///
    /// # Note
    /// This is not a fixpoint computation. The caller is expected to push the implications and
    /// call `deduce` again until it yields nothing new.
    fn deduce(&self) -> Deduction;
}
