use std::fmt;
use super::*;

// -----------------------------------------------------------------------------------------------
/// # Variable
/// This is as a basic variable as you can imagine. This type simply wraps an unsigned integer and
/// behaves like it. (Copy iso move, equals)
///
/// Variables are opaque identifiers: whoever builds the problem (e.g. the `format` module) is in
/// charge of mapping its own names onto these ids.
// -----------------------------------------------------------------------------------------------
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Variable(uint);

/// The largest variable identifier: every variable must fit in a (signed) literal
pub const MAX_VARIABLE: uint = iint::MAX as uint;

impl Variable {
    /// Creates a Variable based on its numeric identifier
    ///
    /// # Panics
    /// When `x` is zero or greater than `MAX_VARIABLE`.
    pub fn from(x: uint) -> Variable {
        assert_ne!(x, 0, "Variables must be strictly positive");
        assert!(x <= MAX_VARIABLE, "Variable {} does not fit in a literal", x);
        Variable(x)
    }

    /// Creates a Variable unless `x` is out of range
    pub fn try_from_uint(x: uint) -> Option<Variable> {
        if x == 0 || x > MAX_VARIABLE { None } else { Some(Variable(x)) }
    }

    #[inline]
    /// Returns the numeric identifier of the variable
    pub fn to_usize(self) -> usize { self.0 as usize }

    #[inline]
    /// Returns the numeric identifier of the variable
    pub fn to_uint (self) -> uint { self.0 }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}
