use std::fmt;
use std::ops::*;
use super::*;

// -----------------------------------------------------------------------------------------------
/// # Literal
/// In the same vein as the Variable type, Literal is a thin (but type safe) wrapper around a
/// signed number that represents a literal: the absolute value identifies the variable and the
/// sign tells its polarity.
// -----------------------------------------------------------------------------------------------
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Literal(iint);

impl Literal {
    /// Creates a Literal based on its numeric (signed) representation.
    pub fn from(l: iint) -> Literal {
        assert_ne!(l, 0, "Zero is not allowed as a literal identifier");
        assert_ne!(l, iint::MIN, "The literal {} has no variable", l);
        Literal(l)
    }

    /// Creates a Literal based on a variable and a polarity (corresponds more closely to the
    /// theoretical definition of a literal)
    pub fn from_var(v: Variable, p: Polarity) -> Literal {
        match p {
            Polarity::Asserted => Literal::positive(v),
            Polarity::Negated  => Literal::negative(v)
        }
    }

    /// Returns the positive literal associated with the given variable. This never overflows
    /// since variables are bounded by `MAX_VARIABLE`.
    pub fn positive(v: Variable) -> Literal {
        Literal(  v.to_uint() as iint )
    }

    /// Returns the negative literal associated with the given variable
    pub fn negative(v: Variable) -> Literal {
        Literal(-(v.to_uint() as iint))
    }

    /// Return the variable associated with the given literal
    pub fn var(self) -> Variable {
        var(self.0.unsigned_abs())
    }

    /// Returns the polarity of the given literal
    pub fn polarity(self) -> Polarity {
        if self.0 < 0 { Polarity::Negated } else { Polarity::Asserted }
    }
}

/// For the sake of convenience, the Literal type implements the Neg and Not traits so that a
/// literal `x` can be simply negated using the `!x` and `-x` syntaxes
impl Neg for Literal {
    type Output = Literal;
    fn neg(self) -> Literal {
        Literal(-self.0)
    }
}

impl Not for Literal {
    type Output = Literal;
    fn not(self) -> Literal {
        Literal(-self.0)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.polarity() {
            Polarity::Asserted => write!(f, "{}",  self.var()),
            Polarity::Negated  => write!(f, "~{}", self.var())
        }
    }
}
