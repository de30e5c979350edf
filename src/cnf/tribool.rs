use std::fmt;
use std::ops::*;

// -----------------------------------------------------------------------------------------------
/// # Bool
/// This is the representation of a boolean value in a tri-valued logic. It can be either True,
/// False or Undef. It is the answer to "what does this clause evaluate to under the current
/// (partial) assignment ?"
// -----------------------------------------------------------------------------------------------
#[derive(Eq, PartialEq, Clone, Copy, Debug, Hash)]
pub enum Bool { True, False, Undef }

impl From<bool> for Bool {
    #[inline]
    fn from(b: bool) -> Bool {
        if b { Bool::True } else { Bool::False }
    }
}

impl From<Option<bool>> for Bool {
    #[inline]
    fn from(b: Option<bool>) -> Bool {
        b.map_or(Bool::Undef, Bool::from)
    }
}

impl Not for Bool {
    type Output = Bool;

    #[inline]
    fn not(self) -> Bool {
        match self {
            Bool::True  => Bool::False,
            Bool::False => Bool::True,
            Bool::Undef => Bool::Undef
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Bool::True  => write!(f, "True"),
            Bool::False => write!(f, "False"),
            Bool::Undef => write!(f, "Unknown")
        }
    }
}
