use std::ops::Not;

/// This enum trivially encapsulates the polarity (aka the sign) of a variable occurring in a
/// literal: either the variable is asserted (`x`) or it is negated (`~x`).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Polarity { Asserted, Negated }

impl Polarity {
    /// The truth value a variable must take for a literal of this polarity to be satisfied.
    #[inline]
    pub fn value(self) -> bool { self == Polarity::Asserted }

    /// The polarity of the literal made true by assigning `value` to its variable.
    #[inline]
    pub fn of(value: bool) -> Polarity {
        if value { Polarity::Asserted } else { Polarity::Negated }
    }

    /// Tells whether a literal of this polarity is satisfied when its variable is set to `value`
    #[inline]
    pub fn is_satisfied_by(self, value: bool) -> bool { self.value() == value }
}

impl Not for Polarity {
    type Output = Polarity;

    #[inline]
    fn not(self) -> Polarity {
        match self {
            Polarity::Asserted => Polarity::Negated,
            Polarity::Negated  => Polarity::Asserted
        }
    }
}
