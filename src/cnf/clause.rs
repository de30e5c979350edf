use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::fmt;

use thiserror::Error;

use super::*;

/// Reasons why a set of literals can not be turned into a clause.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClauseError {
    /// The same variable was given with both polarities. Such a clause is a tautology in theory,
    /// but it is refused here rather than silently turned into something else.
    #[error("variable {variable} occurs with both polarities in the same clause")]
    ConflictingPolarity { variable: Variable },
}

// -----------------------------------------------------------------------------------------------
/// # Clause
/// Just like variables and literals, clauses are core concepts of a SAT problem. They are the very
/// building blocks of the satisfiability checking problem (when encoded in CNF form).
/// Concretely, a clause is a disjunction of literals, at least one of which needs to be satisfied
/// (else the whole problem is unsat).
///
/// A clause is kept as a mapping from variable to polarity. Hence:
/// - a variable occurs at most once in any clause,
/// - two clauses are equal (and hash the same) iff they hold the very same (variable, polarity)
///   pairs, regardless of the order in which these were given.
///
/// The empty clause is a perfectly valid value (it can never be satisfied).
// -----------------------------------------------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Clause(BTreeMap<Variable, Polarity>);

impl Clause {
    /// Creates a new clause from its terms.
    ///
    /// # Errors
    /// `ClauseError::ConflictingPolarity` when some variable is given with both polarities.
    pub fn new<I>(terms: I) -> Result<Clause, ClauseError>
        where I: IntoIterator<Item=Literal> {

        let mut clause = Clause::empty();
        for l in terms {
            clause.insert(l)?;
        }
        Ok(clause)
    }

    /// Returns the empty clause
    pub fn empty() -> Clause {
        Clause(BTreeMap::new())
    }

    /// Adds the literal `l` to the clause.
    ///
    /// # Return Value
    /// - Ok(true)  when the literal was not part of the clause yet,
    /// - Ok(false) when the very same literal was already there (no-op),
    /// - Err(_)    when the opposite literal is part of the clause. The clause is left unchanged.
    pub fn insert(&mut self, l: Literal) -> Result<bool, ClauseError> {
        match self.0.get(&l.var()) {
            None => {
                self.0.insert(l.var(), l.polarity());
                Ok(true)
            },
            Some(p) if *p == l.polarity() => Ok(false),
            Some(_) => Err(ClauseError::ConflictingPolarity { variable: l.var() })
        }
    }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// If the clause contains exactly one literal, return it, None otherwise
    pub fn as_unit(&self) -> Option<Literal> {
        if self.0.len() == 1 {
            self.literals().next()
        } else {
            None
        }
    }

    /// Tells whether `v` occurs (with any polarity) in the clause
    pub fn contains(&self, v: Variable) -> bool {
        self.0.contains_key(&v)
    }

    /// Returns the polarity with which `v` occurs in the clause (if it does)
    pub fn polarity_of(&self, v: Variable) -> Option<Polarity> {
        self.0.get(&v).copied()
    }

    /// Iterates over the literals of the clause (sorted by variable)
    pub fn literals(&self) -> impl Iterator<Item=Literal> + '_ {
        self.0.iter().map(|(v, p)| Literal::from_var(*v, *p))
    }

    /// Iterates over the variables of the clause (sorted)
    pub fn variables(&self) -> impl Iterator<Item=Variable> + '_ {
        self.0.keys().copied()
    }

    /// Iterates over the (variable, polarity) pairs of the clause
    pub fn iter(&self) -> impl Iterator<Item=(Variable, Polarity)> + '_ {
        self.0.iter().map(|(v, p)| (*v, *p))
    }

    /// Builds a clause from a map that is already known to be consistent
    pub(crate) fn from_map(terms: BTreeMap<Variable, Polarity>) -> Clause {
        Clause(terms)
    }
}

impl TryFrom<Vec<iint>> for Clause {
    type Error = ClauseError;

    fn try_from(v: Vec<iint>) -> Result<Clause, ClauseError> {
        Clause::new(v.into_iter().map(Literal::from))
    }
}

impl TryFrom<Vec<Literal>> for Clause {
    type Error = ClauseError;

    fn try_from(v: Vec<Literal>) -> Result<Clause, ClauseError> {
        Clause::new(v)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "<empty>");
        }
        for (i, l) in self.literals().enumerate() {
            if i > 0 { write!(f, " v ")?; }
            write!(f, "{}", l)?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------------------------
/// # Unit Tests
// -----------------------------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(c: &Clause) -> u64 {
        let mut h = DefaultHasher::new();
        c.hash(&mut h);
        h.finish()
    }

    #[test]
    fn equality_does_not_depend_on_order() {
        let a = Clause::try_from(vec![1, -2, 3]).unwrap();
        let b = Clause::try_from(vec![3, 1, -2]).unwrap();

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn equality_depends_on_polarity() {
        let a = Clause::try_from(vec![1, -2]).unwrap();
        let b = Clause::try_from(vec![1,  2]).unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn inserting_the_same_literal_twice_is_a_no_op() {
        let mut c = Clause::try_from(vec![1, -2]).unwrap();

        assert_eq!(Ok(false), c.insert(lit(-2)));
        assert_eq!(2, c.len());
    }

    #[test]
    fn inserting_the_opposite_literal_is_refused() {
        let mut c = Clause::try_from(vec![1, -2]).unwrap();

        assert_eq!(Err(ClauseError::ConflictingPolarity { variable: var(2) }), c.insert(lit(2)));
        assert_eq!(Some(Polarity::Negated), c.polarity_of(var(2)));
    }

    #[test]
    fn constructor_refuses_conflicting_polarities() {
        assert!(Clause::try_from(vec![1, 2, -1]).is_err());
    }

    #[test]
    fn as_unit_only_yields_for_single_literal_clauses() {
        assert_eq!(Some(lit(-4)), Clause::try_from(vec![-4]).unwrap().as_unit());
        assert_eq!(None, Clause::try_from(vec![-4, 5]).unwrap().as_unit());
        assert_eq!(None, Clause::empty().as_unit());
    }

    #[test]
    fn display_lists_the_disjuncts() {
        assert_eq!("x1 v ~x2", format!("{}", Clause::try_from(vec![-2, 1]).unwrap()));
        assert_eq!("<empty>",  format!("{}", Clause::empty()));
    }
}
