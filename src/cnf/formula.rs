use std::fmt;

use indexmap::IndexSet;

use super::*;

// -----------------------------------------------------------------------------------------------
/// # Formula
/// A conjunction of clauses. This is merely a convenience to build a problem before handing it
/// over to a solver: duplicate clauses collapse, and the insertion order is remembered so that
/// loading the same input twice always yields the same formula.
// -----------------------------------------------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formula(IndexSet<Clause>);

impl Formula {
    pub fn new() -> Formula {
        Formula(IndexSet::new())
    }

    /// Adds a clause to the formula. Returns false iff an equal clause was already present.
    pub fn add(&mut self, c: Clause) -> bool {
        self.0.insert(c)
    }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item=&Clause> + '_ {
        self.0.iter()
    }
}

impl FromIterator<Clause> for Formula {
    fn from_iter<I: IntoIterator<Item=Clause>>(iter: I) -> Formula {
        Formula(iter.into_iter().collect())
    }
}

impl IntoIterator for Formula {
    type Item = Clause;
    type IntoIter = indexmap::set::IntoIter<Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 { write!(f, " ^ ")?; }
            write!(f, "({})", c)?;
        }
        Ok(())
    }
}
