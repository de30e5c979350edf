use std::sync::Arc;

use indexmap::IndexMap;
use rayon::prelude::*;

use crate::cnf::*;
use crate::solving::traits::Valuation;

/// Where a clause of the database comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Part of the problem definition
    Problem,
    /// Derived during conflict analysis
    Learned,
}

// -----------------------------------------------------------------------------------------------
/// # Clause Database
/// The live set of original and learned clauses. Clauses are shared (`Arc`) with the trail entries
/// they justify, equal clauses collapse, and the insertion order is stable. Nothing is ever
/// removed from the database during a search.
// -----------------------------------------------------------------------------------------------
#[derive(Debug, Clone, Default)]
pub struct ClauseDatabase {
    clauses: IndexMap<Arc<Clause>, Origin>,
    nb_learned: usize,
}

impl ClauseDatabase {
    pub fn new() -> ClauseDatabase {
        ClauseDatabase::default()
    }

    /// Adds a problem clause. Returns false iff an equal clause was already known.
    pub fn add_problem_clause(&mut self, c: Clause) -> bool {
        self.add(c, Origin::Problem).1
    }

    /// Adds a learned clause and returns the shared handle to the stored clause.
    pub fn add_learned_clause(&mut self, c: Clause) -> Arc<Clause> {
        self.add(c, Origin::Learned).0
    }

    fn add(&mut self, c: Clause, origin: Origin) -> (Arc<Clause>, bool) {
        if let Some((existing, _)) = self.clauses.get_key_value(&c) {
            return (existing.clone(), false);
        }

        let clause = Arc::new(c);
        self.clauses.insert(clause.clone(), origin);
        if origin == Origin::Learned {
            self.nb_learned += 1;
        }
        (clause, true)
    }

    pub fn contains(&self, c: &Clause) -> bool {
        self.clauses.contains_key(c)
    }

    pub fn origin(&self, c: &Clause) -> Option<Origin> {
        self.clauses.get(c).copied()
    }

    pub fn len(&self) -> usize { self.clauses.len() }

    pub fn is_empty(&self) -> bool { self.clauses.is_empty() }

    pub fn nb_learned(&self) -> usize { self.nb_learned }

    pub fn nb_problem(&self) -> usize { self.clauses.len() - self.nb_learned }

    pub fn iter(&self) -> impl Iterator<Item=&Arc<Clause>> + '_ {
        self.clauses.keys()
    }

    pub fn par_iter(&self) -> impl ParallelIterator<Item=&Arc<Clause>> + '_ {
        self.clauses.par_keys()
    }

    /// Iterates over the clauses made of one single literal
    pub fn units(&self) -> impl Iterator<Item=(Literal, &Arc<Clause>)> + '_ {
        self.iter().filter_map(|c| c.as_unit().map(|l| (l, c)))
    }

    /// Returns the first clause whose validity under `valuation` is not `expected`
    pub fn find_not<V: Valuation>(&self, valuation: &V, expected: Bool) -> Option<(&Arc<Clause>, Bool)> {
        self.iter()
            .map(|c| (c, compute_validity(c, valuation)))
            .find(|(_, v)| *v != expected)
    }

    /// Returns the first clause falsified by `valuation`, if any
    pub fn find_falsified<V: Valuation>(&self, valuation: &V) -> Option<&Arc<Clause>> {
        self.iter().find(|c| compute_validity(c, valuation) == Bool::False)
    }
}

/// Evaluates `clause` under the given (partial) `valuation`:
/// - True    if some literal is satisfied,
/// - False   if every literal is assigned and none of them is satisfied,
/// - Undef   otherwise (no literal satisfied yet, but some are still unassigned).
///
/// The empty clause is False.
pub fn compute_validity<V: Valuation>(clause: &Clause, valuation: &V) -> Bool {
    let mut undef = false;
    for l in clause.literals() {
        match valuation.get_value(l) {
            Bool::True  => return Bool::True,
            Bool::Undef => undef = true,
            Bool::False => {}
        }
    }
    if undef { Bool::Undef } else { Bool::False }
}
