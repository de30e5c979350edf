//! One scan of unit propagation: every clause of the database is classified against the trail,
//! either sequentially or fanned out over the rayon thread pool. Each clause evaluation only
//! *reads* the trail; the per-worker results are merged afterwards, and the first conflict that
//! is found cuts the scan short.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use rayon::prelude::*;

use crate::cnf::*;
use crate::solving::solver::Solver;
use crate::solving::trail::AssignmentEntry;
use crate::solving::traits::{Propagation, Valuation};

// -----------------------------------------------------------------------------------------------
/// # Implication
/// A value forced by unit propagation: `literal` must be true because every other literal of
/// `reason` is false. `depth` is the decision depth of the trail when it was discovered.
// -----------------------------------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Implication {
    pub literal: Literal,
    pub reason : Arc<Clause>,
    pub depth  : usize,
}

impl Implication {
    #[inline]
    pub fn variable(&self) -> Variable { self.literal.var() }

    #[inline]
    pub fn value(&self) -> bool { self.literal.polarity().value() }

    /// The trail entry recording this implication
    pub fn to_entry(&self) -> AssignmentEntry {
        AssignmentEntry::implied(self.variable(), self.value(), self.reason.clone(), self.depth)
    }
}

impl fmt::Display for Implication {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} implied by ({})", self.literal, self.reason)
    }
}

// -----------------------------------------------------------------------------------------------
/// # Conflict
/// The two clauses which, under the current trail, can not be satisfied together. They clash on
/// `variable` (the pivot of the first resolution step of conflict analysis).
///
/// `variable` is None only when a falsified clause could not be explained by any implication
/// (that is, at depth 0 or when the solver invariants are broken).
// -----------------------------------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub first   : Arc<Clause>,
    pub second  : Arc<Clause>,
    pub variable: Option<Variable>,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}) ^ ({})", self.first, self.second)?;
        match self.variable {
            Some(v) => write!(f, " on {}", v),
            None    => Ok(())
        }
    }
}

/// The implications found by one scan, indexed by variable, in discovery order.
pub type Implications = IndexMap<Variable, Implication>;

/// The result of one propagation scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deduction {
    Implications(Implications),
    Conflict(Conflict),
}

/// The state of a clause with respect to a partial valuation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseStatus {
    /// Some literal is true
    Satisfied,
    /// At least two literals are unassigned and none is true
    Open,
    /// Every literal but this one is false, and this one is unassigned
    Unit(Literal),
    /// Every literal is false
    Falsified,
}

/// Classifies `clause` against the given valuation.
pub fn classify<V: Valuation>(clause: &Clause, valuation: &V) -> ClauseStatus {
    let mut pending = None;
    let mut nb_pending = 0;

    for l in clause.literals() {
        match valuation.get_value(l) {
            Bool::True  => return ClauseStatus::Satisfied,
            Bool::False => {},
            Bool::Undef => {
                nb_pending += 1;
                pending = Some(l);
            }
        }
    }

    match (nb_pending, pending) {
        (0, _)       => ClauseStatus::Falsified,
        (1, Some(l)) => ClauseStatus::Unit(l),
        _            => ClauseStatus::Open
    }
}

/// Adds `implication` to `found` unless its variable is already implied. When it is implied with
/// the opposite value, the two reasons are in conflict.
fn merge(found: &mut Implications, implication: Implication) -> Result<(), Conflict> {
    match found.get(&implication.variable()) {
        None => {
            found.insert(implication.variable(), implication);
            Ok(())
        },
        Some(known) if known.literal == implication.literal => Ok(()),
        Some(known) => Err(Conflict {
            first   : known.reason.clone(),
            variable: Some(implication.variable()),
            second  : implication.reason,
        })
    }
}

/// Merges the implications found by two workers, preserving the order of discovery.
fn merge_all(mut left: Implications, right: Implications) -> Result<Implications, Conflict> {
    for (_, implication) in right {
        merge(&mut left, implication)?;
    }
    Ok(left)
}

impl Solver {
    /// Evaluates one clause. Returns None when the clause teaches nothing (satisfied or open).
    fn evaluate(&self, clause: &Arc<Clause>, depth: usize) -> Option<Result<Implication, Conflict>> {
        match classify(clause, &self.trail) {
            ClauseStatus::Unit(literal) => Some(Ok(Implication { literal, reason: clause.clone(), depth })),
            ClauseStatus::Falsified     => Some(Err(self.explain(clause))),
            _                           => None
        }
    }

    /// Pairs the falsified `clause` with the reason of its most recently implied variable.
    fn explain(&self, clause: &Arc<Clause>) -> Conflict {
        let pivot = self.trail.latest_implied_in(clause)
            .and_then(|e| e.reason().map(|r| (e.variable(), r.clone())));

        match pivot {
            Some((variable, reason)) => Conflict {
                first   : clause.clone(),
                second  : reason,
                variable: Some(variable)
            },
            None => Conflict {
                first   : clause.clone(),
                second  : clause.clone(),
                variable: None
            }
        }
    }
}

impl Propagation for Solver {
    fn deduce(&self) -> Deduction {
        let depth = self.trail.depth();

        let scanned = if self.config.is_parallel(self.clauses.len()) {
            self.clauses.par_iter()
                .filter_map(|c| self.evaluate(c, depth))
                .try_fold(Implications::default, |mut found, outcome| -> Result<Implications, Conflict> {
                    merge(&mut found, outcome?)?;
                    Ok(found)
                })
                .try_reduce(Implications::default, merge_all)
        } else {
            self.clauses.iter()
                .filter_map(|c| self.evaluate(c, depth))
                .try_fold(Implications::default(), |mut found, outcome| -> Result<Implications, Conflict> {
                    merge(&mut found, outcome?)?;
                    Ok(found)
                })
        };

        match scanned {
            Ok(found)     => Deduction::Implications(found),
            Err(conflict) => Deduction::Conflict(conflict)
        }
    }
}
