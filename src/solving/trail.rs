use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::cnf::*;
use crate::error::TrailError;
use crate::solving::traits::Valuation;

// -----------------------------------------------------------------------------------------------
/// # Assignment Entry
/// One assignment on the trail: which value a variable took, at what decision depth and why.
/// The reason is the clause which forced the value; decisions have no reason at all.
// -----------------------------------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentEntry {
    variable: Variable,
    value   : bool,
    reason  : Option<Arc<Clause>>,
    depth   : usize,
}

impl AssignmentEntry {
    /// A free choice made by the search at the given depth
    pub fn decision(variable: Variable, value: bool, depth: usize) -> AssignmentEntry {
        AssignmentEntry { variable, value, reason: None, depth }
    }

    /// A value forced by `reason` at the given depth
    pub fn implied(variable: Variable, value: bool, reason: Arc<Clause>, depth: usize) -> AssignmentEntry {
        AssignmentEntry { variable, value, reason: Some(reason), depth }
    }

    /// A permanent fact (depth 0) forced by `reason`
    pub fn fact(variable: Variable, value: bool, reason: Arc<Clause>) -> AssignmentEntry {
        AssignmentEntry::implied(variable, value, reason, 0)
    }

    #[inline]
    pub fn variable(&self) -> Variable { self.variable }

    #[inline]
    pub fn value(&self) -> bool { self.value }

    #[inline]
    pub fn depth(&self) -> usize { self.depth }

    /// The clause that justifies this assignment, None for decisions
    #[inline]
    pub fn reason(&self) -> Option<&Arc<Clause>> { self.reason.as_ref() }

    #[inline]
    pub fn is_decision(&self) -> bool { self.reason.is_none() }

    /// The literal made true by this assignment
    pub fn literal(&self) -> Literal {
        Literal::from_var(self.variable, Polarity::of(self.value))
    }
}

impl fmt::Display for AssignmentEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}@{}", self.literal(), self.depth)
    }
}

/// Where an entry lives in the trail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot { Fact(usize), Stack(usize) }

// -----------------------------------------------------------------------------------------------
/// # Trail
/// The ordered record of all current assignments (aka the assignment stack).
///
/// Permanent facts (depth 0) are kept apart from the chronological part of the trail: they are
/// never popped, so stack discipline only ever applies to the entries with a positive depth.
/// An index from variable to entry makes every lookup O(1).
///
/// The trail maintains the following invariants:
/// - a variable appears at most once,
/// - entries at depth 0 are never removed (except by `clear`),
/// - `depth()` is the depth of the most recent chronological entry, 0 when there is none.
// -----------------------------------------------------------------------------------------------
#[derive(Debug, Clone, Default)]
pub struct Trail {
    /// The depth 0 entries, in the order they were pushed
    facts: Vec<AssignmentEntry>,
    /// The entries with a positive depth, in the order they were pushed
    stack: Vec<AssignmentEntry>,
    index: FxHashMap<Variable, Slot>,
}

impl Trail {
    pub fn new() -> Trail {
        Trail::default()
    }

    /// Records `entry` on the trail.
    ///
    /// # Return Value
    /// When the variable is already on the trail, nothing is recorded and the return value tells
    /// whether the existing value agrees with the new one. `false` means that the two
    /// assignments contradict each other and *must* be handled as a conflict by the caller.
    /// Otherwise the entry is recorded and `true` is returned.
    pub fn push(&mut self, entry: AssignmentEntry) -> bool {
        if let Some(existing) = self.try_entry_of(entry.variable) {
            return existing.value == entry.value;
        }

        let variable = entry.variable;
        let slot = if entry.depth == 0 {
            self.facts.push(entry);
            Slot::Fact(self.facts.len() - 1)
        } else {
            self.stack.push(entry);
            Slot::Stack(self.stack.len() - 1)
        };
        self.index.insert(variable, slot);
        true
    }

    /// Removes and returns the most recent entry of the chronological part of the trail.
    ///
    /// # Errors
    /// - `TrailError::Empty` when the trail holds nothing at all,
    /// - `TrailError::Permanent` when only depth 0 entries are left.
    pub fn pop(&mut self) -> Result<AssignmentEntry, TrailError> {
        match self.stack.pop() {
            Some(entry) => {
                self.index.remove(&entry.variable);
                Ok(entry)
            },
            None if self.facts.is_empty() => Err(TrailError::Empty),
            None => Err(TrailError::Permanent)
        }
    }

    /// Returns the most recent entry without removing it. Facts are only considered when the
    /// chronological part of the trail is empty.
    pub fn peek(&self) -> Result<&AssignmentEntry, TrailError> {
        self.stack.last()
            .or_else(|| self.facts.last())
            .ok_or(TrailError::Empty)
    }

    /// Pops entries until none deeper than `target` remains. Returns the number of popped entries.
    /// Depth 0 entries are never popped.
    pub fn remove_to_depth(&mut self, target: usize) -> usize {
        let mut removed = 0;
        while let Some(top) = self.stack.last() {
            if top.depth <= target { break; }

            let variable = top.variable;
            self.stack.pop();
            self.index.remove(&variable);
            removed += 1;
        }
        removed
    }

    /// The current decision depth
    pub fn depth(&self) -> usize {
        self.stack.last().map_or(0, |e| e.depth)
    }

    #[inline]
    pub fn contains(&self, v: Variable) -> bool {
        self.index.contains_key(&v)
    }

    /// Returns the value assigned to `v`.
    ///
    /// # Panics
    /// When `v` is not on the trail. Use `try_value_of` when that may be the case.
    pub fn value_of(&self, v: Variable) -> bool {
        self.entry_of(v).value
    }

    pub fn try_value_of(&self, v: Variable) -> Option<bool> {
        self.try_entry_of(v).map(|e| e.value)
    }

    /// Returns the entry recording the assignment of `v`.
    ///
    /// # Panics
    /// When `v` is not on the trail. Use `try_entry_of` when that may be the case.
    pub fn entry_of(&self, v: Variable) -> &AssignmentEntry {
        match self.try_entry_of(v) {
            Some(entry) => entry,
            None        => panic!("{} is not assigned", v)
        }
    }

    pub fn try_entry_of(&self, v: Variable) -> Option<&AssignmentEntry> {
        match self.index.get(&v) {
            Some(Slot::Fact (i)) => self.facts.get(*i),
            Some(Slot::Stack(i)) => self.stack.get(*i),
            None                 => None
        }
    }

    /// Returns the most recently pushed entry which is an implication over some variable of
    /// `clause`. Permanent facts are considered last.
    pub fn latest_implied_in(&self, clause: &Clause) -> Option<&AssignmentEntry> {
        self.iter().rev().find(|e| !e.is_decision() && clause.contains(e.variable))
    }

    pub fn len(&self) -> usize { self.facts.len() + self.stack.len() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Iterates over all entries: the facts first, then the rest in chronological order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item=&AssignmentEntry> + '_ {
        self.facts.iter().chain(self.stack.iter())
    }

    /// The literals made true by the trail (a model whenever every variable is assigned)
    pub fn literals(&self) -> Vec<Literal> {
        self.iter().map(AssignmentEntry::literal).collect()
    }

    /// Forgets everything, facts included
    pub fn clear(&mut self) {
        self.facts.clear();
        self.stack.clear();
        self.index.clear();
    }
}

impl Valuation for Trail {
    #[inline]
    fn var_value(&self, v: Variable) -> Option<bool> {
        self.try_value_of(v)
    }
}

impl fmt::Display for Trail {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, e) in self.iter().enumerate() {
            if i > 0 { write!(f, ", ")?; }
            write!(f, "{}", e)?;
        }
        Ok(())
    }
}
