use std::mem;
use std::sync::Arc;

use indexmap::IndexSet;
use tracing::{debug, info, trace};

use crate::cnf::*;
use crate::config::SolverConfig;
use crate::error::{Result, SolverError};
use crate::solving::clause_database::ClauseDatabase;
use crate::solving::propagation::{Conflict, Deduction, Implication, Implications};
use crate::solving::trail::{AssignmentEntry, Trail};
use crate::solving::traits::*;

/// The two possible answers of a search
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The trail assigns every known variable and satisfies every clause
    Satisfiable(Trail),
    Unsatisfiable,
}

impl Outcome {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, Outcome::Satisfiable(_))
    }

    /// The satisfying assignment, if any
    pub fn model(&self) -> Option<&Trail> {
        match self {
            Outcome::Satisfiable(trail) => Some(trail),
            Outcome::Unsatisfiable      => None
        }
    }
}

// -----------------------------------------------------------------------------------------------
/// # Solver
/// This structure encapsulates the state of the solver. The associated methods define the CDCL
/// solving behavior (see the `Propagation`, `ConflictAnalysis`, `Backtracking` and `Search`
/// traits).
///
/// A solver exclusively owns its clauses and its trail. Clauses can be added before or between
/// calls to `solve`; each call starts over from an empty trail but keeps the learned clauses.
// -----------------------------------------------------------------------------------------------
#[derive(Debug, Default)]
pub struct Solver {
    pub(super) config   : SolverConfig,

    // ~~~ # Problem ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
    /// The problem clauses and the learned ones
    pub(super) clauses  : ClauseDatabase,
    /// Every variable mentioned by some clause, in discovery order
    pub(super) variables: IndexSet<Variable>,

    // ~~~ # Search State ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
    /// The decisions and implications that have been made so far
    pub(super) trail    : Trail,
    /// Implications discovered by propagation but not pushed on the trail yet (in order)
    pub(super) pending  : Implications,
}

impl Solver {
    pub fn new() -> Solver {
        Solver::default()
    }

    pub fn with_config(config: SolverConfig) -> Solver {
        Solver { config, ..Solver::default() }
    }

    pub fn config(&self) -> &SolverConfig { &self.config }

    /// Adds a problem clause. Returns false iff an equal clause was already known.
    pub fn add_clause(&mut self, c: Clause) -> bool {
        self.variables.extend(c.variables());
        self.clauses.add_problem_clause(c)
    }

    /// Adds all the clauses of `formula`
    pub fn add_formula(&mut self, formula: Formula) {
        for c in formula {
            self.add_clause(c);
        }
    }

    pub fn clauses(&self) -> &ClauseDatabase { &self.clauses }

    /// The variables known to the solver, in discovery order
    pub fn variables(&self) -> impl Iterator<Item=Variable> + '_ {
        self.variables.iter().copied()
    }

    pub fn nb_vars(&self) -> usize { self.variables.len() }

    /// The current trail (empty after a search has ended: the model is handed over in the outcome)
    pub fn trail(&self) -> &Trail { &self.trail }

    // -------------------------------------------------------------------------------------------//
    // ---------------------------- PREPROCESSING ------------------------------------------------//
    // -------------------------------------------------------------------------------------------//

    /// Turns every unit clause into a permanent fact, then checks that no clause is already
    /// falsified by these facts.
    ///
    /// # Return Value
    /// false iff the problem was found unsat.
    fn preprocess(&mut self) -> bool {
        let units: Vec<(Literal, Arc<Clause>)> = self.clauses.units()
            .map(|(l, c)| (l, c.clone()))
            .collect();

        for (l, reason) in units {
            debug!(fact = %l, "preprocessing");
            if !self.trail.push(AssignmentEntry::fact(l.var(), l.polarity().value(), reason)) {
                debug!(fact = %l, "contradicts an other unit clause");
                return false;
            }
        }

        if let Some(c) = self.clauses.find_falsified(&self.trail) {
            debug!(clause = %c, "falsified by the facts");
            return false;
        }
        true
    }

    // -------------------------------------------------------------------------------------------//
    // ---------------------------- PROPAGATION QUEUE --------------------------------------------//
    // -------------------------------------------------------------------------------------------//

    /// Appends the newly `found` implications to the pending queue. Variables that are already
    /// assigned or enqueued are skipped, unless they are enqueued with the opposite value.
    fn enqueue(&mut self, found: Implications) -> std::result::Result<(), Conflict> {
        for (variable, implication) in found {
            if self.trail.contains(variable) { continue; }

            match self.pending.get(&variable) {
                None => {
                    self.pending.insert(variable, implication);
                },
                Some(queued) if queued.literal == implication.literal => {},
                Some(queued) => return Err(Conflict {
                    first   : queued.reason.clone(),
                    second  : implication.reason,
                    variable: Some(variable)
                })
            }
        }
        Ok(())
    }

    /// Pushes an implication on the trail. When the variable already holds the opposite value,
    /// the clause that forced that value and the reason of `implication` form a conflict.
    fn apply(&mut self, implication: Implication) -> Result<Option<Conflict>> {
        trace!(implication = %implication, "assign");
        if self.trail.push(implication.to_entry()) {
            return Ok(None);
        }

        let variable = implication.variable();
        match self.trail.entry_of(variable).reason() {
            Some(existing) => Ok(Some(Conflict {
                first   : implication.reason.clone(),
                second  : existing.clone(),
                variable: Some(variable)
            })),
            None => Err(SolverError::InconsistentAssignment { variable })
        }
    }

    // -------------------------------------------------------------------------------------------//
    // ---------------------------- DECISIONS ----------------------------------------------------//
    // -------------------------------------------------------------------------------------------//

    /// Returns the first known variable which is not assigned yet
    fn pick_branching_variable(&self) -> Option<Variable> {
        self.variables.iter().copied().find(|v| !self.trail.contains(*v))
    }

    /// Opens a new decision level where `variable` is set to true
    fn decide(&mut self, variable: Variable) {
        let depth = self.trail.depth() + 1;
        trace!(variable = %variable, depth, "decide");
        self.trail.push(AssignmentEntry::decision(variable, true, depth));
    }

    /// Makes sure every clause is satisfied by the trail
    fn verify(&self) -> Result<()> {
        if !self.config.verify_model {
            return Ok(());
        }
        match self.clauses.find_not(&self.trail, Bool::True) {
            None               => Ok(()),
            Some((c, value))   => Err(SolverError::UnsatisfiedClause { clause: c.to_string(), value })
        }
    }

    fn unsatisfiable(&self) -> Outcome {
        info!(clauses = self.clauses.len(), learned = self.clauses.nb_learned(), "unsatisfiable");
        Outcome::Unsatisfiable
    }
}

impl From<Formula> for Solver {
    fn from(formula: Formula) -> Solver {
        let mut solver = Solver::new();
        solver.add_formula(formula);
        solver
    }
}

// -------------------------------------------------------------------------------------------//
// ---------------------------- BACKTRACKING -------------------------------------------------//
// -------------------------------------------------------------------------------------------//
impl Backtracking for Solver {
    fn backtrack(&mut self, conflict: Conflict) -> Result<Backjump> {
        let depth = self.trail.depth();
        debug!(conflict = %conflict, depth, "conflict");

        if depth == 0 {
            return Ok(Backjump::Unsatisfiable);
        }

        let learned = self.analyze_conflict(&conflict, depth)?;
        debug!(clause = %learned, "learned");
        if learned.is_empty() {
            return Ok(Backjump::Unsatisfiable);
        }

        if let Some(asserting) = learned.as_unit() {
            let reason = self.clauses.add_learned_clause(learned);
            self.pending.clear();
            self.rollback(0);
            self.pending.insert(asserting.var(), Implication { literal: asserting, reason, depth: 0 });
            return Ok(Backjump::Resume(0));
        }

        let target = learned.variables()
            .filter_map(|v| self.trail.try_entry_of(v))
            .map(AssignmentEntry::depth)
            .filter(|d| *d < depth)
            .max()
            .unwrap_or(0);

        self.clauses.add_learned_clause(learned);
        self.rollback(target);
        Ok(Backjump::Resume(target))
    }

    fn rollback(&mut self, depth: usize) {
        let removed = self.trail.remove_to_depth(depth);
        self.pending.retain(|_, implication| implication.depth <= depth);
        trace!(depth, removed, "backjump");
    }
}

// -------------------------------------------------------------------------------------------//
// ---------------------------- SEARCH -------------------------------------------------------//
// -------------------------------------------------------------------------------------------//
impl Search for Solver {
    fn solve(&mut self) -> Result<Outcome> {
        self.trail.clear();
        self.pending.clear();

        if !self.preprocess() {
            return Ok(self.unsatisfiable());
        }

        loop {
            let conflict = match self.deduce() {
                Deduction::Conflict(conflict)  => Some(conflict),
                Deduction::Implications(found) => self.enqueue(found).err()
            };
            if let Some(conflict) = conflict {
                if self.backtrack(conflict)? == Backjump::Unsatisfiable {
                    return Ok(self.unsatisfiable());
                }
                continue;
            }

            // propagation has not reached its fixpoint yet
            if let Some((_, implication)) = self.pending.shift_remove_index(0) {
                if let Some(conflict) = self.apply(implication)? {
                    if self.backtrack(conflict)? == Backjump::Unsatisfiable {
                        return Ok(self.unsatisfiable());
                    }
                }
                continue;
            }

            match self.pick_branching_variable() {
                Some(variable) => self.decide(variable),
                None => {
                    self.verify()?;
                    info!(clauses = self.clauses.len(), learned = self.clauses.nb_learned(), "satisfiable");
                    return Ok(Outcome::Satisfiable(mem::take(&mut self.trail)));
                }
            }
        }
    }
}
