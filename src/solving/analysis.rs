use std::collections::BTreeMap;

use crate::cnf::*;
use crate::error::{Result, SolverError};
use crate::solving::propagation::Conflict;
use crate::solving::solver::Solver;
use crate::solving::traits::ConflictAnalysis;

/// Applies the resolution rule to `left` and `right`: the result holds every literal of both
/// clauses, except for the variables occurring with opposite polarities in the two clauses, which
/// are dropped altogether.
///
/// # Errors
/// `SolverError::Resolution` when no variable occurs with opposite polarities in the two clauses.
pub fn resolve(left: &Clause, right: &Clause) -> Result<Clause> {
    let mut terms   = BTreeMap::new();
    let mut clashed = false;

    for (v, p) in left.iter() {
        match right.polarity_of(v) {
            Some(q) if q != p => clashed = true,
            _                 => { terms.insert(v, p); }
        }
    }
    for (v, q) in right.iter() {
        if !left.contains(v) {
            terms.insert(v, q);
        }
    }

    if !clashed {
        return Err(SolverError::Resolution { left: left.to_string(), right: right.to_string() });
    }
    Ok(Clause::from_map(terms))
}

impl Solver {
    /// Counts the variables of `clause` that were assigned at exactly `depth`
    fn nb_at_depth(&self, clause: &Clause, depth: usize) -> usize {
        clause.variables()
            .filter(|v| self.trail.try_entry_of(*v).map_or(false, |e| e.depth() == depth))
            .count()
    }
}

impl ConflictAnalysis for Solver {
    fn analyze_conflict(&self, conflict: &Conflict, depth: usize) -> Result<Clause> {
        if conflict.variable.is_none() {
            return Err(SolverError::MissingPivot { clause: conflict.first.to_string() });
        }

        let mut working = resolve(&conflict.first, &conflict.second)?;

        // Walking the trail backwards guarantees that a variable which was resolved away never
        // comes back: the reason of an entry only mentions variables assigned before it.
        for entry in self.trail.iter().rev() {
            match self.nb_at_depth(&working, depth) {
                0 => break,
                1 => return Ok(working),
                _ => {}
            }
            if entry.depth() < depth { break; }

            if let Some(reason) = entry.reason() {
                if working.contains(entry.variable()) {
                    working = resolve(&working, reason)?;
                }
            }
        }

        if self.nb_at_depth(&working, depth) == 1 {
            Ok(working)
        } else {
            Err(SolverError::NoAssertingLiteral { clause: working.to_string(), depth })
        }
    }
}

// -----------------------------------------------------------------------------------------------
/// # Unit Tests
// -----------------------------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use crate::solving::trail::AssignmentEntry;
    use std::convert::TryFrom;
    use std::sync::Arc;

    fn clause(v: Vec<iint>) -> Clause {
        Clause::try_from(v).unwrap()
    }

    #[test]
    fn resolve_drops_the_pivot() {
        let resolvent = resolve(&clause(vec![1, 2]), &clause(vec![-1, 3])).unwrap();
        assert_eq!(clause(vec![2, 3]), resolvent);
    }

    #[test]
    fn resolve_keeps_shared_literals_once() {
        let resolvent = resolve(&clause(vec![1, 2, -4]), &clause(vec![-1, 2, 3])).unwrap();
        assert_eq!(clause(vec![2, 3, -4]), resolvent);
    }

    #[test]
    fn resolve_drops_every_clashing_variable() {
        let resolvent = resolve(&clause(vec![1, 2, 5]), &clause(vec![-1, -2, 3])).unwrap();
        assert_eq!(clause(vec![3, 5]), resolvent);
    }

    #[test]
    fn resolve_fails_without_clash() {
        assert!(resolve(&clause(vec![1, 2]), &clause(vec![1, 3])).is_err());
        assert!(resolve(&clause(vec![1, 2]), &clause(vec![1, 2])).is_err());
    }

    #[test]
    fn analysis_fails_without_literal_at_the_conflicting_depth() {
        let mut solver = Solver::new();
        solver.trail.push(AssignmentEntry::decision(var(1), false, 1));
        solver.trail.push(AssignmentEntry::decision(var(3), true,  2));

        let conflict = Conflict {
            first   : Arc::new(clause(vec![1,  2])),
            second  : Arc::new(clause(vec![1, -2])),
            variable: Some(var(2))
        };
        assert!(matches!(
            solver.analyze_conflict(&conflict, 2),
            Err(SolverError::NoAssertingLiteral { depth: 2, .. })
        ));
    }
}
