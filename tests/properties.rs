//! Property based tests: random small formulas are solved and the answers are checked against a
//! brute force enumeration of every assignment.

use std::collections::BTreeMap;
use std::sync::Arc;

use proptest::prelude::*;
use rcdcl::*;
use rcdcl::solving::resolve;

const NB_VARS: uint = 6;

// ============================================================================
// Helper functions
// ============================================================================

/// Builds a clause from (variable, value) pairs; the first occurrence of a variable wins
fn make_clause(terms: &[(uint, bool)]) -> Clause {
    let mut unique = BTreeMap::new();
    for (v, value) in terms {
        unique.entry(*v).or_insert(*value);
    }
    Clause::new(unique.into_iter().map(|(v, value)| Literal::from_var(var(v), Polarity::of(value))))
        .unwrap()
}

fn clause_strategy() -> impl Strategy<Value = Clause> {
    prop::collection::vec((1..=NB_VARS, any::<bool>()), 1..=3).prop_map(|terms| make_clause(&terms))
}

fn formula_strategy() -> impl Strategy<Value = Vec<Clause>> {
    prop::collection::vec(clause_strategy(), 0..24)
}

fn satisfied_by(clause: &Clause, assignment: u32) -> bool {
    clause.literals().any(|l| {
        let value = assignment & (1 << (l.var().to_uint() - 1)) != 0;
        l.polarity().is_satisfied_by(value)
    })
}

fn brute_force(clauses: &[Clause]) -> bool {
    (0..(1u32 << NB_VARS)).any(|assignment| clauses.iter().all(|c| satisfied_by(c, assignment)))
}

fn solve(clauses: &[Clause], config: SolverConfig) -> Outcome {
    let mut solver = Solver::with_config(config);
    for c in clauses {
        solver.add_clause(c.clone());
    }
    solver.solve().unwrap()
}

// ============================================================================
// Solver properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn models_satisfy_every_clause(clauses in formula_strategy()) {
        if let Outcome::Satisfiable(model) = solve(&clauses, SolverConfig::sequential()) {
            for c in &clauses {
                prop_assert!(c.literals().any(|l| model.is_true(l)), "{} is not satisfied", c);
            }
        }
    }

    #[test]
    fn agrees_with_brute_force(clauses in formula_strategy()) {
        let expected = brute_force(&clauses);
        prop_assert_eq!(expected, solve(&clauses, SolverConfig::sequential()).is_satisfiable());
        prop_assert_eq!(expected, solve(&clauses, SolverConfig::default().with_parallel_threshold(0)).is_satisfiable());
    }

    #[test]
    fn models_are_complete(clauses in formula_strategy()) {
        if let Outcome::Satisfiable(model) = solve(&clauses, SolverConfig::sequential()) {
            for c in &clauses {
                for v in c.variables() {
                    prop_assert!(model.contains(v));
                }
            }
        }
    }
}

// ============================================================================
// Trail properties
// ============================================================================

fn entries_strategy() -> impl Strategy<Value = Vec<(uint, bool, usize)>> {
    prop::collection::vec((1..=20u32, any::<bool>(), 0..5usize), 0..30)
}

/// Pushes decisions with non decreasing depths (facts may come at any time)
fn build_trail(entries: &[(uint, bool, usize)]) -> Trail {
    let mut trail = Trail::new();
    let reason    = Arc::new(Clause::empty());
    for (v, value, depth) in entries {
        let depth = if *depth == 0 { 0 } else { trail.depth().max(*depth) };
        let entry = if depth == 0 {
            AssignmentEntry::fact(var(*v), *value, reason.clone())
        } else {
            AssignmentEntry::decision(var(*v), *value, depth)
        };
        trail.push(entry);
    }
    trail
}

proptest! {
    #[test]
    fn push_is_idempotent(entries in entries_strategy()) {
        let mut trail = build_trail(&entries);
        let len       = trail.len();
        let pushed: Vec<AssignmentEntry> = trail.iter().cloned().collect();

        for e in pushed {
            prop_assert!(trail.push(e.clone()));
            prop_assert!(!trail.push(AssignmentEntry::decision(e.variable(), !e.value(), e.depth().max(1))));
        }
        prop_assert_eq!(len, trail.len());
    }

    #[test]
    fn remove_to_depth_respects_the_target(entries in entries_strategy(), target in 0..5usize) {
        let mut trail = build_trail(&entries);
        let facts     = trail.iter().filter(|e| e.depth() == 0).count();
        let kept      = trail.iter().filter(|e| e.depth() <= target).count();

        let removed   = trail.remove_to_depth(target);

        prop_assert!(trail.iter().all(|e| e.depth() <= target));
        prop_assert_eq!(facts, trail.iter().filter(|e| e.depth() == 0).count());
        prop_assert_eq!(kept, trail.len());
        prop_assert_eq!(kept + removed, build_trail(&entries).len());
    }
}

// ============================================================================
// Resolution properties
// ============================================================================

proptest! {
    #[test]
    fn resolve_is_deterministic_and_drops_clashes(left in clause_strategy(), right in clause_strategy()) {
        let clashing: Vec<Variable> = left.iter()
            .filter(|(v, p)| right.polarity_of(*v).map_or(false, |q| q != *p))
            .map(|(v, _)| v)
            .collect();

        match resolve(&left, &right) {
            Err(_) => prop_assert!(clashing.is_empty()),
            Ok(resolvent) => {
                prop_assert!(!clashing.is_empty());
                prop_assert_eq!(&resolvent, &resolve(&left, &right).unwrap());

                for v in &clashing {
                    prop_assert!(!resolvent.contains(*v));
                }
                for l in left.literals().chain(right.literals()) {
                    if !clashing.contains(&l.var()) {
                        prop_assert_eq!(Some(l.polarity()), resolvent.polarity_of(l.var()));
                    }
                }
            }
        }
    }
}
