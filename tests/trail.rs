use rcdcl::*;
use std::convert::TryFrom;
use std::sync::Arc;

fn reason(v: Vec<iint>) -> Arc<Clause> {
    Arc::new(Clause::try_from(v).unwrap())
}

#[test]
fn empty_trail_is_at_depth_zero(){
    let trail = Trail::new();
    assert_eq!(0, trail.depth());
    assert!(trail.is_empty());
    assert_eq!(Err(TrailError::Empty), trail.peek().map(|e| e.variable()));
}

#[test]
fn depth_is_the_depth_of_the_last_entry(){
    let mut trail = Trail::new();
    trail.push(AssignmentEntry::decision(var(1), true, 1));
    trail.push(AssignmentEntry::implied(var(2), false, reason(vec![-1, -2]), 1));
    trail.push(AssignmentEntry::decision(var(3), true, 2));
    assert_eq!(2, trail.depth());
}

#[test]
fn push_is_idempotent_for_the_same_value(){
    let mut trail = Trail::new();
    assert!(trail.push(AssignmentEntry::decision(var(1), true, 1)));
    assert!(trail.push(AssignmentEntry::decision(var(1), true, 1)));
    assert_eq!(1, trail.len());
}

#[test]
fn push_signals_contradictions(){
    let mut trail = Trail::new();
    assert!(trail.push(AssignmentEntry::decision(var(1), true, 1)));
    assert!(!trail.push(AssignmentEntry::decision(var(1), false, 1)));
    assert!(trail.value_of(var(1)));
    assert_eq!(1, trail.len());
}

#[test]
fn pop_follows_the_stack_discipline(){
    let mut trail = Trail::new();
    trail.push(AssignmentEntry::decision(var(1), true, 1));
    trail.push(AssignmentEntry::decision(var(2), false, 2));

    assert_eq!(var(2), trail.pop().unwrap().variable());
    assert!(!trail.contains(var(2)));
    assert_eq!(var(1), trail.pop().unwrap().variable());
    assert_eq!(Err(TrailError::Empty), trail.pop().map(|e| e.variable()));
}

#[test]
fn facts_are_never_popped(){
    let mut trail = Trail::new();
    trail.push(AssignmentEntry::fact(var(1), true, reason(vec![1])));

    assert_eq!(var(1), trail.peek().unwrap().variable());
    assert_eq!(Err(TrailError::Permanent), trail.pop().map(|e| e.variable()));
    assert!(trail.contains(var(1)));
}

#[test]
fn remove_to_depth_keeps_shallower_entries(){
    let mut trail = Trail::new();
    trail.push(AssignmentEntry::fact(var(1), true, reason(vec![1])));
    trail.push(AssignmentEntry::decision(var(2), true, 1));
    trail.push(AssignmentEntry::decision(var(3), true, 2));
    trail.push(AssignmentEntry::implied(var(4), true, reason(vec![-3, 4]), 2));
    trail.push(AssignmentEntry::decision(var(5), true, 3));

    assert_eq!(3, trail.remove_to_depth(1));
    assert_eq!(1, trail.depth());
    assert!(trail.contains(var(1)));
    assert!(trail.contains(var(2)));
    assert!(!trail.contains(var(4)));

    assert_eq!(1, trail.remove_to_depth(0));
    assert_eq!(1, trail.len());
    assert_eq!(0, trail.depth());
}

#[test]
fn lookups_are_total_through_try_variants(){
    let mut trail = Trail::new();
    trail.push(AssignmentEntry::decision(var(1), false, 1));

    assert_eq!(Some(false), trail.try_value_of(var(1)));
    assert_eq!(None, trail.try_value_of(var(2)));
    assert!(trail.try_entry_of(var(2)).is_none());
    assert!(trail.entry_of(var(1)).is_decision());
}

#[test]
fn valuation_of_literals(){
    let mut trail = Trail::new();
    trail.push(AssignmentEntry::decision(var(1), false, 1));

    assert_eq!(Bool::True,  trail.get_value(lit(-1)));
    assert_eq!(Bool::False, trail.get_value(lit(1)));
    assert_eq!(Bool::Undef, trail.get_value(lit(2)));
}

#[test]
fn entries_render_with_their_depth(){
    let mut trail = Trail::new();
    trail.push(AssignmentEntry::fact(var(1), true, reason(vec![1])));
    trail.push(AssignmentEntry::decision(var(3), false, 2));

    assert_eq!("~x3@2", trail.entry_of(var(3)).to_string());
    assert_eq!("x1@0, ~x3@2", trail.to_string());
}
