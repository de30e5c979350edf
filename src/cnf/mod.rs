//! The propositional vocabulary of the solver: variables, polarities, literals, clauses and
//! formulas. These are plain data types; none of them knows anything about the search.

#[allow(non_camel_case_types)]
pub type uint = u32;
#[allow(non_camel_case_types)]
pub type iint = i32;

pub mod tribool;
pub mod variable;
pub mod polarity;
pub mod literal;
pub mod clause;
pub mod formula;

// re-export all types
pub use self::tribool::*;
pub use self::variable::*;
pub use self::polarity::*;
pub use self::literal::*;
pub use self::clause::*;
pub use self::formula::*;

/// A shortcut notation to make a literal out of a number value
pub fn lit(l: iint) -> Literal  { Literal::from(l) }

/// A shortcut notation to make a variable out of a number value
pub fn var(v: uint) -> Variable { Variable::from(v) }
