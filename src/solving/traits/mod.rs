mod valuation;
mod propagation;
mod conflict_analysis;
mod backtracking;
mod search;

pub use self::valuation::*;
pub use self::propagation::*;
pub use self::conflict_analysis::*;
pub use self::backtracking::*;
pub use self::search::*;
