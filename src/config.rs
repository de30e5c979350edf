//! Knobs that tune the behavior of a solver without altering its semantics.

/// Configuration of a `Solver`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Minimum number of clauses in the database before a propagation scan is spread over the
    /// rayon thread pool. Below this threshold, the scan runs on the calling thread.
    /// `usize::MAX` disables the parallel scan altogether.
    pub parallel_threshold: usize,
    /// Whether every clause must be checked against the model before reporting satisfiability.
    pub verify_model: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 64,
            verify_model: true,
        }
    }
}

impl SolverConfig {
    /// A configuration that never uses more than the calling thread.
    pub fn sequential() -> Self {
        Self::default().with_parallel_threshold(usize::MAX)
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn with_verify_model(mut self, verify: bool) -> Self {
        self.verify_model = verify;
        self
    }

    /// Tells whether a scan over `nb_clauses` clauses should be parallel
    pub fn is_parallel(&self, nb_clauses: usize) -> bool {
        nb_clauses >= self.parallel_threshold
    }
}
