use std::sync::Arc;

use crate::domain::solver::Solver;
use crate::domain::solvers::MicrolpSolver;

#[cfg(feature = "highs-solver")]
use crate::domain::solvers::HighsSolver;

/// Available solver backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolverType {
    #[default]
    Microlp,
    #[cfg(feature = "highs-solver")]
    Highs,
}

impl SolverType {
    /// Parse solver type from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "microlp" => Some(SolverType::Microlp),
            #[cfg(feature = "highs-solver")]
            "highs" => Some(SolverType::Highs),
            _ => None,
        }
    }
}

/// Create a solver instance based on the specified type
pub fn create_solver(solver_type: SolverType) -> Arc<dyn Solver> {
    match solver_type {
        SolverType::Microlp => Arc::new(MicrolpSolver::new()),
        #[cfg(feature = "highs-solver")]
        SolverType::Highs => Arc::new(HighsSolver::new()),
    }
}
