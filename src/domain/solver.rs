use crate::domain::model::LinearModel;
use crate::error::SolveError;

/// Raw engine output, one value per model column in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSolution {
    pub values: Vec<f64>,
    pub objective: f64,
}

/// Common interface for LP solving engines
pub trait Solver: Send + Sync {
    /// Solve a fully built model
    ///
    /// # Returns
    /// The per-column values and the achieved objective value, or
    /// `SolveError::Infeasible` / `SolveError::Unbounded` when the engine
    /// reports that outcome
    fn solve(&self, model: &LinearModel) -> Result<EngineSolution, SolveError>;

    /// Get the solver name for logging/debugging
    fn name(&self) -> &str;

    /// Constant tag reported as the id of every solution this engine produces
    fn run_id(&self) -> &'static str;
}
