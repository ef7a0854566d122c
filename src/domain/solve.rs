use log::debug;

use crate::convert::to_solution;
use crate::domain::model::LinearModel;
use crate::domain::solver::Solver;
use crate::error::SolveError;
use crate::models::{Constraint, Objective, Solution, Variable};

/// Solve a real-valued linear program.
///
/// Builds a fresh model, invokes the engine exactly once and maps the result
/// back to the input variable ids. Validation failures are returned before
/// the engine runs.
pub fn solve(
    solver: &dyn Solver,
    variables: &[Variable],
    constraints: &[Constraint],
    objective: &Objective,
) -> Result<Solution, SolveError> {
    let model = LinearModel::build(variables, constraints, objective)?;

    debug!(
        "Solving with {}: {} columns, {} rows",
        solver.name(),
        model.columns.len(),
        model.rows.len()
    );

    let engine_solution = solver.solve(&model)?;

    to_solution(solver.run_id(), &model, engine_solution)
}
