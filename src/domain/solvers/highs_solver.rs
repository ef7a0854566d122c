use crate::domain::model::LinearModel;
use crate::domain::solver::{EngineSolution, Solver};
use crate::error::SolveError;

use ::highs::{HighsModelStatus, RowProblem, Sense};

/// HiGHS solver implementation
pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        HighsSolver
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for HighsSolver {
    fn solve(&self, model: &LinearModel) -> Result<EngineSolution, SolveError> {
        let mut problem = RowProblem::default();

        // Columns first, so rows can refer to them
        let cols: Vec<_> = model
            .columns
            .iter()
            .map(|col| problem.add_column(col.objective, col.lower..=col.upper))
            .collect();

        for row in model.rows.iter().filter(|r| !r.is_free()) {
            let factors: Vec<_> = row
                .terms
                .iter()
                .map(|&(col, value)| (cols[col], value))
                .collect();
            problem.add_row(row.lower..=row.upper, &factors);
        }

        let sense = if model.maximize {
            Sense::Maximise
        } else {
            Sense::Minimise
        };

        let solved = problem.optimise(sense).solve();

        match solved.status() {
            HighsModelStatus::Optimal => {
                let values = solved.get_solution().columns().to_vec();
                let objective = model.objective_value(&values);
                Ok(EngineSolution { values, objective })
            }
            status => Err(outcome_error(status)),
        }
    }

    fn name(&self) -> &str {
        "HiGHS"
    }

    fn run_id(&self) -> &'static str {
        "HIGHS_LINEAR_PROGRAMMING"
    }
}

/// Error for a non-optimal HiGHS status.
///
/// `UnboundedOrInfeasible` is reported as infeasible since no feasible point
/// was certified.
fn outcome_error(status: HighsModelStatus) -> SolveError {
    match status {
        HighsModelStatus::Infeasible | HighsModelStatus::UnboundedOrInfeasible => {
            SolveError::Infeasible
        }
        HighsModelStatus::Unbounded => SolveError::Unbounded,
        status => SolveError::Engine(format!("HiGHS solver returned status: {:?}", status)),
    }
}
