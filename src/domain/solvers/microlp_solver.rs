use crate::domain::model::LinearModel;
use crate::domain::solver::{EngineSolution, Solver};
use crate::error::SolveError;

use microlp::{ComparisonOp, LinearExpr, OptimizationDirection, Problem};

/// microlp solver implementation (pure Rust simplex)
pub struct MicrolpSolver;

impl MicrolpSolver {
    pub fn new() -> Self {
        MicrolpSolver
    }
}

impl Default for MicrolpSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for MicrolpSolver {
    fn solve(&self, model: &LinearModel) -> Result<EngineSolution, SolveError> {
        let direction = if model.maximize {
            OptimizationDirection::Maximize
        } else {
            OptimizationDirection::Minimize
        };
        let mut problem = Problem::new(direction);

        let vars: Vec<microlp::Variable> = model
            .columns
            .iter()
            .map(|col| problem.add_var(col.objective, (col.lower, col.upper)))
            .collect();

        for row in model.rows.iter().filter(|r| !r.is_free()) {
            let expr = || {
                let mut expr = LinearExpr::empty();
                for &(col, value) in &row.terms {
                    expr.add(vars[col], value);
                }
                expr
            };

            if row.is_equality() {
                problem.add_constraint(expr(), ComparisonOp::Eq, row.upper);
                continue;
            }
            if row.lower.is_finite() {
                problem.add_constraint(expr(), ComparisonOp::Ge, row.lower);
            }
            if row.upper.is_finite() {
                problem.add_constraint(expr(), ComparisonOp::Le, row.upper);
            }
        }

        let solution = problem.solve().map_err(SolveError::from)?;

        Ok(EngineSolution {
            values: vars.iter().map(|&v| solution[v]).collect(),
            objective: solution.objective(),
        })
    }

    fn name(&self) -> &str {
        "microlp"
    }

    fn run_id(&self) -> &'static str {
        "MICROLP_LINEAR_PROGRAMMING"
    }
}

impl From<microlp::Error> for SolveError {
    fn from(error: microlp::Error) -> Self {
        match error {
            microlp::Error::Infeasible => SolveError::Infeasible,
            microlp::Error::Unbounded => SolveError::Unbounded,
            microlp::Error::InternalError(message) => SolveError::Engine(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coefficient, Constraint, Objective, Variable};
    use float_eq::assert_float_eq;

    fn solve(
        variables: &[Variable],
        constraints: &[Constraint],
        objective: &Objective,
    ) -> Result<EngineSolution, SolveError> {
        let model = LinearModel::build(variables, constraints, objective).unwrap();
        MicrolpSolver::new().solve(&model)
    }

    #[test]
    fn test_solve_given_ranged_row_should_respect_both_bounds() {
        let variables = vec![Variable::new("x", Some(0.0), None)];
        let constraints = vec![Constraint {
            id: "range".to_string(),
            lower_bound: Some(2.0),
            upper_bound: Some(4.0),
            coefficients: vec![Coefficient::new("x", 1.0)],
        }];
        let minimize = Objective {
            id: None,
            coefficients: vec![Coefficient::new("x", 1.0)],
            maximize: false,
        };
        let maximize = Objective {
            maximize: true,
            ..minimize.clone()
        };

        let low = solve(&variables, &constraints, &minimize).unwrap();
        let high = solve(&variables, &constraints, &maximize).unwrap();

        assert_float_eq!(low.values[0], 2.0, abs <= 1e-6);
        assert_float_eq!(high.values[0], 4.0, abs <= 1e-6);
    }

    #[test]
    fn test_solve_given_equality_row_should_pin_value() {
        let variables = vec![Variable::new("x", Some(0.0), None), Variable::new("y", Some(0.0), None)];
        let constraints = vec![Constraint {
            id: "eq".to_string(),
            lower_bound: Some(6.0),
            upper_bound: Some(6.0),
            coefficients: vec![Coefficient::new("x", 2.0), Coefficient::new("y", 3.0)],
        }];
        let objective = Objective {
            id: None,
            coefficients: vec![Coefficient::new("x", 1.0)],
            maximize: true,
        };

        let solution = solve(&variables, &constraints, &objective).unwrap();

        assert_float_eq!(solution.values[0], 3.0, abs <= 1e-6);
        assert_float_eq!(solution.values[1], 0.0, abs <= 1e-6);
        assert_float_eq!(solution.objective, 3.0, abs <= 1e-6);
    }

    #[test]
    fn test_solve_given_free_row_should_ignore_it() {
        let variables = vec![Variable::new("x", Some(0.0), Some(1.0))];
        let constraints = vec![Constraint {
            id: "free".to_string(),
            lower_bound: None,
            upper_bound: None,
            coefficients: vec![Coefficient::new("x", 1.0)],
        }];
        let objective = Objective {
            id: None,
            coefficients: vec![Coefficient::new("x", 1.0)],
            maximize: true,
        };

        let solution = solve(&variables, &constraints, &objective).unwrap();

        assert_float_eq!(solution.objective, 1.0, abs <= 1e-6);
    }

    #[test]
    fn test_solve_given_infeasible_problem_should_return_infeasible() {
        let variables = vec![Variable::new("x", Some(0.0), Some(1.0))];
        let constraints = vec![Constraint {
            id: "c1".to_string(),
            lower_bound: Some(5.0),
            upper_bound: None,
            coefficients: vec![Coefficient::new("x", 1.0)],
        }];

        assert_eq!(
            solve(&variables, &constraints, &Objective::default()),
            Err(SolveError::Infeasible)
        );
    }

    #[test]
    fn test_solve_given_unbounded_problem_should_return_unbounded() {
        let variables = vec![Variable::new("x", Some(0.0), None)];
        let objective = Objective {
            id: None,
            coefficients: vec![Coefficient::new("x", 1.0)],
            maximize: true,
        };

        assert_eq!(solve(&variables, &[], &objective), Err(SolveError::Unbounded));
    }

    #[test]
    fn test_run_id() {
        assert_eq!(MicrolpSolver::new().run_id(), "MICROLP_LINEAR_PROGRAMMING");
    }
}
