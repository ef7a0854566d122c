use std::collections::HashSet;

use crate::error::SolveError;
use crate::models::{Coefficient, Constraint, Objective, Variable};

const OBJECTIVE_OWNER: &str = "Objective";

/// Checks a request before any model is built.
pub fn validate_problem(
    variables: &[Variable],
    constraints: &[Constraint],
    objective: &Objective,
) -> Result<(), SolveError> {
    let variable_ids = validate_variables(variables)?;

    for constraint in constraints {
        let owner = format!("Constraint {}", constraint.id);
        validate_bounds(&constraint.id, constraint.lower_bound, constraint.upper_bound)?;
        validate_coefficients(&owner, &variable_ids, &constraint.coefficients)?;
    }

    validate_coefficients(OBJECTIVE_OWNER, &variable_ids, &objective.coefficients)
}

fn validate_variables(variables: &[Variable]) -> Result<HashSet<&str>, SolveError> {
    let mut variable_ids: HashSet<&str> = HashSet::with_capacity(variables.len());

    for variable in variables {
        if !variable_ids.insert(variable.id.as_str()) {
            return Err(SolveError::DuplicateVariable(variable.id.clone()));
        }
        validate_bounds(&variable.id, variable.lower_bound, variable.upper_bound)?;
    }

    Ok(variable_ids)
}

fn validate_bounds(id: &str, lower: Option<f64>, upper: Option<f64>) -> Result<(), SolveError> {
    let lower = lower.unwrap_or(f64::NEG_INFINITY);
    let upper = upper.unwrap_or(f64::INFINITY);

    // NaN fails the ordering check too; a bound at the wrong infinity admits no value
    if !(lower <= upper) || lower == f64::INFINITY || upper == f64::NEG_INFINITY {
        return Err(SolveError::InvalidBounds {
            id: id.to_string(),
            lower,
            upper,
        });
    }

    Ok(())
}

fn validate_coefficients(
    owner: &str,
    variable_ids: &HashSet<&str>,
    coefficients: &[Coefficient],
) -> Result<(), SolveError> {
    for coefficient in coefficients {
        if !variable_ids.contains(coefficient.id.as_str()) {
            return Err(SolveError::UnknownVariable {
                owner: owner.to_string(),
                variable: coefficient.id.clone(),
            });
        }
        if !coefficient.value.is_finite() {
            return Err(SolveError::InvalidCoefficient {
                owner: owner.to_string(),
                variable: coefficient.id.clone(),
            });
        }
    }

    Ok(())
}
