use std::collections::HashMap;

use crate::domain::validate::validate_problem;
use crate::error::SolveError;
use crate::models::{Coefficient, Constraint, Objective, Variable};

/// Engine-neutral decision variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub id: String,
    pub lower: f64,
    pub upper: f64,
    /// Objective coefficient, 0 when the objective does not mention this column
    pub objective: f64,
}

/// Engine-neutral constraint row: `lower <= sum(value * column) <= upper`.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: String,
    pub lower: f64,
    pub upper: f64,
    /// (column index, coefficient), one entry per column
    pub terms: Vec<(usize, f64)>,
}

impl Row {
    pub fn is_free(&self) -> bool {
        self.lower == f64::NEG_INFINITY && self.upper == f64::INFINITY
    }

    pub fn is_equality(&self) -> bool {
        self.lower == self.upper
    }
}

/// A solver-ready model, built fresh for every solve.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    pub maximize: bool,
}

impl LinearModel {
    /// Validates the request and builds the model.
    ///
    /// Columns keep the input order of `variables`, so engine output indexed by
    /// column maps straight back to the input identifiers.
    pub fn build(
        variables: &[Variable],
        constraints: &[Constraint],
        objective: &Objective,
    ) -> Result<Self, SolveError> {
        validate_problem(variables, constraints, objective)?;

        let index: HashMap<&str, usize> = variables
            .iter()
            .enumerate()
            .map(|(i, v)| (v.id.as_str(), i))
            .collect();

        let mut columns: Vec<Column> = variables
            .iter()
            .map(|v| Column {
                id: v.id.clone(),
                lower: v.lower_bound.unwrap_or(f64::NEG_INFINITY),
                upper: v.upper_bound.unwrap_or(f64::INFINITY),
                objective: 0.0,
            })
            .collect();

        for (col, value) in to_terms(&index, &objective.coefficients)? {
            columns[col].objective = value;
        }

        let rows = constraints
            .iter()
            .map(|c| {
                Ok(Row {
                    id: c.id.clone(),
                    lower: c.lower_bound.unwrap_or(f64::NEG_INFINITY),
                    upper: c.upper_bound.unwrap_or(f64::INFINITY),
                    terms: to_terms(&index, &c.coefficients)?,
                })
            })
            .collect::<Result<Vec<Row>, SolveError>>()?;

        Ok(LinearModel {
            columns,
            rows,
            maximize: objective.maximize,
        })
    }

    /// Objective value for a per-column assignment.
    pub fn objective_value(&self, values: &[f64]) -> f64 {
        self.columns
            .iter()
            .zip(values)
            .map(|(col, value)| col.objective * value)
            .sum()
    }
}

/// Resolves coefficients to column indices. A variable named twice keeps its
/// last value.
fn to_terms(
    index: &HashMap<&str, usize>,
    coefficients: &[Coefficient],
) -> Result<Vec<(usize, f64)>, SolveError> {
    let mut terms: Vec<(usize, f64)> = Vec::with_capacity(coefficients.len());
    let mut positions: HashMap<usize, usize> = HashMap::with_capacity(coefficients.len());

    for coefficient in coefficients {
        let col = *index
            .get(coefficient.id.as_str())
            .ok_or_else(|| SolveError::UnknownVariable {
                owner: "Model".to_string(),
                variable: coefficient.id.clone(),
            })?;

        match positions.get(&col) {
            Some(&pos) => terms[pos].1 = coefficient.value,
            None => {
                positions.insert(col, terms.len());
                terms.push((col, coefficient.value));
            }
        }
    }

    Ok(terms)
}
