use crate::domain::model::LinearModel;
use crate::domain::solver::EngineSolution;
use crate::error::SolveError;
use crate::models::{Solution, VarValue};

/// Maps engine output back to the input identifiers, in input order.
pub fn to_solution(
    run_id: &str,
    model: &LinearModel,
    engine: EngineSolution,
) -> Result<Solution, SolveError> {
    if engine.values.len() != model.columns.len() {
        return Err(SolveError::Engine(format!(
            "expected {} variable values, got {}",
            model.columns.len(),
            engine.values.len()
        )));
    }

    let var_values = model
        .columns
        .iter()
        .zip(engine.values)
        .map(|(col, value)| VarValue {
            id: col.id.clone(),
            value,
        })
        .collect();

    Ok(Solution {
        id: run_id.to_string(),
        objective_value: engine.objective,
        var_values,
    })
}
