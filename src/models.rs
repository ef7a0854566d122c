use serde::{Deserialize, Serialize};

// ---------- API (wire) types: owned & serde-friendly ----------

/// A decision variable. A missing bound means unbounded on that side.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub id: String,
    #[serde(default)]
    pub lower_bound: Option<f64>,
    #[serde(default)]
    pub upper_bound: Option<f64>,
}

impl Variable {
    pub fn new(id: impl Into<String>, lower_bound: Option<f64>, upper_bound: Option<f64>) -> Self {
        Self {
            id: id.into(),
            lower_bound,
            upper_bound,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Coefficient {
    /// Identifier of the variable this term applies to
    pub id: String,
    pub value: f64,
}

impl Coefficient {
    pub fn new(id: impl Into<String>, value: f64) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }
}

/// `lower_bound <= sum(coef.value * var) <= upper_bound`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Constraint {
    pub id: String,
    #[serde(default)]
    pub lower_bound: Option<f64>,
    #[serde(default)]
    pub upper_bound: Option<f64>,
    pub coefficients: Vec<Coefficient>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Objective {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub coefficients: Vec<Coefficient>,
    pub maximize: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SolveRequest {
    pub vars: Vec<Variable>,
    pub constraints: Vec<Constraint>,
    pub objective: Objective,
}

// ---------- API response types ----------

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VarValue {
    pub id: String,
    pub value: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// Tag of the engine that produced this solution
    pub id: String,
    pub objective_value: f64,
    pub var_values: Vec<VarValue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_request_given_missing_bounds_should_deserialize_as_none() {
        let request: SolveRequest = serde_json::from_value(serde_json::json!({
            "vars": [{"id": "x", "lowerBound": 0}, {"id": "y", "upperBound": null}],
            "constraints": [
                {"id": "c1", "upperBound": 10, "coefficients": [{"id": "x", "value": 1}]}
            ],
            "objective": {"coefficients": [{"id": "x", "value": 2.5}], "maximize": true}
        }))
        .unwrap();

        assert_eq!(request.vars[0], Variable::new("x", Some(0.0), None));
        assert_eq!(request.vars[1], Variable::new("y", None, None));
        assert_eq!(request.constraints[0].lower_bound, None);
        assert_eq!(request.constraints[0].upper_bound, Some(10.0));
        assert!(request.objective.maximize);
        assert_eq!(request.objective.id, None);
    }

    #[test]
    fn test_objective_given_id_should_keep_it() {
        let objective: Objective = serde_json::from_value(serde_json::json!({
            "id": "profit",
            "coefficients": [],
            "maximize": false
        }))
        .unwrap();

        assert_eq!(objective.id.as_deref(), Some("profit"));
    }

    #[test]
    fn test_solve_request_given_missing_maximize_should_fail() {
        let result: Result<SolveRequest, _> = serde_json::from_value(serde_json::json!({
            "vars": [],
            "constraints": [],
            "objective": {"coefficients": []}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_solution_should_serialize_camel_case() {
        let solution = Solution {
            id: "MICROLP_LINEAR_PROGRAMMING".to_string(),
            objective_value: 10.0,
            var_values: vec![VarValue {
                id: "x".to_string(),
                value: 10.0,
            }],
        };
        let value = serde_json::to_value(&solution).unwrap();
        assert_eq!(value["objectiveValue"], 10.0);
        assert_eq!(value["varValues"][0]["id"], "x");
    }
}
