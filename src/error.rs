use thiserror::Error;

/// Failures of the Solve operation.
///
/// Everything up to and including `InvalidCoefficient` is detected before the
/// engine is invoked.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("Duplicate variable id {0}")]
    DuplicateVariable(String),

    #[error("{owner} references unknown variable {variable}")]
    UnknownVariable { owner: String, variable: String },

    #[error("{id} has invalid bounds [{lower}, {upper}]")]
    InvalidBounds { id: String, lower: f64, upper: f64 },

    #[error("{owner} has a non-finite coefficient for {variable}")]
    InvalidCoefficient { owner: String, variable: String },

    #[error("Problem is infeasible: no solution satisfies all constraints")]
    Infeasible,

    #[error("Problem is unbounded: objective can be improved infinitely")]
    Unbounded,

    #[error("Solver failed: {0}")]
    Engine(String),
}

impl SolveError {
    /// True for errors reported before the engine runs.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SolveError::DuplicateVariable(_)
                | SolveError::UnknownVariable { .. }
                | SolveError::InvalidBounds { .. }
                | SolveError::InvalidCoefficient { .. }
        )
    }
}

/// Failures while acquiring a token or talking to the downstream endpoint.
#[derive(Error, Debug)]
pub enum AuthError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Token endpoint returned status {0}")]
    Status(u16),

    #[error("Token response has no access_token field")]
    MissingToken,

    #[error("No downstream endpoint URL configured")]
    MissingEndpoint,

    #[error("Invalid downstream endpoint URL: {0}")]
    InvalidUrl(String),

    #[error("Access token is not a valid header value")]
    InvalidToken,

    #[error("Downstream error: {0}")]
    Downstream(String),
}
