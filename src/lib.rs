//! Real-valued linear programming behind an HTTP API, plus a cached,
//! token-authenticated client for a downstream GraphQL endpoint.

pub mod api;
pub mod auth;
pub mod config;
pub mod convert;
pub mod domain;
pub mod error;
pub mod models;

pub use auth::{CacheState, ClientCache, GraphClient};
pub use config::{AuthConfig, AuthProvider, ServerConfig};
pub use domain::solve::solve;
pub use domain::solver::Solver;
pub use domain::solver_factory::{create_solver, SolverType};
pub use error::{AuthError, SolveError};
pub use models::{Coefficient, Constraint, Objective, Solution, SolveRequest, VarValue, Variable};
