use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use log::{error, warn};
use serde_json::json;

use crate::auth::GraphClient;
use crate::domain::solve::solve as solve_problem;
use crate::domain::solver::Solver;
use crate::error::SolveError;
use crate::models::SolveRequest;

/// Request-handling context, built once at startup.
pub struct AppState {
    pub solver: Arc<dyn Solver>,
    /// Authenticated downstream client, absent when auth is disabled or failed
    pub graph_client: Option<Arc<GraphClient>>,
}

/// POST /solve
pub async fn solve(state: web::Data<AppState>, req: web::Json<SolveRequest>) -> impl Responder {
    let req = req.into_inner();
    let solver = Arc::clone(&state.solver);

    // The engine call is CPU bound; keep it off the async workers
    let result = web::block(move || {
        solve_problem(solver.as_ref(), &req.vars, &req.constraints, &req.objective)
    })
    .await;

    match result {
        Ok(Ok(solution)) => HttpResponse::Ok().json(solution),
        Ok(Err(e)) => error_response(&e),
        Err(e) => {
            error!("Solve task failed: {}", e);
            HttpResponse::InternalServerError().json(json!({ "error": "Something went wrong" }))
        }
    }
}

fn error_response(e: &SolveError) -> HttpResponse {
    match e {
        e if e.is_validation() => {
            HttpResponse::BadRequest().json(json!({ "error": e.to_string() }))
        }
        SolveError::Infeasible => HttpResponse::UnprocessableEntity()
            .json(json!({ "error": e.to_string(), "status": "infeasible" })),
        SolveError::Unbounded => HttpResponse::UnprocessableEntity()
            .json(json!({ "error": e.to_string(), "status": "unbounded" })),
        _ => {
            warn!("{}", e);
            HttpResponse::InternalServerError().json(json!({ "error": e.to_string() }))
        }
    }
}

/// GET /health
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

/// Routes plus the JSON extractor config.
pub fn configure(json_limit: usize) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(
            web::JsonConfig::default()
                .limit(json_limit)
                .error_handler(|err, _| {
                    let err_string = err.to_string();
                    actix_web::error::InternalError::from_response(
                        err,
                        HttpResponse::BadRequest().json(json!({ "error": err_string })),
                    )
                    .into()
                }),
        )
        .route("/solve", web::post().to(solve))
        .route("/health", web::get().to(health_check));
    }
}
