use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::{info, warn};
use std::env;

use rlp_api::api::{configure, AppState};
use rlp_api::{create_solver, AuthConfig, ClientCache, ServerConfig};

// ---------- Server bootstrap ----------
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let _sentry = sentry::init((
        env::var("SENTRY_DSN").ok().filter(|dsn| !dsn.is_empty()),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    info!("Starting up...");
    let config = ServerConfig::from_env();

    let solver = create_solver(config.solver);
    info!("Using {} solver", solver.name());

    // Resolved once, before any request is served
    let cache = ClientCache::new(AuthConfig::from_env());
    let graph_client = cache.get().await;
    if graph_client.is_none() {
        warn!("No authenticated graphql client; serving without downstream access");
    }

    let state = web::Data::new(AppState {
        solver,
        graph_client,
    });
    let json_limit = config.json_limit;

    info!("Starting server on http://127.0.0.1:{}", config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(sentry_actix::Sentry::new())
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure(json_limit))
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await?;

    info!("Shutting down...");
    info!("... done!");
    Ok(())
}
