use crate::config::AppConfig;
use crate::db::{init_db, seed_if_empty, Database};
use crate::router::{handle, AppState};
use astra::Server;

mod auth;
mod config;
mod db;
mod domain;
mod errors;
mod handlers;
mod logging;
mod responses;
mod router;
mod templates;


fn main() {
    logging::init();

    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let db = Database::new(cfg.db_path.clone());

    if let Err(e) = init_db(&db, &cfg.schema_path) {
        tracing::error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }
    if let Err(e) = seed_if_empty(&db, &cfg.seed_path) {
        tracing::error!(error = %e, "loading sample listings failed");
        std::process::exit(1);
    }

    let app = AppState::new(db, cfg.secure_cookies);

    tracing::info!(addr = %cfg.bind_addr, workers = cfg.max_workers, "starting server");

    let server = Server::bind(&cfg.bind_addr).max_workers(cfg.max_workers);
    let result = server.serve(move |req, _info| handle(req, &app));

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
        std::process::exit(1);
    }

    tracing::info!("server shut down cleanly");
}
