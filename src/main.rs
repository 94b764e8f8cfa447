use crate::config::AppConfig;
use crate::db::connection::{init_db, Database};
use crate::responses::html_error_response;
use crate::router::handle;
use astra::Server;
use tracing::{error, info};

mod config;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;


fn main() {
    tracing_subscriber::fmt::init();

    let cfg = AppConfig::from_env();

    let db = Database::new(cfg.db_path.clone());

    if let Err(e) = init_db(&db, &cfg.schema_path) {
        error!("database initialization failed: {e}");
        std::process::exit(1);
    }

    info!("listening on http://{}", cfg.bind);
    info!("  db: {}", db.path());
    info!("  max_workers: {}", cfg.max_workers);

    let server = Server::bind(&cfg.bind).max_workers(cfg.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &db) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    });

    if let Err(e) = result {
        error!("server ended with error: {e}");
    }

    info!("server shut down cleanly");
}
