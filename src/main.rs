use crate::config::AppConfig;
use crate::responses::error_to_response;
use crate::router::{handle, App};
use crate::search::HttpSearchBackend;
use astra::Server;
use tracing_subscriber::EnvFilter;

mod config;
mod errors;
mod map;
mod responses;
mod results;
mod router;
mod search;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Configuration (.env first, then the process environment)
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Logging
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3️⃣ Search service client
    let backend = match HttpSearchBackend::new(config.service_url.clone(), config.request_timeout) {
        Ok(backend) => backend,
        Err(e) => {
            tracing::error!(error = %e, "failed to build search client");
            std::process::exit(1);
        }
    };
    tracing::info!(endpoint = %backend.endpoint(), "search service configured");

    let app = App::new(Box::new(backend), config.tiles.clone());

    // 4️⃣ Start the server
    let addr = config.bind_addr;
    tracing::info!("Starting server at http://{addr}");

    let server = Server::bind(addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(error = %err, "request failed");
            error_to_response(err)
        }
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("Server shut down cleanly.");
}
