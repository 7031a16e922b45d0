use crate::config::Config;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::search::HttpSearchApi;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod search;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = Config::from_env();

    // API_URL is re-read on every search; this is just for the log line.
    info!(api_url = %cfg.api_url, "search API");

    let api = match HttpSearchApi::new() {
        Ok(api) => api,
        Err(e) => {
            error!("HTTP client init failed: {e}");
            std::process::exit(1);
        }
    };

    info!("Starting server at http://{}", cfg.bind_addr);

    let server = Server::bind(&cfg.bind_addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &api) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
