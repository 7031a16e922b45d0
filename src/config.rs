use std::net::SocketAddr;
use tracing::warn;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_WORKERS: usize = 8;

/// Process settings, all read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = api_url_or_default(lookup("API_URL"));

        let default_addr: SocketAddr = ([127, 0, 0, 1], 3000).into();
        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("BIND_ADDR={raw:?} is not a socket address ({e}), using {DEFAULT_BIND_ADDR}");
                default_addr
            }),
            None => default_addr,
        };

        let max_workers = match lookup("MAX_WORKERS") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    warn!("MAX_WORKERS={raw:?} is invalid, using {DEFAULT_MAX_WORKERS}");
                    DEFAULT_MAX_WORKERS
                }
            },
            None => DEFAULT_MAX_WORKERS,
        };

        Self {
            api_url,
            bind_addr,
            max_workers,
        }
    }
}

/// Base URL of the search API. Read on every call so a changed `API_URL`
/// applies to the next search.
pub fn api_base_url() -> String {
    api_url_or_default(std::env::var("API_URL").ok())
}

fn api_url_or_default(raw: Option<String>) -> String {
    match raw {
        Some(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
        _ => DEFAULT_API_URL.to_string(),
    }
}
