use crate::config;
use crate::domain::SearchResult;
use crate::search::{ApiError, SearchQuery};
use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

/// The external search service.
pub trait SearchApi: Send + Sync {
    fn search(&self, query: &SearchQuery) -> Result<SearchResult, ApiError>;
}

/// `SearchApi` over HTTP: `GET {base}/search?{query}`.
pub struct HttpSearchApi {
    client: Client,
    // None = resolve from the environment on every call.
    base_url: Option<String>,
}

impl HttpSearchApi {
    pub fn new() -> Result<Self, ApiError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: None,
        })
    }

    /// Client pinned to `base_url` that ignores proxy settings, so tests can
    /// reach stub servers on localhost.
    #[cfg(test)]
    pub fn direct(base_url: &str) -> Self {
        let client = Client::builder().no_proxy().build().unwrap();
        Self {
            client,
            base_url: Some(base_url.trim_end_matches('/').to_string()),
        }
    }

    fn base_url(&self) -> String {
        self.base_url.clone().unwrap_or_else(config::api_base_url)
    }
}

pub fn search_url(base_url: &str, query: &SearchQuery) -> Result<Url, ApiError> {
    let mut url = Url::parse(&format!("{base_url}/search"))
        .map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
    url.set_query(Some(&query.to_query_string()));
    Ok(url)
}

impl SearchApi for HttpSearchApi {
    fn search(&self, query: &SearchQuery) -> Result<SearchResult, ApiError> {
        let url = search_url(&self.base_url(), query)?;
        debug!(%url, "calling search API");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
