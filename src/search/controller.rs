use crate::domain::SearchResult;
use crate::search::{ApiError, FilterState, SearchApi, SearchQuery};
use tracing::{error, info};

pub const SEARCH_ERROR_MESSAGE: &str =
    "Hubo un problema al buscar las propiedades. Por favor intenta de nuevo.";

#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Idle,
    Loading,
    Error(String),
    Success(SearchResult),
}

/// Runs searches against a `SearchApi` and tracks where the latest one is.
///
/// `search` takes `&mut self` and returns only once the call has settled, so
/// one controller never has two searches in flight.
pub struct SearchController<'a> {
    api: &'a dyn SearchApi,
    state: RequestState,
    has_searched: bool,
}

impl<'a> SearchController<'a> {
    pub fn new(api: &'a dyn SearchApi) -> Self {
        Self {
            api,
            state: RequestState::Idle,
            has_searched: false,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// True once any search has started, even after it finished.
    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, RequestState::Loading)
    }

    pub fn search(&mut self, filters: FilterState) -> &RequestState {
        self.begin();

        let query = SearchQuery::from_filters(&filters);
        info!(query = %query.to_query_string(), "searching properties");

        let outcome = self.api.search(&query);
        self.settle(outcome)
    }

    /// Drops any previous result or error and enters `Loading`.
    pub fn begin(&mut self) {
        self.state = RequestState::Loading;
        self.has_searched = true;
    }

    /// Leaves `Loading` for `Success` or `Error`. The API error itself is
    /// only logged.
    pub fn settle(&mut self, outcome: Result<SearchResult, ApiError>) -> &RequestState {
        self.state = match outcome {
            Ok(result) => {
                info!(
                    total = result.total,
                    returned = result.properties.len(),
                    "search finished"
                );
                RequestState::Success(result)
            }
            Err(e) => {
                error!("search failed: {e}");
                RequestState::Error(SEARCH_ERROR_MESSAGE.to_string())
            }
        };
        &self.state
    }
}
