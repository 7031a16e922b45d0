mod api;
mod api_error;
mod controller;
mod filters;
mod query;

pub use api::{HttpSearchApi, SearchApi};
pub use api_error::ApiError;
pub use controller::{RequestState, SearchController, SEARCH_ERROR_MESSAGE};
pub use filters::{FilterField, FilterState};
pub use query::SearchQuery;
