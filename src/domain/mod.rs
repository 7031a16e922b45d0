pub mod listing;
pub mod neighborhood;

pub use listing::{DisplayValue, PropertyListing, SearchResult};
pub use neighborhood::Neighborhood;
