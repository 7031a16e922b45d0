pub mod error;
pub mod search;

pub use error::error_page;
pub use search::{home_page, search_page};
