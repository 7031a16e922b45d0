pub mod errors;
pub mod html;
pub mod stylesheet;

pub use crate::errors::ResultResp;
pub use errors::error_to_response;
pub use html::html_response;
pub use stylesheet::stylesheet_response;
