use std::error::Error;
use std::fmt;

/// Why a call to the search API failed. Only ever logged; users see one
/// fixed message whatever the variant.
#[derive(Debug)]
pub enum ApiError {
    InvalidUrl(String),
    Transport(String),
    Status(u16),
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidUrl(msg) => write!(f, "Invalid API URL: {msg}"),
            ApiError::Transport(msg) => write!(f, "Transport error: {msg}"),
            ApiError::Status(code) => write!(f, "Search API returned status {code}"),
            ApiError::Decode(msg) => write!(f, "Could not decode search response: {msg}"),
        }
    }
}

impl Error for ApiError {}
