//! Error types for hearthstone_search

use thiserror::Error;

/// Failure while fetching the card catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Remote answered with something other than 200 OK
    #[error("Failed to fetch cards: {0}")]
    Status(u16),
    /// Remote answered with an empty or whitespace-only body
    #[error("Empty response from API")]
    EmptyBody,
    /// Network failure or undecodable payload
    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

/// Terminal outcome of a search request that produced no results
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// Fetch succeeded but no card matched any query
    #[error("No matching cards found.")]
    NoMatches,
}

/// Result alias for catalog fetches
pub type Result<T> = std::result::Result<T, FetchError>;
