use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("a search is already in flight")]
    InFlight,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search service returned HTTP {status}")]
    Status { status: u16 },

    #[error("could not decode search response: {0}")]
    Decode(String),
}

impl SearchError {
    /// Short message shown inline on the page. Detail stays in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::InFlight => "A search is already running",
            SearchError::Http(_) | SearchError::Status { .. } | SearchError::Decode(_) => {
                "Search failed"
            }
        }
    }
}
