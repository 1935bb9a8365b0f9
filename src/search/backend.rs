// backend.rs
use crate::search::models::{BusinessRecord, SearchRequest, SearchResponse};
use crate::search::SearchError;
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("findplace-client/", env!("CARGO_PKG_VERSION"));

/// Anything that can answer a [`SearchRequest`] with a result set.
pub trait SearchBackend: Send + Sync {
    fn search(&self, request: &SearchRequest) -> Result<Vec<BusinessRecord>, SearchError>;
}

/// The remote lookup service, reached with one JSON POST per search.
pub struct HttpSearchBackend {
    client: Client,
    endpoint: Url,
}

impl HttpSearchBackend {
    /// `timeout` of `None` waits for the service indefinitely.
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self, SearchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl SearchBackend for HttpSearchBackend {
    fn search(&self, request: &SearchRequest) -> Result<Vec<BusinessRecord>, SearchError> {
        let resp = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            // Any failure status is a plain search failure; the body is not read.
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        let text = resp.text()?;
        let body: SearchResponse =
            serde_json::from_str(&text).map_err(|e| SearchError::Decode(e.to_string()))?;

        Ok(body.into_results())
    }
}
