mod backend;
mod controller;
mod models;
mod search_error;

pub use backend::{HttpSearchBackend, SearchBackend};
pub use controller::{SearchController, ViewState};
pub use models::{BusinessRecord, OsmId};
#[cfg(test)]
pub use models::SearchRequest;
pub use search_error::SearchError;
