// controller.rs
use crate::search::models::{BusinessRecord, SearchRequest};
use crate::search::SearchError;

pub const DEFAULT_TERMS: &str = "cafe, restaurant";
pub const DEFAULT_LOCATION: &str = "Soho, London";

/// What the page currently shows. Exactly one of these at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Success(Vec<BusinessRecord>),
    Error(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// Current result set, only while in `Success`.
    pub fn results(&self) -> Option<&[BusinessRecord]> {
        match self {
            ViewState::Success(results) => Some(results),
            _ => None,
        }
    }
}

/// Owns the search form and the view state that results from submitting it.
#[derive(Debug, Clone)]
pub struct SearchController {
    terms: String,
    location: String,
    enrich: bool,
    view: ViewState,
}

impl Default for SearchController {
    fn default() -> Self {
        Self {
            terms: DEFAULT_TERMS.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            enrich: false,
            view: ViewState::Idle,
        }
    }
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn terms(&self) -> &str {
        &self.terms
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn enrich(&self) -> bool {
        self.enrich
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn set_terms(&mut self, terms: impl Into<String>) {
        self.terms = terms.into();
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn set_enrich(&mut self, enrich: bool) {
        self.enrich = enrich;
    }

    /// Move to `Loading` and build the request from the current form.
    ///
    /// Prior results or errors are dropped here, before any response exists.
    /// Rejected with [`SearchError::InFlight`] while another search is loading;
    /// state is left untouched in that case.
    pub fn begin_search(&mut self) -> Result<SearchRequest, SearchError> {
        if self.view.is_loading() {
            tracing::warn!("search rejected: another search is in flight");
            return Err(SearchError::InFlight);
        }

        self.view = ViewState::Loading;

        let request = SearchRequest::from_form(&self.terms, &self.location, self.enrich);
        tracing::info!(
            terms = request.terms.len(),
            location = %request.location,
            enrich = request.enrich,
            "search submitted"
        );

        Ok(request)
    }

    /// Apply the outcome of the request started by [`begin_search`](Self::begin_search).
    ///
    /// Ignored unless the controller is still `Loading`.
    pub fn complete_search(&mut self, outcome: Result<Vec<BusinessRecord>, SearchError>) {
        if !self.view.is_loading() {
            tracing::warn!("search completion ignored: controller is not loading");
            return;
        }

        self.view = match outcome {
            Ok(results) => {
                tracing::info!(count = results.len(), "search succeeded");
                ViewState::Success(results)
            }
            Err(e) => {
                tracing::error!(error = %e, "search failed");
                ViewState::Error(e.user_message().to_string())
            }
        };
    }
}
