use crate::config::TileConfig;
use crate::router::App;
use crate::search::{BusinessRecord, OsmId, SearchBackend, SearchController, SearchError, SearchRequest};
use astra::{Body, Request, Response};
use std::io::Read;
use std::sync::{Arc, Mutex};

type Outcome = Box<dyn Fn() -> Result<Vec<BusinessRecord>, SearchError> + Send + Sync>;

/// Stand-in for the search service. Answers every request with `outcome`
/// and keeps a copy of what it was sent.
pub struct FakeBackend {
    outcome: Outcome,
    seen: Arc<Mutex<Vec<SearchRequest>>>,
}

impl SearchBackend for FakeBackend {
    fn search(&self, request: &SearchRequest) -> Result<Vec<BusinessRecord>, SearchError> {
        self.seen.lock().unwrap().push(request.clone());
        (self.outcome)()
    }
}

/// Build an app around a fake backend; the returned handle shows the requests it received.
pub fn test_app<F>(outcome: F) -> (App, Arc<Mutex<Vec<SearchRequest>>>)
where
    F: Fn() -> Result<Vec<BusinessRecord>, SearchError> + Send + Sync + 'static,
{
    test_app_with(SearchController::new(), outcome)
}

pub fn test_app_with<F>(
    controller: SearchController,
    outcome: F,
) -> (App, Arc<Mutex<Vec<SearchRequest>>>)
where
    F: Fn() -> Result<Vec<BusinessRecord>, SearchError> + Send + Sync + 'static,
{
    build_app(controller, outcome, TileConfig::default())
}

pub fn test_app_with_tiles(
    controller: SearchController,
    tiles: TileConfig,
) -> (App, Arc<Mutex<Vec<SearchRequest>>>) {
    build_app(controller, || Ok(Vec::new()), tiles)
}

fn build_app<F>(
    controller: SearchController,
    outcome: F,
    tiles: TileConfig,
) -> (App, Arc<Mutex<Vec<SearchRequest>>>)
where
    F: Fn() -> Result<Vec<BusinessRecord>, SearchError> + Send + Sync + 'static,
{
    let seen = Arc::new(Mutex::new(Vec::new()));
    let backend = FakeBackend {
        outcome: Box::new(outcome),
        seen: Arc::clone(&seen),
    };
    let app = App::with_controller(controller, Box::new(backend), tiles);
    (app, seen)
}

pub fn record(id: i64, name: &str, coords: Option<(f64, f64)>) -> BusinessRecord {
    BusinessRecord {
        osm_id: OsmId::Numeric(id),
        name: Some(name.to_string()),
        category: Some("cafe".into()),
        phone: None,
        website: None,
        address_street: Some("Old Compton Street".into()),
        address_city: Some("London".into()),
        lat: coords.map(|c| c.0),
        lon: coords.map(|c| c.1),
    }
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &str) -> Request {
    http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body = String::new();
    resp.body_mut().reader().read_to_string(&mut body).unwrap();
    body
}
