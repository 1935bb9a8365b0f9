use crate::config::TileConfig;
use crate::errors::ServerError;
use crate::map::{map_view, CenterOverride};
use crate::responses::{html_response_with_status, json_response, ResultResp};
use crate::results::result_cards;
use crate::search::{SearchBackend, SearchController, SearchError};
use crate::spreadsheets::export_results_csv;
use crate::templates::pages::{home_page, HomeVm};
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use std::sync::{Mutex, MutexGuard};

/// Everything a request handler needs: the one controller and the service it talks to.
pub struct App {
    controller: Mutex<SearchController>,
    backend: Box<dyn SearchBackend>,
    tiles: TileConfig,
}

impl App {
    pub fn new(backend: Box<dyn SearchBackend>, tiles: TileConfig) -> Self {
        Self {
            controller: Mutex::new(SearchController::new()),
            backend,
            tiles,
        }
    }

    #[cfg(test)]
    pub fn with_controller(
        controller: SearchController,
        backend: Box<dyn SearchBackend>,
        tiles: TileConfig,
    ) -> Self {
        Self {
            controller: Mutex::new(controller),
            backend,
            tiles,
        }
    }

    fn controller(&self) -> Result<MutexGuard<'_, SearchController>, ServerError> {
        self.controller
            .lock()
            .map_err(|_| ServerError::InternalError)
    }
}

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            let center = parse_center(&parse_query(&req))?;
            render_home(app, center, 200)
        }
        ("POST", "/search") => {
            let form = read_form(&mut req)?;
            submit(app, &form)
        }
        ("GET", "/results.csv") => {
            let controller = app.controller()?;
            let results = controller.view_state().results().unwrap_or_default();
            export_results_csv(results)
        }
        ("GET", "/health") => json_response(&serde_json::json!({ "status": "ok" })),
        _ => Err(ServerError::NotFound),
    }
}

fn submit(app: &App, form: &HashMap<String, String>) -> ResultResp {
    // Form edits and the transition to loading happen under the lock;
    // the round trip to the service does not.
    let request = {
        let mut controller = app.controller()?;
        controller.set_terms(form.get("terms").cloned().unwrap_or_default());
        controller.set_location(form.get("location").cloned().unwrap_or_default());
        // Unchecked boxes are simply absent from the form.
        controller.set_enrich(form.contains_key("enrich"));
        controller.begin_search()
    };

    let request = match request {
        Ok(request) => request,
        Err(SearchError::InFlight) => return render_home(app, CenterOverride::default(), 409),
        Err(e) => {
            tracing::error!(error = %e, "could not start search");
            return Err(ServerError::InternalError);
        }
    };

    let outcome = app.backend.search(&request);
    app.controller()?.complete_search(outcome);

    render_home(app, CenterOverride::default(), 200)
}

fn render_home(app: &App, center: CenterOverride, status: u16) -> ResultResp {
    let controller = app.controller()?;
    let view = controller.view_state();

    let map = view
        .results()
        .filter(|results| !results.is_empty())
        .map(|results| map_view(results, center));

    let page = home_page(&HomeVm {
        terms: controller.terms(),
        location: controller.location(),
        enrich: controller.enrich(),
        view,
        cards: result_cards(view),
        map,
        tiles: &app.tiles,
    });

    html_response_with_status(status, page)
}

fn parse_center(query: &HashMap<String, String>) -> Result<CenterOverride, ServerError> {
    let coord = |key: &str, limit: f64| -> Result<Option<f64>, ServerError> {
        let raw = match query.get(key).map(String::as_str) {
            None | Some("") => return Ok(None),
            Some(raw) => raw,
        };
        let value = raw
            .parse::<f64>()
            .map_err(|_| ServerError::BadRequest(format!("{key} must be a number")))?;

        // `parse` accepts NaN and inf, which the map cannot center on.
        if !value.is_finite() || value.abs() > limit {
            return Err(ServerError::BadRequest(format!(
                "{key} must be between -{limit} and {limit}"
            )));
        }
        Ok(Some(value))
    };

    Ok(CenterOverride {
        lat: coord("center_lat", 90.0)?,
        lon: coord("center_lon", 180.0)?,
    })
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn read_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("could not read form: {e}")))?;

    Ok(url::form_urlencoded::parse(&body).into_owned().collect())
}
