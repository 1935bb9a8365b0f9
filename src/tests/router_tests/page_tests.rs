// src/tests/router_tests/page_tests.rs

use crate::errors::ServerError;
use crate::handle;
use crate::tests::utils::{body_string, get, test_app};

#[test]
fn home_renders_default_form() {
    let (app, seen) = test_app(|| Ok(Vec::new()));

    let mut resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains(r#"value="cafe, restaurant""#));
    assert!(body.contains(r#"value="Soho, London""#));
    assert!(body.contains("Find Businesses"));
    assert!(!body.contains("id=\"map\""), "idle page should not render a map");

    // Rendering never talks to the service.
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn health_reports_ok() {
    let (app, _) = test_app(|| Ok(Vec::new()));

    let mut resp = handle(get("/health"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(&mut resp), r#"{"status":"ok"}"#);
}

#[test]
fn unknown_route_is_not_found() {
    let (app, _) = test_app(|| Ok(Vec::new()));

    let err = handle(get("/nope"), &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn malformed_center_is_bad_request() {
    let (app, _) = test_app(|| Ok(Vec::new()));

    let err = handle(get("/?center_lat=north&center_lon=1"), &app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_eq!(err.status(), 400);
}

#[test]
fn non_finite_or_out_of_range_center_is_bad_request() {
    let (app, _) = test_app(|| Ok(Vec::new()));

    for query in [
        "/?center_lat=NaN&center_lon=1",
        "/?center_lat=1&center_lon=inf",
        "/?center_lat=-infinity&center_lon=1",
        "/?center_lat=90.5&center_lon=1",
        "/?center_lat=1&center_lon=-180.01",
    ] {
        let err = handle(get(query), &app).unwrap_err();
        assert!(matches!(err, ServerError::BadRequest(_)), "{query}: {err:?}");
    }
}

#[test]
fn center_at_the_limits_is_accepted() {
    let (app, _) = test_app(|| Ok(Vec::new()));

    let resp = handle(get("/?center_lat=-90&center_lon=180"), &app).unwrap();
    assert_eq!(resp.status(), 200);
}

#[test]
fn layout_swaps_conflict_responses() {
    let (app, _) = test_app(|| Ok(Vec::new()));

    let body = body_string(&mut handle(get("/"), &app).unwrap());
    assert!(body.contains("htmx:beforeSwap"));
    assert!(body.contains("status === 409"));
}

#[test]
fn error_response_is_an_html_page() {
    let mut resp = crate::responses::error_to_response(ServerError::NotFound);
    assert_eq!(resp.status(), 404);
    assert!(body_string(&mut resp).contains("Error 404"));
}
