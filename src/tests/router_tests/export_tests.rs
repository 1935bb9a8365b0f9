// src/tests/router_tests/export_tests.rs

use crate::handle;
use crate::search::SearchController;
use crate::tests::utils::{body_string, get, record, test_app, test_app_with};

#[test]
fn export_before_any_search_produces_no_file() {
    let (app, _) = test_app(|| Ok(Vec::new()));

    let resp = handle(get("/results.csv"), &app).unwrap();
    assert_eq!(resp.status(), 204);
    assert!(resp.headers().get("Content-Disposition").is_none());
}

#[test]
fn export_of_empty_results_produces_no_file() {
    let mut controller = SearchController::new();
    controller.begin_search().unwrap();
    controller.complete_search(Ok(Vec::new()));
    let (app, _) = test_app_with(controller, || Ok(Vec::new()));

    let resp = handle(get("/results.csv"), &app).unwrap();
    assert_eq!(resp.status(), 204);
}

#[test]
fn export_downloads_results_csv() {
    let mut controller = SearchController::new();
    controller.begin_search().unwrap();
    controller.complete_search(Ok(vec![
        record(11, "Bar Italia", Some((51.5136, -0.1318))),
        record(12, "Maison \"MB\" Bertaux", None),
    ]));
    let (app, _) = test_app_with(controller, || Ok(Vec::new()));

    let mut resp = handle(get("/results.csv"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["Content-Disposition"],
        "attachment; filename=\"results.csv\""
    );
    assert_eq!(resp.headers()["Content-Type"], "text/csv; charset=utf-8");

    let body = body_string(&mut resp);
    let lines: Vec<_> = body.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Name,Category,Phone,Website,Address Street,Address City,OSM ID",
            r#""Bar Italia","cafe","","","Old Compton Street","London",11"#,
            r#""Maison ""MB"" Bertaux","cafe","","","Old Compton Street","London",12"#,
        ]
    );
}
