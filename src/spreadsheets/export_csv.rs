use crate::responses::{csv_response, no_content_response, ResultResp};
use crate::search::BusinessRecord;

pub const CSV_FILENAME: &str = "results.csv";

const HEADERS: [&str; 7] = [
    "Name",
    "Category",
    "Phone",
    "Website",
    "Address Street",
    "Address City",
    "OSM ID",
];

/// Render `results` as CSV. `None` when there is nothing to export.
///
/// Text columns are always quoted with inner quotes doubled; missing values
/// become `""`. The OSM id goes out bare. Lines are joined with `\n` and
/// there is no trailing newline.
pub fn results_csv(results: &[BusinessRecord]) -> Option<String> {
    if results.is_empty() {
        return None;
    }

    let mut lines = Vec::with_capacity(results.len() + 1);
    lines.push(HEADERS.join(","));

    for r in results {
        let row = [
            quoted(r.name.as_deref()),
            quoted(r.category.as_deref()),
            quoted(r.phone.as_deref()),
            quoted(r.website.as_deref()),
            quoted(r.address_street.as_deref()),
            quoted(r.address_city.as_deref()),
            r.osm_id.to_string(),
        ];
        lines.push(row.join(","));
    }

    Some(lines.join("\n"))
}

fn quoted(value: Option<&str>) -> String {
    format!("\"{}\"", value.unwrap_or("").replace('"', "\"\""))
}

/// Offer the results as a `results.csv` download, or 204 when empty.
pub fn export_results_csv(results: &[BusinessRecord]) -> ResultResp {
    match results_csv(results) {
        Some(doc) => {
            tracing::info!(rows = results.len(), "exporting results as csv");
            csv_response(doc, CSV_FILENAME)
        }
        None => no_content_response(),
    }
}
