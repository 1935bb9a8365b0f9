use serde::{Deserialize, Serialize};
use std::fmt;

// request
//  ├── terms     ["cafe", "restaurant"]
//  ├── location  "Soho, London"
//  └── enrich    false
//
// response
//  ├── count     (ignored)
//  └── results[]
//       ├── osm_id
//       ├── name / category
//       ├── phone / website
//       ├── address_street / address_city
//       ├── lat / lon
//       └── tags, type, ... (ignored)

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub terms: Vec<String>,
    pub location: String,
    pub enrich: bool,
}

impl SearchRequest {
    pub fn from_form(terms: &str, location: &str, enrich: bool) -> Self {
        Self {
            terms: parse_terms(terms),
            location: location.to_string(),
            enrich,
        }
    }
}

/// Split a comma separated input into trimmed, non-empty terms, keeping input order.
pub fn parse_terms(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// OSM element id, kept exactly as the service sent it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum OsmId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for OsmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsmId::Numeric(id) => write!(f, "{id}"),
            OsmId::Text(id) => write!(f, "{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BusinessRecord {
    pub osm_id: OsmId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub address_street: Option<String>,
    #[serde(default)]
    pub address_city: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

impl BusinessRecord {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    /// Both coordinates, or nothing.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    // Missing or null results mean "nothing found", not a failure.
    #[serde(default)]
    pub results: Option<Vec<BusinessRecord>>,
}

impl SearchResponse {
    pub fn into_results(self) -> Vec<BusinessRecord> {
        self.results.unwrap_or_default()
    }
}
