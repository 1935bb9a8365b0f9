// results.rs
use crate::search::{BusinessRecord, OsmId, ViewState};

/// One entry of the result list, ready for the template.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultCard {
    pub key: OsmId,
    pub name: String,
    pub category: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
}

impl ResultCard {
    pub fn from_record(r: &BusinessRecord) -> Self {
        let address = [r.address_street.as_deref(), r.address_city.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            key: r.osm_id.clone(),
            name: r.name().to_string(),
            category: r.category().to_string(),
            address,
            phone: non_empty(r.phone.as_deref()),
            website: non_empty(r.website.as_deref()),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Cards for the current view. Empty unless the view is `Success`.
pub fn result_cards(view: &ViewState) -> Vec<ResultCard> {
    view.results()
        .unwrap_or_default()
        .iter()
        .map(ResultCard::from_record)
        .collect()
}
