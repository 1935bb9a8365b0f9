//! Map projection of the current result set: where to center, which pins to drop.
//!
//! Nothing here is stored. Center and markers are recomputed from the result
//! set (and an optional override) every time the page is rendered.

use crate::search::{BusinessRecord, OsmId};

/// Used when there is no override and no result to center on.
pub const FALLBACK_CENTER: Coordinate = Coordinate {
    lat: 51.505,
    lon: -0.09,
};

pub const DEFAULT_ZOOM: u8 = 13;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// Caller supplied center. Only used when both halves are present.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CenterOverride {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl CenterOverride {
    fn coordinate(&self) -> Option<Coordinate> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Coordinate { lat, lon }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterSource {
    Override,
    FirstRecord,
    Fallback,
}

impl CenterSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CenterSource::Override => "override",
            CenterSource::FirstRecord => "first_record",
            CenterSource::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapCenter {
    pub coordinate: Coordinate,
    pub source: CenterSource,
}

impl MapCenter {
    /// Identity of the map instance. A new key means the map is rebuilt, not panned.
    pub fn key(&self) -> String {
        format!("{},{}", self.coordinate.lat, self.coordinate.lon)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub key: OsmId,
    pub position: Coordinate,
    pub name: String,
    pub category: String,
    pub street: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub center: MapCenter,
    pub zoom: u8,
    pub markers: Vec<Marker>,
}

/// Pick the map center.
///
/// An override with both coordinates wins. Otherwise the first record is
/// used; only the first record is looked at, and if it has no coordinates
/// the fallback applies. An empty result set also falls back.
pub fn map_center(results: &[BusinessRecord], center: CenterOverride) -> MapCenter {
    if let Some(coordinate) = center.coordinate() {
        return MapCenter {
            coordinate,
            source: CenterSource::Override,
        };
    }

    match results.first().and_then(BusinessRecord::coordinates) {
        Some((lat, lon)) => MapCenter {
            coordinate: Coordinate { lat, lon },
            source: CenterSource::FirstRecord,
        },
        None => MapCenter {
            coordinate: FALLBACK_CENTER,
            source: CenterSource::Fallback,
        },
    }
}

/// One marker per record that has both coordinates, in result order.
pub fn markers(results: &[BusinessRecord]) -> Vec<Marker> {
    results
        .iter()
        .filter_map(|r| {
            let (lat, lon) = r.coordinates()?;
            Some(Marker {
                key: r.osm_id.clone(),
                position: Coordinate { lat, lon },
                name: r.name().to_string(),
                category: r.category().to_string(),
                street: r.address_street.clone().unwrap_or_default(),
            })
        })
        .collect()
}

pub fn map_view(results: &[BusinessRecord], center: CenterOverride) -> MapView {
    MapView {
        center: map_center(results, center),
        zoom: DEFAULT_ZOOM,
        markers: markers(results),
    }
}
