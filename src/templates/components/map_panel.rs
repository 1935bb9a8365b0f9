use crate::config::TileConfig;
use crate::map::MapView;
use maud::{html, Markup, PreEscaped};
use serde::Serialize;

#[derive(Serialize)]
struct MapData<'a> {
    center: [f64; 2],
    zoom: u8,
    tiles: &'a TileConfig,
    markers: Vec<MarkerData<'a>>,
}

#[derive(Serialize)]
struct MarkerData<'a> {
    key: String,
    lat: f64,
    lon: f64,
    name: &'a str,
    category: &'a str,
    street: &'a str,
}

pub fn map_panel(view: &MapView, tiles: &TileConfig) -> Markup {
    let data = MapData {
        center: [view.center.coordinate.lat, view.center.coordinate.lon],
        zoom: view.zoom,
        tiles,
        markers: view
            .markers
            .iter()
            .map(|m| MarkerData {
                key: m.key.to_string(),
                lat: m.position.lat,
                lon: m.position.lon,
                name: &m.name,
                category: &m.category,
                street: &m.street,
            })
            .collect(),
    };

    // `</` would close the script element early.
    let json = serde_json::to_string(&data)
        .unwrap_or_else(|_| "{}".to_string())
        .replace("</", "<\\/");

    html! {
        div class="map-view" {
            div class="glass-panel" style="height: 500px; width: 100%; overflow: hidden;" {
                div
                    id="map"
                    data-center-key=(view.center.key())
                    data-center-source=(view.center.source.as_str())
                    data-markers=(view.markers.len())
                    style="height: 100%; width: 100%;" {}
                script type="application/json" id="map-data" { (PreEscaped(json)) }
                noscript {
                    p class="attribution" { (PreEscaped(&tiles.attribution)) }
                }
            }
        }
    }
}
