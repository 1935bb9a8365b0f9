use maud::{html, Markup, PreEscaped, DOCTYPE};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const HTMX_JS: &str = "https://unpkg.com/htmx.org@1.9.12";

// Rebuilds the Leaflet map whenever the #map container is re-rendered,
// and lets htmx swap in the 409 page for a rejected submit.
// The container carries the center key, so a new center never pans an old map.
const MAP_SCRIPT: &str = r#"
(function () {
  var map = null;
  function mount() {
    var el = document.getElementById('map');
    var data = document.getElementById('map-data');
    if (!el || !data || typeof L === 'undefined') {
      if (map) { map.remove(); map = null; }
      return;
    }
    if (map && map.getContainer() === el) { return; }
    if (map) { map.remove(); }
    var view = JSON.parse(data.textContent);
    map = L.map(el).setView(view.center, view.zoom);
    L.tileLayer(view.tiles.url, { attribution: view.tiles.attribution }).addTo(map);
    view.markers.forEach(function (m) {
      var popup = document.createElement('div');
      var name = document.createElement('strong');
      name.textContent = m.name;
      popup.appendChild(name);
      [m.category, m.street].forEach(function (line) {
        popup.appendChild(document.createElement('br'));
        popup.appendChild(document.createTextNode(line));
      });
      L.marker([m.lat, m.lon]).bindPopup(popup).addTo(map);
    });
  }
  // A rejected submit still carries the current page.
  document.addEventListener('htmx:beforeSwap', function (evt) {
    if (evt.detail.xhr.status === 409) {
      evt.detail.shouldSwap = true;
      evt.detail.isError = false;
    }
  });
  document.addEventListener('DOMContentLoaded', mount);
  document.addEventListener('htmx:afterSettle', mount);
})();
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(LEAFLET_CSS);
                script src=(LEAFLET_JS) {}
                script src=(HTMX_JS) defer {}
                script { (PreEscaped(MAP_SCRIPT)) }
            }
            body {
                div class="container" {
                    header class="header" {
                        h1 { "FindPlace " span class="highlight" { "Scraper" } }
                        p { "Expert business lead generation from OpenStreetMap" }
                    }
                    (content)
                }
            }
        }
    }
}
