// templates/pages/home.rs

use crate::config::TileConfig;
use crate::map::MapView;
use crate::results::ResultCard;
use crate::search::ViewState;
use crate::templates::components::search_form::SearchFormVm;
use crate::templates::{
    components::{error_message, map_panel, result_list, search_form},
    desktop_layout,
};
use maud::{html, Markup};

pub struct HomeVm<'a> {
    pub terms: &'a str,
    pub location: &'a str,
    pub enrich: bool,
    pub view: &'a ViewState,
    pub cards: Vec<ResultCard>,
    /// Only built for a non-empty success.
    pub map: Option<MapView>,
    pub tiles: &'a TileConfig,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "FindPlace",
        html! {
            main id="app" {
                (search_form(&SearchFormVm {
                    terms: vm.terms,
                    location: vm.location,
                    enrich: vm.enrich,
                    loading: vm.view.is_loading(),
                }))

                @match vm.view {
                    ViewState::Idle => {}
                    ViewState::Loading => {
                        p class="status" aria-live="polite" { "Searching..." }
                    }
                    ViewState::Error(message) => (error_message(message)),
                    ViewState::Success(_) => {
                        div class="results-container" {
                            @if let Some(map) = &vm.map {
                                div class="split-view" {
                                    (result_list(&vm.cards))
                                    (map_panel(map, vm.tiles))
                                }
                            } @else {
                                p class="status" { "No businesses found." }
                            }
                        }
                    }
                }
            }
        },
    )
}
