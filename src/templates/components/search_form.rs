use maud::{html, Markup};

pub struct SearchFormVm<'a> {
    pub terms: &'a str,
    pub location: &'a str,
    pub enrich: bool,
    pub loading: bool,
}

pub fn search_form(vm: &SearchFormVm) -> Markup {
    html! {
        div class="search-section glass-panel" {
            form
                method="post"
                action="/search"
                hx-post="/search"
                hx-target="#app"
                hx-select="#app"
                hx-swap="outerHTML"
                hx-disabled-elt="button"
                class="search-form"
            {
                div class="form-group" {
                    label for="terms" { "Search Terms" }
                    input
                        type="text"
                        id="terms"
                        name="terms"
                        value=(vm.terms)
                        placeholder="e.g. cafe, gym, bakery";
                }
                div class="form-group" {
                    label for="location" { "Location" }
                    input
                        type="text"
                        id="location"
                        name="location"
                        value=(vm.location)
                        placeholder="e.g. New York City";
                }
                div class="form-group checkbox-group" {
                    label class="toggle-label" {
                        input type="checkbox" name="enrich" value="on" checked[vm.enrich];
                        span class="checkbox-custom" {}
                        "Enrich Data (Crawl Websites)"
                    }
                }
                button type="submit" class="btn-primary" disabled[vm.loading] {
                    @if vm.loading {
                        "Searching..."
                    } @else {
                        span class="btn-text" { "Find Businesses" }
                        span class="spinner htmx-indicator" aria-hidden="true" { "Searching..." }
                    }
                }
            }
        }
    }
}
