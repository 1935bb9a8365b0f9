use crate::results::ResultCard;
use maud::{html, Markup};

pub fn result_list(cards: &[ResultCard]) -> Markup {
    html! {
        div class="list-view glass-panel" {
            div class="results-header" {
                h3 { "Results (" (cards.len()) ")" }
                a href="/results.csv" class="btn-secondary" download="results.csv" { "Download CSV" }
            }
            div class="results-list" {
                @for card in cards {
                    (result_card(card))
                }
            }
        }
    }
}

fn result_card(card: &ResultCard) -> Markup {
    html! {
        div class="result-card" data-key=(card.key.to_string()) {
            h4 { (card.name) }
            div class="tags" {
                span class="tag-category" { (card.category) }
            }
            p class="address" { (card.address) }
            @if let Some(website) = &card.website {
                a href=(website) target="_blank" rel="noreferrer" class="link" { "Website" }
            }
            @if let Some(phone) = &card.phone {
                div class="phone" { "📞 " (phone) }
            }
        }
    }
}
