use maud::{html, Markup};

pub mod map_panel;
pub mod result_list;
pub mod search_form;

pub use map_panel::map_panel;
pub use result_list::result_list;
pub use search_form::search_form;

pub fn error_message(message: &str) -> Markup {
    html! {
        div class="error-message" role="alert" { (message) }
    }
}
