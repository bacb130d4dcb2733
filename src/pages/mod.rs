//! Page components, one per navigation destination.

mod chat;
mod home;
mod not_found;
mod scan;
mod search;
mod social;

pub use chat::Chat;
pub use home::Home;
pub use not_found::NotFound;
pub use scan::Scan;
pub use search::Search;
pub use social::Social;

use dioxus::prelude::*;

use crate::context::use_last_selection;

/// Footer line showing which bar item was tapped last
#[component]
fn SelectionStatus() -> Element {
    let last_selection = use_last_selection();

    let text = match &last_selection().0 {
        Some(label) => format!("last selected: {}", label),
        None => "no item selected yet".to_string(),
    };

    rsx! {
        p { class: "page-status", "{text}" }
    }
}
