//! Search page.

use dioxus::prelude::*;

use super::SelectionStatus;

#[component]
pub fn Search() -> Element {
    rsx! {
        section { class: "page",
            h1 { class: "page-title", "Search" }
            p { class: "page-body", "Find people, places and posts." }
            SelectionStatus {}
        }
    }
}
