//! Social page.

use dioxus::prelude::*;

use super::SelectionStatus;

#[component]
pub fn Social() -> Element {
    rsx! {
        section { class: "page",
            h1 { class: "page-title", "Social" }
            p { class: "page-body", "Communities you belong to." }
            SelectionStatus {}
        }
    }
}
