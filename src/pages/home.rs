//! Home page.

use dioxus::prelude::*;

use super::SelectionStatus;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page",
            h1 { class: "page-title", "Home" }
            p { class: "page-body", "Your feed of recent activity." }
            SelectionStatus {}
        }
    }
}
