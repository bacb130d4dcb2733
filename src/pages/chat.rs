//! Chat page.

use dioxus::prelude::*;

use super::SelectionStatus;

#[component]
pub fn Chat() -> Element {
    rsx! {
        section { class: "page",
            h1 { class: "page-title", "Chat" }
            p { class: "page-body", "Conversations with your contacts." }
            SelectionStatus {}
        }
    }
}
