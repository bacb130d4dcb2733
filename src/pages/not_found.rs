//! Fallback for unknown routes.

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::warn!(%path, "No page for route");

    rsx! {
        section { class: "page-shell",
            h1 { class: "page-title", "Not found" }
            p { class: "page-body", "Nothing lives at {path}." }
            Link { to: Route::Home {}, class: "page-status", "Back to home" }
        }
    }
}
