//! Scan page.
//!
//! Reached only through the raised center control, which never reports a
//! selection, so the status line keeps showing the previous item.

use dioxus::prelude::*;

use super::SelectionStatus;
use crate::context::use_theme;

#[component]
pub fn Scan() -> Element {
    let theme = use_theme();
    let frame_style = format!(
        "margin-top: 1.5rem; width: 220px; height: 220px; border: 2px dashed {}; border-radius: 16px;",
        theme.primary
    );

    rsx! {
        section { class: "page",
            h1 { class: "page-title", "Scan" }
            p { class: "page-body", "Hold a profile code inside the frame." }
            div {
                style: "{frame_style}",
                "aria-label": "Scan frame",
            }
            SelectionStatus {}
        }
    }
}
