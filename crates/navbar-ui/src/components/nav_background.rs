//! Navigation Bar Background
//!
//! Decorative shape drawn behind the bar: a flat band with a rounded
//! notch in the middle that cradles the raised scan circle.

use dioxus::prelude::*;

use crate::layout::{BAR_HEIGHT, BAR_WIDTH};

/// Outline of the band in a `BAR_WIDTH` x `BAR_HEIGHT` view box
const BAND_PATH: &str = "M0 38 H150 C160 38 165 42 168 50 \
C174 68 186 76 196.5 76 C207 76 219 68 225 50 \
C228 42 233 38 243 38 H393 V113 H0 Z";

#[derive(Clone, PartialEq, Props)]
pub struct NavBackgroundProps {
    /// CSS width of the graphic (`"100%"`, `"393px"`, ...)
    #[props(default = "100%".to_string())]
    pub width: String,
    /// Fill color
    pub fill: String,
}

/// Renders the background band. Stretches to its container's height.
#[component]
pub fn NavBackground(props: NavBackgroundProps) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 {BAR_WIDTH} {BAR_HEIGHT}",
            width: "{props.width}",
            height: "100%",
            "preserveAspectRatio": "none",
            "aria-hidden": "true",
            path { d: BAND_PATH, fill: "{props.fill}" }
        }
    }
}
