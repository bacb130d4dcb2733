//! Icon Component
//!
//! Named line icons drawn as inline SVG. Stroke uses `currentColor`, so an
//! icon takes the text color of whatever contains it unless `color` is set.

use dioxus::prelude::*;

/// Icons available to navigation items
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconName {
    Home,
    Search,
    Chat,
    Community,
    UserScan,
}

impl IconName {
    /// Identifier in `collection:name` form
    pub fn id(&self) -> &'static str {
        match self {
            IconName::Home => "lucide:home",
            IconName::Search => "icon-park-outline:search",
            IconName::Chat => "wpf:chat",
            IconName::Community => "iconoir:community",
            IconName::UserScan => "lets-icons:user-scan",
        }
    }
}

/// Draws `name` as a square SVG of `size` pixels
#[component]
pub fn Icon(
    name: IconName,
    #[props(default = 24)] size: u32,
    #[props(default)] color: Option<String>,
) -> Element {
    let style = match &color {
        Some(color) => format!("color: {};", color),
        None => String::new(),
    };

    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            style: "{style}",
            "aria-hidden": "true",
            "data-icon": "{name.id()}",
            {glyph(name)}
        }
    }
}

fn glyph(name: IconName) -> Element {
    match name {
        IconName::Home => rsx! {
            path { d: "M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8" }
            path { d: "M3 10a2 2 0 0 1 .709-1.528l7-5.999a2 2 0 0 1 2.582 0l7 5.999A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
        },
        IconName::Search => rsx! {
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        },
        IconName::Chat => rsx! {
            path { d: "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" }
        },
        IconName::Community => rsx! {
            path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
            circle { cx: "9", cy: "7", r: "4" }
            path { d: "M22 21v-2a4 4 0 0 0-3-3.87" }
            path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
        },
        IconName::UserScan => rsx! {
            // Corner brackets around a head and shoulders
            path { d: "M3 7V5a2 2 0 0 1 2-2h2" }
            path { d: "M17 3h2a2 2 0 0 1 2 2v2" }
            path { d: "M21 17v2a2 2 0 0 1-2 2h-2" }
            path { d: "M7 21H5a2 2 0 0 1-2-2v-2" }
            circle { cx: "12", cy: "10", r: "3" }
            path { d: "M7 18a5 5 0 0 1 10 0" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_ids_are_distinct() {
        let ids = [
            IconName::Home.id(),
            IconName::Search.id(),
            IconName::Chat.id(),
            IconName::Community.id(),
            IconName::UserScan.id(),
        ];
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(id), "duplicate icon id {id}");
        }
    }
}
