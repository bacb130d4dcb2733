//! Navigation Bar Component
//!
//! Fixed bottom bar for mobile-sized windows.
//! Shows: Home | Search | (Scan) | Chat | Social

use dioxus::prelude::*;

use super::{Icon, IconButton, NavBackground};
use crate::layout::{self, ICON_SIZE};
use crate::nav_item::{check_items, default_items, NavItem};
use crate::theme::Theme;

#[derive(Props, Clone, PartialEq)]
pub struct NavigationBarProps {
    /// Items in display order. Defaults to the five-item set.
    #[props(default = default_items())]
    pub items: Vec<NavItem>,
    /// Called with the item's label when a standard item is tapped
    #[props(default)]
    pub on_item_select: Option<EventHandler<String>>,
    /// Explicit theme. Without one, the theme in context is used.
    #[props(default)]
    pub theme: Option<Theme>,
}

/// Bottom navigation bar
///
/// Every item is wrapped in a router `Link` to its route. Standard items
/// report their label through `on_item_select` first; the special item in
/// the center never does.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     NavigationBar {
///         on_item_select: move |label: String| tracing::info!(%label, "selected"),
///     }
/// }
/// ```
#[component]
pub fn NavigationBar(props: NavigationBarProps) -> Element {
    let context_theme = try_use_context::<Theme>();
    let theme = props
        .theme
        .clone()
        .or(context_theme)
        .unwrap_or_default();

    if let Err(e) = check_items(&props.items) {
        tracing::warn!(error = %e, "Navigation items break the bar layout");
    }

    let bar_style = layout::bar_style();
    let row_style = layout::row_style();

    rsx! {
        nav {
            class: "navigation-bar",
            style: "{bar_style}",
            "aria-label": "Main navigation",

            // Background graphic
            div { style: layout::background_style(),
                NavBackground { width: "100%".to_string(), fill: theme.accent.clone() }
            }

            div { style: "{row_style}",
                for (index, item) in props.items.iter().enumerate() {
                    NavColumn {
                        key: "{index}",
                        item: item.clone(),
                        theme: theme.clone(),
                        on_item_select: props.on_item_select,
                    }
                }
            }
        }
    }
}

/// One column of the bar: linked control above its label
#[component]
fn NavColumn(
    item: NavItem,
    theme: Theme,
    on_item_select: Option<EventHandler<String>>,
) -> Element {
    let href = item.href();
    let column_style = layout::column_style();
    let label_style = layout::label_style(item.font(), &theme);

    let control = if item.is_special() {
        rsx! {
            SpecialControl { item: item.clone(), theme: theme.clone() }
        }
    } else {
        let activated = item.clone();
        rsx! {
            IconButton {
                label: item.label().to_string(),
                tint: theme.primary.clone(),
                class: "navigation-bar-button".to_string(),
                onclick: move |_| {
                    let notify = on_item_select.map(|handler| move |label: String| handler.call(label));
                    activated.activate(notify);
                },
                Icon { name: item.icon(), size: ICON_SIZE }
            }
        }
    };

    rsx! {
        div { class: "navigation-bar-item", style: "{column_style}",
            Link { to: href,
                div { style: layout::link_style(), {control} }
            }
            div { style: "{label_style}", "{item.label()}" }
        }
    }
}

/// Raised circle for the scan action. Navigates only, no callback.
#[component]
fn SpecialControl(item: NavItem, theme: Theme) -> Element {
    let tint = theme.secondary.clone();
    let icon = item.icon();
    let wrapper_style = layout::special_wrapper_style();
    let circle_style = layout::special_circle_style(&theme);

    rsx! {
        div { style: "{wrapper_style}",
            div {
                style: "{circle_style}",
                "aria-label": "Scan",
                onclick: move |_| {
                    item.activate(None::<fn(String)>);
                },
                Icon { name: icon, size: ICON_SIZE, color: tint }
            }
        }
    }
}
