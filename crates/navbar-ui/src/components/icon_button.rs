//! Icon Button Component
//!
//! Borderless round button holding a single icon, tinted with one color.

use dioxus::prelude::*;

use crate::layout::icon_button_style;

#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub label: String,
    /// Icon color
    pub tint: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("icon-btn {}", extra),
        _ => "icon-btn".to_string(),
    };
    let style = icon_button_style(&props.tint);

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            style: "{style}",
            "aria-label": "{props.label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}
