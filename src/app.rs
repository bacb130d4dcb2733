use dioxus::prelude::*;
use navbar_ui::NavigationBar;

use crate::context::LastSelection;
use crate::pages::{Chat, Home, NotFound, Scan, Search, Social};
use crate::theme::{theme_variables, GLOBAL_STYLES};

/// Application routes.
///
/// The five navigation destinations share the `Shell` layout, which draws
/// the bottom bar under the current page. `/` redirects to `/home`.
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[redirect("/", || Route::Home {})]
        #[route("/home")]
        Home {},
        #[route("/search")]
        Search {},
        #[route("/scan")]
        Scan {},
        #[route("/chat")]
        Chat {},
        #[route("/social")]
        Social {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, the theme, and routing.
#[component]
pub fn App() -> Element {
    let theme = use_context_provider(crate::get_theme);
    let variables = theme_variables(&theme);

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {variables} }
        Router::<Route> {}
    }
}

/// Page area with the navigation bar pinned below it.
#[component]
fn Shell() -> Element {
    let mut last_selection = use_context_provider(|| Signal::new(LastSelection::default()));

    rsx! {
        main { class: "page-shell",
            Outlet::<Route> {}
        }
        NavigationBar {
            on_item_select: move |label: String| {
                tracing::info!(%label, "Navigation item selected");
                last_selection.set(LastSelection(Some(label)));
            },
        }
    }
}
