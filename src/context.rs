//! Context hooks shared by the pages.
//!
//! `App` provides the theme; the shell layout provides the label of the
//! most recently selected navigation item.

use dioxus::prelude::*;
use navbar_ui::Theme;

/// Label of the last standard navigation item the user tapped
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LastSelection(pub Option<String>);

/// Hook to access the theme from context.
pub fn use_theme() -> Theme {
    use_context::<Theme>()
}

/// Hook to access the last navigation selection.
pub fn use_last_selection() -> Signal<LastSelection> {
    use_context::<Signal<LastSelection>>()
}
