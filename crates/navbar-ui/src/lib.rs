//! Bottom navigation bar for mobile-sized Dioxus applications.
//!
//! The bar shows five items over a decorative background:
//! - **Home**, **Search**, **Chat**, **Social**: icon buttons that report
//!   their label through `on_item_select` before navigating
//! - **Scan**: a raised circular control in the center that navigates
//!   silently
//!
//! Colors come from a [`Theme`] passed as a prop or provided through
//! context. Everything visual is computed by the pure functions in
//! [`layout`], so the bar's contract can be checked without a renderer.

pub mod components;
mod error;
pub mod layout;
mod nav_item;
mod theme;

pub use components::*;
pub use error::{NavError, ThemeError};
pub use nav_item::*;
pub use theme::*;
