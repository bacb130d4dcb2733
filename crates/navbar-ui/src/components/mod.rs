//! Components making up the navigation bar.

mod icon;
mod icon_button;
mod nav_background;
mod navigation_bar;

pub use icon::*;
pub use icon_button::*;
pub use nav_background::*;
pub use navigation_bar::*;
