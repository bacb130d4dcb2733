//! Global CSS styles for the app shell.
//!
//! Colors are CSS custom properties filled in from the active theme by
//! [`theme_variables`].

use navbar_ui::layout::{BAR_BOTTOM_OFFSET, BAR_HEIGHT};
use navbar_ui::Theme;

pub const GLOBAL_STYLES: &str = r#"
/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: 'SF Pro Text', Helvetica, Arial, sans-serif;
  background: var(--secondary);
  color: var(--primary);
  min-height: 100vh;
  overflow-x: hidden;
}

/* === Page Shell === */
.page-shell {
  max-width: 393px;
  min-height: 100vh;
  padding: 2rem 1.5rem var(--page-bottom-clearance);
}

.page-title {
  font-size: 1.75rem;
  font-weight: 600;
  letter-spacing: 0.01em;
}

.page-body {
  margin-top: 0.75rem;
  line-height: 1.6;
  opacity: 0.85;
}

.page-status {
  margin-top: 1.5rem;
  font-size: 0.75rem;
  opacity: 0.6;
}

/* === Navigation Bar === */
.icon-btn:hover {
  background: rgba(255, 255, 255, 0.08);
}

.icon-btn:focus-visible {
  outline: 2px solid var(--primary);
  outline-offset: 2px;
}

.navigation-bar a {
  -webkit-tap-highlight-color: transparent;
}
"#;

/// CSS custom properties for `theme`.
///
/// Also reserves room under the page so content is never hidden behind
/// the bar.
pub fn theme_variables(theme: &Theme) -> String {
    format!(
        ":root {{ --primary: {}; --secondary: {}; --accent: {}; \
         --page-bottom-clearance: {}px; }}",
        theme.primary,
        theme.secondary,
        theme.accent,
        BAR_HEIGHT + BAR_BOTTOM_OFFSET
    )
}
