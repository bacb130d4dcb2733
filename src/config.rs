//! Theme configuration.
//!
//! The theme comes from `--theme <path>` when given, otherwise from
//! `<config_dir>/navbar/theme.json` when that file exists. Anything that
//! fails to load falls back to the built-in palette.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use navbar_ui::Theme;

/// Default theme file location
pub fn default_theme_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("navbar").join("theme.json"))
}

/// Read and validate a theme file
pub fn load_theme(path: &Path) -> anyhow::Result<Theme> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read theme file {}", path.display()))?;
    let theme = Theme::from_json(&contents)
        .with_context(|| format!("Invalid theme file {}", path.display()))?;
    Ok(theme)
}

/// Pick the theme to start with.
///
/// An explicit path that fails to load is logged and replaced by the
/// default palette, as is a broken default file.
pub fn resolve_theme(explicit: Option<&Path>) -> Theme {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_theme_path() {
            Some(path) if path.exists() => path,
            Some(path) => {
                tracing::debug!(?path, "Theme file not found, using defaults");
                return Theme::default();
            }
            None => {
                tracing::warn!("Could not determine config directory");
                return Theme::default();
            }
        },
    };

    match load_theme(&path) {
        Ok(theme) => {
            tracing::info!(?path, "Loaded theme");
            theme
        }
        Err(e) => {
            tracing::warn!(?path, error = %format!("{:#}", e), "Failed to load theme, using defaults");
            Theme::default()
        }
    }
}
