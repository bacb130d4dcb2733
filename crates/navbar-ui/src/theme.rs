//! Theme tokens for the navigation bar.
//!
//! A theme is a small set of named colors. Components read it and never
//! write to it. Hosts either pass a [`Theme`] as a prop or provide one
//! through Dioxus context with `use_context_provider`.

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Beige fill of the scan circle, icon and label text
pub const DEFAULT_PRIMARY: &str = "#f3e3c3";
/// Icon tint inside the scan circle
pub const DEFAULT_SECONDARY: &str = "#853536";
/// Background graphic fill
pub const DEFAULT_ACCENT: &str = "#5b1f24";

/// Named color token
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ColorToken {
    Primary,
    Secondary,
    Accent,
}

impl ColorToken {
    /// Token name as written in theme files
    pub fn name(&self) -> &'static str {
        match self {
            ColorToken::Primary => "primary",
            ColorToken::Secondary => "secondary",
            ColorToken::Accent => "accent",
        }
    }

    pub const ALL: [ColorToken; 3] = [
        ColorToken::Primary,
        ColorToken::Secondary,
        ColorToken::Accent,
    ];
}

/// Color tokens the navigation bar reads.
///
/// Any token missing from a theme file takes its default value.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY.to_string(),
            secondary: DEFAULT_SECONDARY.to_string(),
            accent: DEFAULT_ACCENT.to_string(),
        }
    }
}

impl Theme {
    /// Resolve a named color token
    pub fn color(&self, token: ColorToken) -> &str {
        match token {
            ColorToken::Primary => &self.primary,
            ColorToken::Secondary => &self.secondary,
            ColorToken::Accent => &self.accent,
        }
    }

    /// Parse and validate a theme from JSON
    pub fn from_json(source: &str) -> Result<Self, ThemeError> {
        let theme: Theme = serde_json::from_str(source)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Check every token holds a usable color.
    ///
    /// Hex colors must have 3, 4, 6 or 8 digits. Other CSS color forms
    /// (`rgb(...)`, named colors) are passed through unchecked.
    pub fn validate(&self) -> Result<(), ThemeError> {
        for token in ColorToken::ALL {
            let value = self.color(token).trim();
            if value.is_empty() {
                return Err(ThemeError::EmptyToken(token.name()));
            }
            if let Some(digits) = value.strip_prefix('#') {
                let valid_len = matches!(digits.len(), 3 | 4 | 6 | 8);
                if !valid_len || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
                    return Err(ThemeError::InvalidColor {
                        token: token.name(),
                        value: value.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
