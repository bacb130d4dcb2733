//! Error types for the navigation bar

use thiserror::Error;

/// Errors raised while loading a theme
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme source was not valid JSON for a theme
    #[error("Theme parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A color token was present but blank
    #[error("Color token '{0}' is empty")]
    EmptyToken(&'static str),

    /// A hex color token had the wrong digits
    #[error("Color token '{token}' has invalid hex color '{value}'")]
    InvalidColor { token: &'static str, value: String },
}

/// Errors raised when a navigation item list breaks the bar's layout rules
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NavError {
    #[error("Navigation bar has no items")]
    Empty,

    /// The special item can only sit in the middle of an odd-length row
    #[error("Navigation bar needs an odd number of items, got {0}")]
    EvenLength(usize),

    #[error("Navigation bar needs exactly one special item, got {0}")]
    SpecialCount(usize),

    #[error("Special item is at index {index}, expected center index {center}")]
    SpecialOffCenter { index: usize, center: usize },
}
