#![allow(non_snake_case)]

mod app;
mod config;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use navbar_ui::Theme;
use tracing_subscriber::EnvFilter;

/// Theme loaded at startup, read by `App`
static THEME: OnceLock<Theme> = OnceLock::new();

/// Get the startup theme (falls back to the built-in palette)
pub fn get_theme() -> Theme {
    THEME.get().cloned().unwrap_or_default()
}

/// Mobile-style app shell with a bottom navigation bar
#[derive(Parser, Debug)]
#[command(name = "navbar-desktop")]
#[command(about = "Mobile-style shell with a bottom navigation bar")]
struct Args {
    /// Theme file (JSON with primary, secondary and accent colors)
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 393.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 852.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let theme = config::resolve_theme(args.theme.as_deref());
    tracing::info!(
        primary = %theme.primary,
        secondary = %theme.secondary,
        accent = %theme.accent,
        "Using theme"
    );
    let _ = THEME.set(theme);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Navbar")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
