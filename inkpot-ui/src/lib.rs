//! Inkpot Front-end
//!
//! Personal blog shell built with Leptos (WASM).
//!
//! # Features
//!
//! - Navigation bar with brand, section and profile links
//! - Dark mode toggle persisted in `localStorage` and synced across tabs
//! - Route-driven Markdown pages loaded lazily from the asset server
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Theme, navigation and routing semantics live in the
//! framework-independent `inkpot` crate; this crate binds them to the
//! browser and renders them.

use leptos::*;

use inkpot::config::Config;

pub mod api;
pub mod app;
pub mod components;
pub mod pages;
pub mod state;

/// Site configuration baked in at build time
const SITE_CONFIG: &str = include_str!("../../site.toml");

/// Load the embedded configuration, falling back to defaults if it is broken
pub fn site_config() -> Config {
    Config::from_toml_str(SITE_CONFIG).unwrap_or_else(|e| {
        log::error!("Embedded site.toml rejected, using defaults: {}", e);
        Config::default()
    })
}

/// Install logging and mount the app to the document body
pub fn start() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = site_config();
    let level = config.logging.level.parse().unwrap_or(log::Level::Info);
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    mount_to_body(move || view! { <app::App config=config /> });
}
