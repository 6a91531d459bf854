//! Pages
//!
//! Route-level views. Every location goes through `RoutedPage`, which asks
//! the shared `AppShell` for the page.

pub mod content;
pub mod not_found;

pub use content::RoutedPage;
pub use not_found::NotFound;
