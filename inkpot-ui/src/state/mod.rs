//! State Management
//!
//! Browser bindings for the theme controller and the shared app shell,
//! provided to the component tree through Leptos context.

pub mod shell;
pub mod theme;

pub use shell::{provide_shell, SharedShell};
pub use theme::{provide_theme, DocumentPresentation, LocalStorageStore};
