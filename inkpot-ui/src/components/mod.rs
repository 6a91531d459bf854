//! UI Components
//!
//! Reusable Leptos components for the blog shell.

pub mod loading;
pub mod mascot;
pub mod nav;

pub use loading::PageSkeleton;
pub use mascot::Mascot;
pub use nav::Nav;
