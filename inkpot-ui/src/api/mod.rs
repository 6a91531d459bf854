//! Asset Server Access
//!
//! Page sources are static files fetched from the asset server.

pub mod loader;

pub use loader::HttpPageLoader;
