//! Shared App Shell
//!
//! One `AppShell` per app, so every navigation goes through the same load
//! tracker.

use leptos::*;
use std::rc::Rc;

use inkpot::config::Config;
use inkpot::shell::AppShell;

use crate::api::HttpPageLoader;

pub type SharedShell = Rc<AppShell<HttpPageLoader>>;

/// Build the shell from the site config and provide it to the tree
pub fn provide_shell(config: &Config) -> SharedShell {
    let routes = config.route_table().unwrap_or_else(|e| {
        // `Config::from_toml_str` already validated the table.
        log::error!("Route table rejected: {}", e);
        Default::default()
    });
    let shell = Rc::new(AppShell::new(
        routes,
        HttpPageLoader::new(&config.site.content_base),
    ));
    provide_context(Rc::clone(&shell));
    shell
}
