//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;
use std::rc::Rc;

use inkpot::config::Config;

use crate::components::Nav;
use crate::pages::RoutedPage;
use crate::state::{provide_shell, provide_theme};

/// Root application component
///
/// The theme controller is created here, before anything is rendered, so
/// the stored mode is on `<html>` before the first paint.
#[component]
pub fn App(config: Config) -> impl IntoView {
    let config = Rc::new(config);

    provide_theme(&config.theme);
    provide_shell(&config);
    provide_context(Rc::clone(&config));

    view! {
        <Router>
            <div class="App">
                <Nav />

                <main class="px-7 py-10">
                    <Routes>
                        <Route path="/*any" view=RoutedPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
