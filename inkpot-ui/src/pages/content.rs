//! Routed Content
//!
//! Resolves the current location through the shared `AppShell` and renders
//! the page inside a suspense boundary. The placeholder stays up for as
//! long as the load takes.

use leptos::*;
use leptos_router::*;
use std::rc::Rc;

use inkpot::config::Config;
use inkpot::shell::{Navigation, Page};

use super::not_found::{LoadFailed, NotFound};
use crate::components::{Mascot, PageSkeleton};
use crate::state::SharedShell;

/// Content area for whatever the current location is
#[component]
pub fn RoutedPage() -> impl IntoView {
    let shell = use_context::<SharedShell>().expect("AppShell not found");
    let config = use_context::<Rc<Config>>().expect("Config not found");
    let location = use_location();

    let navigation = create_local_resource(
        move || location.pathname.get(),
        move |path| {
            let shell = Rc::clone(&shell);
            async move { shell.navigate(&path).await }
        },
    );

    let mascot = config.assets.mascot.clone();
    let site_title = config.site.title.clone();

    view! {
        {move || (location.pathname.get() == "/").then(|| view! { <Mascot src=mascot.clone() /> })}

        <Suspense fallback=move || view! { <PageSkeleton /> }>
            {
                let site_title = site_title.clone();
                move || navigation.get().map(|outcome| match outcome {
                    Navigation::Ready(page) => {
                        set_document_title(page.title.as_deref(), &site_title);
                        view! { <PageView page=page /> }.into_view()
                    }
                    Navigation::NotFound(_) => view! { <NotFound /> }.into_view(),
                    Navigation::Failed { path, error } => {
                        view! { <LoadFailed path=path reason=error.to_string() /> }.into_view()
                    }
                    // A newer navigation owns the content area.
                    Navigation::Superseded => ().into_view(),
                })
            }
        </Suspense>
    }
}

/// Rendered Markdown page
#[component]
fn PageView(page: Page) -> impl IntoView {
    let date = page.date.map(|d| d.format("%Y-%m-%d").to_string());

    view! {
        <article class="prose m-auto">
            {date.map(|d| view! { <p class="op-50 -mt-4">{d}</p> })}
            <div inner_html=page.html />
        </article>
    }
}

fn set_document_title(page_title: Option<&str>, site_title: &str) {
    let title = match page_title {
        Some(t) if t != site_title => format!("{} - {}", t, site_title),
        _ => site_title.to_string(),
    };
    document().set_title(&title);
}
