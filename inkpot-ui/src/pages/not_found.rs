//! Not Found Page

use leptos::*;
use leptos_router::*;

/// 404 Not Found page
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="prose m-auto text-center">
            <h1>"404"</h1>
            <p class="op-50">"The page you're looking for doesn't exist."</p>
            <A href="/">"Back home"</A>
        </div>
    }
}

/// Shown when the asset server failed for a reason other than 404
#[component]
pub fn LoadFailed(
    #[prop(into)]
    path: String,
    #[prop(into)]
    reason: String,
) -> impl IntoView {
    view! {
        <div class="prose m-auto text-center">
            <h1>"Couldn't load this page"</h1>
            <p class="op-50">{path}</p>
            <p class="op-50">{reason}</p>
        </div>
    }
}
