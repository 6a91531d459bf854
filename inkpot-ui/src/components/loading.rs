//! Loading Component
//!
//! Neutral placeholder shown while a page source is loading.

use leptos::*;

/// Skeleton standing in for a page body
#[component]
pub fn PageSkeleton(
    #[prop(default = 4)]
    lines: usize,
) -> impl IntoView {
    view! {
        <div class="prose m-auto animate-pulse" aria-busy="true">
            <div class="h-8 rounded op-10 bg-current w-1/3 mb-6" />
            {(0..lines).map(|_| view! {
                <div class="h-4 rounded op-10 bg-current mb-3" />
            }).collect_view()}
        </div>
    }
}
