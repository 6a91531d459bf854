//! Mascot Component

use leptos::*;

/// Fixed decorative image on the left edge of the home page
#[component]
pub fn Mascot(
    #[prop(into)]
    src: String,
) -> impl IntoView {
    view! {
        <img
            src=src
            alt=""
            class="caodong fixed left-50px top-50% h-25vw important-w-25vw"
            draggable="false"
            style="transform: translateY(-50%)"
        />
    }
}
