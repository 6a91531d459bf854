//! Navigation Component
//!
//! Header with brand logo, section links, profile link and the dark mode
//! toggle. State comes from `inkpot::nav::NavigationBar`, which holds the
//! theme subscription for as long as this component is mounted.

use leptos::*;
use leptos_router::*;
use std::rc::Rc;

use inkpot::config::Config;
use inkpot::nav::{indicator_class, NavLink, NavLinks, NavigationBar};
use inkpot::theme::ThemeController;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let theme = use_context::<ThemeController>().expect("ThemeController not found");
    let config = use_context::<Rc<Config>>().expect("Config not found");

    let (mode, set_mode) = create_signal(theme.mode());
    let bar = Rc::new(NavigationBar::mount_with(
        &theme,
        NavLinks::new(&config.nav, &config.assets),
        move |next| set_mode.set(next),
    ));

    let mounted = Rc::clone(&bar);
    on_cleanup(move || mounted.unmount());

    let links = bar.links().clone();
    let brand = links.brand.clone();
    let logo_links = links.clone();

    // Only toggles; a <button> cannot navigate.
    let on_toggle = move |_| {
        bar.click_toggle();
    };

    view! {
        <header class="prose pb-30px">
            <A
                href=brand.href
                class="w-30px h-30px absolute lg:fixed m-6 select-none outline-none important-p-0 important-m-0"
            >
                <img
                    class="important-m-0px"
                    alt=brand.title
                    src=move || logo_links.logo_src(mode.get()).to_string()
                />
            </A>

            <div class="nav mt-2 text-center">
                <div />
                <div class="right">
                    {links.sections.into_iter().map(|link| view! { <SectionLink link=link /> }).collect_view()}
                    {links.external.into_iter().map(|link| view! { <ExternalLink link=link /> }).collect_view()}
                    <button
                        type="button"
                        title="toggle theme"
                        class=move || format!("theme-toggle {}", indicator_class(mode.get()))
                        on:click=on_toggle
                    />
                </div>
            </div>
        </header>
    }
}

/// In-app section link
#[component]
fn SectionLink(link: NavLink) -> impl IntoView {
    let NavLink { href, title, icon } = link;
    view! {
        <A href=href active_class="active">
            <i class=icon title=title />
        </A>
    }
}

/// Off-site link opened in a new tab
#[component]
fn ExternalLink(link: NavLink) -> impl IntoView {
    let NavLink { href, title, icon } = link;
    view! {
        <a href=href target="_blank" rel="noopener noreferrer" title=title>
            <div class=icon />
        </a>
    }
}
