//! Navigation Bar Component
//!
//! Fixed top bar with the primary links, an account area that depends on
//! the session, and a collapsible panel for narrow screens.

use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::components::dropdown::{Dropdown, DropdownLink};
use crate::components::icons::{Bars3Icon, ProfileIcon, XMarkIcon};
use crate::components::nav_link::NavBarLink;
use crate::config::AppConfig;
use crate::nav::{AccountArea, NavItem, NavLayout, ProfileAction};
use crate::services::{HttpAuthService, LocalTokenStore, TokenEventBus, use_router_navigator};
use crate::session::{AuthStatusProvider, LogoutFlow};
use crate::state::use_auth;

const MOBILE_ITEM_CLASS: &str = "block rounded-md text-base font-medium";

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = use_auth();
    let navigator = use_router_navigator();
    let config = use_context::<AppConfig>().unwrap_or_else(AppConfig::from_build_env);
    let layout = move || NavLayout::for_auth(auth.is_authorized());
    // Primary links do not depend on the session.
    let primary = NavLayout::for_auth(auth.authorized.get_untracked());
    let mobile_open = RwSignal::new(false);

    let logout = Callback::new(move |_: MouseEvent| {
        let tokens = LocalTokenStore::new(config.token_key.clone());
        let flow = LogoutFlow::new(
            HttpAuthService::new(config.clone(), tokens.clone()),
            tokens,
            TokenEventBus::global(),
            navigator.clone(),
        );
        leptos::task::spawn_local(async move {
            if let Err(e) = flow.run().await {
                log::error!("Logout incomplete: {}", e);
            }
        });
    });

    view! {
        <header class="w-screen fixed z-50 top-0 left-0">
            <nav class="bg-gray-800">
                <div class="mx-auto max-w-7xl px-2 md:px-6 lg:px-8">
                    <div class="relative flex h-16 items-center justify-between">
                        <div class="absolute inset-y-0 left-0 flex items-center md:hidden">
                            <button
                                type="button"
                                class="inline-flex items-center justify-center rounded-md p-2 text-gray-400 hover:bg-gray-700 hover:text-white focus:outline-none focus:ring-2 focus:ring-inset focus:ring-white"
                                aria-expanded=move || mobile_open.get().to_string()
                                on:click=move |_| mobile_open.update(|open| *open = !*open)
                            >
                                <span class="sr-only">"Open main menu"</span>
                                {move || {
                                    if mobile_open.get() {
                                        view! { <XMarkIcon/> }.into_any()
                                    } else {
                                        view! { <Bars3Icon/> }.into_any()
                                    }
                                }}
                            </button>
                        </div>
                        <div class="flex flex-1 items-center justify-center md:items-stretch md:justify-start">
                            <div class="flex flex-shrink-0 p-2 items-center">
                                <span class="block font-bold text-white lg:hidden">"Кушац"</span>
                                <span class="hidden font-bold text-white lg:block">"Delivery.Кушац"</span>
                            </div>
                            <div class="hidden md:ml-6 md:flex md:items-center">
                                <div class="flex space-x-4">
                                    {nav_links(primary.desktop_links())}
                                </div>
                            </div>
                        </div>
                        <div class="absolute inset-y-0 right-0 flex items-center pr-2 md:static md:inset-auto md:ml-6 md:pr-0">
                            <div class="relative ml-3">
                                {move || match layout().account() {
                                    AccountArea::Profile(actions) => {
                                        view! { <ProfileMenu actions=actions on_logout=logout/> }.into_any()
                                    }
                                    AccountArea::Guest(links) => view! { <GuestLinks links=links/> }.into_any(),
                                }}
                            </div>
                        </div>
                    </div>
                </div>

                <div class="md:hidden" class:hidden=move || !mobile_open.get()>
                    <div class=move || layout().mobile_primary_class()>
                        {mobile_links(primary.mobile_links(), mobile_open)}
                    </div>
                    {move || {
                        let guest = layout().mobile_guest_links();
                        (!guest.is_empty())
                            .then(|| {
                                view! {
                                    <div class="space-y-1 px-2 pt-2 pb-3">
                                        {mobile_links(guest, mobile_open)}
                                    </div>
                                }
                            })
                    }}
                </div>
            </nav>
        </header>
    }
}

/// Profile trigger and its dropdown
#[component]
fn ProfileMenu(actions: &'static [ProfileAction], on_logout: Callback<MouseEvent>) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <button
            type="button"
            class="flex rounded-full bg-gray-800 text-md focus:outline-none focus:ring-2 focus:ring-white focus:ring-offset-2 focus:ring-offset-gray-800"
            on:click=move |_| open.update(|open| *open = !*open)
        >
            <span class="sr-only">"Open user menu"</span>
            <ProfileIcon class="h-8 w-8 text-gray-300"/>
        </button>
        <Dropdown open=open>
            {actions
                .iter()
                .map(|action| match action {
                    ProfileAction::Profile => {
                        view! { <DropdownLink to=action.to()>{action.label()}</DropdownLink> }
                            .into_any()
                    }
                    ProfileAction::Logout => {
                        view! {
                            <DropdownLink to=action.to() on_click=on_logout>
                                {action.label()}
                            </DropdownLink>
                        }
                            .into_any()
                    }
                })
                .collect_view()}
        </Dropdown>
    }
}

/// Login and registration links on wide screens
#[component]
fn GuestLinks(links: &'static [NavItem]) -> impl IntoView {
    view! {
        <div class="hidden md:flex md:flex-1 md:items-center md:justify-end md:space-x-4">
            {links
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    view! {
                        {(i > 0).then(|| view! { <span class="h-6 w-px bg-gray-400" aria-hidden="true"></span> })}
                        <NavBarLink to=item.to>{item.name}</NavBarLink>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn nav_links(items: &'static [NavItem]) -> impl IntoView {
    items
        .iter()
        .map(|item| view! { <NavBarLink to=item.to>{item.name}</NavBarLink> })
        .collect_view()
}

/// Mobile entries close the panel once tapped.
fn mobile_links(items: &'static [NavItem], open: RwSignal<bool>) -> impl IntoView {
    items
        .iter()
        .map(|item| {
            view! {
                <NavBarLink to=item.to>
                    <span class=MOBILE_ITEM_CLASS on:click=move |_| open.set(false)>
                        {item.name}
                    </span>
                </NavBarLink>
            }
        })
        .collect_view()
}
