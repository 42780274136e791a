//! Dropdown panel for the profile menu

use leptos::prelude::*;
use leptos_router::components::A;
use web_sys::MouseEvent;

const ITEM_CLASS: &str = "block px-4 py-2 text-sm text-gray-700 hover:bg-gray-100";

/// Shown while `open` is set; choosing any entry closes it.
#[component]
pub fn Dropdown(open: RwSignal<bool>, children: Children) -> impl IntoView {
    view! {
        <div
            role="menu"
            class="absolute right-0 z-10 mt-2 w-48 origin-top-right rounded-md bg-white py-1 shadow-lg ring-1 ring-black ring-opacity-5 focus:outline-none"
            class:hidden=move || !open.get()
            on:click=move |_| open.set(false)
        >
            {children()}
        </div>
    }
}

/// Menu entry. With `on_click` the link does not navigate by itself.
#[component]
pub fn DropdownLink(
    to: &'static str,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    match on_click {
        Some(on_click) => view! {
            <a
                href=to
                role="menuitem"
                class=ITEM_CLASS
                on:click=move |ev: MouseEvent| {
                    ev.prevent_default();
                    on_click.run(ev);
                }
            >
                {children()}
            </a>
        }
        .into_any(),
        None => view! {
            <A href=to attr:role="menuitem" attr:class=ITEM_CLASS>
                {children()}
            </A>
        }
        .into_any(),
    }
}
