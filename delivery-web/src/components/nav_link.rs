//! Router link styled for the navigation bar

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NavBarLink(to: &'static str, children: Children) -> impl IntoView {
    view! {
        <A href=to attr:class="nav-link rounded-md px-3 py-2 text-sm font-medium text-gray-300 hover:bg-gray-700 hover:text-white">
            {children()}
        </A>
    }
}
