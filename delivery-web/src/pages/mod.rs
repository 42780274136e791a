//! Pages behind each navigation route

pub mod menu;

pub use menu::MenuPage;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::DISHES_URL;

#[component]
fn Placeholder(title: &'static str) -> impl IntoView {
    view! {
        <section class="mx-auto max-w-7xl px-4 py-8">
            <h1 class="text-2xl font-bold text-gray-900">{title}</h1>
        </section>
    }
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    view! { <Placeholder title="Orders"/> }
}

#[component]
pub fn CartPage() -> impl IntoView {
    view! { <Placeholder title="Cart"/> }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <Placeholder title="Login"/> }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! { <Placeholder title="Register"/> }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! { <Placeholder title="Profile"/> }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="mx-auto max-w-xl px-4 py-16 text-center">
            <h1 class="text-3xl font-bold text-gray-900 mb-4">"404 - Page Not Found"</h1>
            <p class="text-gray-600 mb-6">"The page you're looking for doesn't exist."</p>
            <A href=DISHES_URL>
                <span class="rounded-md bg-gray-800 px-4 py-2 text-white">"Back to the menu"</span>
            </A>
        </section>
    }
}
