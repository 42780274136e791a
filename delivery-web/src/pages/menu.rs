//! Menu page

use leptos::prelude::*;

use crate::components::StarRating;

#[component]
pub fn MenuPage() -> impl IntoView {
    view! {
        <section class="mx-auto max-w-7xl px-4 py-8">
            <h1 class="text-2xl font-bold text-gray-900">"Menu"</h1>
            <div class="mt-2">
                <StarRating/>
            </div>
        </section>
    }
}
