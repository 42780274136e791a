//! Five-star rating row

use leptos::prelude::*;

use crate::components::icons::StarIcon;
use crate::rating::Rating;

const LABEL_CLASS: &str = "ml-2 font-normal text-gray-900 text-sm md:text-base";

#[component]
pub fn StarRating() -> impl IntoView {
    let rating = Rating::FEATURED;

    view! {
        <div class="flex items-center">
            {(0..rating.stars()).map(|_| view! { <StarIcon/> }).collect_view()}
            <p class=LABEL_CLASS>{rating.label()}</p>
        </div>
    }
}
