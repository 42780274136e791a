//! Delivery web front-end
//!
//! Navigation bar with session-aware account menu and logout, plus the
//! storefront star rating.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod nav;
pub mod pages;
pub mod rating;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Delivery web starting...");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
