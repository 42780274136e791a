//! Delivery Web App - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::NavBar;
use crate::config::AppConfig;
use crate::pages::{CartPage, LoginPage, MenuPage, NotFound, OrdersPage, ProfilePage, RegisterPage};
use crate::services::LocalTokenStore;
use crate::state::provide_auth_context;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    log::info!("API base: {}", config.api_base);

    provide_auth_context(&LocalTokenStore::new(config.token_key.clone()));
    provide_context(config);

    // Paths mirror crate::routes.
    view! {
        <Router>
            <NavBar/>
            <main class="pt-16">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=MenuPage/>
                    <Route path=path!("/orders") view=OrdersPage/>
                    <Route path=path!("/cart") view=CartPage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/register") view=RegisterPage/>
                    <Route path=path!("/profile") view=ProfilePage/>
                </Routes>
            </main>
        </Router>
    }
}
