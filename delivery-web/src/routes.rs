//! Route paths
//!
//! Consumed as opaque strings by links, the router and the logout flow.

pub const DISHES_URL: &str = "/";
pub const ORDERS_URL: &str = "/orders";
pub const CART_URL: &str = "/cart";
pub const LOGIN_URL: &str = "/login";
pub const REGISTER_URL: &str = "/register";
pub const LOGOUT_URL: &str = "/logout";
pub const PROFILE_GET_URL: &str = "/profile";
