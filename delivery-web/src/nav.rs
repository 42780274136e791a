//! # Navigation Model
//!
//! What the navigation bar shows for a given authentication state. The
//! `NavBar` component renders a [`NavLayout`]; keeping the decision here
//! lets it be checked without a browser.

use crate::routes::{
    CART_URL, DISHES_URL, LOGIN_URL, LOGOUT_URL, ORDERS_URL, PROFILE_GET_URL, REGISTER_URL,
};

/// A link in the navigation bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub to: &'static str,
    /// Not used for styling yet.
    pub current: bool,
}

/// Primary navigation, identical for every visitor.
pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem { name: "Menu", to: DISHES_URL, current: true },
    NavItem { name: "Orders", to: ORDERS_URL, current: false },
    NavItem { name: "Cart", to: CART_URL, current: false },
];

/// Links offered to visitors without a session.
pub const GUEST_LINKS: [NavItem; 2] = [
    NavItem { name: "Login", to: LOGIN_URL, current: false },
    NavItem { name: "Register", to: REGISTER_URL, current: false },
];

/// Entry in the profile dropdown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileAction {
    Profile,
    Logout,
}

impl ProfileAction {
    pub const ALL: [ProfileAction; 2] = [ProfileAction::Profile, ProfileAction::Logout];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileAction::Profile => "Profile",
            ProfileAction::Logout => "Logout",
        }
    }

    pub fn to(&self) -> &'static str {
        match self {
            ProfileAction::Profile => PROFILE_GET_URL,
            ProfileAction::Logout => LOGOUT_URL,
        }
    }
}

/// Right-hand side of the bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountArea {
    /// Profile trigger with its dropdown actions
    Profile(&'static [ProfileAction]),
    /// Login and registration links
    Guest(&'static [NavItem]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLayout {
    authorized: bool,
}

impl NavLayout {
    pub fn for_auth(authorized: bool) -> Self {
        Self { authorized }
    }

    pub fn desktop_links(&self) -> &'static [NavItem] {
        &NAV_ITEMS
    }

    pub fn account(&self) -> AccountArea {
        if self.authorized {
            AccountArea::Profile(&ProfileAction::ALL)
        } else {
            AccountArea::Guest(&GUEST_LINKS)
        }
    }

    /// Primary links in the collapsible mobile panel.
    pub fn mobile_links(&self) -> &'static [NavItem] {
        &NAV_ITEMS
    }

    /// Login/registration links appended to the mobile panel.
    pub fn mobile_guest_links(&self) -> &'static [NavItem] {
        if self.authorized {
            &[]
        } else {
            &GUEST_LINKS
        }
    }

    /// Class list for the mobile primary block; the guest block follows it
    /// with a divider when unauthorized.
    pub fn mobile_primary_class(&self) -> &'static str {
        if self.authorized {
            "space-y-1 px-2 pt-2 pb-3"
        } else {
            "space-y-1 px-2 py-2 border-b border-gray-300"
        }
    }
}
