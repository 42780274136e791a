//! UI Components

pub mod dropdown;
pub mod icons;
pub mod nav_link;
pub mod navbar;
pub mod star_rating;

pub use dropdown::{Dropdown, DropdownLink};
pub use nav_link::NavBarLink;
pub use navbar::NavBar;
pub use star_rating::StarRating;
