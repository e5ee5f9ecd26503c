//! Horizontal navigation bar.
//!
//! One tab per section, the active one highlighted. Tabs respond to mouse
//! clicks; the number and letter shortcuts live in the main view so they
//! work no matter which section is active.

mod nav_bar_component;
mod state;

pub use nav_bar_component::NavBarComponent;
pub use state::NavBarState;
