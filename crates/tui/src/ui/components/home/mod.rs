//! Home section: name, headline and the "View My Work" call to action.

mod home_component;
mod state;

pub use home_component::HomeComponent;
pub use state::HomeState;
