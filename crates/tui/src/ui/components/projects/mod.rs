//! Projects section: one card per project with its live repository metadata.

mod projects_component;
mod state;

pub use projects_component::ProjectsComponent;
pub use state::ProjectsState;
