//! UI components: nav bar and the three portfolio sections.

pub mod component;
pub mod home;
pub mod nav_bar;
pub mod projects;
pub mod resume;

pub(crate) use component::*;
pub use home::HomeComponent;
pub use nav_bar::NavBarComponent;
pub use projects::ProjectsComponent;
pub use resume::ResumeComponent;
