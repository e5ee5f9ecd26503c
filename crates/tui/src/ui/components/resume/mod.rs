//! Resume section: scrollable experience entries and the document download.

mod resume_component;
mod state;

pub use resume_component::ResumeComponent;
pub use state::ResumeState;
