//! Shared types for the Folio workspace.
//!
//! The data model lives here so the content, engine and TUI crates agree on
//! one definition of a project, its enrichment and the navigation sections.

mod navigation;
mod project;

pub use navigation::{ScrollBehavior, ScrollRequest, Section};
pub use project::{EnrichmentResult, GITHUB_WEB_BASE, ProjectDescriptor, ProjectId, RepoMetadata};

/// Messages that can be sent to update the application state.
///
/// This enum defines the system events that can trigger state changes in
/// the application. User input is routed to components directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic UI tick (viewport animation, throbber)
    Tick,
    /// Terminal resized
    Resize(u16, u16),
    /// A single project's enrichment fetch settled (success or fallback)
    EnrichmentSettled { project_id: ProjectId, result: EnrichmentResult },
    /// Every enrichment fetch has settled
    EnrichmentFinished,
}

/// Side effects that can be triggered by state changes.
///
/// Components return effects instead of touching the terminal, the browser
/// or the clipboard themselves; the runtime executes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Make a section active and scroll it into view
    SwitchTo(Section),
    /// Open a link in the user's browser
    OpenUrl(String),
    /// Copy text to the system clipboard
    CopyToClipboard(String),
    /// Leave the application
    Quit,
}
