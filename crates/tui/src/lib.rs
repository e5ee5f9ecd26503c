//! # Folio TUI Library
//!
//! A terminal rendition of a single-page portfolio: three full-width
//! sections (Home, Projects, Resume) laid side by side and scrolled
//! horizontally, with live GitHub metadata on the project cards.
//!
//! ## Architecture
//!
//! The TUI follows a component-based architecture. Each section and the nav
//! bar are components that handle their own input and render themselves,
//! returning `Effect`s for anything that touches the outside world. The
//! runtime owns the event loop, the terminal and the in-flight enrichment
//! requests.

mod app;
mod cmd;
mod navigation;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use folio_content::Portfolio;
use folio_engine::RepoMetadataSource;

pub use navigation::{HorizontalViewport, NavigationController, VisibleSlice};

/// Inputs for a TUI session.
pub struct TuiOptions {
    /// Content to render
    pub portfolio: Arc<Portfolio>,
    /// Where repository metadata comes from; `None` skips enrichment
    pub metadata_source: Option<Arc<dyn RepoMetadataSource>>,
    /// Palette name; falls back to `FOLIO_THEME`, then Dracula
    pub theme: Option<String>,
}

/// Runs the portfolio TUI until the user quits.
///
/// # Errors
///
/// Returns an error when the terminal cannot be set up or drawn to.
pub async fn run(options: TuiOptions) -> Result<()> {
    ui::runtime::run_app(options).await
}
