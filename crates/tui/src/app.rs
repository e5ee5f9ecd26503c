//! Application state and logic for the portfolio TUI.
//!
//! This module contains the main application state: navigation, the
//! horizontal viewport, enrichment results and the per-section UI state.
//! Components read and mutate it; the runtime drives it with [`Msg`]s.

use std::sync::Arc;
use std::time::{Duration, Instant};

use folio_content::Portfolio;
use folio_engine::EnrichmentMap;
use folio_types::{Effect, Msg, ProjectDescriptor, Section};
use ratatui::layout::Rect;

use crate::navigation::{HorizontalViewport, NavigationController};
use crate::ui::components::home::HomeState;
use crate::ui::components::nav_bar::NavBarState;
use crate::ui::components::projects::ProjectsState;
use crate::ui::components::resume::ResumeState;
use crate::ui::theme::Theme;

/// How long a status message stays in the hint bar.
const STATUS_TTL: Duration = Duration::from_secs(4);

/// Frames of the "fetching" spinner shown on project cards.
pub const THROBBER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Cross-cutting shared context owned by the App.
#[derive(Debug)]
pub struct SharedCtx {
    /// Active color theme
    pub theme: Box<dyn Theme>,
    /// Static content rendered by every section
    pub portfolio: Arc<Portfolio>,
}

impl SharedCtx {
    pub fn new(theme: Box<dyn Theme>, portfolio: Arc<Portfolio>) -> Self {
        Self { theme, portfolio }
    }
}

/// Transient feedback shown in place of the key hints.
#[derive(Debug, Clone)]
pub struct StatusLine {
    pub message: String,
    pub is_error: bool,
    shown_at: Instant,
}

impl StatusLine {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
            shown_at: Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
            shown_at: Instant::now(),
        }
    }

    fn expired(&self) -> bool {
        self.shown_at.elapsed() >= STATUS_TTL
    }
}

/// The main application state.
#[derive(Debug)]
pub struct App {
    /// Shared, cross-cutting context (theme, content)
    pub ctx: SharedCtx,
    /// Active section
    pub navigation: NavigationController,
    /// Window over the section strip
    pub viewport: HorizontalViewport,
    /// Live repository metadata, filled in as fetches settle
    pub enrichment: EnrichmentMap,
    /// Whether enrichment requests are still in flight
    pub fetching: bool,
    /// Animation frame for the fetching throbber
    pub throbber_idx: usize,
    pub nav_bar: NavBarState,
    pub home: HomeState,
    pub projects: ProjectsState,
    pub resume: ResumeState,
    /// Screen area the sections are drawn into
    pub content_area: Rect,
    pub status: Option<StatusLine>,
    dirty: bool,
}

impl App {
    /// Creates the application for a terminal `viewport_width` columns wide.
    ///
    /// `fetching` should be `true` when enrichment requests were dispatched.
    pub fn new(ctx: SharedCtx, viewport_width: u16, fetching: bool) -> Self {
        Self {
            ctx,
            navigation: NavigationController::new(),
            viewport: HorizontalViewport::new(viewport_width),
            enrichment: EnrichmentMap::new(),
            fetching,
            throbber_idx: 0,
            nav_bar: NavBarState::default(),
            home: HomeState::default(),
            projects: ProjectsState::default(),
            resume: ResumeState::default(),
            content_area: Rect::default(),
            status: None,
            dirty: true,
        }
    }

    pub fn active_section(&self) -> Section {
        self.navigation.active()
    }

    /// Activates `section` and starts a smooth scroll toward it.
    pub fn select_section(&mut self, section: Section) {
        let request = self.navigation.select_section(section, self.viewport.width());
        self.viewport.apply(request);
        self.dirty = true;
    }

    pub fn descriptors(&self) -> &[ProjectDescriptor] {
        &self.ctx.portfolio.projects
    }

    pub fn selected_project(&self) -> Option<&ProjectDescriptor> {
        self.descriptors().get(self.projects.selected)
    }

    /// Moves the card selection, wrapping at both ends.
    pub fn move_project_selection(&mut self, delta: isize) {
        let count = self.descriptors().len();
        if count == 0 {
            return;
        }
        let next = (self.projects.selected as isize + delta).rem_euclid(count as isize);
        self.projects.selected = next as usize;
        self.dirty = true;
    }

    /// Link opened for a project card.
    pub fn project_link(&self, project: &ProjectDescriptor) -> String {
        self.enrichment.link_for(project)
    }

    /// Whether the runtime should tick quickly.
    pub fn needs_animation(&self) -> bool {
        self.viewport.is_animating() || self.fetching
    }

    pub fn set_status(&mut self, status: StatusLine) {
        self.status = Some(status);
        self.dirty = true;
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Resizes the viewport and snaps it back onto the active section.
    pub fn sync_viewport_width(&mut self, width: u16) {
        self.viewport.set_width(width);
        let request = self.navigation.on_resize(width);
        self.viewport.apply(request);
        self.dirty = true;
    }

    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => {
                if self.viewport.step() {
                    self.dirty = true;
                }
                if self.fetching {
                    self.throbber_idx = (self.throbber_idx + 1) % THROBBER_FRAMES.len();
                    self.dirty = true;
                }
                if self.status.as_ref().is_some_and(StatusLine::expired) {
                    self.status = None;
                    self.dirty = true;
                }
            }
            Msg::Resize(width, _height) => self.sync_viewport_width(*width),
            Msg::EnrichmentSettled { project_id, result } => {
                self.enrichment.record(project_id.clone(), result.clone());
                self.dirty = true;
            }
            Msg::EnrichmentFinished => {
                self.fetching = false;
                self.throbber_idx = 0;
                self.dirty = true;
            }
        }
        Vec::new()
    }
}

/// App over the embedded portfolio with enrichment still pending.
#[cfg(test)]
pub(crate) fn test_app(width: u16) -> App {
    let portfolio = Arc::new(Portfolio::embedded().expect("embedded portfolio"));
    let theme = Box::new(crate::ui::theme::DraculaTheme::new());
    App::new(SharedCtx::new(theme, portfolio), width, true)
}
