use ratatui::layout::Rect;

/// Home section layout, in section-local coordinates.
#[derive(Debug, Default, Clone)]
pub struct HomeState {
    pub call_to_action_area: Rect,
}
