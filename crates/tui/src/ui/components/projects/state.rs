use ratatui::layout::Rect;

/// Card selection and hit-test areas for the Projects section.
#[derive(Debug, Default, Clone)]
pub struct ProjectsState {
    pub selected: usize,
    /// Rendered cards in section-local coordinates, as `(project index, area)`
    pub card_areas: Vec<(usize, Rect)>,
}

impl ProjectsState {
    /// Index of the project whose card is under `(x, y)`.
    pub fn project_at(&self, x: u16, y: u16) -> Option<usize> {
        let areas: Vec<Rect> = self.card_areas.iter().map(|(_, area)| *area).collect();
        crate::ui::components::find_target_index_by_mouse_position(&areas, x, y).map(|hit| self.card_areas[hit].0)
    }
}
