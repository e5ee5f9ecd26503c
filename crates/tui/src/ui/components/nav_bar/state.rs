use folio_types::Section;
use ratatui::layout::Rect;

/// Hit-test areas recorded by the last render, in screen coordinates.
#[derive(Debug, Default, Clone)]
pub struct NavBarState {
    pub last_area: Rect,
    pub tab_areas: Vec<(Section, Rect)>,
}

impl NavBarState {
    /// Section whose tab is under `(x, y)`, if any.
    pub fn section_at(&self, x: u16, y: u16) -> Option<Section> {
        let areas: Vec<Rect> = self.tab_areas.iter().map(|(_, area)| *area).collect();
        crate::ui::components::find_target_index_by_mouse_position(&areas, x, y).map(|index| self.tab_areas[index].0)
    }
}
