use ratatui::layout::Rect;

/// Vertical scroll of the resume body.
#[derive(Debug, Default, Clone)]
pub struct ResumeState {
    pub scroll: u16,
    /// Largest useful scroll value, computed at render time
    pub max_scroll: u16,
    /// "Download PDF" button in section-local coordinates
    pub download_area: Rect,
}

impl ResumeState {
    pub fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll));
        self.scroll = next as u16;
    }
}
