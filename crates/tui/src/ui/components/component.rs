//! Component system for the portfolio TUI.
//!
//! Components are self-contained UI elements that handle their own events
//! and render themselves, reporting side effects back to the runtime as
//! [`Effect`]s instead of performing them.

use crossterm::event::{KeyEvent, MouseEvent};
use folio_types::Effect;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::text::Span;

use crate::app::App;

/// A UI element with its own event handling and rendering.
///
/// Rendering targets a [`Buffer`] rather than a `Frame` so a section can be
/// drawn off-screen and composited into the horizontal viewport.
pub(crate) trait Component {
    /// Handle key events while this component is the active one.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events.
    ///
    /// Section components receive coordinates relative to their own area;
    /// chrome (nav bar, hints) receives screen coordinates.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Draw the component into `area` of `buf`.
    ///
    /// Implementations may record hit-test rectangles on `app` but should not
    /// change anything else.
    fn render(&mut self, buf: &mut Buffer, area: Rect, app: &mut App);

    /// Key hints shown in the hint bar while this component is active.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'static>> {
        Vec::new()
    }
}

/// Index of the first rectangle containing `(x, y)`.
pub(crate) fn find_target_index_by_mouse_position(areas: &[Rect], x: u16, y: u16) -> Option<usize> {
    let position = Position::new(x, y);
    areas.iter().position(|area| area.contains(position))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_rectangle_under_the_cursor() {
        let areas = [Rect::new(0, 0, 10, 3), Rect::new(10, 0, 10, 3)];
        assert_eq!(find_target_index_by_mouse_position(&areas, 12, 1), Some(1));
        assert_eq!(find_target_index_by_mouse_position(&areas, 9, 2), Some(0));
        assert_eq!(find_target_index_by_mouse_position(&areas, 5, 3), None);
    }
}
