use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use folio_types::{Effect, Section};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use super::NavBarState;
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

/// Columns between two tabs.
const TAB_GAP: u16 = 1;

/// Renders the profile name on the left and the section tabs on the right.
#[derive(Debug, Default)]
pub struct NavBarComponent;

impl NavBarComponent {
    fn tab_label(section: Section) -> String {
        format!(" {} {} ", section.index() + 1, section.title())
    }

    /// Lays the tabs out right-aligned inside `inner`, clipping any that do
    /// not fit.
    fn tab_layout(inner: Rect) -> Vec<(Section, Rect)> {
        let widths: Vec<u16> = Section::ALL
            .iter()
            .map(|section| Self::tab_label(*section).width() as u16)
            .collect();
        let total = widths.iter().sum::<u16>() + TAB_GAP * (widths.len() as u16).saturating_sub(1);
        let mut x = inner.x + inner.width.saturating_sub(total);
        let right_edge = inner.right();

        Section::ALL
            .iter()
            .zip(widths)
            .filter_map(|(section, width)| {
                let clipped = width.min(right_edge.saturating_sub(x));
                let area = Rect::new(x, inner.y, clipped, inner.height.min(1));
                x = x.saturating_add(width + TAB_GAP);
                (clipped > 0).then_some((*section, area))
            })
            .collect()
    }
}

impl Component for NavBarComponent {
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        match app.nav_bar.section_at(mouse.column, mouse.row) {
            Some(section) => vec![Effect::SwitchTo(section)],
            None => Vec::new(),
        }
    }

    fn render(&mut self, buf: &mut Buffer, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, None, false);
        let inner = block.inner(area);
        block.render(area, buf);

        let tab_areas = Self::tab_layout(inner);
        let tabs_start = tab_areas.first().map(|(_, rect)| rect.x).unwrap_or(inner.right());

        // Profile name only when it fits left of the tabs.
        let name = &app.ctx.portfolio.profile.name;
        let name_room = tabs_start.saturating_sub(inner.x).saturating_sub(TAB_GAP);
        if name.width() as u16 + 1 <= name_room {
            let name_area = Rect::new(inner.x + 1, inner.y, name_room - 1, inner.height.min(1));
            Paragraph::new(Span::styled(
                name.as_str(),
                theme.accent_primary_style().add_modifier(Modifier::BOLD),
            ))
            .render(name_area, buf);
        }

        let active = app.active_section();
        for (section, tab_area) in &tab_areas {
            Paragraph::new(Line::from(Self::tab_label(*section)))
                .style(th::tab_style(theme, *section == active))
                .render(*tab_area, buf);
        }

        app.nav_bar = NavBarState {
            last_area: area,
            tab_areas,
        };
    }
}
