use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use folio_types::{Effect, Section};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::Modifier;
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use unicode_width::UnicodeWidthStr;

use super::HomeState;
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

const MAX_HEADLINE_WIDTH: u16 = 72;
const BUTTON_PADDING: u16 = 6;

#[derive(Debug, Default)]
pub struct HomeComponent;

impl Component for HomeComponent {
    fn handle_key_events(&mut self, _app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Enter => vec![Effect::SwitchTo(Section::Projects)],
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let clicked = mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && app
                .home
                .call_to_action_area
                .contains(Position::new(mouse.column, mouse.row));
        if clicked {
            vec![Effect::SwitchTo(Section::Projects)]
        } else {
            Vec::new()
        }
    }

    fn render(&mut self, buf: &mut Buffer, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let profile = &app.ctx.portfolio.profile;
        Block::default().style(th::background_style(theme)).render(area, buf);

        let text_width = area.width.saturating_sub(4).min(MAX_HEADLINE_WIDTH);
        let headline = Paragraph::new(profile.headline.as_str())
            .style(theme.text_secondary_style())
            .centered()
            .wrap(Wrap { trim: true });
        let headline_height = headline.line_count(text_width) as u16;
        let button_width = (profile.call_to_action.width() as u16 + BUTTON_PADDING).min(area.width);

        let [_, name_area, _, headline_area, _, button_row, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(headline_height),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(Span::styled(
            profile.name.as_str(),
            theme.accent_primary_style().add_modifier(Modifier::BOLD),
        ))
        .centered()
        .render(name_area, buf);

        let [headline_area] = Layout::horizontal([Constraint::Length(text_width)])
            .flex(ratatui::layout::Flex::Center)
            .areas(headline_area);
        headline.render(headline_area, buf);

        let [button_area] = Layout::horizontal([Constraint::Length(button_width)])
            .flex(ratatui::layout::Flex::Center)
            .areas(button_row);
        th::render_button(buf, button_area, &profile.call_to_action, theme, true);

        app.home = HomeState {
            call_to_action_area: button_area,
        };
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(&*app.ctx.theme, &[("Enter", " View my work")])
    }
}
