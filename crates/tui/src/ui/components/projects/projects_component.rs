use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use folio_types::{EnrichmentResult, Effect};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::app::{App, THROBBER_FRAMES};
use crate::ui::components::Component;
use crate::ui::theme::Theme;
use crate::ui::theme::theme_helpers as th;

/// Rows taken by one card in the stacked layout.
const CARD_HEIGHT: u16 = 8;
/// Minimum section width for laying cards out side by side.
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 100;
const MAX_SIDE_BY_SIDE_CARDS: usize = 3;

#[derive(Debug, Default)]
pub struct ProjectsComponent;

impl ProjectsComponent {
    fn open_selected(app: &App) -> Vec<Effect> {
        app.selected_project()
            .map(|project| vec![Effect::OpenUrl(app.project_link(project))])
            .unwrap_or_default()
    }

    fn copy_selected(app: &App) -> Vec<Effect> {
        app.selected_project()
            .map(|project| vec![Effect::CopyToClipboard(app.project_link(project))])
            .unwrap_or_default()
    }

    /// Card rectangles for the projects that fit in `area`, keeping
    /// `selected` on screen.
    fn card_layout(area: Rect, count: usize, selected: usize) -> Vec<(usize, Rect)> {
        if count == 0 || area.is_empty() {
            return Vec::new();
        }

        if area.width >= SIDE_BY_SIDE_MIN_WIDTH && count <= MAX_SIDE_BY_SIDE_CARDS {
            let height = area.height.min(CARD_HEIGHT + 4);
            let row = Rect { height, ..area };
            let columns = Layout::horizontal(vec![Constraint::Fill(1); count]).spacing(2).split(row);
            return columns.iter().copied().enumerate().collect();
        }

        let fits = usize::from((area.height + 1) / (CARD_HEIGHT + 1)).max(1);
        let first = selected.saturating_sub(fits - 1).min(count.saturating_sub(fits));
        let shown = fits.min(count - first);
        let rows = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); shown])
            .spacing(1)
            .split(area);
        rows.iter().copied().enumerate().map(|(offset, rect)| (first + offset, rect)).collect()
    }
}

/// Star and language badge, or a fetching marker while the result is pending.
///
/// Returns `None` when there is nothing to show (no result and no request in
/// flight).
pub(crate) fn badge_line(
    theme: &dyn Theme,
    result: Option<&EnrichmentResult>,
    fetching: bool,
    throbber_idx: usize,
) -> Option<Line<'static>> {
    match result {
        Some(result) => {
            let mut spans = vec![Span::styled(
                format!("★ {}", result.stars),
                theme.status_warning().add_modifier(Modifier::BOLD),
            )];
            if let Some(language) = &result.language {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    language.clone(),
                    Style::default().fg(theme.roles().accent_secondary),
                ));
            }
            Some(Line::from(spans))
        }
        None if fetching => Some(Line::from(Span::styled(
            format!("{} fetching", THROBBER_FRAMES[throbber_idx % THROBBER_FRAMES.len()]),
            th::badge_style(theme),
        ))),
        None => None,
    }
}

impl Component for ProjectsComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Up => {
                app.move_project_selection(-1);
                Vec::new()
            }
            KeyCode::Down => {
                app.move_project_selection(1);
                Vec::new()
            }
            KeyCode::Enter | KeyCode::Char('o') => Self::open_selected(app),
            KeyCode::Char('y') => Self::copy_selected(app),
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match app.projects.project_at(mouse.column, mouse.row) {
                Some(index) => {
                    app.projects.selected = index;
                    app.mark_dirty();
                    Self::open_selected(app)
                }
                None => Vec::new(),
            },
            MouseEventKind::ScrollDown => {
                app.move_project_selection(1);
                Vec::new()
            }
            MouseEventKind::ScrollUp => {
                app.move_project_selection(-1);
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, buf: &mut Buffer, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        Block::default().style(th::background_style(theme)).render(area, buf);

        let [header_area, _, cards_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Fill(1)])
                .horizontal_margin(2)
                .areas(area);
        Paragraph::new(Span::styled(
            "Projects",
            theme.accent_primary_style().add_modifier(Modifier::BOLD),
        ))
        .render(header_area, buf);

        let projects = app.descriptors();
        if projects.is_empty() {
            Paragraph::new("No projects yet.")
                .style(theme.text_muted_style())
                .render(cards_area, buf);
            app.projects.card_areas.clear();
            return;
        }

        let card_areas = Self::card_layout(cards_area, projects.len(), app.projects.selected);
        for (index, card_area) in &card_areas {
            let Some(project) = projects.get(*index) else {
                continue;
            };
            let selected = *index == app.projects.selected;
            let block = th::block(theme, Some(project.title.as_str()), selected);

            let mut lines = Vec::new();
            if let Some(badge) = badge_line(theme, app.enrichment.get(&project.id), app.fetching, app.throbber_idx) {
                lines.push(badge);
            }
            lines.push(Line::styled(project.description.as_str(), theme.text_primary_style()));
            if !project.tags.is_empty() {
                let mut tags = Vec::with_capacity(project.tags.len() * 2);
                for tag in &project.tags {
                    tags.push(Span::styled(format!(" {tag} "), th::tag_style(theme)));
                    tags.push(Span::raw(" "));
                }
                lines.push(Line::from(tags));
            }
            lines.push(Line::from(Span::styled(
                format!("↗ {}", app.project_link(project)),
                theme.accent_emphasis_style().add_modifier(Modifier::UNDERLINED),
            )));

            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(block)
                .render(*card_area, buf);
        }

        app.projects.card_areas = card_areas;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(
            &*app.ctx.theme,
            &[("↑/↓", " Select"), ("Enter", " Open"), ("y", " Copy link")],
        )
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use folio_types::{Msg, ProjectId};

    use super::*;
    use crate::app::test_app;
    use crate::ui::theme::DraculaTheme;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn render(app: &mut App, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        ProjectsComponent.render(&mut buf, area, app);
        buf
    }

    fn enriched(stars: u64, language: Option<&str>) -> EnrichmentResult {
        EnrichmentResult {
            stars,
            language: language.map(str::to_string),
            url: "https://github.com/levalleyjack/slugtistics".into(),
        }
    }

    #[test]
    fn badge_shows_stars_and_language() {
        let theme = DraculaTheme::new();
        let line = badge_line(&theme, Some(&enriched(42, Some("TypeScript"))), true, 0).expect("badge");
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(text, "★ 42  TypeScript");
    }

    #[test]
    fn badge_omits_missing_language() {
        let theme = DraculaTheme::new();
        let line = badge_line(&theme, Some(&enriched(0, None)), false, 0).expect("badge");
        assert_eq!(line.spans.len(), 1);
    }

    #[test]
    fn badge_is_a_marker_while_fetching_and_absent_after() {
        let theme = DraculaTheme::new();
        let pending = badge_line(&theme, None, true, 3).expect("marker");
        assert!(pending.spans[0].content.ends_with("fetching"));
        assert!(badge_line(&theme, None, false, 0).is_none());
    }

    #[test]
    fn cards_show_fallback_link_until_enriched() {
        let mut app = test_app(80);
        let text = buffer_text(&render(&mut app, 80, 20));
        assert!(text.contains("Slugtistics"));
        assert!(text.contains("fetching"));
        assert!(text.contains("https://github.com/levalleyjack/slugtistics"));
        assert!(!text.contains("★"));

        app.update(&Msg::EnrichmentSettled {
            project_id: ProjectId::new("project-one"),
            result: enriched(42, Some("TypeScript")),
        });
        let text = buffer_text(&render(&mut app, 80, 20));
        assert!(text.contains("★ 42"));
        assert!(text.contains("TypeScript"));
    }

    #[test]
    fn stacked_layout_keeps_selection_visible() {
        let areas = ProjectsComponent::card_layout(Rect::new(0, 0, 60, 10), 4, 3);
        assert_eq!(areas.len(), 1);
        assert_eq!(areas[0].0, 3);

        let areas = ProjectsComponent::card_layout(Rect::new(0, 0, 60, 30), 4, 0);
        assert_eq!(areas.iter().map(|(index, _)| *index).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn wide_layout_places_cards_side_by_side() {
        let areas = ProjectsComponent::card_layout(Rect::new(0, 0, 120, 20), 2, 0);
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].1.y, areas[1].1.y);
        assert!(areas[0].1.right() < areas[1].1.x);
    }

    #[test]
    fn keys_select_open_and_copy() {
        let mut app = test_app(80);
        let mut component = ProjectsComponent;
        assert!(component.handle_key_events(&mut app, KeyEvent::from(KeyCode::Down)).is_empty());
        assert_eq!(app.projects.selected, 1);

        let link = "https://github.com/levalleyjack/multipass-manager-vscode".to_string();
        assert_eq!(
            component.handle_key_events(&mut app, KeyEvent::from(KeyCode::Enter)),
            vec![Effect::OpenUrl(link.clone())]
        );
        assert_eq!(
            component.handle_key_events(&mut app, KeyEvent::from(KeyCode::Char('y'))),
            vec![Effect::CopyToClipboard(link)]
        );
    }

    #[test]
    fn clicking_a_card_selects_and_opens_it() {
        let mut app = test_app(80);
        render(&mut app, 80, 20);
        let (index, card) = app.projects.card_areas[1];
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: card.x + 2,
            row: card.y + 2,
            modifiers: KeyModifiers::NONE,
        };
        let effects = ProjectsComponent.handle_mouse_events(&mut app, click);
        assert_eq!(app.projects.selected, index);
        assert!(matches!(effects.as_slice(), [Effect::OpenUrl(url)] if url.ends_with("multipass-manager-vscode")));
    }
}
