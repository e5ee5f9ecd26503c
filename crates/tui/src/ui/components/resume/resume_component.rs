use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use folio_content::Resume;
use folio_types::Effect;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use tracing::warn;

use crate::app::{App, StatusLine};
use crate::ui::components::Component;
use crate::ui::theme::Theme;
use crate::ui::theme::theme_helpers as th;

const DOWNLOAD_LABEL: &str = "Download PDF";
const PAGE_SCROLL: i32 = 10;

#[derive(Debug, Default)]
pub struct ResumeComponent;

/// Resolves the resume document to something the platform opener accepts.
///
/// URLs pass through unchanged; paths are made absolute. Returns `None` for a
/// path that does not exist.
pub(crate) fn resolve_document(document: &str) -> Option<String> {
    if document.contains("://") {
        return Some(document.to_string());
    }
    std::fs::canonicalize(Path::new(document))
        .ok()
        .map(|path| path.display().to_string())
}

fn body_lines(theme: &dyn Theme, resume: &Resume) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, entry) in resume.entries.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::styled(
            entry.heading.clone(),
            theme.accent_primary_style().add_modifier(Modifier::BOLD),
        ));
        let subtitle = [entry.organization.as_str(), entry.period.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" · ");
        if !subtitle.is_empty() {
            lines.push(Line::styled(subtitle, theme.text_secondary_style()));
        }
        for highlight in &entry.highlights {
            lines.push(Line::from(vec![
                Span::styled("  • ", theme.text_muted_style()),
                Span::styled(highlight.clone(), theme.text_primary_style()),
            ]));
        }
    }
    lines
}

impl ResumeComponent {
    fn download(app: &mut App) -> Vec<Effect> {
        let document = app.ctx.portfolio.resume.document.clone();
        match resolve_document(&document) {
            Some(target) => vec![Effect::OpenUrl(target)],
            None => {
                warn!(%document, "resume document not found");
                app.set_status(StatusLine::error(format!("Resume document {document} not found")));
                Vec::new()
            }
        }
    }

    fn scroll(app: &mut App, delta: i32) -> Vec<Effect> {
        app.resume.scroll_by(delta);
        app.mark_dirty();
        Vec::new()
    }
}

impl Component for ResumeComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Self::scroll(app, 1),
            KeyCode::Char('k') | KeyCode::Up => Self::scroll(app, -1),
            KeyCode::PageDown => Self::scroll(app, PAGE_SCROLL),
            KeyCode::PageUp => Self::scroll(app, -PAGE_SCROLL),
            KeyCode::Char('d') | KeyCode::Enter => Self::download(app),
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        match mouse.kind {
            MouseEventKind::ScrollDown => Self::scroll(app, 1),
            MouseEventKind::ScrollUp => Self::scroll(app, -1),
            MouseEventKind::Down(MouseButton::Left)
                if app.resume.download_area.contains(Position::new(mouse.column, mouse.row)) =>
            {
                Self::download(app)
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, buf: &mut Buffer, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        Block::default().style(th::background_style(theme)).render(area, buf);

        let [header_area, _, body_area, button_row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .horizontal_margin(2)
        .areas(area);

        Paragraph::new(Span::styled(
            "Resume",
            theme.accent_primary_style().add_modifier(Modifier::BOLD),
        ))
        .render(header_area, buf);

        let block = th::block(theme, Some("Experience"), false);
        let inner = block.inner(body_area);
        let body = Paragraph::new(body_lines(theme, &app.ctx.portfolio.resume)).wrap(Wrap { trim: false });
        let max_scroll = (body.line_count(inner.width) as u16).saturating_sub(inner.height);
        let scroll = app.resume.scroll.min(max_scroll);
        body.block(block).scroll((scroll, 0)).render(body_area, buf);

        let [download_area] = Layout::horizontal([Constraint::Length(DOWNLOAD_LABEL.len() as u16 + 6)])
            .flex(Flex::Center)
            .areas(button_row);
        th::render_button(buf, download_area, DOWNLOAD_LABEL, theme, false);

        app.resume.scroll = scroll;
        app.resume.max_scroll = max_scroll;
        app.resume.download_area = download_area;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(&*app.ctx.theme, &[("j/k", " Scroll"), ("d", " Download PDF")])
    }
}
