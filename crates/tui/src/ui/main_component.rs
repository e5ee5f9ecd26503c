//! Top-level view: nav bar, the horizontally scrolling section strip and the
//! hint bar.
//!
//! Each visible section is rendered into an off-screen buffer as wide as the
//! terminal and the columns inside the viewport are copied into the frame.
//! During a smooth scroll two sections can be partially visible.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use folio_types::{Effect, Msg, Section};
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use super::components::{Component, HomeComponent, NavBarComponent, ProjectsComponent, ResumeComponent};
use super::theme::theme_helpers as th;
use crate::app::App;

const NAV_BAR_HEIGHT: u16 = 3;
const HINT_BAR_HEIGHT: u16 = 1;

#[derive(Debug, Default)]
pub struct MainView {
    pub nav_bar_view: NavBarComponent,
    home_view: HomeComponent,
    projects_view: ProjectsComponent,
    resume_view: ResumeComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    fn section_view(&mut self, section: Section) -> &mut dyn Component {
        match section {
            Section::Home => &mut self.home_view,
            Section::Projects => &mut self.projects_view,
            Section::Resume => &mut self.resume_view,
        }
    }

    fn section_view_ref(&self, section: Section) -> &dyn Component {
        match section {
            Section::Home => &self.home_view,
            Section::Projects => &self.projects_view,
            Section::Resume => &self.resume_view,
        }
    }

    /// Feeds a system message to the app.
    pub fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        app.update(&msg)
    }

    /// Keys that work regardless of the active section.
    fn handle_global_key(app: &App, key: KeyEvent) -> Option<Vec<Effect>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(vec![Effect::Quit]);
        }
        let active = app.active_section();
        let target = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Some(vec![Effect::Quit]),
            KeyCode::Char('1') | KeyCode::Char('h') => Section::Home,
            KeyCode::Char('2') | KeyCode::Char('p') => Section::Projects,
            KeyCode::Char('3') | KeyCode::Char('r') => Section::Resume,
            KeyCode::Right | KeyCode::Tab => active.next(),
            KeyCode::Left | KeyCode::BackTab => active.prev(),
            _ => return None,
        };
        Some(vec![Effect::SwitchTo(target)])
    }

    pub fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if let Some(effects) = Self::handle_global_key(app, key) {
            return effects;
        }
        let active = app.active_section();
        self.section_view(active).handle_key_events(app, key)
    }

    /// Routes mouse input to the nav bar, or to the active section in its
    /// local coordinates. Section input is ignored mid-scroll since the
    /// recorded hit areas no longer match the screen.
    pub fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let position = Position::new(mouse.column, mouse.row);
        if app.nav_bar.last_area.contains(position) {
            return self.nav_bar_view.handle_mouse_events(app, mouse);
        }
        let content = app.content_area;
        if app.viewport.is_animating() || !content.contains(position) {
            return Vec::new();
        }
        let local = MouseEvent {
            column: mouse.column - content.x,
            row: mouse.row - content.y,
            ..mouse
        };
        let active = app.active_section();
        self.section_view(active).handle_mouse_events(app, local)
    }

    /// Splits the screen into nav bar, content and hint bar.
    pub fn get_preferred_layout(area: Rect) -> [Rect; 3] {
        Layout::vertical([
            Constraint::Length(NAV_BAR_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(HINT_BAR_HEIGHT),
        ])
        .areas(area)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        self.render_to_buffer(frame.buffer_mut(), area, app);
    }

    pub(crate) fn render_to_buffer(&mut self, buf: &mut Buffer, area: Rect, app: &mut App) {
        Block::default()
            .style(th::background_style(&*app.ctx.theme))
            .render(area, buf);

        let [nav_area, content_area, hints_area] = Self::get_preferred_layout(area);
        self.nav_bar_view.render(buf, nav_area, app);
        app.content_area = content_area;
        self.render_sections(buf, content_area, app);

        let hints = Paragraph::new(Line::from(self.get_hint_spans(app))).style(app.ctx.theme.text_muted_style());
        hints.render(hints_area, buf);
    }

    /// Composites the sections overlapping the viewport into `area`.
    fn render_sections(&mut self, buf: &mut Buffer, area: Rect, app: &mut App) {
        if area.is_empty() {
            return;
        }
        // The terminal may have changed size since the last Resize was handled.
        if app.viewport.width() != area.width {
            app.sync_viewport_width(area.width);
        }
        let section_area = Rect::new(0, 0, area.width, area.height);
        for slice in app.viewport.visible_slices() {
            let mut scratch = Buffer::empty(section_area);
            self.section_view(slice.section).render(&mut scratch, section_area, app);
            for row in 0..area.height {
                let columns = slice.width.min(area.width.saturating_sub(slice.dest_x));
                for column in 0..columns {
                    if let Some(cell) = scratch.cell((slice.source_x + column, row)) {
                        buf[(area.x + slice.dest_x + column, area.y + row)] = cell.clone();
                    }
                }
            }
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        if let Some(status) = app.status.as_ref() {
            let style = if status.is_error {
                app.ctx.theme.status_error()
            } else {
                app.ctx.theme.status_success()
            };
            return vec![Span::raw(" "), Span::styled(status.message.clone(), style)];
        }

        let mut hint_spans = vec![Span::styled(" Hints: ", app.ctx.theme.text_muted_style())];
        hint_spans.extend(th::build_hint_spans(
            &*app.ctx.theme,
            &[("1-3/←→", " Sections"), ("q", " Quit")],
        ));
        hint_spans.extend(self.section_view_ref(app.active_section()).get_hint_spans(app));
        hint_spans
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{MouseButton, MouseEventKind};

    use super::*;
    use crate::app::{StatusLine, test_app};

    fn draw(view: &mut MainView, app: &mut App, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        view.render_to_buffer(&mut buf, area, app);
        buf
    }

    fn row_text(buf: &Buffer, row: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, row)].symbol()).collect()
    }

    fn text(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn view_key(view: &mut MainView, app: &mut App, code: KeyCode) -> Vec<Effect> {
        view.handle_key_events(app, KeyEvent::from(code))
    }

    #[test]
    fn global_keys_switch_sections_and_quit() {
        let mut view = MainView::new();
        let mut app = test_app(80);
        let cases = [
            (KeyCode::Char('2'), Effect::SwitchTo(Section::Projects)),
            (KeyCode::Char('r'), Effect::SwitchTo(Section::Resume)),
            (KeyCode::Char('h'), Effect::SwitchTo(Section::Home)),
            (KeyCode::Left, Effect::SwitchTo(Section::Resume)),
            (KeyCode::Tab, Effect::SwitchTo(Section::Projects)),
            (KeyCode::Char('q'), Effect::Quit),
            (KeyCode::Esc, Effect::Quit),
        ];
        for (code, expected) in cases {
            assert_eq!(view_key(&mut view, &mut app, code), vec![expected], "{code:?}");
        }
        assert_eq!(
            view.handle_key_events(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            vec![Effect::Quit]
        );
    }

    #[test]
    fn section_keys_reach_the_active_section() {
        let mut view = MainView::new();
        let mut app = test_app(80);
        assert_eq!(
            view_key(&mut view, &mut app, KeyCode::Enter),
            vec![Effect::SwitchTo(Section::Projects)]
        );
        app.select_section(Section::Projects);
        view_key(&mut view, &mut app, KeyCode::Down);
        assert_eq!(app.projects.selected, 1);
    }

    #[test]
    fn settled_viewport_shows_only_the_active_section() {
        let mut view = MainView::new();
        let mut app = test_app(80);
        let home = text(&draw(&mut view, &mut app, 80, 24));
        assert!(home.contains("View My Work"));
        assert!(!home.contains("Download PDF"));

        app.select_section(Section::Resume);
        app.update(&Msg::Resize(80, 24));
        let resume = text(&draw(&mut view, &mut app, 80, 24));
        assert!(resume.contains("Download PDF"));
        assert!(!resume.contains("View My Work"));
    }

    #[test]
    fn mid_scroll_frame_shows_two_sections() {
        let mut view = MainView::new();
        let mut app = test_app(80);
        app.select_section(Section::Projects);
        app.update(&Msg::Tick);
        assert_eq!(app.viewport.offset(), 20);

        let buf = draw(&mut view, &mut app, 80, 24);
        let [_, content, _] = MainView::get_preferred_layout(buf.area);
        // Projects starts 60 columns in; its header sits two columns past that.
        assert_eq!(row_text(&buf, content.y).find("Projects"), Some(62));
        assert!(text(&buf).contains("View My Work"));
    }

    #[test]
    fn frame_narrower_than_viewport_realigns_instead_of_overflowing() {
        let mut view = MainView::new();
        let mut app = test_app(100);
        app.select_section(Section::Projects);
        app.update(&Msg::Tick);
        assert_eq!(app.viewport.offset(), 25);

        let buf = draw(&mut view, &mut app, 80, 24);
        assert_eq!(app.viewport.width(), 80);
        assert!(!app.viewport.is_animating());
        assert_eq!(app.viewport.offset(), 80);
        let rendered = text(&buf);
        assert!(rendered.contains("Slugtistics"));
        assert!(!rendered.contains("View My Work"));
    }

    #[test]
    fn mouse_is_translated_into_section_coordinates() {
        let mut view = MainView::new();
        let mut app = test_app(80);
        draw(&mut view, &mut app, 80, 24);

        let button = app.home.call_to_action_area;
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: app.content_area.x + button.x + 1,
            row: app.content_area.y + button.y + 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            view.handle_mouse_events(&mut app, click),
            vec![Effect::SwitchTo(Section::Projects)]
        );

        app.select_section(Section::Projects);
        assert!(view.handle_mouse_events(&mut app, click).is_empty(), "ignored while scrolling");
    }

    #[test]
    fn clicking_a_tab_switches_sections() {
        let mut view = MainView::new();
        let mut app = test_app(80);
        draw(&mut view, &mut app, 80, 24);
        let (section, tab) = app.nav_bar.tab_areas[2];
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: tab.x,
            row: tab.y,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(view.handle_mouse_events(&mut app, click), vec![Effect::SwitchTo(section)]);
    }

    #[test]
    fn status_replaces_hints() {
        let mut view = MainView::new();
        let mut app = test_app(80);
        let buf = draw(&mut view, &mut app, 80, 24);
        assert!(row_text(&buf, 23).contains("Quit"));

        app.set_status(StatusLine::error("Clipboard error: unavailable"));
        let buf = draw(&mut view, &mut app, 80, 24);
        let hints = row_text(&buf, 23);
        assert!(hints.contains("Clipboard error"));
        assert!(!hints.contains("Quit"));
    }
}
