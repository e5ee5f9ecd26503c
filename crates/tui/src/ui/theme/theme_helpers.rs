use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(if focused { BorderType::Thick } else { BorderType::Plain })
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(
            t,
            theme.text_secondary_style().add_modifier(Modifier::BOLD),
        ));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Root background behind every section.
pub fn background_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { background, text, .. } = *theme.roles();
    Style::default().bg(background).fg(text)
}

/// Nav tab style: the active tab is bold and underlined, the rest muted.
pub fn tab_style<T: Theme + ?Sized>(theme: &T, active: bool) -> Style {
    if active {
        theme
            .text_primary_style()
            .add_modifier(Modifier::BOLD)
            .add_modifier(Modifier::UNDERLINED)
    } else {
        theme.text_muted_style()
    }
}

/// Pill-style tag chip.
pub fn tag_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles {
        selection_bg, text, ..
    } = *theme.roles();
    Style::default().bg(selection_bg).fg(text)
}

/// Star/language badge next to a project title.
pub fn badge_style<T: Theme + ?Sized>(theme: &T) -> Style {
    theme.text_muted_style()
}

/// Build key hint spans: the key in accent, the description muted.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    hints
        .iter()
        .flat_map(|(key, description)| {
            [
                Span::styled(*key, theme.accent_emphasis_style()),
                Span::styled(*description, theme.text_muted_style()),
                Span::raw("  "),
            ]
        })
        .collect()
}

/// Renders an outlined button; `highlighted` inverts it like a hovered link.
pub fn render_button<T: Theme + ?Sized>(buf: &mut Buffer, area: Rect, label: &str, theme: &T, highlighted: bool) {
    let style = if highlighted {
        theme.selection_style().add_modifier(Modifier::BOLD)
    } else {
        theme.text_primary_style()
    };
    Paragraph::new(label)
        .centered()
        .style(style)
        .block(
            Block::bordered()
                .border_type(BorderType::Plain)
                .border_style(theme.border_style(highlighted)),
        )
        .render(area, buf);
}
