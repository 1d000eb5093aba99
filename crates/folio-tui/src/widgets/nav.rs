use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::page::Section;

/// Top bar: initials and section links, the current section highlighted
pub struct NavWidget;

impl NavWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let current = app.current_section();

        let mut spans = vec![
            Span::styled(
                format!(" {} ", app.portfolio.profile.initials()),
                Style::default()
                    .fg(theme.bg0)
                    .bg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ", Style::default().bg(theme.bg1)),
        ];

        let keys = &app.config.keymap;
        let links = [
            (Section::Projects, &keys.goto_projects),
            (Section::Skills, &keys.goto_skills),
            (Section::Contact, &keys.goto_contact),
        ];
        for (section, key) in links {
            let style = if section == current {
                Style::default()
                    .fg(theme.accent)
                    .bg(theme.bg1)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.grey2).bg(theme.bg1)
            };
            spans.push(Span::styled(
                key.clone(),
                Style::default().fg(theme.grey0).bg(theme.bg1),
            ));
            spans.push(Span::styled(format!(" {}", section.title()), style));
            spans.push(Span::styled("   ", Style::default().bg(theme.bg1)));
        }

        let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg1));
        frame.render_widget(paragraph, area);
    }
}
