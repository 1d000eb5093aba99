use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::text::{display_width, truncate};
use crate::app::{App, Mode};
use crate::page::Section;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let layout = app.layout();
        let row = app.scroll_row();

        let mode_str = match app.mode {
            Mode::Normal => "NORMAL",
            Mode::Help => "HELP",
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            let section = app.current_section();
            let detail = if section == Section::Projects {
                format!(
                    "Project {}/{}",
                    app.active_index() + 1,
                    app.portfolio.projects.len()
                )
            } else {
                section.title().to_string()
            };
            let percent = if layout.max_scroll() == 0 {
                100
            } else {
                row as u32 * 100 / layout.max_scroll() as u32
            };
            format!(" {} | {} | {}%", mode_str, detail, percent)
        };

        let help_hint = " q:quit j/k:scroll n/p:project o:open ?:help ";
        let width = area.width as usize;
        let status_text = truncate(&status_text, width);
        let padding_len = width.saturating_sub(display_width(&status_text) + display_width(help_hint));

        let status_fg = match (&app.status_message, app.status_is_error) {
            (Some(_), true) => theme.error,
            (Some(_), false) => theme.success,
            (None, _) => theme.fg0,
        };

        let mut spans = vec![
            Span::styled(status_text, Style::default().fg(status_fg).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
        ];
        // Hints are dropped first when space runs out
        if padding_len > 0 {
            spans.push(Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
