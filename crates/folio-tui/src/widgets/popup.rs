use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use folio_core::config::KeymapConfig;

use crate::theme::Theme;

pub struct PopupWidget;

impl PopupWidget {
    /// Render the key reference for the configured keymap
    pub fn render_help(frame: &mut Frame, keymap: &KeymapConfig, theme: &Theme) {
        let area = frame.area();
        let entries = help_entries(keymap);

        let popup_width = 44u16.min(area.width.saturating_sub(4));
        let popup_height = (entries.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.bg1));
        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let mut lines: Vec<Line> = entries
            .into_iter()
            .map(|(keys, description)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:<14}", keys),
                        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(description, Style::default().fg(theme.fg1)),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(
                "press any key to close",
                Style::default().fg(theme.grey1),
            ))
            .centered(),
        );

        frame.render_widget(Paragraph::new(lines), inner_area);
    }
}

fn help_entries(keymap: &KeymapConfig) -> Vec<(String, &'static str)> {
    vec![
        (format!("{} / {}", keymap.scroll_down, keymap.scroll_up), "Scroll line"),
        (
            format!("{} / {}", keymap.scroll_half_down, keymap.scroll_half_up),
            "Scroll half page",
        ),
        (
            format!("{} / {}", keymap.scroll_page_down, keymap.scroll_page_up),
            "Scroll page",
        ),
        (
            format!("{} / {}", keymap.jump_to_top, keymap.jump_to_bottom),
            "Top / bottom",
        ),
        (
            format!(
                "{} {} {}",
                keymap.goto_projects, keymap.goto_skills, keymap.goto_contact
            ),
            "Projects, skills, contact",
        ),
        (
            format!("{} / {}", keymap.next_project, keymap.prev_project),
            "Next / previous project",
        ),
        (keymap.open_github.clone(), "Open project on GitHub"),
        (keymap.open_demo.clone(), "Open project demo"),
        (keymap.help.clone(), "Toggle this help"),
        (keymap.quit.clone(), "Quit"),
    ]
}

/// Helper function to create a centered rect
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
