use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use folio_core::Portfolio;

use super::text::wrap;
use crate::theme::Theme;

const INVITATION: &str = "I'm always open to new opportunities, collaborations, and \
                          interesting conversations. Reach out through any of the channels below.";

/// Closing section: invitation, email and social links
pub struct ContactWidget<'a> {
    pub portfolio: &'a Portfolio,
    pub theme: &'a Theme,
}

impl<'a> ContactWidget<'a> {
    pub fn height(portfolio: &Portfolio, width: u16) -> u16 {
        let rows = 3 // blank, heading, blank
            + wrap(INVITATION, Self::text_width(width)).len()
            + 1
            + usize::from(portfolio.contact.email.is_some())
            + 1
            + portfolio.contact.links.len()
            + 2; // blank, footer
        rows.min(u16::MAX as usize) as u16
    }

    fn text_width(width: u16) -> usize {
        width.saturating_sub(8).clamp(1, 64) as usize
    }

    fn lines(&self, width: u16) -> Vec<Line<'a>> {
        let theme = self.theme;
        let contact = &self.portfolio.contact;

        let mut lines = vec![
            Line::default(),
            Line::from(vec![
                Span::styled(
                    "Let's ",
                    Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "Connect",
                    Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::default(),
        ];
        lines.extend(
            wrap(INVITATION, Self::text_width(width))
                .into_iter()
                .map(|l| Line::from(Span::styled(l, Style::default().fg(theme.grey2)))),
        );
        lines.push(Line::default());

        if let Some(email) = &contact.email {
            lines.push(Line::from(vec![
                Span::styled("✉ ", Style::default().fg(theme.accent)),
                Span::styled(email.as_str(), Style::default().fg(theme.fg0)),
            ]));
        }
        lines.push(Line::default());
        for link in &contact.links {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<10}", link.name),
                    Style::default().fg(theme.primary),
                ),
                Span::styled(link.href.as_str(), Style::default().fg(theme.grey1)),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("© {}", self.portfolio.profile.name),
            Style::default().fg(theme.grey0),
        )));
        lines
    }
}

impl Widget for ContactWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.theme.bg0));
        Paragraph::new(self.lines(area.width))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
