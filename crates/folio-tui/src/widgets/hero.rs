use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use folio_core::portfolio::Profile;

use super::text::wrap;
use crate::theme::Theme;

/// Landing section: tagline, name, bio and calls to action
pub struct HeroWidget<'a> {
    pub profile: &'a Profile,
    pub theme: &'a Theme,
}

impl<'a> HeroWidget<'a> {
    const MARGIN: u16 = 4;
    const MAX_TEXT_WIDTH: u16 = 68;

    fn lines(&self, width: u16) -> Vec<Line<'a>> {
        let theme = self.theme;
        let mut lines = vec![
            Line::from(Span::styled(
                self.profile.tagline.to_uppercase(),
                Style::default().fg(theme.primary),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    "Hi, I'm ",
                    Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    self.profile.name.as_str(),
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::default(),
        ];

        lines.extend(
            wrap(&self.profile.bio, width as usize)
                .into_iter()
                .map(|l| Line::from(Span::styled(l, Style::default().fg(theme.fg1)))),
        );

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(" 1 ", Style::default().fg(theme.bg0).bg(theme.primary)),
            Span::styled(" View Projects   ", Style::default().fg(theme.fg0)),
            Span::styled(" 3 ", Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" Get in touch", Style::default().fg(theme.fg0)),
        ]));
        lines
    }
}

impl Widget for HeroWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.theme.bg0));

        let width = area
            .width
            .saturating_sub(Self::MARGIN * 2)
            .min(Self::MAX_TEXT_WIDTH)
            .max(1);
        let lines = self.lines(width);
        let height = (lines.len() as u16).min(area.height);

        let y = area.y + area.height.saturating_sub(height) / 2;
        let text_area = Rect::new(area.x + Self::MARGIN, y, width, height).intersection(area);
        Paragraph::new(lines).render(text_area, buf);

        if area.height > height + 1 {
            let hint = Line::from(Span::styled(
                "scroll ↓",
                Style::default().fg(self.theme.grey1),
            ))
            .centered();
            hint.render(Rect::new(area.x, area.bottom() - 1, area.width, 1), buf);
        }
    }
}
