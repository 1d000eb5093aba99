use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::intro::{highlight, typed_prefix, IntroPhase, TokenKind, TypedFrame};
use crate::theme::Theme;

const CURSOR: &str = "▋";

/// Full-screen intro: code window, loading bar, percentage
pub struct IntroWidget<'a> {
    pub lines: &'a [String],
    pub frame: TypedFrame,
    pub phase: IntroPhase,
    pub theme: &'a Theme,
}

impl IntroWidget<'_> {
    fn token_style(&self, kind: TokenKind) -> Style {
        let fg = match kind {
            TokenKind::Keyword => self.theme.accent,
            TokenKind::Str => self.theme.string,
            TokenKind::Bracket => self.theme.grey2,
            TokenKind::Function => self.theme.primary,
            TokenKind::Identifier => self.theme.fg1,
            TokenKind::Plain => self.theme.grey2,
        };
        Style::default().fg(self.fade(fg))
    }

    /// During the reveal everything dims towards the background
    fn fade(&self, color: Color) -> Color {
        match self.phase {
            IntroPhase::Reveal { fade } if fade > 0.5 => self.theme.grey0,
            _ => color,
        }
    }

    fn highlighted_line<'l>(&self, code: &'l str, cursor: bool) -> Line<'l> {
        let mut spans: Vec<Span> = highlight(code)
            .into_iter()
            .map(|token| Span::styled(token.text, self.token_style(token.kind)))
            .collect();
        if cursor {
            spans.push(Span::styled(CURSOR, Style::default().fg(self.fade(self.theme.primary))));
        }
        Line::from(spans)
    }

    fn code_lines(&self) -> Vec<Line<'_>> {
        let mut lines: Vec<Line> = self
            .lines
            .iter()
            .take(self.frame.completed)
            .map(|code| self.highlighted_line(code, false))
            .collect();

        match self.frame.current {
            Some((index, chars)) => {
                if let Some(code) = self.lines.get(index) {
                    lines.push(self.highlighted_line(typed_prefix(code, chars), true));
                }
            }
            None if self.frame.completed < self.lines.len() => {
                lines.push(self.highlighted_line("", true));
            }
            None => {}
        }
        lines
    }

    fn loading_bar(&self, width: u16) -> Line<'static> {
        let progress = match self.phase {
            IntroPhase::Loading { progress } => progress,
            IntroPhase::Reveal { .. } | IntroPhase::Done => 1.0,
        };
        let width = width as usize;
        let filled = ((progress * width as f64).round() as usize).min(width);
        Line::from(vec![
            Span::styled("━".repeat(filled), Style::default().fg(self.fade(self.theme.primary))),
            Span::styled(
                "━".repeat(width - filled),
                Style::default().fg(self.theme.grey0),
            ),
        ])
    }
}

impl Widget for IntroWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.theme.bg0));

        let box_width = 48u16.min(area.width.saturating_sub(4)).max(1);
        let box_height = (self.lines.len() as u16 + 3).min(area.height);
        let total_height = box_height + 4;

        let x = area.x + area.width.saturating_sub(box_width) / 2;
        let y = area.y + area.height.saturating_sub(total_height) / 2;
        let column = Rect::new(x, y, box_width, total_height.min(area.height));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(box_height), // Code window
                Constraint::Length(1),          // Spacer
                Constraint::Length(1),          // Bar
                Constraint::Length(1),          // Label
                Constraint::Min(0),
            ])
            .split(column);

        let block = Block::default()
            .title(" ● ● ●  portfolio.js ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.fade(self.theme.grey0)))
            .style(Style::default().bg(self.theme.bg1));
        Paragraph::new(self.code_lines())
            .block(block)
            .render(chunks[0], buf);

        self.loading_bar(chunks[2].width).render(chunks[2], buf);

        let percent = match self.phase {
            IntroPhase::Loading { progress } => (progress * 100.0).round() as u32,
            _ => 100,
        };
        let label = if percent < 100 { "Loading" } else { "Ready" };
        Paragraph::new(Line::from(vec![
            Span::styled(label, Style::default().fg(self.theme.grey1)),
            Span::styled(
                format!("  {:>3}%", percent),
                Style::default()
                    .fg(self.fade(self.theme.primary))
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center)
        .render(chunks[3], buf);
    }
}
