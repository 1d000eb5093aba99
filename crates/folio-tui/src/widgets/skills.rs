use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use folio_core::portfolio::SkillCategory;

use super::text::flow;
use crate::theme::Theme;

const MARGIN: u16 = 4;
const TAG_PADDING: usize = 2;
const TAG_GAP: usize = 1;

/// One rendered row; shared by layout and drawing so both agree on height
enum Row<'a> {
    Heading,
    Subheading,
    Blank,
    Category(&'a str),
    Tags(Vec<&'a str>),
}

fn rows(skills: &[SkillCategory], width: u16) -> Vec<Row<'_>> {
    let width = width.saturating_sub(2 * MARGIN).max(1) as usize;
    let mut rows = vec![Row::Blank, Row::Heading, Row::Subheading, Row::Blank];

    for category in skills {
        rows.push(Row::Category(category.title.as_str()));
        rows.extend(
            flow(&category.skills, width, TAG_PADDING, TAG_GAP)
                .into_iter()
                .map(Row::Tags),
        );
        rows.push(Row::Blank);
    }
    rows
}

/// Skill categories as rows of tags
pub struct SkillsWidget<'a> {
    pub skills: &'a [SkillCategory],
    pub theme: &'a Theme,
}

impl<'a> SkillsWidget<'a> {
    /// Rows needed to show every category at `width`
    pub fn height(skills: &[SkillCategory], width: u16) -> u16 {
        rows(skills, width).len().min(u16::MAX as usize) as u16
    }

    fn line(&self, row: Row<'a>) -> Line<'a> {
        let theme = self.theme;
        match row {
            Row::Heading => Line::from(vec![
                Span::styled(
                    "Skills & ",
                    Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "Technologies",
                    Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
                ),
            ]),
            Row::Subheading => Line::from(Span::styled(
                "The tools and technologies I work with",
                Style::default().fg(theme.grey2),
            )),
            Row::Blank => Line::default(),
            Row::Category(title) => Line::from(Span::styled(
                title,
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            )),
            Row::Tags(tags) => {
                let mut spans = Vec::with_capacity(tags.len() * 2);
                for (i, tag) in tags.into_iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::raw(" ".repeat(TAG_GAP)));
                    }
                    spans.push(Span::styled(
                        format!(" {} ", tag),
                        Style::default().fg(theme.fg1).bg(theme.bg2),
                    ));
                }
                Line::from(spans)
            }
        }
    }
}

impl Widget for SkillsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.theme.bg1));
        let lines: Vec<Line> = rows(self.skills, area.width)
            .into_iter()
            .map(|row| self.line(row))
            .collect();

        let inner = Rect::new(
            area.x + MARGIN.min(area.width),
            area.y,
            area.width.saturating_sub(2 * MARGIN),
            area.height,
        );
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::portfolio::sample_portfolio;

    #[test]
    fn test_height_grows_when_narrow() {
        let skills = sample_portfolio().skills;
        let wide = SkillsWidget::height(&skills, 200);
        let narrow = SkillsWidget::height(&skills, 30);
        // 4 header rows, then title + one tag row + blank per category
        assert_eq!(wide, 4 + 6 * 3);
        assert!(narrow > wide);
    }

    #[test]
    fn test_height_without_skills() {
        assert_eq!(SkillsWidget::height(&[], 80), 4);
    }

    #[test]
    fn test_renders_categories() {
        let skills = sample_portfolio().skills;
        let theme = Theme::default();
        let height = SkillsWidget::height(&skills, 80);
        let area = Rect::new(0, 0, 80, height);
        let mut buf = Buffer::empty(area);
        SkillsWidget {
            skills: &skills,
            theme: &theme,
        }
        .render(area, &mut buf);

        let last_rows: String = (height - 4..height)
            .flat_map(|y| (0..80).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(last_rows.contains("Domain"));
        assert!(last_rows.contains("System Design"));
    }
}
