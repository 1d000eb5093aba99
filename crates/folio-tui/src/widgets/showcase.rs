//! Pinned project showcase with a checkpoint progress track
//!
//! The track is drawn from the segment mapper's output: the active index
//! picks the emphasized project and checkpoint, the fill fraction decides how
//! much of the track is lit between checkpoints.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use folio_core::portfolio::Project;

use super::text::{flow, wrap};
use crate::theme::Theme;

/// Below this width the track is drawn horizontally above the project
const NARROW_WIDTH: u16 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackCell {
    Checkpoint { active: bool, reached: bool },
    Filled,
    Empty,
}

/// Lay out a track of `len` cells
///
/// `checkpoints` are track positions in `[0, 1]`; a cell is filled when its
/// own position is at or below `fill`.
pub fn track_cells(len: usize, fill: f64, checkpoints: &[f64], active: usize) -> Vec<TrackCell> {
    if len == 0 {
        return Vec::new();
    }
    let last = (len - 1).max(1) as f64;
    let reached = |pos: f64| pos <= fill + 1e-9;

    let mut cells: Vec<TrackCell> = (0..len)
        .map(|i| {
            if reached(i as f64 / last) {
                TrackCell::Filled
            } else {
                TrackCell::Empty
            }
        })
        .collect();

    for (k, &pos) in checkpoints.iter().enumerate() {
        let cell = ((pos * last).round() as usize).min(len - 1);
        cells[cell] = TrackCell::Checkpoint {
            active: k == active,
            reached: reached(pos),
        };
    }
    cells
}

pub struct ShowcaseWidget<'a> {
    pub projects: &'a [Project],
    pub active: usize,
    pub fill: f64,
    pub checkpoints: &'a [f64],
    pub theme: &'a Theme,
}

impl<'a> ShowcaseWidget<'a> {
    fn header(&self) -> Vec<Line<'a>> {
        vec![
            Line::from(vec![
                Span::styled(
                    "Featured ",
                    Style::default().fg(self.theme.fg0).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "Projects",
                    Style::default().fg(self.theme.primary).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                "A selection of things I've built, from AI experiments to production systems.",
                Style::default().fg(self.theme.grey2),
            )),
        ]
    }

    fn cell_span(&self, cell: TrackCell, vertical: bool) -> Span<'static> {
        let theme = self.theme;
        match cell {
            TrackCell::Checkpoint { active: true, .. } => Span::styled(
                "◉",
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
            TrackCell::Checkpoint { reached: true, .. } => {
                Span::styled("●", Style::default().fg(theme.primary))
            }
            TrackCell::Checkpoint { .. } => Span::styled("○", Style::default().fg(theme.grey1)),
            TrackCell::Filled => Span::styled(
                if vertical { "┃" } else { "━" },
                Style::default().fg(theme.primary),
            ),
            TrackCell::Empty => Span::styled(
                if vertical { "│" } else { "─" },
                Style::default().fg(theme.grey0),
            ),
        }
    }

    fn render_vertical_track(&self, area: Rect, buf: &mut Buffer) {
        let cells = track_cells(area.height as usize, self.fill, self.checkpoints, self.active);
        let lines: Vec<Line> = cells
            .into_iter()
            .map(|cell| Line::from(self.cell_span(cell, true)).centered())
            .collect();
        Paragraph::new(lines).render(area, buf);
    }

    fn render_horizontal_track(&self, area: Rect, buf: &mut Buffer) {
        let cells = track_cells(area.width as usize, self.fill, self.checkpoints, self.active);
        let spans: Vec<Span> = cells
            .into_iter()
            .map(|cell| self.cell_span(cell, false))
            .collect();
        Line::from(spans).render(area, buf);
    }

    fn project_lines(&self, width: u16) -> Vec<Line<'a>> {
        let theme = self.theme;
        let Some(project) = self.projects.get(self.active) else {
            return Vec::new();
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    Project::label(self.active).to_uppercase(),
                    Style::default().fg(theme.primary),
                ),
                Span::styled(
                    format!("  {:02} / {:02}", self.active + 1, self.projects.len()),
                    Style::default().fg(theme.grey1),
                ),
            ]),
            Line::from(Span::styled(
                project.title.clone(),
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];

        for row in flow(&project.tech, width as usize, 2, 1) {
            let mut spans = Vec::new();
            for (i, tag) in row.into_iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(
                    format!(" {} ", tag),
                    Style::default().fg(theme.fg1).bg(theme.bg2),
                ));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::default());
        lines.extend(
            wrap(&project.description, width as usize)
                .into_iter()
                .map(|l| Line::from(Span::styled(l, Style::default().fg(theme.grey2)))),
        );

        lines.push(Line::default());
        let mut links = Vec::new();
        if project.github.is_some() {
            links.push(Span::styled(" o ", Style::default().fg(theme.bg0).bg(theme.primary)));
            links.push(Span::styled(" View GitHub  ", Style::default().fg(theme.fg0)));
        }
        if project.demo.is_some() {
            links.push(Span::styled(" O ", Style::default().fg(theme.fg0).bg(theme.bg2)));
            links.push(Span::styled(" View Project", Style::default().fg(theme.fg0)));
        }
        if !links.is_empty() {
            lines.push(Line::from(links));
        }
        lines
    }
}

impl Widget for ShowcaseWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.theme.bg0));
        let inner = Rect::new(
            area.x + 2.min(area.width),
            area.y + 1.min(area.height),
            area.width.saturating_sub(4),
            area.height.saturating_sub(2),
        );

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Length(1), // Spacer
                Constraint::Min(0),    // Body
            ])
            .split(inner);
        Paragraph::new(self.header()).render(rows[0], buf);

        if inner.width < NARROW_WIDTH {
            let body = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Track
                    Constraint::Length(1), // Spacer
                    Constraint::Min(0),    // Project
                ])
                .split(rows[2]);
            self.render_horizontal_track(body[0], buf);
            Paragraph::new(self.project_lines(body[2].width)).render(body[2], buf);
        } else {
            let body = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(3), // Track
                    Constraint::Length(3), // Gutter
                    Constraint::Min(0),    // Project
                ])
                .split(rows[2]);
            self.render_vertical_track(body[0], buf);
            let text_width = body[2].width.min(72);
            Paragraph::new(self.project_lines(text_width)).render(body[2], buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::portfolio::sample_portfolio;

    #[test]
    fn test_track_at_start() {
        let cells = track_cells(5, 0.0, &[0.0, 0.5, 1.0], 0);
        assert_eq!(
            cells,
            vec![
                TrackCell::Checkpoint { active: true, reached: true },
                TrackCell::Empty,
                TrackCell::Checkpoint { active: false, reached: false },
                TrackCell::Empty,
                TrackCell::Checkpoint { active: false, reached: false },
            ]
        );
    }

    #[test]
    fn test_track_fills_between_checkpoints() {
        let cells = track_cells(5, 0.6, &[0.0, 0.5, 1.0], 1);
        assert_eq!(cells[1], TrackCell::Filled);
        assert_eq!(cells[2], TrackCell::Checkpoint { active: true, reached: true });
        assert_eq!(cells[3], TrackCell::Empty);
    }

    #[test]
    fn test_track_full() {
        let cells = track_cells(4, 1.0, &[0.0, 1.0], 1);
        assert!(cells.iter().all(|c| !matches!(c, TrackCell::Empty)));
    }

    #[test]
    fn test_track_degenerate_sizes() {
        assert!(track_cells(0, 0.5, &[0.0], 0).is_empty());
        let single = track_cells(1, 1.0, &[1.0], 0);
        assert_eq!(single, vec![TrackCell::Checkpoint { active: true, reached: true }]);
    }

    #[test]
    fn test_renders_active_project() {
        let portfolio = sample_portfolio();
        let theme = Theme::default();
        let checkpoints = [0.0, 0.5, 1.0];
        for (width, height) in [(100, 24), (40, 30)] {
            let widget = ShowcaseWidget {
                projects: &portfolio.projects,
                active: 1,
                fill: 0.6,
                checkpoints: &checkpoints,
                theme: &theme,
            };
            let area = Rect::new(0, 0, width, height);
            let mut buf = Buffer::empty(area);
            widget.render(area, &mut buf);

            let text: String = (0..height)
                .flat_map(|y| (0..width).map(move |x| (x, y)))
                .map(|(x, y)| buf[(x, y)].symbol().to_string())
                .collect();
            assert!(text.contains("V-Room"), "width {}", width);
            assert!(text.contains("PROJECT 02"));
            assert!(text.contains("◉"));
        }
    }
}
