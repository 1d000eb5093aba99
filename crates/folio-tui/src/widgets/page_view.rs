//! Scrolling page composition
//!
//! Each visible section is drawn into its own offscreen buffer at full
//! height, then the visible rows are copied into the frame. The showcase
//! buffer is always one viewport tall, which is what keeps it pinned while
//! the projects section scrolls underneath.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget, Frame};

use super::{ContactWidget, HeroWidget, ShowcaseWidget, SkillsWidget};
use crate::app::App;
use crate::page::{Section, Slice};

pub struct PageView;

impl PageView {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        Self::render_to(frame.buffer_mut(), area, app);
    }

    pub fn render_to(buf: &mut Buffer, area: Rect, app: &App) {
        let layout = app.layout();
        let checkpoints: Vec<f64> = app.tracker.mapper().checkpoints().collect();

        for slice in layout.visible_slices(app.scroll_row()) {
            let section_area = Rect::new(0, 0, area.width, slice.render_height);
            let mut section_buf = Buffer::empty(section_area);

            match slice.section {
                Section::Hero => HeroWidget {
                    profile: &app.portfolio.profile,
                    theme: &app.theme,
                }
                .render(section_area, &mut section_buf),
                Section::Projects => ShowcaseWidget {
                    projects: &app.portfolio.projects,
                    active: app.active_index(),
                    fill: app.tracker.fill(),
                    checkpoints: &checkpoints,
                    theme: &app.theme,
                }
                .render(section_area, &mut section_buf),
                Section::Skills => SkillsWidget {
                    skills: &app.portfolio.skills,
                    theme: &app.theme,
                }
                .render(section_area, &mut section_buf),
                Section::Contact => ContactWidget {
                    portfolio: &app.portfolio,
                    theme: &app.theme,
                }
                .render(section_area, &mut section_buf),
            }

            blit(&section_buf, slice, buf, area);
        }
    }
}

/// Copy the rows of `src` selected by `slice` into `dst`
fn blit(src: &Buffer, slice: Slice, dst: &mut Buffer, area: Rect) {
    for dy in 0..slice.rows {
        let src_y = slice.offset + dy;
        let dst_y = area.y + slice.screen_y + dy;
        if src_y >= src.area.height || dst_y >= area.bottom() {
            break;
        }
        for x in 0..area.width.min(src.area.width) {
            dst[(area.x + x, dst_y)] = src[(x, src_y)].clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{portfolio::sample_portfolio, AppConfig};
    use std::time::Instant;

    use crate::theme::Theme;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    fn app() -> App {
        let mut config = AppConfig::default();
        config.ui.intro.enabled = false;
        config.ui.scroll.smooth_enabled = false;
        let mut app = App::new(config, sample_portfolio(), Theme::default()).unwrap();
        app.set_viewport(80, 20);
        app
    }

    #[test]
    fn test_top_of_page_shows_hero() {
        let app = app();
        let area = Rect::new(0, 1, 80, 20);
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 22));
        PageView::render_to(&mut buf, area, &app);

        let text: String = (1..21).map(|y| row_text(&buf, y)).collect();
        assert!(text.contains("Yadnesh Ranshevare"));
        // Rows outside the page area are untouched
        assert_eq!(row_text(&buf, 0).trim(), "");
    }

    #[test]
    fn test_showcase_stays_pinned() {
        let mut app = app();
        let layout = app.layout();
        let area = Rect::new(0, 0, 80, 20);

        let mut headers = Vec::new();
        for index in 0..3 {
            app.scroller.jump_to(layout.project_scroll(index, 3));
            app.tick(Instant::now());
            let mut buf = Buffer::empty(area);
            PageView::render_to(&mut buf, area, &app);
            headers.push(row_text(&buf, 1));

            let text: String = (0..20).map(|y| row_text(&buf, y)).collect();
            assert!(text.contains(&app.portfolio.projects[index].title));
        }
        assert!(headers.iter().all(|h| h.contains("Featured Projects")));
    }
}
