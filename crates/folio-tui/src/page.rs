//! Vertical page model
//!
//! The page is a column of sections measured in terminal rows. The projects
//! section is taller than the viewport: while the user scrolls through its
//! extra rows the showcase panel stays pinned to the top, and the scroll
//! position inside those rows becomes the showcase progress.

use tracing::warn;

/// Page sections in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    fn ordinal(self) -> usize {
        match self {
            Section::Hero => 0,
            Section::Projects => 1,
            Section::Skills => 2,
            Section::Contact => 3,
        }
    }
}

/// A section's extent in page rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub section: Section,
    pub start: u32,
    pub height: u32,
}

impl SectionSpan {
    #[inline]
    pub fn end(&self) -> u32 {
        self.start.saturating_add(self.height)
    }
}

/// Part of a section visible in the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub section: Section,
    /// First viewport row covered
    pub screen_y: u16,
    /// First row of the section's own rendering that is shown
    pub offset: u16,
    /// Number of rows shown
    pub rows: u16,
    /// Full height the section renders at
    pub render_height: u16,
}

/// Heights that depend on content and terminal width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMetrics {
    pub viewport_height: u16,
    pub project_count: usize,
    pub rows_per_project: u16,
    pub skills_height: u16,
    pub contact_height: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    spans: [SectionSpan; 4],
    viewport_height: u32,
    /// Rows of scrolling during which the showcase stays pinned
    pin_rows: u32,
}

impl PageLayout {
    pub fn new(metrics: PageMetrics) -> Self {
        let viewport = metrics.viewport_height.max(1) as u32;
        let pin_rows = u32::try_from(metrics.project_count.max(1))
            .unwrap_or(u32::MAX)
            .saturating_mul(metrics.rows_per_project.max(1) as u32);

        let heights = [
            viewport,
            viewport.saturating_add(pin_rows),
            metrics.skills_height.max(1) as u32,
            metrics.contact_height.max(1) as u32,
        ];

        let mut start = 0;
        let spans = Section::ALL.map(|section| {
            let height = heights[section.ordinal()];
            let span = SectionSpan {
                section,
                start,
                height,
            };
            start = start.saturating_add(height);
            span
        });

        if start.saturating_sub(viewport) > u16::MAX as u32 {
            warn!(
                "Page is {} rows tall, scrolling is limited to {} rows",
                start,
                u16::MAX
            );
        }

        Self {
            spans,
            viewport_height: viewport,
            pin_rows,
        }
    }

    pub fn span(&self, section: Section) -> SectionSpan {
        self.spans[section.ordinal()]
    }

    pub fn total_height(&self) -> u32 {
        self.spans[3].end()
    }

    /// Largest valid top row
    pub fn max_scroll(&self) -> u16 {
        clamp_u16(self.total_height().saturating_sub(self.viewport_height))
    }

    /// Top row that brings `section` into view
    pub fn jump_to(&self, section: Section) -> u16 {
        clamp_u16(self.span(section).start).min(self.max_scroll())
    }

    /// Section occupying the top viewport row
    pub fn locate(&self, scroll: u16) -> Section {
        let row = scroll as u32;
        self.spans
            .iter()
            .find(|span| row < span.end())
            .map(|span| span.section)
            .unwrap_or(Section::Contact)
    }

    /// Showcase progress: 0 when the projects section reaches the top,
    /// 1 when its bottom reaches the bottom of the viewport
    ///
    /// Values outside `[0, 1]` are returned as-is; the segment mapper clamps.
    pub fn showcase_progress(&self, scroll: u16) -> f64 {
        let start = self.span(Section::Projects).start as f64;
        (scroll as f64 - start) / self.pin_rows as f64
    }

    /// Top row at which the showcase shows project `index`
    pub fn project_scroll(&self, index: usize, project_count: usize) -> u16 {
        let count = project_count.max(1) as u128;
        let index = (index as u128).min(count - 1);
        let start = self.span(Section::Projects).start as u128;
        // Land in the middle of the project's segment so rounding cannot
        // drop onto the previous one.
        let row = start + (self.pin_rows as u128 * (2 * index + 1)) / (2 * count);
        (row.min(u16::MAX as u128) as u16).min(self.max_scroll())
    }

    /// Visible parts of each section for a top row of `scroll`
    pub fn visible_slices(&self, scroll: u16) -> Vec<Slice> {
        let top = scroll as u32;
        let bottom = top.saturating_add(self.viewport_height);
        let mut slices = Vec::new();

        for span in &self.spans {
            let (extent_start, extent_height) = match span.section {
                Section::Projects => {
                    // Pinned panel, one viewport tall
                    let pinned = top.saturating_sub(span.start).min(self.pin_rows);
                    (span.start.saturating_add(pinned), self.viewport_height)
                }
                _ => (span.start, span.height),
            };
            let extent_end = extent_start.saturating_add(extent_height);

            let lo = extent_start.max(top);
            let hi = extent_end.min(bottom);
            if lo >= hi {
                continue;
            }

            slices.push(Slice {
                section: span.section,
                screen_y: clamp_u16(lo - top),
                offset: clamp_u16(lo - extent_start),
                rows: clamp_u16(hi - lo),
                render_height: clamp_u16(extent_height),
            });
        }

        slices
    }
}

#[inline]
fn clamp_u16(v: u32) -> u16 {
    v.min(u16::MAX as u32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PageLayout {
        PageLayout::new(PageMetrics {
            viewport_height: 20,
            project_count: 3,
            rows_per_project: 12,
            skills_height: 15,
            contact_height: 8,
        })
    }

    #[test]
    fn test_section_spans() {
        let page = layout();
        assert_eq!(page.span(Section::Hero).height, 20);
        assert_eq!(page.span(Section::Projects).start, 20);
        assert_eq!(page.span(Section::Projects).height, 56);
        assert_eq!(page.span(Section::Skills).start, 76);
        assert_eq!(page.span(Section::Contact).start, 91);
        assert_eq!(page.total_height(), 99);
        assert_eq!(page.max_scroll(), 79);
    }

    #[test]
    fn test_top_shows_hero_only() {
        let slices = layout().visible_slices(0);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].section, Section::Hero);
        assert_eq!(slices[0].rows, 20);
    }

    #[test]
    fn test_hero_scrolls_into_showcase() {
        let slices = layout().visible_slices(5);
        assert_eq!(slices.len(), 2);
        assert_eq!(
            slices[0],
            Slice {
                section: Section::Hero,
                screen_y: 0,
                offset: 5,
                rows: 15,
                render_height: 20
            }
        );
        assert_eq!(
            slices[1],
            Slice {
                section: Section::Projects,
                screen_y: 15,
                offset: 0,
                rows: 5,
                render_height: 20
            }
        );
    }

    #[test]
    fn test_showcase_is_pinned() {
        let page = layout();
        for scroll in [20, 31, 44, 56] {
            let slices = page.visible_slices(scroll);
            assert_eq!(slices.len(), 1, "scroll={}", scroll);
            assert_eq!(slices[0].section, Section::Projects);
            assert_eq!(slices[0].offset, 0);
            assert_eq!(slices[0].rows, 20);
        }
    }

    #[test]
    fn test_showcase_unpins_at_end() {
        let slices = layout().visible_slices(60);
        assert_eq!(slices[0].section, Section::Projects);
        assert_eq!(slices[0].offset, 4);
        assert_eq!(slices[0].rows, 16);
        assert_eq!(slices[1].section, Section::Skills);
        assert_eq!(slices[1].screen_y, 16);
    }

    #[test]
    fn test_bottom_shows_skills_and_contact() {
        let page = layout();
        let slices = page.visible_slices(page.max_scroll());
        let sections: Vec<Section> = slices.iter().map(|s| s.section).collect();
        assert_eq!(sections, vec![Section::Skills, Section::Contact]);
        let rows: u16 = slices.iter().map(|s| s.rows).sum();
        assert_eq!(rows, 20);
    }

    #[test]
    fn test_showcase_progress() {
        let page = layout();
        assert!(page.showcase_progress(0) < 0.0);
        assert_eq!(page.showcase_progress(20), 0.0);
        assert!((page.showcase_progress(38) - 0.5).abs() < 1e-9);
        assert_eq!(page.showcase_progress(56), 1.0);
        assert!(page.showcase_progress(79) > 1.0);
    }

    #[test]
    fn test_project_scroll_lands_in_segment() {
        let page = layout();
        for index in 0..3 {
            let p = page.showcase_progress(page.project_scroll(index, 3));
            assert_eq!(folio_core::segment::active_index(p, 3), index);
        }
    }

    #[test]
    fn test_locate_and_jump() {
        let page = layout();
        assert_eq!(page.locate(0), Section::Hero);
        assert_eq!(page.locate(20), Section::Projects);
        assert_eq!(page.locate(79), Section::Skills);
        assert_eq!(page.jump_to(Section::Projects), 20);
        // Contact starts past max_scroll, so jumping clamps
        assert_eq!(page.jump_to(Section::Contact), 79);
    }

    #[test]
    fn test_huge_showcase_saturates() {
        let layout = PageLayout::new(PageMetrics {
            viewport_height: 20,
            project_count: usize::MAX,
            rows_per_project: u16::MAX,
            skills_height: 15,
            contact_height: 8,
        });
        assert_eq!(layout.total_height(), u32::MAX);
        assert_eq!(layout.max_scroll(), u16::MAX);
        assert_eq!(layout.locate(u16::MAX), Section::Projects);
        assert_eq!(layout.project_scroll(0, usize::MAX), 20);

        let slices = layout.visible_slices(u16::MAX);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].section, Section::Projects);
        assert_eq!(slices[0].rows, 20);
    }

    #[test]
    fn test_many_projects_clamp_scroll() {
        let layout = PageLayout::new(PageMetrics {
            viewport_height: 20,
            project_count: 100_000,
            rows_per_project: 12,
            skills_height: 15,
            contact_height: 8,
        });
        assert_eq!(layout.max_scroll(), u16::MAX);
        assert!(layout.showcase_progress(u16::MAX) < 1.0);
        assert_eq!(layout.project_scroll(99_999, 100_000), u16::MAX);
    }

}
