use std::time::Instant;

use folio_core::portfolio::Project;
use folio_core::segment::{ActiveIndexTracker, SegmentMapper};
use folio_core::{AppConfig, Portfolio};
use tracing::{debug, info, warn};

use crate::input::Action;
use crate::intro::Intro;
use crate::page::{PageLayout, PageMetrics, Section};
use crate::scroll::ScrollAnimator;
use crate::theme::Theme;
use crate::widgets::{ContactWidget, SkillsWidget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Help,
}

/// Which project link to open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Github,
    Demo,
}

/// Application state
pub struct App {
    pub config: AppConfig,
    pub portfolio: Portfolio,
    pub theme: Theme,
    pub mode: Mode,
    pub intro: Option<Intro>,
    pub scroller: ScrollAnimator,
    pub tracker: ActiveIndexTracker,
    /// Size of the page area (between nav bar and status bar)
    pub viewport: (u16, u16),
    /// Pending key for multi-key sequences (e.g., 'g' for 'gg')
    pub pending_key: Option<char>,
    pub status_message: Option<String>,
    /// Whether `status_message` reports a failure
    pub status_is_error: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, portfolio: Portfolio, theme: Theme) -> folio_core::Result<Self> {
        let mapper =
            SegmentMapper::with_margin(portfolio.segment_count()?, config.showcase.clamp_margin);
        let intro = config.ui.intro.enabled.then(|| Intro::new(&config.ui.intro));
        let scroller = ScrollAnimator::new(config.ui.scroll.clone());

        Ok(Self {
            config,
            portfolio,
            theme,
            mode: Mode::Normal,
            intro,
            scroller,
            tracker: ActiveIndexTracker::new(mapper),
            viewport: (80, 24),
            pending_key: None,
            status_message: None,
            status_is_error: false,
            should_quit: false,
        })
    }

    #[inline]
    pub fn in_intro(&self) -> bool {
        self.intro.is_some()
    }

    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
    }

    pub fn layout(&self) -> PageLayout {
        let (width, height) = self.viewport;
        PageLayout::new(PageMetrics {
            viewport_height: height,
            project_count: self.portfolio.projects.len(),
            rows_per_project: self.config.showcase.rows_per_project,
            skills_height: SkillsWidget::height(&self.portfolio.skills, width),
            contact_height: ContactWidget::height(&self.portfolio, width),
        })
    }

    #[inline]
    pub fn scroll_row(&self) -> u16 {
        self.scroller.row()
    }

    pub fn current_section(&self) -> Section {
        self.layout().locate(self.scroll_row())
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.tracker.current()
    }

    pub fn active_project(&self) -> &Project {
        // segment_count guarantees at least one project
        let index = self.active_index().min(self.portfolio.projects.len() - 1);
        &self.portfolio.projects[index]
    }

    /// High frame rate is needed while something animates
    pub fn needs_fast_update(&self) -> bool {
        self.intro.is_some() || self.scroller.needs_update()
    }

    /// Advance animations to `now` and feed the showcase tracker
    pub fn tick(&mut self, now: Instant) {
        if let Some(intro) = &self.intro {
            if intro.is_done(now) {
                info!("Intro finished");
                self.intro = None;
            } else {
                return;
            }
        }

        let layout = self.layout();
        let row = self.scroller.update_at(now, layout.max_scroll());
        let progress = layout.showcase_progress(row);
        if let Some(index) = self.tracker.observe(progress) {
            debug!("Showcase now on project {} (progress {:.3})", index, progress);
        }
    }

    pub fn apply(&mut self, action: Action) {
        if action != Action::PendingG {
            self.pending_key = None;
        }

        let layout = self.layout();
        let max = layout.max_scroll();
        let viewport_height = self.viewport.1;

        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollDown => self.scroller.step_down(max),
            Action::ScrollUp => self.scroller.step_up(max),
            Action::ScrollHalfPageDown => self.scroller.half_page_down(viewport_height, max),
            Action::ScrollHalfPageUp => self.scroller.half_page_up(viewport_height, max),
            Action::ScrollPageDown => self.scroller.page_down(viewport_height, max),
            Action::ScrollPageUp => self.scroller.page_up(viewport_height, max),
            Action::JumpToTop => self.scroller.scroll_to(0, max),
            Action::JumpToBottom => self.scroller.scroll_to(max, max),
            Action::PendingG => self.pending_key = Some('g'),
            Action::GotoSection(section) => {
                self.scroller.scroll_to(layout.jump_to(section), max);
            }
            Action::NextProject | Action::PrevProject => self.step_project(action, &layout),
            Action::OpenGithub => self.open_link(LinkKind::Github),
            Action::OpenDemo => self.open_link(LinkKind::Demo),
            Action::ToggleHelp => {
                self.mode = match self.mode {
                    Mode::Help => Mode::Normal,
                    Mode::Normal => Mode::Help,
                };
            }
            Action::SkipIntro => {
                if let Some(intro) = &mut self.intro {
                    intro.skip();
                }
            }
            Action::ExitMode => {
                self.mode = Mode::Normal;
                self.status_message = None;
            }
            Action::None => {}
        }
    }

    /// Mouse wheel scroll; positive rows move down the page
    pub fn wheel(&mut self, rows: i32) {
        if self.in_intro() {
            self.apply(Action::SkipIntro);
            return;
        }
        if self.mode == Mode::Help {
            return;
        }
        let max = self.layout().max_scroll();
        self.scroller.scroll_by(rows, max);
    }

    /// Move the showcase one project forward or back
    ///
    /// Steps from the row the scroller is heading to, so presses made while
    /// an animation is still running each advance by one project.
    fn step_project(&mut self, action: Action, layout: &PageLayout) {
        let count = self.portfolio.projects.len();
        let progress = layout.showcase_progress(self.scroller.target());
        let current = self.tracker.mapper().active_index(progress);

        let target = match action {
            // Entering the showcase from above lands on the first project
            Action::NextProject if progress < 0.0 => 0,
            Action::NextProject if progress >= 1.0 => return,
            Action::NextProject => (current + 1).min(count - 1),
            // Coming back from below lands on the last project
            _ if progress >= 1.0 => count - 1,
            _ if progress < 0.0 => return,
            _ => current.saturating_sub(1),
        };

        let row = layout.project_scroll(target, count);
        self.scroller.scroll_to(row, layout.max_scroll());
    }

    fn set_status(&mut self, message: String, is_error: bool) {
        self.status_message = Some(message);
        self.status_is_error = is_error;
    }

    /// Open a link of the active project in the browser
    pub fn open_link(&mut self, kind: LinkKind) {
        let project = self.active_project();
        let title = project.title.clone();
        let (label, url) = match kind {
            LinkKind::Github => ("GitHub", project.github.clone()),
            LinkKind::Demo => ("demo", project.demo.clone()),
        };

        let Some(url) = url else {
            self.set_status(format!("{} has no {} link", title, label), true);
            return;
        };

        match open::that(&url) {
            Ok(()) => {
                info!("Opened {}", url);
                self.set_status(format!("Opened {}", url), false);
            }
            Err(e) => {
                warn!("Failed to open {}: {}", url, e);
                self.set_status(format!("Failed to open {}: {}", url, e), true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::portfolio::sample_portfolio;
    use std::time::Duration;

    fn app() -> App {
        let mut config = AppConfig::default();
        config.ui.intro.enabled = false;
        config.ui.scroll.smooth_enabled = false;
        let mut app = App::new(config, sample_portfolio(), Theme::default()).unwrap();
        app.set_viewport(80, 20);
        app
    }

    #[test]
    fn test_empty_portfolio_is_rejected() {
        let mut portfolio = sample_portfolio();
        portfolio.projects.clear();
        assert!(App::new(AppConfig::default(), portfolio, Theme::default()).is_err());
    }

    #[test]
    fn test_goto_projects_pins_showcase() {
        let mut app = app();
        app.apply(Action::GotoSection(Section::Projects));
        app.tick(Instant::now());
        assert_eq!(app.current_section(), Section::Projects);
        assert_eq!(app.active_index(), 0);
        assert_eq!(app.tracker.fill(), 0.0);
    }

    #[test]
    fn test_scrolling_through_showcase_advances_projects() {
        let mut app = app();
        let layout = app.layout();
        let start = layout.jump_to(Section::Projects);

        let mut seen = Vec::new();
        app.scroller.jump_to(start);
        for _ in 0..(3 * 12) {
            app.tick(Instant::now());
            if seen.last() != Some(&app.active_index()) {
                seen.push(app.active_index());
            }
            app.apply(Action::ScrollDown);
        }
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn test_next_and_prev_project() {
        let mut app = app();
        app.apply(Action::NextProject);
        app.tick(Instant::now());
        assert_eq!(app.active_index(), 0);
        assert_eq!(app.current_section(), Section::Projects);

        app.apply(Action::NextProject);
        app.tick(Instant::now());
        assert_eq!(app.active_index(), 1);

        app.apply(Action::NextProject);
        app.apply(Action::NextProject);
        app.tick(Instant::now());
        assert_eq!(app.active_index(), 2);

        app.apply(Action::PrevProject);
        app.tick(Instant::now());
        assert_eq!(app.active_index(), 1);
    }

    #[test]
    fn test_prev_project_from_below_lands_on_last() {
        let mut app = app();
        app.apply(Action::GotoSection(Section::Skills));
        app.tick(Instant::now());
        assert_eq!(app.current_section(), Section::Skills);
        assert_eq!(app.active_index(), 2);

        app.apply(Action::PrevProject);
        app.tick(Instant::now());
        assert_eq!(app.current_section(), Section::Projects);
        assert_eq!(app.active_index(), 2);

        app.apply(Action::PrevProject);
        app.tick(Instant::now());
        assert_eq!(app.active_index(), 1);
    }

    #[test]
    fn test_next_project_below_showcase_stays() {
        let mut app = app();
        app.apply(Action::GotoSection(Section::Contact));
        app.tick(Instant::now());
        let row = app.scroll_row();

        app.apply(Action::NextProject);
        app.tick(Instant::now());
        assert_eq!(app.scroll_row(), row);
    }

    #[test]
    fn test_rapid_next_presses_while_animating() {
        let mut config = AppConfig::default();
        config.ui.intro.enabled = false;
        config.ui.scroll.smooth_enabled = true;
        config.ui.scroll.animation_duration_ms = 150;
        let mut app = App::new(config, sample_portfolio(), Theme::default()).unwrap();
        app.set_viewport(80, 20);

        let layout = app.layout();
        app.scroller.jump_to(layout.project_scroll(0, 3));
        app.tick(Instant::now());
        assert_eq!(app.active_index(), 0);

        // Both presses land before any frame advances the animation
        app.apply(Action::NextProject);
        app.apply(Action::NextProject);
        app.tick(Instant::now() + Duration::from_secs(5));
        assert_eq!(app.active_index(), 2);

        app.apply(Action::PrevProject);
        app.apply(Action::PrevProject);
        app.tick(Instant::now() + Duration::from_secs(10));
        assert_eq!(app.active_index(), 0);
    }

    #[test]
    fn test_missing_demo_link_reports() {
        let mut app = app();
        let layout = app.layout();
        app.scroller.jump_to(layout.project_scroll(2, 3));
        app.tick(Instant::now());
        assert_eq!(app.active_project().title, "BugToPro AI");

        app.open_link(LinkKind::Demo);
        assert_eq!(
            app.status_message.as_deref(),
            Some("BugToPro AI has no demo link")
        );
        assert!(app.status_is_error);
    }

    #[test]
    fn test_intro_blocks_page_until_done() {
        let mut config = AppConfig::default();
        config.ui.intro.loading_ms = 10;
        config.ui.intro.reveal_ms = 10;
        let mut app = App::new(config, sample_portfolio(), Theme::default()).unwrap();
        assert!(app.in_intro());
        assert!(app.needs_fast_update());

        app.tick(Instant::now() + Duration::from_millis(50));
        assert!(!app.in_intro());
    }

    #[test]
    fn test_wheel_scrolls_and_clamps() {
        let mut app = app();
        app.wheel(3);
        assert_eq!(app.scroll_row(), 3);
        app.wheel(-10);
        assert_eq!(app.scroll_row(), 0);
        app.wheel(10_000);
        assert_eq!(app.scroll_row(), app.layout().max_scroll());
    }

    #[test]
    fn test_help_toggle_and_pending_key() {
        let mut app = app();
        app.apply(Action::PendingG);
        assert_eq!(app.pending_key, Some('g'));
        app.apply(Action::ToggleHelp);
        assert_eq!(app.pending_key, None);
        assert_eq!(app.mode, Mode::Help);
        app.apply(Action::ExitMode);
        assert_eq!(app.mode, Mode::Normal);
    }
}
