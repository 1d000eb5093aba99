//! Page scroll controller

use std::time::{Duration, Instant};

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{lerp_rows, offset_rows, progress};

/// One in-flight scroll between two rows
#[derive(Debug, Clone)]
struct Tween {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

impl Tween {
    fn row_at(&self, now: Instant) -> u16 {
        let elapsed = now.saturating_duration_since(self.start);
        let t = self.easing.apply(progress(elapsed, self.duration));
        lerp_rows(self.from, self.to, t)
    }

    fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }
}

/// Animates the page's top row
///
/// Key presses call `scroll_by`/`scroll_to`; the render loop calls `update`
/// once per frame and reads back the row to draw from. Deltas arriving
/// between two frames are batched into a single animation.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    tween: Option<Tween>,
    config: ScrollConfig,
    row: u16,
    pending_delta: i32,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            tween: None,
            config,
            row: 0,
            pending_delta: 0,
        }
    }

    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Whether the next frame has work to do (drives the fast tick rate)
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.tween.is_some() || self.pending_delta != 0
    }

    /// Row currently on screen
    #[inline]
    pub fn row(&self) -> u16 {
        self.row
    }

    /// Row the page is heading towards
    pub fn target(&self) -> u16 {
        self.tween.as_ref().map(|t| t.to).unwrap_or(self.row)
    }

    /// Move to `row` immediately, dropping any animation
    pub fn jump_to(&mut self, row: u16) {
        self.tween = None;
        self.pending_delta = 0;
        self.row = row;
    }

    /// Animate to an absolute row
    pub fn scroll_to(&mut self, target: u16, max_row: u16) {
        let target = target.min(max_row);
        self.pending_delta = 0;

        if !self.config.is_smooth() {
            self.jump_to(target);
            return;
        }

        if self.row == target {
            self.tween = None;
            return;
        }

        self.tween = Some(self.tween_to(target, Instant::now()));
    }

    /// Scroll by a signed number of rows (positive = down)
    pub fn scroll_by(&mut self, delta: i32, max_row: u16) {
        if !self.config.is_smooth() {
            let row = offset_rows(self.row, delta, max_row);
            self.jump_to(row);
            return;
        }

        self.pending_delta = self.pending_delta.saturating_add(delta);
    }

    pub fn step_down(&mut self, max_row: u16) {
        self.scroll_by(self.config.step_rows(), max_row);
    }

    pub fn step_up(&mut self, max_row: u16) {
        self.scroll_by(-self.config.step_rows(), max_row);
    }

    pub fn half_page_down(&mut self, viewport_height: u16, max_row: u16) {
        self.scroll_by(half_page(viewport_height), max_row);
    }

    pub fn half_page_up(&mut self, viewport_height: u16, max_row: u16) {
        self.scroll_by(-half_page(viewport_height), max_row);
    }

    pub fn page_down(&mut self, viewport_height: u16, max_row: u16) {
        self.scroll_by(viewport_height.max(1) as i32, max_row);
    }

    pub fn page_up(&mut self, viewport_height: u16, max_row: u16) {
        self.scroll_by(-(viewport_height.max(1) as i32), max_row);
    }

    /// Advance to the current instant and return the row to draw
    pub fn update(&mut self, max_row: u16) -> u16 {
        self.update_at(Instant::now(), max_row)
    }

    /// Advance to `now` and return the row to draw
    pub fn update_at(&mut self, now: Instant, max_row: u16) -> u16 {
        if self.pending_delta != 0 {
            let target = offset_rows(self.target(), self.pending_delta, max_row);
            self.pending_delta = 0;

            self.tween = if target != self.row {
                Some(self.tween_to(target, now))
            } else {
                None
            };
        }

        if let Some(tween) = &self.tween {
            if tween.is_done(now) {
                self.row = tween.to;
                self.tween = None;
            } else {
                self.row = tween.row_at(now);
            }
        }

        // The page may have shrunk (terminal resize) since the tween started
        self.row = self.row.min(max_row);
        self.row
    }

    pub fn cancel(&mut self) {
        self.tween = None;
        self.pending_delta = 0;
    }

    pub fn reset(&mut self) {
        self.jump_to(0);
    }

    fn tween_to(&self, target: u16, now: Instant) -> Tween {
        Tween {
            start: now,
            from: self.row,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        }
    }
}

#[inline]
fn half_page(viewport_height: u16) -> i32 {
    (viewport_height / 2).max(1) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth(duration_ms: u64) -> ScrollAnimator {
        ScrollAnimator::new(ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: duration_ms,
            easing: EasingType::Linear,
            ..Default::default()
        })
    }

    #[test]
    fn test_instant_scroll_when_disabled() {
        let mut animator = ScrollAnimator::new(ScrollConfig {
            smooth_enabled: false,
            scroll_lines: 4,
            ..Default::default()
        });

        animator.scroll_to(100, 200);
        assert_eq!(animator.row(), 100);
        assert!(!animator.is_animating());

        animator.step_down(200);
        assert_eq!(animator.row(), 104);
        animator.scroll_by(-500, 200);
        assert_eq!(animator.row(), 0);
    }

    #[test]
    fn test_scroll_to_animates() {
        let mut animator = smooth(100);
        animator.scroll_to(100, 200);
        assert!(animator.is_animating());
        assert_eq!(animator.target(), 100);
        assert_eq!(animator.row(), 0);
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut animator = smooth(100);
        let start = Instant::now();
        animator.scroll_by(40, 200);
        animator.update_at(start, 200);
        assert!(animator.is_animating());

        let halfway = animator.update_at(start + Duration::from_millis(50), 200);
        assert_eq!(halfway, 20);

        let done = animator.update_at(start + Duration::from_millis(150), 200);
        assert_eq!(done, 40);
        assert!(!animator.needs_update());
    }

    #[test]
    fn test_scroll_by_batching() {
        let mut animator = smooth(100);
        animator.scroll_by(10, 200);
        animator.scroll_by(10, 200);
        animator.scroll_by(10, 200);
        assert!(animator.needs_update());

        animator.update_at(Instant::now(), 200);
        assert_eq!(animator.target(), 30);
    }

    #[test]
    fn test_batched_delta_chains_from_target() {
        let mut animator = smooth(100);
        let start = Instant::now();
        animator.scroll_by(10, 200);
        animator.update_at(start, 200);
        animator.scroll_by(10, 200);
        animator.update_at(start + Duration::from_millis(10), 200);
        assert_eq!(animator.target(), 20);
    }

    #[test]
    fn test_clamped_to_max_row() {
        let mut animator = smooth(100);
        animator.jump_to(50);
        animator.scroll_to(300, 100);
        assert_eq!(animator.target(), 100);

        animator.scroll_by(-1000, 100);
        animator.update_at(Instant::now(), 100);
        assert_eq!(animator.target(), 0);
    }

    #[test]
    fn test_shrinking_page_clamps_row() {
        let mut animator = ScrollAnimator::with_defaults();
        animator.jump_to(80);
        assert_eq!(animator.update(30), 30);
    }

    #[test]
    fn test_half_page_has_minimum() {
        let mut animator = ScrollAnimator::new(ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        });
        animator.half_page_down(1, 10);
        assert_eq!(animator.row(), 1);
        animator.page_down(4, 10);
        assert_eq!(animator.row(), 5);
        animator.half_page_up(4, 10);
        assert_eq!(animator.row(), 3);
    }
}
