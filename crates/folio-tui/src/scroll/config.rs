use std::time::Duration;

pub use folio_core::{EasingType, ScrollConfig};

/// Derived values for ScrollConfig
pub trait ScrollConfigExt {
    fn animation_duration(&self) -> Duration;

    /// Poll interval while an animation is running
    fn frame_interval(&self) -> Duration;

    /// Smooth scrolling is on and has a non-zero duration
    fn is_smooth(&self) -> bool;

    /// Rows moved by a single step
    fn step_rows(&self) -> i32;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn frame_interval(&self) -> Duration {
        match self.animation_fps {
            0 => Duration::from_millis(16),
            fps => Duration::from_millis((1000 / fps as u64).max(1)),
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }

    #[inline]
    fn step_rows(&self) -> i32 {
        // Smooth mode animates single rows; instant mode honours scroll_lines
        if self.is_smooth() {
            1
        } else {
            self.scroll_lines.max(1) as i32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScrollConfig::default();
        assert!(config.is_smooth());
        assert_eq!(config.animation_duration(), Duration::from_millis(150));
        assert_eq!(config.frame_interval(), Duration::from_millis(16));
        assert_eq!(config.step_rows(), 1);
    }

    #[test]
    fn test_zero_duration_is_not_smooth() {
        let config = ScrollConfig {
            animation_duration_ms: 0,
            scroll_lines: 3,
            ..Default::default()
        };
        assert!(!config.is_smooth());
        assert_eq!(config.step_rows(), 3);
    }

    #[test]
    fn test_frame_interval_edge_cases() {
        let zero = ScrollConfig {
            animation_fps: 0,
            ..Default::default()
        };
        assert_eq!(zero.frame_interval(), Duration::from_millis(16));

        let absurd = ScrollConfig {
            animation_fps: 5000,
            ..Default::default()
        };
        assert_eq!(absurd.frame_interval(), Duration::from_millis(1));
    }
}
