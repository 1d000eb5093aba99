//! Startup animation: a typed, highlighted code snippet over a loading bar
//!
//! Timing is derived from the elapsed time since the intro started, so the
//! render loop can sample it at any frame rate.

pub mod highlight;
pub mod typewriter;

use std::time::{Duration, Instant};

use folio_core::config::IntroConfig;

use crate::scroll::timing::progress;
use crate::scroll::{EasingType, EasingTypeExt};

pub use highlight::{highlight, Token, TokenKind};
pub use typewriter::{typed_prefix, TypedFrame, Typewriter};

/// Snippet typed during the intro
pub const CODE_LINES: [&str; 4] = [
    "const developer = new Engineer();",
    "developer.init({ mode: 'creative' });",
    "await developer.loadPortfolio();",
    "// Ready to build something amazing",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntroPhase {
    /// Loading bar filling, `progress` in `[0, 1]` (eased)
    Loading { progress: f64 },
    /// Fading out, `fade` in `[0, 1]`
    Reveal { fade: f64 },
    Done,
}

#[derive(Debug, Clone)]
pub struct Intro {
    typewriter: Typewriter,
    loading: Duration,
    reveal: Duration,
    started: Instant,
    skipped: bool,
}

impl Intro {
    pub fn new(config: &IntroConfig) -> Self {
        Self::starting_at(config, Instant::now())
    }

    pub fn starting_at(config: &IntroConfig, started: Instant) -> Self {
        let typewriter = Typewriter::new(
            CODE_LINES.iter().map(|l| l.to_string()).collect(),
            Duration::from_millis(config.start_delay_ms),
            Duration::from_millis(config.type_speed_ms),
            Duration::from_millis(config.line_delay_ms),
        );
        Self {
            typewriter,
            loading: Duration::from_millis(config.loading_ms),
            reveal: Duration::from_millis(config.reveal_ms),
            started,
            skipped: false,
        }
    }

    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    pub fn phase_at(&self, now: Instant) -> IntroPhase {
        if self.skipped {
            return IntroPhase::Done;
        }

        let elapsed = self.elapsed(now);
        if elapsed < self.loading {
            let t = progress(elapsed, self.loading);
            return IntroPhase::Loading {
                progress: EasingType::Quartic.apply(t),
            };
        }

        let since_loaded = elapsed - self.loading;
        if since_loaded < self.reveal {
            IntroPhase::Reveal {
                fade: progress(since_loaded, self.reveal),
            }
        } else {
            IntroPhase::Done
        }
    }

    pub fn frame_at(&self, now: Instant) -> TypedFrame {
        self.typewriter.frame_at(self.elapsed(now))
    }

    pub fn is_done(&self, now: Instant) -> bool {
        self.phase_at(now) == IntroPhase::Done
    }

    /// End the intro on the next frame
    pub fn skip(&mut self) {
        self.skipped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intro() -> (Intro, Instant) {
        let start = Instant::now();
        (Intro::starting_at(&IntroConfig::default(), start), start)
    }

    #[test]
    fn test_loading_progress_is_eased() {
        let (intro, start) = intro();
        match intro.phase_at(start + Duration::from_millis(1400)) {
            IntroPhase::Loading { progress } => {
                // ease-out-quart at t = 0.5
                assert!((progress - 0.9375).abs() < 1e-9, "{}", progress);
            }
            other => panic!("unexpected phase {:?}", other),
        }
        assert_eq!(intro.phase_at(start), IntroPhase::Loading { progress: 0.0 });
    }

    #[test]
    fn test_reveal_then_done() {
        let (intro, start) = intro();
        match intro.phase_at(start + Duration::from_millis(2800 + 450)) {
            IntroPhase::Reveal { fade } => assert!((fade - 0.5).abs() < 1e-9),
            other => panic!("unexpected phase {:?}", other),
        }
        assert!(!intro.is_done(start + Duration::from_millis(3699)));
        assert!(intro.is_done(start + Duration::from_millis(3700)));
    }

    #[test]
    fn test_skip() {
        let (mut intro, start) = intro();
        intro.skip();
        assert!(intro.is_done(start));
    }

    #[test]
    fn test_typing_starts_after_delay() {
        let (intro, start) = intro();
        assert_eq!(intro.frame_at(start).current, None);
        assert_eq!(
            intro.frame_at(start + Duration::from_millis(600 + 35 * 5)).current,
            Some((0, 5))
        );
    }
}
