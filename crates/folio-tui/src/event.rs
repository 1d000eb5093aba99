use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEventKind};

/// Event handler for terminal events
///
/// Polls with the idle tick rate normally and with the animation frame
/// interval while something on screen is moving.
#[derive(Debug, Clone)]
pub struct EventHandler {
    tick_rate: Duration,
    frame_interval: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let tick_rate = Duration::from_millis(tick_rate_ms.max(1));
        Self {
            tick_rate,
            frame_interval: tick_rate,
        }
    }

    pub fn with_frame_interval(tick_rate_ms: u64, frame_interval: Duration) -> Self {
        let mut handler = Self::new(tick_rate_ms);
        handler.frame_interval = frame_interval.min(handler.tick_rate);
        handler
    }

    pub fn timeout(&self, animating: bool) -> Duration {
        if animating {
            self.frame_interval
        } else {
            self.tick_rate
        }
    }

    /// Poll for the next event
    pub fn next(&self, animating: bool) -> Result<Option<AppEvent>> {
        if !event::poll(self.timeout(animating))? {
            return Ok(Some(AppEvent::Tick));
        }

        match event::read()? {
            // Only handle key press events, ignore release/repeat noise
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(AppEvent::Key(key))),
            Event::Mouse(mouse) => Ok(match mouse.kind {
                MouseEventKind::ScrollDown => Some(AppEvent::Wheel(3)),
                MouseEventKind::ScrollUp => Some(AppEvent::Wheel(-3)),
                _ => None,
            }),
            Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
            _ => Ok(None),
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Mouse wheel, in rows (positive = down)
    Wheel(i32),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_switches_when_animating() {
        let handler = EventHandler::with_frame_interval(100, Duration::from_millis(16));
        assert_eq!(handler.timeout(false), Duration::from_millis(100));
        assert_eq!(handler.timeout(true), Duration::from_millis(16));
    }

    #[test]
    fn test_frame_interval_never_slower_than_tick() {
        let handler = EventHandler::with_frame_interval(10, Duration::from_millis(50));
        assert_eq!(handler.timeout(true), Duration::from_millis(10));
    }
}
