use super::{SegmentMapper, SegmentPosition};

/// Remembers the last active index so the view only reacts to changes
#[derive(Debug, Clone)]
pub struct ActiveIndexTracker {
    mapper: SegmentMapper,
    last: Option<usize>,
    position: Option<SegmentPosition>,
}

impl ActiveIndexTracker {
    pub fn new(mapper: SegmentMapper) -> Self {
        Self {
            mapper,
            last: None,
            position: None,
        }
    }

    pub fn mapper(&self) -> &SegmentMapper {
        &self.mapper
    }

    /// Feed a new progress value
    ///
    /// Returns `Some(index)` when the active index differs from the previous
    /// observation (the first observation always reports).
    pub fn observe(&mut self, progress: f64) -> Option<usize> {
        let position = self.mapper.position(progress);
        self.position = Some(position);

        if self.last == Some(position.index) {
            return None;
        }

        tracing::trace!(
            "Active segment {:?} -> {} (progress {:.3})",
            self.last,
            position.index,
            progress
        );
        self.last = Some(position.index);
        Some(position.index)
    }

    /// Last computed active index (0 before any observation)
    #[inline]
    pub fn current(&self) -> usize {
        self.last.unwrap_or(0)
    }

    /// Last computed track fill (0 before any observation)
    #[inline]
    pub fn fill(&self) -> f64 {
        self.position.map(|p| p.fill).unwrap_or(0.0)
    }

    pub fn position(&self) -> Option<SegmentPosition> {
        self.position
    }

    pub fn reset(&mut self) {
        self.last = None;
        self.position = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::SegmentCount;

    fn tracker(n: usize) -> ActiveIndexTracker {
        ActiveIndexTracker::new(SegmentMapper::new(SegmentCount::new(n).unwrap()))
    }

    #[test]
    fn test_first_observation_reports() {
        let mut t = tracker(3);
        assert_eq!(t.observe(0.0), Some(0));
        assert_eq!(t.current(), 0);
    }

    #[test]
    fn test_reports_only_changes() {
        let mut t = tracker(3);
        assert_eq!(t.observe(0.1), Some(0));
        assert_eq!(t.observe(0.2), None);
        assert_eq!(t.observe(0.4), Some(1));
        assert_eq!(t.observe(0.5), None);
        assert_eq!(t.observe(1.2), Some(2));
        assert_eq!(t.observe(0.0), Some(0));
    }

    #[test]
    fn test_fill_follows_latest_observation() {
        let mut t = tracker(3);
        assert_eq!(t.fill(), 0.0);
        t.observe(0.4);
        assert!((t.fill() - 0.6).abs() < 1e-9);
        // Same index, new fill
        t.observe(0.5);
        assert!((t.fill() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_reset() {
        let mut t = tracker(2);
        t.observe(0.9);
        t.reset();
        assert_eq!(t.current(), 0);
        assert!(t.position().is_none());
        assert_eq!(t.observe(0.9), Some(1));
    }
}
