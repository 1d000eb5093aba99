//! Scroll progress to showcase segment mapping
//!
//! A showcase pages through `N` items while the user scrolls through one
//! region. Scroll progress `p` (nominally in `[0, 1]`) is split into `N`
//! equal segments:
//!
//! - the **active index** is the segment `p` currently falls in
//! - the **fill fraction** is how much of a checkpoint track should be
//!   drawn, with checkpoints at `k / (N - 1)`; it reaches checkpoint `k`
//!   exactly when the active index becomes `k` and moves linearly in between
//!
//! Out-of-range progress is clamped, never rejected. A segment count of zero
//! is a caller bug: the raw `usize` functions panic, while [`SegmentCount::new`]
//! reports [`Error::EmptyShowcase`].
//!
//! # Usage
//!
//! ```
//! use folio_core::segment::{SegmentCount, SegmentMapper};
//!
//! let mapper = SegmentMapper::new(SegmentCount::new(3).unwrap());
//! let pos = mapper.position(0.4);
//! assert_eq!(pos.index, 1);
//! assert!(pos.fill > 0.5 && pos.fill < 1.0);
//! ```

mod tracker;

use std::num::NonZeroUsize;

use crate::error::{Error, Result};

pub use tracker::ActiveIndexTracker;

/// Margin kept below `1.0` so `floor(p * N)` never lands on `N`
pub const DEFAULT_CLAMP_MARGIN: f64 = 0.001;

/// Smallest margin accepted by [`SegmentMapper::with_margin`]
pub const MIN_CLAMP_MARGIN: f64 = 1e-9;

/// Number of segments in a showcase (always at least one)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentCount(NonZeroUsize);

impl SegmentCount {
    pub fn new(count: usize) -> Result<Self> {
        NonZeroUsize::new(count)
            .map(Self)
            .ok_or(Error::EmptyShowcase)
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl From<NonZeroUsize> for SegmentCount {
    fn from(count: NonZeroUsize) -> Self {
        Self(count)
    }
}

/// Active index and track fill for one progress value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPosition {
    /// Segment currently emphasized, in `[0, N - 1]`
    pub index: usize,
    /// Progress inside the active segment, in `[0, 1)`
    pub segment_progress: f64,
    /// Filled proportion of the checkpoint track, in `[0, 1]`
    pub fill: f64,
}

/// Maps scroll progress onto a fixed number of segments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentMapper {
    count: SegmentCount,
    margin: f64,
}

impl SegmentMapper {
    /// Create a mapper using [`DEFAULT_CLAMP_MARGIN`], narrowed for large counts
    pub fn new(count: SegmentCount) -> Self {
        Self {
            count,
            margin: default_margin(count.get()),
        }
    }

    /// Create a mapper with a custom clamp margin
    ///
    /// Margins that are not finite, fall outside `[MIN_CLAMP_MARGIN, 1)`,
    /// or are not below `1 / N` (the ceiling must fall inside the last
    /// segment) are replaced by the default margin.
    pub fn with_margin(count: SegmentCount, margin: f64) -> Self {
        let n = count.get();
        let usable = margin.is_finite()
            && (MIN_CLAMP_MARGIN..1.0).contains(&margin)
            && margin * (n as f64) < 1.0
            && locate(1.0 - margin, n).0 == n - 1;
        let margin = if usable {
            margin
        } else {
            let fallback = default_margin(n);
            tracing::warn!(
                "Invalid clamp margin {} for {} segments, falling back to {}",
                margin,
                n,
                fallback
            );
            fallback
        };
        Self { count, margin }
    }

    #[inline]
    pub fn count(&self) -> SegmentCount {
        self.count
    }

    #[inline]
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Highest progress value that is not clamped
    #[inline]
    pub fn ceiling(&self) -> f64 {
        1.0 - self.margin
    }

    pub fn active_index(&self, progress: f64) -> usize {
        self.position(progress).index
    }

    pub fn fill_fraction(&self, progress: f64) -> f64 {
        self.position(progress).fill
    }

    pub fn position(&self, progress: f64) -> SegmentPosition {
        let n = self.count.get();
        let (index, segment_progress) = locate(clamp_progress(progress, self.margin), n);
        SegmentPosition {
            index,
            segment_progress,
            fill: interpolate_fill(index, segment_progress, n),
        }
    }

    /// Track position of checkpoint `k`, or `None` past the last one
    pub fn checkpoint(&self, k: usize) -> Option<f64> {
        let n = self.count.get();
        if k >= n {
            return None;
        }
        if n == 1 {
            return Some(1.0);
        }
        Some(k as f64 / (n - 1) as f64)
    }

    /// All checkpoint positions in order
    pub fn checkpoints(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count.get()).filter_map(|k| self.checkpoint(k))
    }
}

/// Active segment index for `progress` across `count` segments
///
/// # Panics
/// Panics if `count` is zero.
pub fn active_index(progress: f64, count: usize) -> usize {
    assert!(count > 0, "segment count must be at least 1");
    locate(clamp_progress(progress, default_margin(count)), count).0
}

/// Checkpoint track fill for `progress` across `count` segments
///
/// # Panics
/// Panics if `count` is zero.
pub fn fill_fraction(progress: f64, count: usize) -> f64 {
    assert!(count > 0, "segment count must be at least 1");
    let (index, segment_progress) = locate(clamp_progress(progress, default_margin(count)), count);
    interpolate_fill(index, segment_progress, count)
}

/// [`DEFAULT_CLAMP_MARGIN`], capped at half a segment so the ceiling stays in the last one
#[inline]
fn default_margin(count: usize) -> f64 {
    DEFAULT_CLAMP_MARGIN.min(0.5 / count as f64)
}

/// Clamp into `[0, 1 - margin]`; NaN is treated as the start
#[inline]
fn clamp_progress(progress: f64, margin: f64) -> f64 {
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0 - margin)
}

/// Split clamped progress into (segment index, progress inside segment)
#[inline]
fn locate(clamped: f64, count: usize) -> (usize, f64) {
    let scaled = clamped * count as f64;
    let index = (scaled.floor() as usize).min(count - 1);
    let segment_progress = (scaled - index as f64).clamp(0.0, 1.0);
    (index, segment_progress)
}

#[inline]
fn interpolate_fill(index: usize, segment_progress: f64, count: usize) -> f64 {
    // A lone checkpoint has nothing to interpolate towards.
    if count == 1 {
        return 1.0;
    }
    let last = (count - 1) as f64;
    let start = index as f64 / last;
    let end = ((index + 1) as f64 / last).min(1.0);
    (start + segment_progress * (end - start)).clamp(0.0, 1.0)
}
