use std::time::Duration;

/// Fraction of `duration` covered by `elapsed`, clamped to `[0, 1]`
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Interpolate between two rows, rounding to the nearest row
#[inline]
pub fn lerp_rows(from: u16, to: u16, t: f64) -> u16 {
    lerp(from as f64, to as f64, t)
        .round()
        .clamp(0.0, u16::MAX as f64) as u16
}

/// Apply a signed delta to a row and clamp into `[0, max]`
#[inline]
pub fn offset_rows(row: u16, delta: i32, max: u16) -> u16 {
    (row as i64 + delta as i64).clamp(0, max as i64) as u16
}
