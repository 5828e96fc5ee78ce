//! Time and interpolation helpers
//!
//! Pure functions over elapsed durations. Nothing here reads a clock, the
//! frame loop passes elapsed time in so every animation is replayable.

use std::time::Duration;

/// Animation progress (0.0 to 1.0) after `elapsed` of a `duration` long animation
///
/// A zero duration is complete immediately.
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if an animation of `duration` is complete after `elapsed`
#[inline]
pub fn is_complete(elapsed: Duration, duration: Duration) -> bool {
    elapsed >= duration
}

/// Linear interpolation between two values
///
/// # Arguments
/// * `from` - Start value
/// * `to` - End value
/// * `t` - Interpolation factor, not clamped
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Inverse of [`lerp`]: where `value` sits between `from` and `to`
///
/// Returns 0.0 for a degenerate range instead of dividing by zero.
#[inline]
pub fn inverse_lerp(from: f64, to: f64, value: f64) -> f64 {
    let span = to - from;
    if span.abs() < f64::EPSILON {
        return 0.0;
    }
    (value - from) / span
}

/// Frame interval for a target frame rate
#[inline]
pub fn frame_interval(fps: u32) -> Duration {
    if fps == 0 {
        Duration::from_millis(16) // ~60fps fallback
    } else {
        Duration::from_micros(1_000_000 / fps as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_inverse_lerp_degenerate_range() {
        assert_eq!(inverse_lerp(5.0, 5.0, 7.0), 0.0);
        assert!((inverse_lerp(0.0, 0.5, 0.25) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_progress_zero_duration() {
        assert!((progress(Duration::ZERO, Duration::ZERO) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_clamps() {
        let d = Duration::from_millis(100);
        assert!((progress(Duration::from_millis(50), d) - 0.5).abs() < 1e-9);
        assert_eq!(progress(Duration::from_millis(250), d), 1.0);
        assert!(is_complete(Duration::from_millis(100), d));
    }

    #[test]
    fn test_frame_interval() {
        assert_eq!(frame_interval(0), Duration::from_millis(16));
        assert_eq!(frame_interval(50), Duration::from_millis(20));
    }
}
