//! Multi-stop timed animation with optional looping
//!
//! Stops are spread evenly over the duration and the easing applies to
//! each segment separately. A repeating animation restarts from the first
//! stop after every cycle and never finishes. With no stops after the start
//! value the animation holds that value.

use std::time::Duration;

use super::easing::EasingType;
use super::timing::lerp;

#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes {
    values: Vec<f64>,
    /// Length of one cycle
    pub duration: Duration,
    /// Time spent at the first stop before the first cycle
    pub delay: Duration,
    pub easing: EasingType,
    /// Loop forever instead of holding the last stop
    pub repeat: bool,
}

impl Keyframes {
    /// Animate from `start` through each of `stops` in turn
    pub fn new(start: f64, stops: &[f64], duration: Duration, easing: EasingType) -> Self {
        let mut values = Vec::with_capacity(stops.len() + 1);
        values.push(start);
        values.extend_from_slice(stops);
        Self {
            values,
            duration,
            delay: Duration::ZERO,
            easing,
            repeat: false,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn repeating(mut self) -> Self {
        self.repeat = true;
        self
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn first(&self) -> f64 {
        self.values[0]
    }

    pub fn last(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Position within the current cycle, 0.0 to 1.0
    fn cycle_progress(&self, active: Duration) -> f64 {
        let total = self.duration.as_nanos();
        if total == 0 {
            return 1.0;
        }
        let into = active.as_nanos();
        if self.repeat {
            (into % total) as f64 / total as f64
        } else if into >= total {
            1.0
        } else {
            into as f64 / total as f64
        }
    }

    /// Value after `elapsed` since the animation was started
    pub fn sample(&self, elapsed: Duration) -> f64 {
        let segments = self.values.len() - 1;
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return self.first();
        };
        let p = self.cycle_progress(active);
        if segments == 0 || p >= 1.0 {
            return self.last();
        }

        let scaled = p * segments as f64;
        let index = (scaled.floor() as usize).min(segments - 1);
        let local = self.easing.apply(scaled - index as f64);
        lerp(self.values[index], self.values[index + 1], local)
    }

    /// A repeating animation never finishes
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        !self.repeat && elapsed >= self.delay.saturating_add(self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounce() -> Keyframes {
        Keyframes::new(0.0, &[10.0, 0.0], Duration::from_millis(1500), EasingType::Linear).repeating()
    }

    #[test]
    fn test_bounce_peaks_at_midpoint() {
        let cue = bounce();
        assert_eq!(cue.sample(Duration::ZERO), 0.0);
        assert!((cue.sample(Duration::from_millis(375)) - 5.0).abs() < 1e-9);
        assert!((cue.sample(Duration::from_millis(750)) - 10.0).abs() < 1e-9);
        assert!((cue.sample(Duration::from_millis(1125)) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_repeat_wraps_around() {
        let cue = bounce();
        assert!(cue.sample(Duration::from_millis(1500)).abs() < 1e-9);
        let first = cue.sample(Duration::from_millis(600));
        let later = cue.sample(Duration::from_millis(600 + 1500 * 7));
        assert!((first - later).abs() < 1e-9);
        assert!(!cue.is_finished(Duration::from_secs(3600)));
    }

    #[test]
    fn test_marquee_loop() {
        let marquee =
            Keyframes::new(0.0, &[-1920.0], Duration::from_secs(20), EasingType::Linear).repeating();
        assert!((marquee.sample(Duration::from_secs(5)) + 480.0).abs() < 1e-9);
        assert!((marquee.sample(Duration::from_secs(25)) + 480.0).abs() < 1e-9);
    }

    #[test]
    fn test_once_holds_last_stop() {
        let rise = Keyframes::new(200.0, &[0.0], Duration::from_secs(1), EasingType::EXPO_OUT)
            .with_delay(Duration::from_millis(300));
        assert_eq!(rise.sample(Duration::from_millis(200)), 200.0);
        let early = rise.sample(Duration::from_millis(600));
        assert!(early < 40.0 && early > 0.0);
        assert_eq!(rise.sample(Duration::from_millis(1300)), 0.0);
        assert!(rise.is_finished(Duration::from_millis(1300)));
        assert!(!rise.is_finished(Duration::from_millis(1299)));
    }

    #[test]
    fn test_easing_applies_per_segment() {
        let frames = Keyframes::new(0.0, &[10.0, 0.0], Duration::from_secs(2), EasingType::Cubic);
        // A quarter through is halfway into the first segment
        let expected = 10.0 * EasingType::Cubic.apply(0.5);
        assert!((frames.sample(Duration::from_millis(500)) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_jumps_to_end() {
        let frames = Keyframes::new(1.0, &[2.0, 3.0], Duration::ZERO, EasingType::Linear).repeating();
        assert_eq!(frames.sample(Duration::ZERO), 3.0);
    }

    #[test]
    fn test_single_stop_holds() {
        let frames = Keyframes::new(4.0, &[], Duration::from_secs(1), EasingType::Linear).repeating();
        assert_eq!(frames.values(), &[4.0]);
        assert_eq!(frames.sample(Duration::ZERO), 4.0);
        assert_eq!(frames.sample(Duration::from_millis(1700)), 4.0);
    }
}
