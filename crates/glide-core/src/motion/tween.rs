//! Timed transition between two values
//!
//! Used for one-shot reveal animations (fade and slide in once an element
//! enters the viewport). Sampling is a pure function of elapsed time.

use std::time::Duration;

use super::easing::EasingType;
use super::timing::{is_complete, lerp, progress};

#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
    /// Time spent at `from` before the transition starts
    pub delay: Duration,
    pub easing: EasingType,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration: Duration, easing: EasingType) -> Self {
        Self {
            from,
            to,
            duration,
            delay: Duration::ZERO,
            easing,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Value after `elapsed` since the tween was started
    pub fn sample(&self, elapsed: Duration) -> f64 {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return self.from;
        };
        if is_complete(active, self.duration) {
            return self.to;
        }
        let t = self.easing.apply(progress(active, self.duration));
        lerp(self.from, self.to, t)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.delay.saturating_add(self.duration)
    }
}
