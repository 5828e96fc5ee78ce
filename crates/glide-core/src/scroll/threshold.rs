/// Boolean "page scrolled past N pixels" flag
///
/// Drives the navbar switching to a solid background. `update` reports only
/// transitions so the view re-renders on edges, not on every scroll event.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollThreshold {
    threshold: f64,
    passed: bool,
}

impl ScrollThreshold {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            passed: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_passed(&self) -> bool {
        self.passed
    }

    /// Returns `Some(new_state)` when the flag flips, `None` otherwise
    pub fn update(&mut self, scroll_y: f64) -> Option<bool> {
        let passed = scroll_y > self.threshold;
        if passed == self.passed {
            return None;
        }
        self.passed = passed;
        tracing::debug!("scroll threshold {} passed: {}", self.threshold, passed);
        Some(passed)
    }
}
