//! Time-driven decorations that play regardless of scroll position
//!
//! The hero text rises into place once when the page mounts, the scroll cue
//! fades in after it and then bounces forever, and the footer band scrolls
//! sideways in an endless loop. All of them sample the page clock.

use std::time::Duration;

use glide_core::motion::{EasingType, Keyframes, Tween};

/// Distance the hero lines rise from, in page pixels
pub const INTRO_RISE: f64 = 200.0;
const INTRO_DURATION: Duration = Duration::from_secs(1);
/// Start of each hero line's rise: title, tagline, hint
const LINE_DELAYS_MS: [u64; 3] = [300, 400, 500];

const CUE_DELAY: Duration = Duration::from_millis(1500);
const CUE_FADE: Duration = Duration::from_millis(300);
/// Peak of the scroll cue's bounce, in page pixels
pub const CUE_BOUNCE: f64 = 10.0;
const CUE_PERIOD: Duration = Duration::from_millis(1500);

/// Distance the marquee travels per loop, in page pixels
pub const MARQUEE_TRAVEL: f64 = 1920.0;
const MARQUEE_PERIOD: Duration = Duration::from_secs(20);

/// Mount animation of the hero section
#[derive(Debug, Clone, PartialEq)]
pub struct HeroIntro {
    lines: Vec<Tween>,
    cue_fade: Tween,
    cue_bounce: Keyframes,
}

impl Default for HeroIntro {
    fn default() -> Self {
        Self::new()
    }
}

impl HeroIntro {
    pub fn new() -> Self {
        let lines = LINE_DELAYS_MS
            .iter()
            .map(|&delay| {
                Tween::new(INTRO_RISE, 0.0, INTRO_DURATION, EasingType::EXPO_OUT)
                    .with_delay(Duration::from_millis(delay))
            })
            .collect();
        Self {
            lines,
            cue_fade: Tween::new(0.0, 1.0, CUE_FADE, EasingType::Cubic).with_delay(CUE_DELAY),
            cue_bounce: Keyframes::new(0.0, &[CUE_BOUNCE, 0.0], CUE_PERIOD, EasingType::EASE_IN_OUT)
                .repeating(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// How far hero line `index` still sits below its resting place
    pub fn line_offset(&self, index: usize, elapsed: Duration) -> f64 {
        self.lines
            .get(index)
            .map_or(0.0, |line| line.sample(elapsed))
    }

    pub fn cue_opacity(&self, elapsed: Duration) -> f64 {
        self.cue_fade.sample(elapsed)
    }

    /// Downward bounce of the scroll cue; starts once the cue appears
    pub fn cue_offset(&self, elapsed: Duration) -> f64 {
        self.cue_bounce.sample(elapsed.saturating_sub(CUE_DELAY))
    }

    /// Every one-shot part has settled; the cue keeps bouncing
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.cue_fade.is_finished(elapsed) && self.lines.iter().all(|line| line.is_finished(elapsed))
    }
}

/// Endless sideways scroll of the footer band
#[derive(Debug, Clone, PartialEq)]
pub struct Marquee {
    scroll: Keyframes,
}

impl Default for Marquee {
    fn default() -> Self {
        Self {
            scroll: Keyframes::new(0.0, &[-MARQUEE_TRAVEL], MARQUEE_PERIOD, EasingType::Linear)
                .repeating(),
        }
    }
}

impl Marquee {
    /// Horizontal offset in page pixels, zero or negative
    pub fn offset(&self, elapsed: Duration) -> f64 {
        self.scroll.sample(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_rise_in_order() {
        let intro = HeroIntro::new();
        assert_eq!(intro.line_count(), 3);
        assert_eq!(intro.line_offset(0, Duration::ZERO), INTRO_RISE);

        let at = Duration::from_millis(450);
        let title = intro.line_offset(0, at);
        let tagline = intro.line_offset(1, at);
        let hint = intro.line_offset(2, at);
        assert!(title < tagline && tagline < hint);
        assert_eq!(hint, INTRO_RISE);

        assert_eq!(intro.line_offset(2, Duration::from_millis(1500)), 0.0);
        assert_eq!(intro.line_offset(7, Duration::ZERO), 0.0);
    }

    #[test]
    fn test_cue_appears_then_bounces() {
        let intro = HeroIntro::new();
        assert_eq!(intro.cue_opacity(Duration::from_millis(1000)), 0.0);
        assert_eq!(intro.cue_offset(Duration::from_millis(1000)), 0.0);
        assert_eq!(intro.cue_opacity(Duration::from_millis(1800)), 1.0);

        // Half a period after appearing the cue is at the bottom of its bounce
        let peak = intro.cue_offset(CUE_DELAY + CUE_PERIOD / 2);
        assert!((peak - CUE_BOUNCE).abs() < 1e-9);
        let next_peak = intro.cue_offset(CUE_DELAY + CUE_PERIOD * 4 + CUE_PERIOD / 2);
        assert!((next_peak - CUE_BOUNCE).abs() < 1e-9);
    }

    #[test]
    fn test_intro_finishes() {
        let intro = HeroIntro::new();
        assert!(!intro.is_finished(Duration::from_millis(1400)));
        assert!(!intro.is_finished(Duration::from_millis(1700)));
        assert!(intro.is_finished(Duration::from_millis(1800)));
    }

    #[test]
    fn test_marquee_wraps() {
        let marquee = Marquee::default();
        assert_eq!(marquee.offset(Duration::ZERO), 0.0);
        assert!((marquee.offset(Duration::from_secs(10)) + MARQUEE_TRAVEL / 2.0).abs() < 1e-9);
        assert!(marquee.offset(MARQUEE_PERIOD).abs() < 1e-9);
        assert!((marquee.offset(Duration::from_secs(45)) + MARQUEE_TRAVEL / 4.0).abs() < 1e-9);
    }
}
