//! Reveal-on-scroll triggers
//!
//! A [`RevealObserver`] decides whether an element is in view (viewport
//! adjusted by a root margin). A [`RevealAnimation`] turns the moment it was
//! revealed into a fade-and-rise style, delayed by the item's stagger slot.

use std::time::Duration;

use super::linked::VisualStyle;
use crate::config::RevealConfig;
use crate::geometry::{Rect, Viewport};
use crate::motion::Tween;

/// Per-element visibility with an optional one-shot latch
#[derive(Debug, Clone, PartialEq)]
pub struct RevealObserver {
    margin: f64,
    once: bool,
    visible: bool,
    revealed_at: Option<Duration>,
}

impl RevealObserver {
    pub fn new(margin: f64, once: bool) -> Self {
        Self {
            margin,
            once,
            visible: false,
            revealed_at: None,
        }
    }

    pub fn from_config(config: &RevealConfig) -> Self {
        Self::new(config.margin_px, config.once)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Clock time at which the element last became visible
    pub fn revealed_at(&self) -> Option<Duration> {
        self.revealed_at
    }

    /// Re-evaluate against the element's rect at clock time `now`
    pub fn update(&mut self, rect: Rect, viewport: Viewport, now: Duration) -> bool {
        if self.once && self.visible {
            return true;
        }

        let root = viewport.rect().inflate(self.margin);
        let intersecting = rect.intersects(&root);

        if intersecting && !self.visible {
            self.revealed_at = Some(now);
        } else if !intersecting {
            self.revealed_at = None;
        }
        self.visible = intersecting;
        self.visible
    }
}

/// Delay before the `index`th item of a staggered group starts
#[inline]
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step.saturating_mul(index.min(u32::MAX as usize) as u32)
}

/// Fade in while rising into place
#[derive(Debug, Clone, PartialEq)]
pub struct RevealAnimation {
    opacity: Tween,
    rise: Tween,
}

impl RevealAnimation {
    /// Animation for the `index`th item of a staggered group
    pub fn new(config: &RevealConfig, index: usize) -> Self {
        let duration = Duration::from_millis(config.duration_ms);
        let delay = stagger_delay(index, Duration::from_millis(config.stagger_ms));
        Self {
            opacity: Tween::new(0.0, 1.0, duration, config.easing).with_delay(delay),
            rise: Tween::new(config.distance_px, 0.0, duration, config.easing).with_delay(delay),
        }
    }

    /// Style of an element that has not been revealed yet
    pub fn hidden(&self) -> VisualStyle {
        VisualStyle {
            opacity: self.opacity.from,
            translate_y: self.rise.from,
            ..VisualStyle::IDENTITY
        }
    }

    /// Style `elapsed` after the element was revealed
    pub fn style(&self, elapsed: Duration) -> VisualStyle {
        VisualStyle {
            opacity: self.opacity.sample(elapsed),
            translate_y: self.rise.sample(elapsed),
            ..VisualStyle::IDENTITY
        }
    }

    /// Style for an observer at clock time `now`
    pub fn style_for(&self, observer: &RevealObserver, now: Duration) -> VisualStyle {
        match observer.revealed_at() {
            Some(at) => self.style(now.saturating_sub(at)),
            None => self.hidden(),
        }
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.opacity.is_finished(elapsed)
    }
}

/// One observed container whose children reveal one after another
#[derive(Debug, Clone, PartialEq)]
pub struct RevealGroup {
    observer: RevealObserver,
    items: Vec<RevealAnimation>,
}

impl RevealGroup {
    pub fn new(config: &RevealConfig, count: usize) -> Self {
        Self {
            observer: RevealObserver::from_config(config),
            items: (0..count)
                .map(|index| RevealAnimation::new(config, index))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn observer(&self) -> &RevealObserver {
        &self.observer
    }

    pub fn update(&mut self, rect: Rect, viewport: Viewport, now: Duration) -> bool {
        self.observer.update(rect, viewport, now)
    }

    /// Style of child `index`; children past the end stay unstyled
    pub fn style(&self, index: usize, now: Duration) -> VisualStyle {
        self.items
            .get(index)
            .map(|item| item.style_for(&self.observer, now))
            .unwrap_or(VisualStyle::IDENTITY)
    }

    pub fn styles(&self, now: Duration) -> Vec<VisualStyle> {
        (0..self.items.len()).map(|index| self.style(index, now)).collect()
    }

    /// Still transitioning at `now`
    pub fn is_animating(&self, now: Duration) -> bool {
        match self.observer.revealed_at() {
            Some(at) => self
                .items
                .last()
                .is_some_and(|last| !last.is_finished(now.saturating_sub(at))),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::EasingType;

    const VIEWPORT: Viewport = Viewport::new(1280.0, 800.0);

    #[test]
    fn test_negative_margin_delays_reveal() {
        let mut observer = RevealObserver::new(-100.0, true);
        // Only the top 50px are on screen, less than the 100px margin
        let peeking = Rect::new(0.0, 750.0, 400.0, 300.0);
        assert!(!observer.update(peeking, VIEWPORT, Duration::ZERO));

        let inside = Rect::new(0.0, 600.0, 400.0, 300.0);
        assert!(observer.update(inside, VIEWPORT, Duration::from_millis(40)));
        assert_eq!(observer.revealed_at(), Some(Duration::from_millis(40)));
    }

    #[test]
    fn test_once_latches() {
        let mut observer = RevealObserver::new(0.0, true);
        observer.update(Rect::new(0.0, 100.0, 10.0, 10.0), VIEWPORT, Duration::ZERO);
        assert!(observer.update(Rect::new(0.0, 5000.0, 10.0, 10.0), VIEWPORT, Duration::ZERO));
    }

    #[test]
    fn test_repeatable_reveal_resets() {
        let mut observer = RevealObserver::new(0.0, false);
        observer.update(Rect::new(0.0, 100.0, 10.0, 10.0), VIEWPORT, Duration::ZERO);
        assert!(!observer.update(Rect::new(0.0, 5000.0, 10.0, 10.0), VIEWPORT, Duration::ZERO));
        assert_eq!(observer.revealed_at(), None);
    }

    #[test]
    fn test_group_staggers_children() {
        let config = RevealConfig {
            easing: EasingType::Linear,
            margin_px: 0.0,
            ..RevealConfig::default()
        };
        let mut group = RevealGroup::new(&config, 3);
        assert_eq!(group.style(2, Duration::ZERO).opacity, 0.0);

        let start = Duration::from_secs(1);
        assert!(group.update(Rect::new(0.0, 100.0, 10.0, 10.0), VIEWPORT, start));
        let styles = group.styles(start + Duration::from_millis(300));
        assert!((styles[0].opacity - 0.5).abs() < 1e-9);
        assert!((styles[1].opacity - 1.0 / 3.0).abs() < 1e-9);
        assert!((styles[2].opacity - 1.0 / 6.0).abs() < 1e-9);
        assert!(group.is_animating(start + Duration::from_millis(300)));
        assert!(!group.is_animating(start + Duration::from_millis(800)));
        assert_eq!(group.style(9, start), VisualStyle::IDENTITY);
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger_delay(3, Duration::from_millis(100)), Duration::from_millis(300));
    }

    #[test]
    fn test_huge_stagger_keeps_animating() {
        let config = RevealConfig {
            margin_px: 0.0,
            stagger_ms: u64::MAX,
            ..RevealConfig::default()
        };
        let mut group = RevealGroup::new(&config, 3);
        group.update(Rect::new(0.0, 100.0, 10.0, 10.0), VIEWPORT, Duration::ZERO);

        let later = Duration::from_secs(3600);
        assert!(group.is_animating(later));
        assert!((group.style(0, later).opacity - 1.0).abs() < 1e-9);
        assert_eq!(group.style(2, later).opacity, 0.0);
    }

    #[test]
    fn test_staggered_animation() {
        let config = RevealConfig {
            easing: EasingType::Linear,
            ..RevealConfig::default()
        };
        let second = RevealAnimation::new(&config, 1);
        assert_eq!(second.hidden().opacity, 0.0);
        assert_eq!(second.style(Duration::from_millis(50)).opacity, 0.0);
        let mid = second.style(Duration::from_millis(400));
        assert!((mid.opacity - 0.5).abs() < 1e-9);
        assert!((mid.translate_y - 25.0).abs() < 1e-9);
        assert!(second.is_finished(Duration::from_millis(700)));
    }
}
