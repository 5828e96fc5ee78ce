use serde::{Deserialize, Serialize};

use super::offset::ScrollWindow;
use super::progress::ScrollProgressMapper;
use crate::geometry::{Rect, Viewport};
use crate::motion::Interpolator;

/// Visual property a track writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    TranslateX,
    TranslateY,
    Opacity,
    Scale,
    /// Degrees
    Rotate,
}

/// One output derived from scroll progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub property: Property,
    pub curve: Interpolator,
}

impl Track {
    pub fn new(property: Property, curve: Interpolator) -> Self {
        Self { property, curve }
    }
}

/// Transform and opacity handed to the view layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualStyle {
    pub translate_x: f64,
    pub translate_y: f64,
    pub opacity: f64,
    pub scale: f64,
    pub rotate: f64,
}

impl Default for VisualStyle {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl VisualStyle {
    pub const IDENTITY: VisualStyle = VisualStyle {
        translate_x: 0.0,
        translate_y: 0.0,
        opacity: 1.0,
        scale: 1.0,
        rotate: 0.0,
    };

    pub fn get(&self, property: Property) -> f64 {
        match property {
            Property::TranslateX => self.translate_x,
            Property::TranslateY => self.translate_y,
            Property::Opacity => self.opacity,
            Property::Scale => self.scale,
            Property::Rotate => self.rotate,
        }
    }

    pub fn set(&mut self, property: Property, value: f64) {
        match property {
            Property::TranslateX => self.translate_x = value,
            Property::TranslateY => self.translate_y = value,
            Property::Opacity => self.opacity = value,
            Property::Scale => self.scale = value,
            Property::Rotate => self.rotate = value,
        }
    }
}

/// Scroll progress plus the tracks derived from it
///
/// Properties without a track keep their identity value. When two tracks
/// target the same property the later one wins.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollLinked {
    mapper: ScrollProgressMapper,
    tracks: Vec<Track>,
}

impl ScrollLinked {
    pub fn new(window: ScrollWindow, tracks: Vec<Track>) -> Self {
        Self {
            mapper: ScrollProgressMapper::new(window),
            tracks,
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn progress(&self) -> f64 {
        self.mapper.progress()
    }

    pub fn measure(&mut self, rect: Rect, viewport: Viewport) -> f64 {
        self.mapper.measure(rect, viewport)
    }

    /// Style for the last measured progress
    pub fn style(&self) -> VisualStyle {
        self.style_at(self.mapper.progress())
    }

    /// Style for an arbitrary progress value
    pub fn style_at(&self, progress: f64) -> VisualStyle {
        let mut style = VisualStyle::IDENTITY;
        for track in &self.tracks {
            style.set(track.property, track.curve.sample(progress));
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScrollConfig;

    fn hero() -> ScrollLinked {
        let config = ScrollConfig::default();
        ScrollLinked::new(config.hero_window, config.hero_tracks)
    }

    #[test]
    fn test_hero_tracks_at_midpoint() {
        let style = hero().style_at(0.25);
        assert!((style.translate_y - 75.0).abs() < 1e-9);
        assert!((style.opacity - 0.5).abs() < 1e-9);
        assert!((style.scale - 0.9).abs() < 1e-9);
        assert_eq!(style.rotate, 0.0);
    }

    #[test]
    fn test_outputs_clamp_past_their_domain() {
        let style = hero().style_at(1.0);
        assert_eq!(style.opacity, 0.0);
        assert!((style.scale - 0.8).abs() < 1e-9);
        assert!((style.translate_y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_style_follows_measure() {
        let mut hero = hero();
        hero.measure(Rect::new(0.0, -500.0, 1280.0, 1000.0), Viewport::new(1280.0, 800.0));
        assert!((hero.progress() - 0.5).abs() < 1e-9);
        assert_eq!(hero.style().opacity, 0.0);
    }

    #[test]
    fn test_untracked_property_keeps_identity() {
        let linked = ScrollLinked::new(ScrollWindow::default(), Vec::new());
        assert_eq!(linked.style_at(0.7), VisualStyle::IDENTITY);
    }
}
