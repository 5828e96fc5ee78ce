use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::motion::{EasingType, Interpolator, SpringConfig};
use crate::scroll::{Property, ScrollWindow, Track};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub cursor: CursorConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            cursor: CursorConfig::default(),
            carousel: CarouselConfig::default(),
            scroll: ScrollConfig::default(),
            reveal: RevealConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Cursor overlay markers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CursorConfig {
    /// Small inner dot: stiff, quick to follow
    #[serde(default = "default_dot")]
    pub dot: MarkerConfig,
    /// Outer ring: softer, trails behind the dot
    #[serde(default = "default_ring")]
    pub ring: MarkerConfig,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            dot: default_dot(),
            ring: default_ring(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerConfig {
    /// Diameter in pixels; the marker is centered on the pointer
    pub size: f64,
    /// Scale while hovering an interactive element
    pub hover_scale: f64,
    pub stiffness: f64,
    pub damping: f64,
}

impl MarkerConfig {
    pub fn spring(&self) -> SpringConfig {
        SpringConfig::new(self.stiffness, self.damping)
    }
}

/// Drag-to-scroll carousel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Scroll distance per pixel of pointer travel
    #[serde(default = "default_drag_gain")]
    pub drag_gain: f64,
    /// Allow the offset past the content edges instead of clamping
    #[serde(default)]
    pub overscroll: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            drag_gain: default_drag_gain(),
            overscroll: false,
        }
    }
}

/// Scroll-linked effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Page offset after which the navbar switches to its solid background
    #[serde(default = "default_navbar_threshold")]
    pub navbar_threshold_px: f64,
    /// Hero parallax window
    #[serde(default)]
    pub hero_window: ScrollWindow,
    /// Hero properties driven by scroll progress
    #[serde(default = "default_hero_tracks")]
    pub hero_tracks: Vec<Track>,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            navbar_threshold_px: default_navbar_threshold(),
            hero_window: ScrollWindow::default(),
            hero_tracks: default_hero_tracks(),
        }
    }
}

/// Reveal-on-scroll transitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Root margin; negative values require the element to be further inside
    #[serde(default = "default_reveal_margin")]
    pub margin_px: f64,
    /// Stay revealed after the first intersection
    #[serde(default = "default_true")]
    pub once: bool,
    /// Extra delay per item index
    #[serde(default = "default_stagger")]
    pub stagger_ms: u64,
    #[serde(default = "default_reveal_duration")]
    pub duration_ms: u64,
    /// Vertical distance revealed content slides up from
    #[serde(default = "default_reveal_distance")]
    pub distance_px: f64,
    #[serde(default = "default_reveal_easing")]
    pub easing: EasingType,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            margin_px: default_reveal_margin(),
            once: default_true(),
            stagger_ms: default_stagger(),
            duration_ms: default_reveal_duration(),
            distance_px: default_reveal_distance(),
            easing: default_reveal_easing(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while nothing is animating
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_dot() -> MarkerConfig {
    MarkerConfig {
        size: 16.0,
        hover_scale: 2.5,
        stiffness: 500.0,
        damping: 28.0,
    }
}

fn default_ring() -> MarkerConfig {
    MarkerConfig {
        size: 40.0,
        hover_scale: 1.5,
        stiffness: 250.0,
        damping: 20.0,
    }
}

fn default_drag_gain() -> f64 {
    2.0
}

fn default_navbar_threshold() -> f64 {
    100.0
}

fn default_hero_tracks() -> Vec<Track> {
    let track = |property, domain, range| {
        Interpolator::linear(domain, range).map(|curve| Track::new(property, curve))
    };
    [
        track(Property::TranslateY, (0.0, 1.0), (0.0, 300.0)),
        track(Property::Opacity, (0.0, 0.5), (1.0, 0.0)),
        track(Property::Scale, (0.0, 0.5), (1.0, 0.8)),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn default_reveal_margin() -> f64 {
    -100.0
}

fn default_stagger() -> u64 {
    100
}

fn default_reveal_duration() -> u64 {
    600
}

fn default_reveal_distance() -> f64 {
    50.0
}

fn default_reveal_easing() -> EasingType {
    EasingType::EXPO_OUT
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, falling back to defaults when it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content)?;

        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/glide/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("glide")
            .join("config.toml")
    }
}
