use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::drag::ClickTarget;
use crate::error::{Error, Result};
use crate::geometry::{LayoutBox, Viewport};
use crate::host::HostEvent;

/// Scripted input for a headless run of the showcase page
///
/// ```toml
/// viewport = { width = 1280.0, height = 800.0 }
///
/// [[step]]
/// events = [{ type = "pointer_down", position = { x = 800.0, y = 1500.0 } }]
/// frames = 2
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    /// Duration of one frame
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
    #[serde(default = "default_hero")]
    pub hero: LayoutBox,
    #[serde(default)]
    pub carousel: CarouselLayout,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

/// Horizontal gallery of equally sized cards
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselLayout {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub items: usize,
    pub item_width: f64,
    #[serde(default)]
    pub gap: f64,
}

impl Default for CarouselLayout {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 1200.0,
            width: 1000.0,
            height: 400.0,
            items: 3,
            item_width: 500.0,
            gap: 0.0,
        }
    }
}

impl CarouselLayout {
    pub fn layout_box(&self) -> LayoutBox {
        LayoutBox::new(self.left, self.top, self.width, self.height)
    }

    /// Width of all cards plus the gaps between them
    pub fn content_width(&self) -> f64 {
        let gaps = self.items.saturating_sub(1) as f64 * self.gap;
        self.items as f64 * self.item_width + gaps
    }
}

/// Events delivered together, followed by `frames` rendered frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub events: Vec<HostEvent>,
    #[serde(default)]
    pub click: Option<ClickTarget>,
    #[serde(default = "default_frames")]
    pub frames: u32,
}

fn default_viewport() -> Viewport {
    Viewport::new(1280.0, 800.0)
}

fn default_frame_ms() -> u64 {
    16
}

fn default_hero() -> LayoutBox {
    LayoutBox::new(0.0, 0.0, 1280.0, 800.0)
}

fn default_frames() -> u32 {
    1
}

impl Script {
    /// Longest accepted frame, matching the spring's integration limit
    pub const MAX_FRAME_MS: u64 = 1000;

    pub fn from_toml(content: &str) -> Result<Self> {
        let script: Script = toml::from_str(content).map_err(|e| Error::Script(e.to_string()))?;
        script.validate()?;
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Total frames the script renders
    pub fn frame_count(&self) -> u64 {
        self.steps.iter().map(|step| step.frames as u64).sum()
    }

    fn validate(&self) -> Result<()> {
        if self.frame_ms == 0 {
            return Err(Error::Script("frame_ms must be positive".to_string()));
        }
        if self.frame_ms > Self::MAX_FRAME_MS {
            return Err(Error::Script(format!(
                "frame_ms must be at most {}, got {}",
                Self::MAX_FRAME_MS,
                self.frame_ms
            )));
        }
        if !(self.viewport.width >= 0.0 && self.viewport.height >= 0.0) {
            return Err(Error::Script(format!(
                "viewport must not be negative, got {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }
        if self.carousel.item_width < 0.0 || self.carousel.gap < 0.0 {
            return Err(Error::Script("carousel item sizes must not be negative".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::PointerId;

    #[test]
    fn test_parse_script() {
        let script = Script::from_toml(
            r#"
            frame_ms = 20

            [[step]]
            events = [
                { type = "pointer_down", position = { x = 800.0, y = 1400.0 } },
                { type = "scroll", scroll_y = 120.0 },
            ]

            [[step]]
            events = [{ type = "pointer_move", pointer_id = 2, position = { x = 700.0, y = 1400.0 } }]
            click = "action"
            frames = 3
            "#,
        )
        .unwrap();

        assert_eq!(script.frame_ms, 20);
        assert_eq!(script.steps.len(), 2);
        assert_eq!(script.steps[0].frames, 1);
        assert_eq!(script.frame_count(), 4);
        assert_eq!(script.steps[1].click, Some(ClickTarget::Action));
        match &script.steps[1].events[0] {
            HostEvent::PointerMove(event) => assert_eq!(event.pointer_id, PointerId(2)),
            other => panic!("unexpected event {:?}", other),
        }
        assert_eq!(script.carousel, CarouselLayout::default());
    }

    #[test]
    fn test_zero_frame_duration_rejected() {
        let err = Script::from_toml("frame_ms = 0").unwrap_err();
        assert!(matches!(err, Error::Script(_)));
    }

    #[test]
    fn test_oversized_frame_duration_rejected() {
        let err = Script::from_toml("frame_ms = 100000000000").unwrap_err();
        assert!(matches!(err, Error::Script(_)));
        assert!(Script::from_toml("frame_ms = 1000").is_ok());
    }

    #[test]
    fn test_unknown_event_rejected() {
        let err = Script::from_toml(
            r#"
            [[step]]
            events = [{ type = "teleport" }]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Script(_)));
    }
}
