use std::time::Duration;

use serde::Serialize;

use super::script::{Script, Step};
use crate::config::AppConfig;
use crate::drag::{
    ClickTarget, CursorAffordance, DragScrollController, DragState, DragViewport,
};
use crate::error::Result;
use crate::geometry::Point;
use crate::host::{Host, HostEvent};
use crate::pointer::{OverlayFrame, PointerTracker};
use crate::scroll::{RevealGroup, ScrollSection, ScrollThreshold, VisualStyle};

/// Everything observable after one rendered frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayFrame {
    pub frame: u64,
    pub elapsed_ms: u64,
    pub scroll_y: f64,
    pub navbar_solid: bool,
    pub cursor: OverlayFrame,
    pub hero: SectionFrame,
    pub carousel: CarouselFrame,
    /// Click handlers that ran since the previous frame, innermost first
    pub clicks: Vec<String>,
    pub listeners: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SectionFrame {
    pub progress: f64,
    pub style: VisualStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselFrame {
    pub drag: DragState,
    pub scroll_left: f64,
    pub affordance: CursorAffordance,
    pub revealed: bool,
    pub items: Vec<VisualStyle>,
}

struct Carousel {
    viewport: DragViewport,
    reveal: RevealGroup,
}

impl Carousel {
    fn frame(&mut self, scroll_y: f64, host: &Host, now: Duration) -> CarouselFrame {
        let rect = self.viewport.layout().client_rect(scroll_y);
        let revealed = self.reveal.update(rect, host.viewport(), now);
        let items = self.reveal.styles(now);
        CarouselFrame {
            drag: self.viewport.state(),
            scroll_left: self.viewport.scroll_left(),
            affordance: self.viewport.affordance(),
            revealed,
            items,
        }
    }
}

/// Headless showcase page driven by a [`Script`]
///
/// Mounts the cursor overlay, a scroll-linked hero, the navbar threshold and a
/// drag-scroll gallery on one [`Host`], then feeds it scripted events.
pub struct Replay {
    host: Host,
    tracker: PointerTracker,
    hero: ScrollSection,
    navbar: ScrollThreshold,
    carousel: Carousel,
    frame_dt: Duration,
    clicks: Vec<String>,
}

impl Replay {
    pub fn new(script: &Script, config: &AppConfig) -> Self {
        let host = Host::new(script.viewport);
        let tracker = PointerTracker::mount(&host, &config.cursor);
        let hero = ScrollSection::mount(
            &host,
            script.hero,
            config.scroll.hero_window,
            config.scroll.hero_tracks.clone(),
        );

        let carousel = Carousel {
            viewport: DragViewport::new(
                script.carousel.layout_box(),
                script.carousel.content_width(),
                DragScrollController::from_config(&config.carousel),
            ),
            reveal: RevealGroup::new(&config.reveal, script.carousel.items),
        };

        Self {
            host,
            tracker,
            hero,
            navbar: ScrollThreshold::new(config.scroll.navbar_threshold_px),
            carousel,
            frame_dt: Duration::from_millis(script.frame_ms),
            clicks: Vec::new(),
        }
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Deliver one host event to the page
    pub fn apply(&mut self, event: &HostEvent) {
        tracing::trace!("replay event {:?}", event.kind());
        self.host.dispatch(event.clone());
        if let HostEvent::Scroll { .. } = event {
            self.navbar.update(self.host.scroll_y());
        }
        self.carousel.viewport.route(event, self.host.scroll_y());
    }

    /// Click at the current cursor position on part of a gallery card
    pub fn click(&mut self, target: ClickTarget) {
        let cursor = self.tracker.cursor();
        let fired = self
            .carousel
            .viewport
            .click(target, Point::new(cursor.x, cursor.y));
        self.clicks.extend(fired);
    }

    /// Render one frame
    pub fn frame(&mut self) -> ReplayFrame {
        let time = self.host.frame(self.frame_dt);
        let scroll_y = self.host.scroll_y();
        ReplayFrame {
            frame: time.frame,
            elapsed_ms: time.elapsed.as_millis() as u64,
            scroll_y,
            navbar_solid: self.navbar.is_passed(),
            cursor: self.tracker.overlay(),
            hero: SectionFrame {
                progress: self.hero.progress(),
                style: self.hero.style(),
            },
            carousel: self.carousel.frame(scroll_y, &self.host, time.elapsed),
            clicks: std::mem::take(&mut self.clicks),
            listeners: self.host.hub().listener_count(),
        }
    }

    /// Apply a step's events and render its frames
    pub fn step<F>(&mut self, step: &Step, emit: &mut F) -> Result<()>
    where
        F: FnMut(ReplayFrame) -> Result<()>,
    {
        for event in &step.events {
            self.apply(event);
        }
        if let Some(target) = step.click {
            self.click(target);
        }
        for _ in 0..step.frames {
            emit(self.frame())?;
        }
        Ok(())
    }

    /// Run every step of `script`, handing each frame to `emit`
    pub fn run<F>(&mut self, script: &Script, mut emit: F) -> Result<()>
    where
        F: FnMut(ReplayFrame) -> Result<()>,
    {
        for step in &script.steps {
            self.step(step, &mut emit)?;
        }
        tracing::debug!("replay finished after {} frames", self.host.frames().frame_count());
        Ok(())
    }
}

/// Run `script` on a fresh page and collect every frame
pub fn replay(script: &Script, config: &AppConfig) -> Result<Vec<ReplayFrame>> {
    let mut frames = Vec::with_capacity(script.frame_count() as usize);
    Replay::new(script, config).run(script, |frame| {
        frames.push(frame);
        Ok(())
    })?;
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(toml: &str) -> Script {
        Script::from_toml(toml).unwrap()
    }

    #[test]
    fn test_drag_gallery() {
        // Gallery at page y 1200; scrolled so it sits at viewport y 200..600
        let frames = replay(
            &script(
                r#"
                [[step]]
                events = [
                    { type = "scroll", scroll_y = 1000.0 },
                    { type = "pointer_down", position = { x = 800.0, y = 400.0 } },
                    { type = "pointer_move", position = { x = 700.0, y = 400.0 } },
                ]

                [[step]]
                events = [{ type = "pointer_up", position = { x = 700.0, y = 400.0 } }]
                "#,
            ),
            &AppConfig::default(),
        )
        .unwrap();

        assert_eq!(frames.len(), 2);
        assert!(matches!(frames[0].carousel.drag, DragState::Dragging(_)));
        assert_eq!(frames[0].carousel.scroll_left, 200.0);
        assert_eq!(frames[0].carousel.affordance, CursorAffordance::Grabbing);
        assert_eq!(frames[1].carousel.drag, DragState::Idle);
        assert_eq!(frames[1].carousel.scroll_left, 200.0);
        assert!(frames[1].navbar_solid);
    }

    #[test]
    fn test_leaving_gallery_ends_drag() {
        let frames = replay(
            &script(
                r#"
                [[step]]
                events = [
                    { type = "scroll", scroll_y = 1000.0 },
                    { type = "pointer_down", position = { x = 800.0, y = 400.0 } },
                    { type = "pointer_move", position = { x = 800.0, y = 700.0 } },
                ]
                "#,
            ),
            &AppConfig::default(),
        )
        .unwrap();
        assert_eq!(frames[0].carousel.drag, DragState::Idle);
        assert_eq!(frames[0].carousel.affordance, CursorAffordance::Default);
    }

    #[test]
    fn test_hero_progress_follows_scroll() {
        let frames = replay(
            &script(
                r#"
                [[step]]
                events = [{ type = "scroll", scroll_y = 400.0 }]
                "#,
            ),
            &AppConfig::default(),
        )
        .unwrap();
        let hero = frames[0].hero;
        assert!((hero.progress - 0.5).abs() < 1e-9);
        assert!((hero.style.translate_y - 150.0).abs() < 1e-9);
        assert!(hero.style.opacity.abs() < 1e-9);
    }

    #[test]
    fn test_action_click_does_not_reach_card() {
        let frames = replay(
            &script(
                r#"
                [[step]]
                click = "action"

                [[step]]
                click = "card"
                "#,
            ),
            &AppConfig::default(),
        )
        .unwrap();
        assert_eq!(frames[0].clicks, vec!["action".to_string()]);
        assert_eq!(frames[1].clicks, vec!["card".to_string(), "gallery".to_string()]);
    }

    #[test]
    fn test_frames_serialize_to_json() {
        let frames = replay(&script("[[step]]\nframes = 2"), &AppConfig::default()).unwrap();
        let json = serde_json::to_value(&frames[1]).unwrap();
        assert_eq!(json["frame"], 2);
        assert_eq!(json["elapsed_ms"], 32);
        assert_eq!(json["carousel"]["drag"]["state"], "idle");
        // Tracker (2), hero scroll + resize (2)
        assert_eq!(json["listeners"], 4);
    }
}
