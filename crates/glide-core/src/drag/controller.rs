use serde::Serialize;

use super::surface::ScrollSurface;
use crate::config::CarouselConfig;
use crate::host::{EventResponse, HostEvent, PointerEvent, PointerId};

/// Captured at pointer-down, fixed for the life of the drag
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DragSession {
    pub pointer_id: PointerId,
    /// Pointer x relative to the viewport's left edge
    pub origin_pointer_x: f64,
    pub origin_scroll_offset: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Mouse cursor the view should show over the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorAffordance {
    Default,
    Grab,
    Grabbing,
}

/// Drag-to-scroll state machine for one horizontal viewport
///
/// `Idle -> Dragging` on pointer-down, `Dragging -> Dragging` on every move
/// (scroll offset written synchronously), `Dragging -> Idle` on pointer-up or
/// when the pointer leaves the viewport. A pointer-down while dragging is
/// ignored, so the session origin cannot be overwritten mid-drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragScrollController {
    state: DragState,
    gain: f64,
    overscroll: bool,
    hovered: bool,
}

impl Default for DragScrollController {
    fn default() -> Self {
        Self::from_config(&CarouselConfig::default())
    }
}

impl DragScrollController {
    pub fn new(gain: f64) -> Self {
        Self {
            state: DragState::Idle,
            gain,
            overscroll: false,
            hovered: false,
        }
    }

    pub fn from_config(config: &CarouselConfig) -> Self {
        Self {
            overscroll: config.overscroll,
            ..Self::new(config.drag_gain)
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn gain(&self) -> f64 {
        self.gain
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn affordance(&self) -> CursorAffordance {
        match (self.is_dragging(), self.hovered) {
            (true, _) => CursorAffordance::Grabbing,
            (false, true) => CursorAffordance::Grab,
            (false, false) => CursorAffordance::Default,
        }
    }

    /// Route a host pointer event to the matching handler
    pub fn handle(&mut self, event: &HostEvent, surface: &mut dyn ScrollSurface) -> EventResponse {
        match event {
            HostEvent::PointerDown(pointer) => self.pointer_down(pointer, surface),
            HostEvent::PointerMove(pointer) => self.pointer_move(pointer, surface),
            HostEvent::PointerUp(pointer) => self.pointer_up(pointer),
            HostEvent::PointerLeave(pointer) => self.pointer_leave(pointer),
            HostEvent::PointerOver(_) | HostEvent::Scroll { .. } | HostEvent::Resize { .. } => {
                EventResponse::IGNORED
            }
        }
    }

    pub fn pointer_down(&mut self, event: &PointerEvent, surface: &dyn ScrollSurface) -> EventResponse {
        self.hovered = true;
        if let DragState::Dragging(session) = &self.state {
            tracing::trace!(
                "ignoring pointer-down from {:?} during drag by {:?}",
                event.pointer_id,
                session.pointer_id
            );
            return EventResponse::IGNORED;
        }

        let session = DragSession {
            pointer_id: event.pointer_id,
            origin_pointer_x: event.position.x - surface.offset_left(),
            origin_scroll_offset: surface.scroll_left(),
        };
        tracing::debug!(
            "drag started at x={} offset={}",
            session.origin_pointer_x,
            session.origin_scroll_offset
        );
        self.state = DragState::Dragging(session);
        EventResponse::HANDLED
    }

    pub fn pointer_move(&mut self, event: &PointerEvent, surface: &mut dyn ScrollSurface) -> EventResponse {
        self.hovered = true;
        let DragState::Dragging(session) = self.state else {
            return EventResponse::IGNORED;
        };
        if event.pointer_id != session.pointer_id {
            return EventResponse::IGNORED;
        }

        // Zero-width viewport: keep the drag (and suppress selection) but never scroll
        if surface.viewport_width() > 0.0 {
            let pointer_x = event.position.x - surface.offset_left();
            let delta = (pointer_x - session.origin_pointer_x) * self.gain;
            let offset = self.bounded(session.origin_scroll_offset - delta, surface);
            if offset.is_finite() {
                surface.set_scroll_left(offset);
            }
        }
        EventResponse::CAPTURED
    }

    pub fn pointer_up(&mut self, event: &PointerEvent) -> EventResponse {
        match self.state {
            DragState::Dragging(session) if session.pointer_id == event.pointer_id => {
                self.end("pointer-up");
                EventResponse::HANDLED
            }
            _ => EventResponse::IGNORED,
        }
    }

    /// Leaving the viewport always ends the drag, even without a release
    pub fn pointer_leave(&mut self, _event: &PointerEvent) -> EventResponse {
        self.hovered = false;
        if self.is_dragging() {
            self.end("pointer-leave");
            EventResponse::HANDLED
        } else {
            EventResponse::IGNORED
        }
    }

    /// Abort any drag, e.g. when the view is torn down
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            self.end("cancel");
        }
    }

    fn end(&mut self, reason: &str) {
        tracing::debug!("drag ended ({})", reason);
        self.state = DragState::Idle;
    }

    fn bounded(&self, offset: f64, surface: &dyn ScrollSurface) -> f64 {
        if self.overscroll {
            offset
        } else {
            offset.clamp(0.0, surface.max_scroll_left())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::surface::ScrollRegion;

    fn gallery() -> ScrollRegion {
        ScrollRegion::with_items(0.0, 1000.0, 3, 500.0, 0.0)
    }

    #[test]
    fn test_drag_scenario() {
        let mut surface = gallery();
        let mut drag = DragScrollController::new(2.0);

        drag.pointer_down(&PointerEvent::at(800.0, 300.0), &surface);
        assert!(drag.is_dragging());
        let response = drag.pointer_move(&PointerEvent::at(700.0, 300.0), &mut surface);
        assert!(response.prevent_default);
        assert_eq!(surface.scroll_left, 200.0);

        drag.pointer_up(&PointerEvent::at(700.0, 300.0));
        assert_eq!(drag.state(), DragState::Idle);
        assert_eq!(surface.scroll_left, 200.0);
    }

    #[test]
    fn test_handle_dispatches_by_event_kind() {
        let mut surface = gallery();
        let mut drag = DragScrollController::new(2.0);

        let scroll = HostEvent::Scroll { scroll_y: 40.0 };
        assert_eq!(drag.handle(&scroll, &mut surface), EventResponse::IGNORED);

        drag.handle(&HostEvent::PointerDown(PointerEvent::at(800.0, 0.0)), &mut surface);
        assert!(drag.is_dragging());
        let response = drag.handle(&HostEvent::PointerMove(PointerEvent::at(750.0, 0.0)), &mut surface);
        assert!(response.prevent_default);
        assert_eq!(surface.scroll_left, 100.0);

        drag.handle(&HostEvent::PointerLeave(PointerEvent::at(750.0, 0.0)), &mut surface);
        assert_eq!(drag.state(), DragState::Idle);
    }

    #[test]
    fn test_second_pointer_down_keeps_session() {
        let mut surface = gallery();
        let mut drag = DragScrollController::new(2.0);
        drag.pointer_down(&PointerEvent::at(800.0, 0.0), &surface);
        let before = *drag.session().unwrap();

        surface.scroll_left = 120.0;
        let response = drag.pointer_down(
            &PointerEvent::at(300.0, 0.0).with_pointer(PointerId(2)),
            &surface,
        );
        assert!(!response.handled);
        assert_eq!(*drag.session().unwrap(), before);
    }

    #[test]
    fn test_pointer_leave_ends_drag() {
        let surface = gallery();
        let mut drag = DragScrollController::new(2.0);
        drag.pointer_down(&PointerEvent::at(800.0, 0.0), &surface);
        drag.pointer_leave(&PointerEvent::at(1200.0, 0.0));
        assert_eq!(drag.state(), DragState::Idle);
        assert_eq!(drag.affordance(), CursorAffordance::Default);
    }

    #[test]
    fn test_offset_clamped_to_content() {
        let mut surface = gallery();
        let mut drag = DragScrollController::new(2.0);
        drag.pointer_down(&PointerEvent::at(900.0, 0.0), &surface);
        drag.pointer_move(&PointerEvent::at(100.0, 0.0), &mut surface);
        assert_eq!(surface.scroll_left, 500.0);

        drag.pointer_move(&PointerEvent::at(990.0, 0.0), &mut surface);
        assert_eq!(surface.scroll_left, 0.0);
    }

    #[test]
    fn test_overscroll_when_enabled() {
        let mut surface = gallery();
        let mut drag = DragScrollController::from_config(&CarouselConfig {
            drag_gain: 2.0,
            overscroll: true,
        });
        drag.pointer_down(&PointerEvent::at(900.0, 0.0), &surface);
        drag.pointer_move(&PointerEvent::at(100.0, 0.0), &mut surface);
        assert_eq!(surface.scroll_left, 1600.0);
    }

    #[test]
    fn test_zero_width_viewport_is_noop() {
        let mut surface = ScrollRegion::new(0.0, 0.0, 1500.0);
        surface.scroll_left = 40.0;
        let mut drag = DragScrollController::new(2.0);
        drag.pointer_down(&PointerEvent::at(10.0, 0.0), &surface);
        let response = drag.pointer_move(&PointerEvent::at(-300.0, 0.0), &mut surface);
        assert!(response.prevent_default);
        assert_eq!(surface.scroll_left, 40.0);
    }

    #[test]
    fn test_move_while_idle_is_ignored() {
        let mut surface = gallery();
        let mut drag = DragScrollController::new(2.0);
        let response = drag.pointer_move(&PointerEvent::at(500.0, 0.0), &mut surface);
        assert!(!response.prevent_default);
        assert_eq!(surface.scroll_left, 0.0);
        assert_eq!(drag.affordance(), CursorAffordance::Grab);
    }

    #[test]
    fn test_offset_left_is_subtracted() {
        let mut surface = ScrollRegion::with_items(48.0, 1000.0, 3, 500.0, 0.0);
        let mut drag = DragScrollController::new(2.0);
        drag.pointer_down(&PointerEvent::at(848.0, 0.0), &surface);
        assert_eq!(drag.session().unwrap().origin_pointer_x, 800.0);
        drag.pointer_move(&PointerEvent::at(798.0, 0.0), &mut surface);
        assert_eq!(surface.scroll_left, 100.0);
    }

    #[test]
    fn test_affordance_while_dragging() {
        let surface = gallery();
        let mut drag = DragScrollController::new(2.0);
        drag.pointer_down(&PointerEvent::at(10.0, 0.0), &surface);
        assert_eq!(drag.affordance(), CursorAffordance::Grabbing);
    }

    #[test]
    fn test_up_from_other_pointer_is_ignored() {
        let surface = gallery();
        let mut drag = DragScrollController::new(2.0);
        drag.pointer_down(&PointerEvent::at(10.0, 0.0), &surface);
        drag.pointer_up(&PointerEvent::at(10.0, 0.0).with_pointer(PointerId(7)));
        assert!(drag.is_dragging());
    }
}
