use super::click::{ClickDispatcher, ClickShield, ClickTarget};
use super::controller::{CursorAffordance, DragScrollController, DragState};
use super::surface::{ScrollRegion, ScrollSurface};
use crate::geometry::{LayoutBox, Point};
use crate::host::{ClickEvent, EventResponse, HostEvent};

/// A drag-scrollable gallery placed on the page
///
/// Receives page-wide pointer events and delivers them the way listeners
/// bound to the gallery element would see them: pointer-down only inside its
/// bounds, pointer-leave when the pointer crosses out of it.
#[derive(Debug, Clone)]
pub struct DragViewport {
    layout: LayoutBox,
    region: ScrollRegion,
    controller: DragScrollController,
    pointer_inside: bool,
}

impl DragViewport {
    pub fn new(layout: LayoutBox, content_width: f64, controller: DragScrollController) -> Self {
        Self {
            layout,
            region: ScrollRegion::new(layout.left, layout.width, content_width),
            controller,
            pointer_inside: false,
        }
    }

    pub fn layout(&self) -> LayoutBox {
        self.layout
    }

    pub fn region(&self) -> &ScrollRegion {
        &self.region
    }

    pub fn controller(&self) -> &DragScrollController {
        &self.controller
    }

    pub fn state(&self) -> DragState {
        self.controller.state()
    }

    pub fn affordance(&self) -> CursorAffordance {
        self.controller.affordance()
    }

    pub fn scroll_left(&self) -> f64 {
        self.region.scroll_left()
    }

    pub fn is_pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    /// Move or resize the gallery; the offset is pulled back inside the new content
    pub fn relayout(&mut self, layout: LayoutBox, content_width: f64) {
        let scroll_left = self.region.scroll_left;
        self.layout = layout;
        self.region = ScrollRegion::new(layout.left, layout.width, content_width);
        self.region.scroll_left = scroll_left.clamp(0.0, self.region.max_scroll_left());
    }

    /// Scroll without a drag, e.g. from the keyboard
    pub fn scroll_by(&mut self, dx: f64) {
        let max = self.region.max_scroll_left();
        self.region.scroll_left = (self.region.scroll_left + dx).clamp(0.0, max);
    }

    /// Deliver a page pointer event with the page scrolled to `scroll_y`
    pub fn route(&mut self, event: &HostEvent, scroll_y: f64) -> EventResponse {
        let Some(pointer) = event.pointer() else {
            return EventResponse::IGNORED;
        };
        let inside = self.layout.client_rect(scroll_y).contains(pointer.position);
        let was_inside = self.pointer_inside;
        self.pointer_inside = inside && !matches!(event, HostEvent::PointerLeave(_));

        match event {
            HostEvent::PointerDown(_) | HostEvent::PointerMove(_) if inside => {
                self.controller.handle(event, &mut self.region)
            }
            // Moving out of the gallery ends the drag like a leave
            HostEvent::PointerMove(pointer) if was_inside => self.controller.pointer_leave(pointer),
            HostEvent::PointerUp(_) | HostEvent::PointerLeave(_) => {
                self.controller.handle(event, &mut self.region)
            }
            _ => EventResponse::IGNORED,
        }
    }

    /// Click on part of a card; returns the handlers that ran, innermost first
    pub fn click(&self, target: ClickTarget, position: Point) -> Vec<String> {
        let mut chain = ClickDispatcher::new();
        if target == ClickTarget::Action {
            chain.push_shield("action", ClickShield::new());
        }
        chain.push("card", |event: &mut ClickEvent| event.prevent_default());
        chain.push("gallery", |_: &mut ClickEvent| {});

        chain.dispatch(&mut ClickEvent::at(position.x, position.y))
    }

    /// Release any drag, e.g. when the view loses focus
    pub fn cancel(&mut self) {
        self.controller.cancel();
        self.pointer_inside = false;
    }
}
