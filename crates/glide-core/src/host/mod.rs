//! In-process model of the page the motion layer runs in
//!
//! A [`Host`] bundles what a browser page would provide: a global listener
//! table ([`EventHub`]), an animation frame loop ([`FrameLoop`]), the current
//! scroll position and viewport size, and the page-wide pointer service.
//!
//! Everything here is `Rc`-based and therefore `!Send`: the whole layer runs
//! on one thread, the way event handlers and frame callbacks do in a page.

pub mod event;
pub mod frame;
pub mod hub;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

pub use event::{
    ClickEvent, Element, ElementRole, EventKind, EventResponse, HostEvent, PointerEvent, PointerId,
};
pub use frame::{FrameHandle, FrameLoop, FrameTime};
pub use hub::{EventHub, ListenerGuard, ListenerId};

use crate::geometry::Viewport;
use crate::pointer::PointerService;

/// Scroll position and viewport size of the page
///
/// A separate handle so listeners can read page state without holding the
/// [`Host`] (which owns the listener table they live in).
#[derive(Debug, Clone)]
pub struct PageMetrics {
    scroll_y: Rc<Cell<f64>>,
    viewport: Rc<Cell<Viewport>>,
}

impl PageMetrics {
    fn new(viewport: Viewport) -> Self {
        Self {
            scroll_y: Rc::new(Cell::new(0.0)),
            viewport: Rc::new(Cell::new(viewport)),
        }
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport.get()
    }
}

/// One page lifetime
#[derive(Debug, Clone)]
pub struct Host {
    hub: EventHub,
    frames: FrameLoop,
    pointer: Rc<PointerService>,
    metrics: PageMetrics,
}

impl Host {
    pub fn new(viewport: Viewport) -> Self {
        let hub = EventHub::new();
        let pointer = PointerService::new(hub.clone());
        Self {
            hub,
            frames: FrameLoop::new(),
            pointer,
            metrics: PageMetrics::new(viewport),
        }
    }

    pub fn hub(&self) -> &EventHub {
        &self.hub
    }

    pub fn frames(&self) -> &FrameLoop {
        &self.frames
    }

    /// The single pointer subscription shared by every mounted tracker
    pub fn pointer_service(&self) -> &Rc<PointerService> {
        &self.pointer
    }

    pub fn metrics(&self) -> &PageMetrics {
        &self.metrics
    }

    pub fn scroll_y(&self) -> f64 {
        self.metrics.scroll_y()
    }

    pub fn viewport(&self) -> Viewport {
        self.metrics.viewport()
    }

    /// Record page state carried by `event`, then deliver it to listeners
    pub fn dispatch(&self, event: HostEvent) -> usize {
        match &event {
            HostEvent::Scroll { scroll_y } => self.metrics.scroll_y.set(scroll_y.max(0.0)),
            HostEvent::Resize { viewport } => self.metrics.viewport.set(*viewport),
            _ => {}
        }
        self.hub.dispatch(&event)
    }

    /// Run one animation frame
    pub fn frame(&self, dt: Duration) -> FrameTime {
        self.frames.tick(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_records_scroll_and_viewport() {
        let host = Host::new(Viewport::new(1280.0, 800.0));
        host.dispatch(HostEvent::Scroll { scroll_y: 240.0 });
        host.dispatch(HostEvent::Resize {
            viewport: Viewport::new(640.0, 480.0),
        });
        assert_eq!(host.scroll_y(), 240.0);
        assert_eq!(host.viewport(), Viewport::new(640.0, 480.0));
    }

    #[test]
    fn test_negative_scroll_is_clamped() {
        // Overscroll bounce on some platforms reports negative offsets
        let host = Host::new(Viewport::new(1280.0, 800.0));
        host.dispatch(HostEvent::Scroll { scroll_y: -30.0 });
        assert_eq!(host.scroll_y(), 0.0);
    }
}
