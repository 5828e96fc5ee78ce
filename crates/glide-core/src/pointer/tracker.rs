use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::Serialize;

use super::service::{CursorState, PointerLease};
use crate::config::{CursorConfig, MarkerConfig};
use crate::host::{FrameHandle, Host};
use crate::motion::{Spring, Spring2D};

/// Where to draw one overlay marker this frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkerFrame {
    /// Translation of the marker's top-left corner
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    /// Unscaled diameter
    pub size: f64,
}

/// Both cursor markers plus the state they were computed from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverlayFrame {
    pub dot: MarkerFrame,
    pub ring: MarkerFrame,
    pub cursor: CursorState,
}

#[derive(Debug)]
struct Marker {
    size: f64,
    hover_scale: f64,
    position: Spring2D,
    scale: Spring,
}

impl Marker {
    fn new(config: &MarkerConfig, cursor: CursorState) -> Self {
        let offset = config.size / 2.0;
        Self {
            size: config.size,
            hover_scale: config.hover_scale,
            position: Spring2D::new(config.spring(), cursor.x - offset, cursor.y - offset),
            scale: Spring::new(config.spring(), 1.0),
        }
    }

    /// Retarget at the cursor (marker centered on it) and integrate `dt` seconds
    fn follow(&mut self, cursor: CursorState, dt: f64) {
        let offset = self.size / 2.0;
        self.position.set_target(cursor.x - offset, cursor.y - offset);
        self.scale
            .set_target(if cursor.hovering { self.hover_scale } else { 1.0 });
        self.position.step(dt);
        self.scale.step(dt);
    }

    fn frame(&self) -> MarkerFrame {
        let (x, y) = self.position.position();
        MarkerFrame {
            x,
            y,
            scale: self.scale.position(),
            size: self.size,
        }
    }

    fn is_settled(&self) -> bool {
        self.position.is_settled() && self.scale.is_settled()
    }
}

#[derive(Debug)]
struct Overlay {
    dot: Marker,
    ring: Marker,
    cursor: CursorState,
}

/// Cursor overlay for one mounted view
///
/// Mounting takes a lease on the host's pointer service and requests a frame
/// callback that eases both markers toward the latest cursor state. Dropping
/// the tracker cancels the frame callback and releases the lease, so nothing
/// of it runs after unmount.
pub struct PointerTracker {
    overlay: Rc<RefCell<Overlay>>,
    // Field order matters: the frame callback is cancelled before the lease is released
    _frame: FrameHandle,
    lease: PointerLease,
}

impl fmt::Debug for PointerTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerTracker")
            .field("overlay", &self.overlay())
            .finish()
    }
}

impl PointerTracker {
    pub fn mount(host: &Host, config: &CursorConfig) -> Self {
        let lease = host.pointer_service().attach();
        let cursor = lease.service().cursor();
        let overlay = Rc::new(RefCell::new(Overlay {
            dot: Marker::new(&config.dot, cursor),
            ring: Marker::new(&config.ring, cursor),
            cursor,
        }));

        let service = Rc::clone(lease.service());
        let animated = Rc::clone(&overlay);
        let frame = host.frames().request(move |time| {
            // Every event dispatched before this frame is already folded into the service state
            let cursor = service.cursor();
            let mut overlay = animated.borrow_mut();
            overlay.cursor = cursor;
            overlay.dot.follow(cursor, time.dt);
            overlay.ring.follow(cursor, time.dt);
        });

        Self {
            overlay,
            _frame: frame,
            lease,
        }
    }

    /// Raw cursor state as of the last dispatched event
    pub fn cursor(&self) -> CursorState {
        self.lease.service().cursor()
    }

    /// Marker positions as of the last frame
    pub fn overlay(&self) -> OverlayFrame {
        let overlay = self.overlay.borrow();
        OverlayFrame {
            dot: overlay.dot.frame(),
            ring: overlay.ring.frame(),
            cursor: overlay.cursor,
        }
    }

    /// Both markers are at rest on their targets
    pub fn is_settled(&self) -> bool {
        let overlay = self.overlay.borrow();
        overlay.dot.is_settled() && overlay.ring.is_settled()
    }

    /// Unmount explicitly; equivalent to dropping the tracker
    pub fn unmount(self) {}
}
