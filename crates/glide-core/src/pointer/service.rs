//! Page-wide pointer subscription
//!
//! The service registers exactly one pointer-move and one pointer-over
//! listener while at least one lease is alive, and removes both when the
//! last lease is released. Mounting and unmounting trackers any number of
//! times therefore never accumulates listeners.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::host::{EventHub, EventKind, HostEvent, ListenerId};

/// Last observed pointer position and hover flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    /// Pointer is over a link, button or marked element
    pub hovering: bool,
}

pub struct PointerService {
    hub: EventHub,
    cursor: Rc<RefCell<CursorState>>,
    mounts: Cell<usize>,
    listeners: RefCell<Vec<ListenerId>>,
}

impl fmt::Debug for PointerService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerService")
            .field("cursor", &*self.cursor.borrow())
            .field("mounts", &self.mounts.get())
            .finish()
    }
}

impl PointerService {
    pub fn new(hub: EventHub) -> Rc<Self> {
        Rc::new(Self {
            hub,
            cursor: Rc::new(RefCell::new(CursorState::default())),
            mounts: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
        })
    }

    /// Current cursor state
    pub fn cursor(&self) -> CursorState {
        *self.cursor.borrow()
    }

    /// Number of live leases
    pub fn mount_count(&self) -> usize {
        self.mounts.get()
    }

    pub fn is_listening(&self) -> bool {
        !self.listeners.borrow().is_empty()
    }

    /// Take a lease on the pointer subscription, registering listeners on first use
    pub fn attach(self: &Rc<Self>) -> PointerLease {
        let mounts = self.mounts.get() + 1;
        self.mounts.set(mounts);
        if mounts == 1 {
            self.subscribe();
        }
        tracing::debug!("pointer service attached (mounts: {})", mounts);
        PointerLease {
            service: Rc::clone(self),
        }
    }

    /// Release a lease explicitly; equivalent to dropping it
    pub fn detach(&self, lease: PointerLease) {
        drop(lease);
    }

    fn release(&self) {
        let mounts = self.mounts.get().saturating_sub(1);
        self.mounts.set(mounts);
        if mounts == 0 {
            self.unsubscribe();
        }
        tracing::debug!("pointer service detached (mounts: {})", mounts);
    }

    fn subscribe(&self) {
        let mut listeners = self.listeners.borrow_mut();
        if !listeners.is_empty() {
            return;
        }

        let cursor = Rc::clone(&self.cursor);
        listeners.push(self.hub.listen(EventKind::PointerMove, move |event| {
            if let HostEvent::PointerMove(pointer) = event {
                let mut state = cursor.borrow_mut();
                state.x = pointer.position.x;
                state.y = pointer.position.y;
            }
        }));

        let cursor = Rc::clone(&self.cursor);
        listeners.push(self.hub.listen(EventKind::PointerOver, move |event| {
            if let HostEvent::PointerOver(pointer) = event {
                cursor.borrow_mut().hovering = pointer.over_interactive();
            }
        }));
    }

    fn unsubscribe(&self) {
        for id in self.listeners.borrow_mut().drain(..) {
            self.hub.unlisten(id);
        }
    }
}

/// Keeps the pointer subscription alive; releases it on drop
#[must_use = "dropping the lease detaches from the pointer service"]
pub struct PointerLease {
    service: Rc<PointerService>,
}

impl PointerLease {
    pub fn service(&self) -> &Rc<PointerService> {
        &self.service
    }
}

impl fmt::Debug for PointerLease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerLease")
            .field("mounts", &self.service.mount_count())
            .finish()
    }
}

impl Drop for PointerLease {
    fn drop(&mut self) {
        self.service.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Element, PointerEvent};

    #[test]
    fn test_single_subscription_for_many_leases() {
        let hub = EventHub::new();
        let service = PointerService::new(hub.clone());

        let a = service.attach();
        let b = service.attach();
        assert_eq!(hub.listener_count(), 2);
        assert_eq!(service.mount_count(), 2);

        drop(a);
        assert_eq!(hub.listener_count(), 2);
        service.detach(b);
        assert_eq!(hub.listener_count(), 0);
        assert!(!service.is_listening());
    }

    #[test]
    fn test_tracks_move_and_hover() {
        let hub = EventHub::new();
        let service = PointerService::new(hub.clone());
        let _lease = service.attach();

        hub.dispatch(&HostEvent::PointerMove(PointerEvent::at(40.0, 60.0)));
        hub.dispatch(&HostEvent::PointerOver(
            PointerEvent::at(40.0, 60.0).with_path(vec![Element::generic(), Element::button()]),
        ));
        assert_eq!(
            service.cursor(),
            CursorState {
                x: 40.0,
                y: 60.0,
                hovering: true
            }
        );

        hub.dispatch(&HostEvent::PointerOver(
            PointerEvent::at(40.0, 60.0).with_path(vec![Element::generic()]),
        ));
        assert!(!service.cursor().hovering);
    }

    #[test]
    fn test_events_ignored_when_detached() {
        let hub = EventHub::new();
        let service = PointerService::new(hub.clone());
        drop(service.attach());

        hub.dispatch(&HostEvent::PointerMove(PointerEvent::at(5.0, 5.0)));
        assert_eq!(service.cursor().x, 0.0);
    }
}
