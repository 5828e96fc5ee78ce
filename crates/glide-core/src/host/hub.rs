//! Global listener table of the host page
//!
//! Listeners are stored behind `Rc<RefCell<..>>` and the table is
//! snapshotted before each dispatch, so a listener may register or remove
//! listeners (including itself) while an event is being delivered. A
//! listener removed mid-dispatch is not called for the rest of that dispatch.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use uuid::Uuid;

use super::event::{EventKind, HostEvent};

/// Handle to one registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(Uuid);

impl ListenerId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

type Callback = Rc<RefCell<dyn FnMut(&HostEvent)>>;

struct Registration {
    id: ListenerId,
    kind: EventKind,
    callback: Callback,
}

#[derive(Default)]
struct HubInner {
    listeners: Vec<Registration>,
}

/// Cheaply cloneable handle to the page's listener table
#[derive(Clone, Default)]
pub struct EventHub {
    inner: Rc<RefCell<HubInner>>,
}

impl fmt::Debug for EventHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for events of `kind`
    pub fn listen<F>(&self, kind: EventKind, callback: F) -> ListenerId
    where
        F: FnMut(&HostEvent) + 'static,
    {
        let id = ListenerId::new();
        self.inner.borrow_mut().listeners.push(Registration {
            id,
            kind,
            callback: Rc::new(RefCell::new(callback)),
        });
        tracing::trace!("listener {} registered for {:?}", id, kind);
        id
    }

    /// Register a listener that is removed when the returned guard drops
    pub fn listen_scoped<F>(&self, kind: EventKind, callback: F) -> ListenerGuard
    where
        F: FnMut(&HostEvent) + 'static,
    {
        let id = self.listen(kind, callback);
        ListenerGuard {
            hub: self.clone(),
            id: Some(id),
        }
    }

    /// Remove a listener; returns false if it was not registered
    pub fn unlisten(&self, id: ListenerId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|reg| reg.id != id);
        let removed = inner.listeners.len() != before;
        if removed {
            tracing::trace!("listener {} removed", id);
        }
        removed
    }

    pub fn is_registered(&self, id: ListenerId) -> bool {
        self.inner.borrow().listeners.iter().any(|reg| reg.id == id)
    }

    /// Total registered listeners across all kinds
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn listener_count_for(&self, kind: EventKind) -> usize {
        self.inner
            .borrow()
            .listeners
            .iter()
            .filter(|reg| reg.kind == kind)
            .count()
    }

    /// Deliver `event` to every listener of its kind, in registration order
    ///
    /// Returns the number of listeners that were called.
    pub fn dispatch(&self, event: &HostEvent) -> usize {
        let kind = event.kind();
        let snapshot: Vec<(ListenerId, Callback)> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .filter(|reg| reg.kind == kind)
            .map(|reg| (reg.id, Rc::clone(&reg.callback)))
            .collect();

        let mut called = 0;
        for (id, callback) in snapshot {
            if !self.is_registered(id) {
                continue;
            }
            // A listener that re-enters its own dispatch is skipped rather than panicking
            if let Ok(mut callback) = callback.try_borrow_mut() {
                (&mut *callback)(event);
                called += 1;
            }
        }
        called
    }
}

/// Removes its listener on drop
#[must_use = "dropping the guard removes the listener immediately"]
pub struct ListenerGuard {
    hub: EventHub,
    id: Option<ListenerId>,
}

impl ListenerGuard {
    pub fn id(&self) -> Option<ListenerId> {
        self.id
    }

    /// Remove the listener now
    pub fn release(mut self) {
        self.remove();
    }

    fn remove(&mut self) {
        if let Some(id) = self.id.take() {
            self.hub.unlisten(id);
        }
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard").field("id", &self.id).finish()
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.remove();
    }
}
