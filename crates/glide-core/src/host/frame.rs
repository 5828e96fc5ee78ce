//! Per-frame animation callbacks
//!
//! The host calls [`FrameLoop::tick`] once per rendered frame, after all
//! input events for that frame have been dispatched. Callbacks stay
//! registered until their [`FrameHandle`] is dropped or cancelled; a
//! cancelled callback never runs again, not even later in the same tick.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use uuid::Uuid;

/// Timing information passed to frame callbacks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous frame
    pub dt: f64,
    /// Time since the loop started
    pub elapsed: Duration,
    /// Frame counter, starting at 1
    pub frame: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameCallbackId(Uuid);

type FrameCallback = Rc<RefCell<dyn FnMut(FrameTime)>>;

#[derive(Default)]
struct FrameInner {
    callbacks: Vec<(FrameCallbackId, FrameCallback)>,
    elapsed: Duration,
    frame: u64,
}

/// Cheaply cloneable handle to the page's animation frame loop
#[derive(Clone, Default)]
pub struct FrameLoop {
    inner: Rc<RefCell<FrameInner>>,
}

impl fmt::Debug for FrameLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("FrameLoop")
            .field("callbacks", &inner.callbacks.len())
            .field("frame", &inner.frame)
            .finish()
    }
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `callback` on every frame until the handle is dropped
    pub fn request<F>(&self, callback: F) -> FrameHandle
    where
        F: FnMut(FrameTime) + 'static,
    {
        let id = FrameCallbackId(Uuid::new_v4());
        self.inner
            .borrow_mut()
            .callbacks
            .push((id, Rc::new(RefCell::new(callback))));
        FrameHandle {
            frames: self.clone(),
            id: Some(id),
        }
    }

    fn cancel(&self, id: FrameCallbackId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.callbacks.len();
        inner.callbacks.retain(|(cb_id, _)| *cb_id != id);
        inner.callbacks.len() != before
    }

    fn is_pending(&self, id: FrameCallbackId) -> bool {
        self.inner
            .borrow()
            .callbacks
            .iter()
            .any(|(cb_id, _)| *cb_id == id)
    }

    /// Number of callbacks that will run on the next tick
    pub fn pending_count(&self) -> usize {
        self.inner.borrow().callbacks.len()
    }

    pub fn frame_count(&self) -> u64 {
        self.inner.borrow().frame
    }

    /// Advance one frame of `dt` and run every pending callback
    pub fn tick(&self, dt: Duration) -> FrameTime {
        let (time, snapshot) = {
            let mut inner = self.inner.borrow_mut();
            inner.elapsed = inner.elapsed.saturating_add(dt);
            inner.frame += 1;
            let time = FrameTime {
                dt: dt.as_secs_f64(),
                elapsed: inner.elapsed,
                frame: inner.frame,
            };
            let snapshot: Vec<(FrameCallbackId, FrameCallback)> = inner
                .callbacks
                .iter()
                .map(|(id, cb)| (*id, Rc::clone(cb)))
                .collect();
            (time, snapshot)
        };

        for (id, callback) in snapshot {
            if !self.is_pending(id) {
                continue;
            }
            if let Ok(mut callback) = callback.try_borrow_mut() {
                (&mut *callback)(time);
            }
        }
        time
    }
}

/// Cancels its frame callback when dropped
#[must_use = "dropping the handle cancels the callback immediately"]
pub struct FrameHandle {
    frames: FrameLoop,
    id: Option<FrameCallbackId>,
}

impl FrameHandle {
    pub fn is_active(&self) -> bool {
        self.id.is_some_and(|id| self.frames.is_pending(id))
    }

    pub fn cancel(mut self) {
        self.remove();
    }

    fn remove(&mut self) {
        if let Some(id) = self.id.take() {
            self.frames.cancel(id);
        }
    }
}

impl fmt::Debug for FrameHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameHandle")
            .field("active", &self.id.is_some())
            .finish()
    }
}

impl Drop for FrameHandle {
    fn drop(&mut self) {
        self.remove();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn test_callback_runs_each_tick() {
        let frames = FrameLoop::new();
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let _handle = frames.request(move |_| counter.set(counter.get() + 1));

        frames.tick(FRAME);
        frames.tick(FRAME);
        assert_eq!(count.get(), 2);
        assert_eq!(frames.frame_count(), 2);
    }

    #[test]
    fn test_dropped_handle_never_fires() {
        let frames = FrameLoop::new();
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let handle = frames.request(move |_| counter.set(counter.get() + 1));
        frames.tick(FRAME);
        assert!(handle.is_active());
        drop(handle);

        frames.tick(FRAME);
        assert_eq!(count.get(), 1);
        assert_eq!(frames.pending_count(), 0);
    }

    #[test]
    fn test_callback_cancelled_mid_tick_is_skipped() {
        let frames = FrameLoop::new();
        let slot: Rc<RefCell<Option<FrameHandle>>> = Rc::new(RefCell::new(None));
        let first_runs = Rc::new(Cell::new(0));
        let second_runs = Rc::new(Cell::new(0));

        let cancel_slot = Rc::clone(&slot);
        let first_counter = Rc::clone(&first_runs);
        let _first = frames.request(move |_| {
            first_counter.set(first_counter.get() + 1);
            // Dropping the taken handle cancels the second callback
            drop(cancel_slot.borrow_mut().take());
        });
        let second_counter = Rc::clone(&second_runs);
        let second = frames.request(move |_| second_counter.set(second_counter.get() + 1));
        *slot.borrow_mut() = Some(second);
        assert_eq!(frames.pending_count(), 2);

        frames.tick(FRAME);
        assert_eq!(first_runs.get(), 1);
        assert_eq!(second_runs.get(), 0);
        assert_eq!(frames.pending_count(), 1);

        frames.tick(FRAME);
        assert_eq!(first_runs.get(), 2);
        assert_eq!(second_runs.get(), 0);
    }

    #[test]
    fn test_cancel_deactivates_handle() {
        let frames = FrameLoop::new();
        let handle = frames.request(|_| {});
        let other = frames.request(|_| {});
        assert!(handle.is_active());
        handle.cancel();
        assert!(other.is_active());
        assert_eq!(frames.pending_count(), 1);
    }

    #[test]
    fn test_elapsed_saturates() {
        let frames = FrameLoop::new();
        frames.tick(Duration::MAX);
        let time = frames.tick(FRAME);
        assert_eq!(time.elapsed, Duration::MAX);
    }

    #[test]
    fn test_frame_time() {
        let frames = FrameLoop::new();
        frames.tick(Duration::from_millis(10));
        let time = frames.tick(Duration::from_millis(20));
        assert_eq!(time.frame, 2);
        assert_eq!(time.elapsed, Duration::from_millis(30));
        assert!((time.dt - 0.02).abs() < 1e-9);
    }
}
