use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::linked::{ScrollLinked, Track, VisualStyle};
use super::offset::ScrollWindow;
use crate::geometry::LayoutBox;
use crate::host::{EventKind, Host, ListenerGuard, PageMetrics};

#[derive(Debug)]
struct SectionState {
    linked: ScrollLinked,
    layout: LayoutBox,
}

impl SectionState {
    fn remeasure(&mut self, metrics: &PageMetrics) -> f64 {
        let rect = self.layout.client_rect(metrics.scroll_y());
        self.linked.measure(rect, metrics.viewport())
    }
}

/// A scroll-reactive section mounted on a host page
///
/// Listens to scroll and resize events and keeps its progress and derived
/// style current. Dropping the section removes both listeners.
pub struct ScrollSection {
    state: Rc<RefCell<SectionState>>,
    metrics: PageMetrics,
    _listeners: [ListenerGuard; 2],
}

impl fmt::Debug for ScrollSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSection")
            .field("progress", &self.progress())
            .finish()
    }
}

impl ScrollSection {
    pub fn mount(host: &Host, layout: LayoutBox, window: ScrollWindow, tracks: Vec<Track>) -> Self {
        let state = Rc::new(RefCell::new(SectionState {
            linked: ScrollLinked::new(window, tracks),
            layout,
        }));
        let metrics = host.metrics().clone();
        state.borrow_mut().remeasure(&metrics);

        let listen = |kind| {
            let state = Rc::clone(&state);
            let metrics = metrics.clone();
            host.hub().listen_scoped(kind, move |_| {
                let progress = state.borrow_mut().remeasure(&metrics);
                tracing::trace!("section progress {:.3}", progress);
            })
        };
        let listeners = [listen(EventKind::Scroll), listen(EventKind::Resize)];

        Self {
            state,
            metrics,
            _listeners: listeners,
        }
    }

    pub fn progress(&self) -> f64 {
        self.state.borrow().linked.progress()
    }

    pub fn style(&self) -> VisualStyle {
        self.state.borrow().linked.style()
    }

    pub fn layout(&self) -> LayoutBox {
        self.state.borrow().layout
    }

    /// Replace the element's layout box (content reflowed) and remeasure
    pub fn relayout(&self, layout: LayoutBox) -> f64 {
        let mut state = self.state.borrow_mut();
        state.layout = layout;
        state.remeasure(&self.metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScrollConfig;
    use crate::geometry::Viewport;
    use crate::host::HostEvent;

    fn mount(host: &Host) -> ScrollSection {
        let config = ScrollConfig::default();
        ScrollSection::mount(
            host,
            LayoutBox::new(0.0, 0.0, 1280.0, 1000.0),
            config.hero_window,
            config.hero_tracks,
        )
    }

    #[test]
    fn test_follows_scroll_events() {
        let host = Host::new(Viewport::new(1280.0, 800.0));
        let section = mount(&host);
        assert_eq!(section.progress(), 0.0);

        host.dispatch(HostEvent::Scroll { scroll_y: 500.0 });
        assert!((section.progress() - 0.5).abs() < 1e-9);
        assert!((section.style().translate_y - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_relayout_remeasures() {
        let host = Host::new(Viewport::new(1280.0, 800.0));
        let section = mount(&host);
        host.dispatch(HostEvent::Scroll { scroll_y: 500.0 });

        section.relayout(LayoutBox::new(0.0, 0.0, 1280.0, 2000.0));
        assert!((section.progress() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_drop_removes_listeners() {
        let host = Host::new(Viewport::new(1280.0, 800.0));
        let section = mount(&host);
        assert_eq!(host.hub().listener_count_for(EventKind::Scroll), 1);
        assert_eq!(host.hub().listener_count_for(EventKind::Resize), 1);
        drop(section);
        assert_eq!(host.hub().listener_count(), 0);
    }
}
