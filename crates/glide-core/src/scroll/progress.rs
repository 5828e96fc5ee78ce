use super::offset::{ScrollOffset, ScrollWindow};
use crate::geometry::{Rect, Viewport};

/// Normalized scroll progress of one element through a [`ScrollWindow`]
///
/// Progress is recomputed from measured geometry on every call and never
/// accumulated, so equal geometry always yields equal progress.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollProgressMapper {
    window: ScrollWindow,
    progress: f64,
}

impl ScrollProgressMapper {
    pub fn new(window: ScrollWindow) -> Self {
        Self {
            window,
            progress: 0.0,
        }
    }

    pub fn window(&self) -> &ScrollWindow {
        &self.window
    }

    /// Progress as of the last [`measure`](Self::measure)
    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Recompute progress from the element's viewport-relative rect
    pub fn measure(&mut self, rect: Rect, viewport: Viewport) -> f64 {
        self.progress = Self::compute(&self.window, rect, viewport);
        self.progress
    }

    /// Pure progress computation
    ///
    /// For each anchor, the remaining distance is how far the page still has
    /// to scroll before the element edge meets the viewport edge. Progress is
    /// the fraction of the start-to-end distance already covered, clamped to
    /// `[0, 1]`.
    pub fn compute(window: &ScrollWindow, rect: Rect, viewport: Viewport) -> f64 {
        let start = remaining(&window.start, rect, viewport);
        let end = remaining(&window.end, rect, viewport);
        let span = start - end;

        if !span.is_finite() || span.abs() < f64::EPSILON {
            // Zero-length window: pinned to 0 until the start anchor is reached
            return if start > 0.0 { 0.0 } else { 1.0 };
        }

        (start / span).clamp(0.0, 1.0)
    }
}

/// Scroll distance left until `offset` holds
#[inline]
fn remaining(offset: &ScrollOffset, rect: Rect, viewport: Viewport) -> f64 {
    rect.top() + offset.target.fraction() * rect.height
        - offset.container.fraction() * viewport.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::LayoutBox;

    const VIEWPORT: Viewport = Viewport::new(1280.0, 800.0);

    fn hero_at(top: f64) -> Rect {
        Rect::new(0.0, top, 1280.0, 1000.0)
    }

    #[test]
    fn test_section_below_viewport_top_is_zero() {
        let progress = ScrollProgressMapper::compute(&ScrollWindow::default(), hero_at(500.0), VIEWPORT);
        assert_eq!(progress, 0.0);
    }

    #[test]
    fn test_bottom_at_viewport_top_is_one() {
        let progress =
            ScrollProgressMapper::compute(&ScrollWindow::default(), hero_at(-1000.0), VIEWPORT);
        assert!((progress - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_halfway() {
        let progress =
            ScrollProgressMapper::compute(&ScrollWindow::default(), hero_at(-250.0), VIEWPORT);
        assert!((progress - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_enter_to_exit_window() {
        // Element travels from entering at the bottom to leaving at the top
        let window = ScrollWindow::parse("start end", "end start").unwrap();
        let rect = Rect::new(0.0, 800.0, 100.0, 200.0);
        assert_eq!(ScrollProgressMapper::compute(&window, rect, VIEWPORT), 0.0);

        let rect = Rect::new(0.0, 300.0, 100.0, 200.0);
        assert!((ScrollProgressMapper::compute(&window, rect, VIEWPORT) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_measure_is_idempotent() {
        let layout = LayoutBox::new(0.0, 0.0, 1280.0, 1000.0);
        let mut mapper = ScrollProgressMapper::new(ScrollWindow::default());
        let first = mapper.measure(layout.client_rect(420.0), VIEWPORT);
        mapper.measure(layout.client_rect(900.0), VIEWPORT);
        let again = mapper.measure(layout.client_rect(420.0), VIEWPORT);
        assert_eq!(first, again);
        assert_eq!(mapper.progress(), again);
    }

    #[test]
    fn test_zero_height_does_not_divide_by_zero() {
        let window = ScrollWindow::default();
        let before = ScrollProgressMapper::compute(&window, Rect::new(0.0, 10.0, 100.0, 0.0), VIEWPORT);
        let after = ScrollProgressMapper::compute(&window, Rect::new(0.0, -10.0, 100.0, 0.0), VIEWPORT);
        assert_eq!(before, 0.0);
        assert_eq!(after, 1.0);
        assert!(ScrollProgressMapper::compute(&window, Rect::new(0.0, 0.0, 100.0, 0.0), VIEWPORT)
            .is_finite());
    }
}
