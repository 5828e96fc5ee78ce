/// A horizontally scrollable viewport the drag controller writes to
pub trait ScrollSurface {
    /// Current horizontal scroll offset
    fn scroll_left(&self) -> f64;

    /// Write a new offset; the controller has already applied its bounds policy
    fn set_scroll_left(&mut self, offset: f64);

    /// Left edge of the viewport in the same coordinate space as pointer events
    fn offset_left(&self) -> f64;

    /// Visible width of the viewport
    fn viewport_width(&self) -> f64;

    /// Total width of the scrolled content
    fn content_width(&self) -> f64;

    /// Largest offset that still shows content at the right edge
    fn max_scroll_left(&self) -> f64 {
        (self.content_width() - self.viewport_width()).max(0.0)
    }
}

/// Plain in-memory scroll region
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollRegion {
    pub offset_left: f64,
    pub viewport_width: f64,
    pub content_width: f64,
    pub scroll_left: f64,
}

impl ScrollRegion {
    pub fn new(offset_left: f64, viewport_width: f64, content_width: f64) -> Self {
        Self {
            offset_left,
            viewport_width,
            content_width,
            scroll_left: 0.0,
        }
    }

    /// Region holding `count` items of `item_width` separated by `gap`
    pub fn with_items(offset_left: f64, viewport_width: f64, count: usize, item_width: f64, gap: f64) -> Self {
        let gaps = count.saturating_sub(1) as f64 * gap;
        Self::new(offset_left, viewport_width, count as f64 * item_width + gaps)
    }
}

impl ScrollSurface for ScrollRegion {
    fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    fn set_scroll_left(&mut self, offset: f64) {
        self.scroll_left = offset;
    }

    fn offset_left(&self) -> f64 {
        self.offset_left
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn content_width(&self) -> f64 {
        self.content_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_scroll_left() {
        let region = ScrollRegion::with_items(0.0, 1000.0, 3, 500.0, 0.0);
        assert_eq!(region.max_scroll_left(), 500.0);

        let narrow = ScrollRegion::new(0.0, 1000.0, 400.0);
        assert_eq!(narrow.max_scroll_left(), 0.0);
    }

    #[test]
    fn test_gaps_count_between_items() {
        let region = ScrollRegion::with_items(0.0, 1000.0, 4, 300.0, 24.0);
        assert_eq!(region.content_width, 1272.0);
    }
}
