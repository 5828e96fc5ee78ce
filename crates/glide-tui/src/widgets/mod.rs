mod carousel;
mod cursor;
mod features;
mod footer;
mod hero;
mod navbar;
mod status_bar;

pub use carousel::CarouselWidget;
pub use cursor::CursorWidget;
pub use features::FeaturesWidget;
pub use footer::FooterWidget;
pub use hero::HeroWidget;
pub use navbar::NavbarWidget;
pub use status_bar::StatusBarWidget;

use glide_core::geometry::Rect as PageRect;
use glide_core::scroll::VisualStyle;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::{App, CELL_HEIGHT, CELL_WIDTH};

/// Split the terminal into the page area and the status bar
pub fn page_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Draw the whole showcase, back to front
pub fn render(frame: &mut Frame, app: &App) {
    let (page, status) = page_layout(frame.area());

    HeroWidget::render(frame, page, app);
    FeaturesWidget::render(frame, page, app);
    CarouselWidget::render(frame, page, app);
    FooterWidget::render(frame, page, app);
    NavbarWidget::render(frame, page, app);
    CursorWidget::render(frame, page, app);
    StatusBarWidget::render(frame, status, app);
}

/// A page rect mapped onto terminal cells and clipped to the visible bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Projection {
    pub area: Rect,
    /// Rows and columns of the unclipped rect cut off at the top and left
    pub skip_rows: u16,
    pub skip_cols: u16,
    /// Unclipped size in cells
    pub rows: u16,
    pub cols: u16,
}

pub(crate) fn project(rect: PageRect, bounds: Rect) -> Option<Projection> {
    let left = bounds.x as i32 + (rect.left() / CELL_WIDTH).round() as i32;
    let top = bounds.y as i32 + (rect.top() / CELL_HEIGHT).round() as i32;
    let right = bounds.x as i32 + (rect.right() / CELL_WIDTH).round() as i32;
    let bottom = bounds.y as i32 + (rect.bottom() / CELL_HEIGHT).round() as i32;

    let clip_left = left.max(bounds.left() as i32);
    let clip_top = top.max(bounds.top() as i32);
    let clip_right = right.min(bounds.right() as i32);
    let clip_bottom = bottom.min(bounds.bottom() as i32);
    if clip_left >= clip_right || clip_top >= clip_bottom {
        return None;
    }

    Some(Projection {
        area: Rect::new(
            clip_left as u16,
            clip_top as u16,
            (clip_right - clip_left) as u16,
            (clip_bottom - clip_top) as u16,
        ),
        skip_rows: (clip_top - top) as u16,
        skip_cols: (clip_left - left) as u16,
        rows: (bottom - top).max(0) as u16,
        cols: (right - left).max(0) as u16,
    })
}

/// Apply a style's translation and its scale around the rect's center
pub(crate) fn styled_rect(rect: PageRect, style: &VisualStyle) -> PageRect {
    let width = rect.width * style.scale;
    let height = rect.height * style.scale;
    PageRect::new(
        rect.x + (rect.width - width) / 2.0 + style.translate_x,
        rect.y + (rect.height - height) / 2.0 + style.translate_y,
        width,
        height,
    )
}

/// Cell containing a page point, if it is inside `bounds`
pub(crate) fn cell_at(x: f64, y: f64, bounds: Rect) -> Option<(u16, u16)> {
    let col = bounds.x as f64 + (x / CELL_WIDTH).floor();
    let row = bounds.y as f64 + (y / CELL_HEIGHT).floor();
    let inside = col >= bounds.left() as f64
        && col < bounds.right() as f64
        && row >= bounds.top() as f64
        && row < bounds.bottom() as f64;
    inside.then_some((col as u16, row as u16))
}
