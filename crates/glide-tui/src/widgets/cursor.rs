use std::f64::consts::TAU;

use glide_core::drag::CursorAffordance;
use glide_core::pointer::MarkerFrame;
use ratatui::{layout::Rect, style::Color, Frame};

use super::cell_at;
use crate::app::App;

/// Points sampled around the ring outline
const RING_SEGMENTS: usize = 24;

pub struct CursorWidget;

impl CursorWidget {
    /// Draw the ring, then the dot on top, at their eased positions
    pub fn render(frame: &mut Frame, page: Rect, app: &App) {
        let overlay = app.tracker.overlay();
        let theme = &app.theme;

        let (cx, cy, radius) = center(&overlay.ring);
        let ring_symbol = if overlay.cursor.hovering { "•" } else { "·" };
        let mut cells: Vec<(u16, u16)> = (0..RING_SEGMENTS)
            .filter_map(|i| {
                let angle = TAU * i as f64 / RING_SEGMENTS as f64;
                cell_at(cx + radius * angle.cos(), cy + radius * angle.sin(), page)
            })
            .collect();
        cells.dedup();
        for cell in cells {
            put(frame, cell, ring_symbol, theme.cursor_ring);
        }

        let (x, y, _) = center(&overlay.dot);
        let dot_symbol = match app.gallery.affordance() {
            CursorAffordance::Grabbing => "◆",
            _ if overlay.cursor.hovering => "◉",
            _ => "●",
        };
        if let Some(cell) = cell_at(x, y, page) {
            put(frame, cell, dot_symbol, theme.cursor_dot);
        }
    }
}

/// Center point and scaled radius of a marker
fn center(marker: &MarkerFrame) -> (f64, f64, f64) {
    let half = marker.size / 2.0;
    (marker.x + half, marker.y + half, half * marker.scale)
}

fn put(frame: &mut Frame, (x, y): (u16, u16), symbol: &str, color: Color) {
    if let Some(cell) = frame.buffer_mut().cell_mut((x, y)) {
        cell.set_symbol(symbol).set_fg(color);
    }
}
