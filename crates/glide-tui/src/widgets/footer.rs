use glide_core::geometry::Rect as PageRect;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::project;
use crate::app::{App, CELL_HEIGHT, CELL_WIDTH};

/// Repeating band text; its length divides the loop travel in cells
const BAND: &str = "GLIDE ✦ SCROLL ✦ DRAG ✦ HOVER ✦ FLING ✦ ";
const BAND_ROWS: f64 = 3.0;

pub struct FooterWidget;

impl FooterWidget {
    /// Marquee band sliding left forever, with a sign-off underneath
    pub fn render(frame: &mut Frame, page: Rect, app: &App) {
        let section = app.layout.footer.client_rect(app.scroll_y());
        let theme = &app.theme;

        let band = PageRect::new(section.x, section.y, section.width, BAND_ROWS * CELL_HEIGHT);
        if let Some(projection) = project(band, page) {
            let shift = (-app.marquee.offset(app.now()) / CELL_WIDTH).round().max(0.0) as usize;
            let text = band_text(shift, projection.cols as usize);
            let style = Style::default()
                .fg(theme.bg0)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD);
            let lines = vec![
                Line::default(),
                Line::from(Span::styled(text, style)),
                Line::default(),
            ];
            frame.render_widget(
                Paragraph::new(lines)
                    .style(Style::default().bg(theme.accent))
                    .scroll((projection.skip_rows, 0)),
                projection.area,
            );
        }

        let sign_off = PageRect::new(
            section.x,
            section.y + BAND_ROWS * CELL_HEIGHT,
            section.width,
            section.height - BAND_ROWS * CELL_HEIGHT,
        );
        if let Some(projection) = project(sign_off, page) {
            let lines = vec![
                Line::default(),
                Line::from(Span::styled("  Built with Glide", Style::default().fg(theme.grey1))),
            ];
            frame.render_widget(
                Paragraph::new(lines).scroll((projection.skip_rows, 0)),
                projection.area,
            );
        }
    }
}

/// `width` characters of the repeating band starting `shift` cells in
fn band_text(shift: usize, width: usize) -> String {
    let len = BAND.chars().count();
    BAND.chars().cycle().skip(shift % len).take(width).collect()
}
