use glide_core::geometry::Rect as PageRect;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{project, styled_rect};
use crate::app::{App, CELL_HEIGHT, FEATURES};

const HEADER_ROWS: f64 = 2.0;
const ROW_HEIGHT: f64 = 4.0 * CELL_HEIGHT;

pub struct FeaturesWidget;

impl FeaturesWidget {
    /// Feature list whose rows fade and rise in one after another
    pub fn render(frame: &mut Frame, page: Rect, app: &App) {
        let section = app.layout.features.client_rect(app.scroll_y());
        let theme = &app.theme;
        let now = app.now();

        let header = PageRect::new(section.x, section.y, section.width, HEADER_ROWS * CELL_HEIGHT);
        if let Some(projection) = project(header, page) {
            let line = Line::from(Span::styled(
                "  What it does",
                Style::default().fg(theme.fg1).add_modifier(Modifier::BOLD),
            ));
            frame.render_widget(
                Paragraph::new(line).scroll((projection.skip_rows, 0)),
                projection.area,
            );
        }

        for (index, feature) in FEATURES.iter().enumerate() {
            let style = app.features.style(index, now);
            let row = PageRect::new(
                section.x,
                section.y + HEADER_ROWS * CELL_HEIGHT + index as f64 * ROW_HEIGHT,
                section.width,
                ROW_HEIGHT,
            );
            let Some(projection) = project(styled_rect(row, &style), page) else {
                continue;
            };

            let lines = vec![
                Line::default(),
                Line::from(vec![
                    Span::styled("  ▸ ", Style::default().fg(theme.fade(theme.aqua, style.opacity))),
                    Span::styled(*feature, Style::default().fg(theme.fade(theme.fg0, style.opacity))),
                ]),
            ];
            frame.render_widget(
                Paragraph::new(lines).scroll((projection.skip_rows, 0)),
                projection.area,
            );
        }
    }
}
