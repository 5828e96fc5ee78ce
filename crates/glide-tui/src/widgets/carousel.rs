use glide_core::drag::CursorAffordance;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{project, styled_rect};
use crate::app::{App, CARDS, CARD_ACTION_WIDTH, CELL_WIDTH};

const ACTION_LABEL: &str = "[* Star ]";

pub struct CarouselWidget;

impl CarouselWidget {
    pub fn render(frame: &mut Frame, page: Rect, app: &App) {
        let gallery = app.gallery.layout().client_rect(app.scroll_y());
        // Cards are clipped to the gallery viewport, not just the page
        let Some(viewport) = project(gallery, page) else {
            return;
        };
        let theme = &app.theme;
        let now = app.now();
        let action_cols = (CARD_ACTION_WIDTH / CELL_WIDTH) as usize;

        for (index, card) in CARDS.iter().enumerate() {
            let style = app.cards.style(index, now);
            let rect = styled_rect(app.card_rect(index), &style);
            let Some(projection) = project(rect, viewport.area) else {
                continue;
            };

            let fg = theme.fade(theme.fg0, style.opacity);
            let title = theme.fade(theme.orange, style.opacity);
            let background = theme.fade(theme.card, style.opacity);
            let cols = projection.cols as usize;

            let mut lines = vec![
                Line::default(),
                Line::from(Span::styled(
                    format!("  {}", card.title),
                    Style::default().fg(title).add_modifier(Modifier::BOLD),
                )),
                Line::default(),
                Line::from(Span::styled(format!("  {}", card.blurb), Style::default().fg(fg))),
            ];
            let rows = projection.rows as usize;
            while lines.len() + 1 < rows {
                lines.push(Line::default());
            }
            let pad = cols.saturating_sub(action_cols);
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(pad)),
                Span::styled(
                    ACTION_LABEL,
                    Style::default()
                        .fg(theme.fade(theme.bg0, style.opacity))
                        .bg(theme.fade(theme.aqua, style.opacity)),
                ),
            ]));

            let paragraph = Paragraph::new(lines)
                .style(Style::default().bg(background))
                .scroll((projection.skip_rows, projection.skip_cols));
            frame.render_widget(paragraph, projection.area);
        }

        let hint = match app.gallery.affordance() {
            CursorAffordance::Grabbing => "grabbing",
            CursorAffordance::Grab => "drag to scroll",
            CursorAffordance::Default => "",
        };
        if !hint.is_empty() && viewport.skip_rows == 0 && viewport.area.y > page.y {
            let label = Rect::new(viewport.area.x, viewport.area.y - 1, viewport.area.width, 1);
            frame.render_widget(
                Paragraph::new(Span::styled(hint, Style::default().fg(theme.grey1))),
                label,
            );
        }
    }
}
