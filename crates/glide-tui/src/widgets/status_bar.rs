use glide_core::drag::CursorAffordance;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let mode_str = match app.gallery.affordance() {
            CursorAffordance::Grabbing => "GRABBING",
            CursorAffordance::Grab => "GRAB",
            CursorAffordance::Default => "BROWSE",
        };

        let max = app.max_scroll();
        let scrolled = if max > 0.0 {
            app.scroll_y() / max * 100.0
        } else {
            0.0
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {} | {}", mode_str, msg)
        } else {
            format!(
                " {} | Page: {:.0}% | Hero: {:.2} | Gallery: {:.0}px | Listeners: {}",
                mode_str,
                scrolled,
                app.hero.progress(),
                app.gallery.scroll_left(),
                app.host.hub().listener_count(),
            )
        };

        let help_hint = " q:quit j/k:scroll h/l:gallery drag:grab ";
        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey1).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
