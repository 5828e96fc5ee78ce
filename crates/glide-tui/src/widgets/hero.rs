use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{project, styled_rect};
use crate::app::{App, CELL_HEIGHT};
use crate::theme::blend;

const TITLE: [&str; 5] = [
    " ██████  ██      ██ ██████  ███████",
    "██       ██      ██ ██   ██ ██     ",
    "██   ███ ██      ██ ██   ██ █████  ",
    "██    ██ ██      ██ ██   ██ ██     ",
    " ██████  ███████ ██ ██████  ███████",
];

pub struct HeroWidget;

impl HeroWidget {
    /// Hero drifts down, fades out and shrinks as it scrolls away
    pub fn render(frame: &mut Frame, page: Rect, app: &App) {
        let style = app.hero.style();
        if style.opacity <= 0.0 {
            return;
        }
        let rect = styled_rect(app.hero.layout().client_rect(app.scroll_y()), &style);
        let Some(projection) = project(rect, page) else {
            return;
        };

        let theme = &app.theme;
        let title_color = theme.fade(theme.yellow, style.opacity);
        let text_color = theme.fade(theme.fg0, style.opacity);
        let hint_color = theme.fade(theme.grey1, style.opacity);
        let background = blend(theme.bg0, theme.bg1, style.opacity);

        let now = app.now();
        let intro = &app.intro;
        let title: Vec<Line> = TITLE
            .iter()
            .map(|row| {
                Line::from(Span::styled(
                    *row,
                    Style::default().fg(title_color).add_modifier(Modifier::BOLD),
                ))
            })
            .collect();
        let tagline = vec![Line::from(Span::styled(
            "Motion that follows your hand",
            Style::default().fg(text_color),
        ))];
        let hint = vec![Line::from(Span::styled(
            "scroll to begin  ·  hover the links  ·  drag the gallery",
            Style::default().fg(hint_color),
        ))];

        // Each block rises into its own clipped window
        let mut lines = Vec::new();
        for (index, block) in [title, tagline, hint].into_iter().enumerate() {
            if index > 0 {
                lines.push(Line::default());
            }
            lines.extend(rise_into_window(block, intro.line_offset(index, now)));
        }

        // Center vertically within the unclipped hero
        let rows = projection.rows as usize;
        let padding = rows.saturating_sub(lines.len()) / 2;
        let mut content = vec![Line::default(); padding];
        content.extend(lines);

        // Scroll cue pinned near the bottom edge
        let cue_color = theme.fade(theme.grey0, style.opacity * intro.cue_opacity(now));
        let cue = scroll_cue(intro.cue_offset(now), Style::default().fg(cue_color));
        let cue_top = rows.saturating_sub(cue.len() + 1);
        if cue_top > content.len() {
            content.resize(cue_top, Line::default());
            content.extend(cue);
        }

        let paragraph = Paragraph::new(content)
            .alignment(Alignment::Center)
            .style(Style::default().bg(background))
            .scroll((projection.skip_rows, 0));
        frame.render_widget(paragraph, projection.area);
    }
}

/// Rows of `block` shifted down by `offset` page pixels inside a window of
/// its own height; rows pushed past the bottom are hidden
fn rise_into_window(block: Vec<Line<'static>>, offset: f64) -> Vec<Line<'static>> {
    let height = block.len();
    let shift = ((offset / CELL_HEIGHT).round().max(0.0) as usize).min(height);
    let mut rows = vec![Line::default(); shift];
    rows.extend(block.into_iter().take(height - shift));
    rows
}

const CUE_ROWS: usize = 3;

/// "scroll" label over a short bar bouncing `offset` page pixels down
fn scroll_cue(offset: f64, style: Style) -> Vec<Line<'static>> {
    let shift = ((offset / CELL_HEIGHT).round().max(0.0) as usize).min(1);
    let mut rows = vec![Line::from(Span::styled("scroll", style))];
    rows.extend(vec![Line::default(); shift]);
    rows.extend(vec![Line::from(Span::styled("│", style)); CUE_ROWS - 1]);
    rows.extend(vec![Line::default(); 1 - shift]);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_rise_into_window() {
        let block = vec![Line::from("a"), Line::from("b"), Line::from("c")];
        assert_eq!(text(&rise_into_window(block.clone(), 0.0)), ["a", "b", "c"]);
        assert_eq!(text(&rise_into_window(block.clone(), 20.0)), ["", "a", "b"]);
        assert_eq!(text(&rise_into_window(block, 200.0)), ["", "", ""]);
    }

    #[test]
    fn test_scroll_cue_bounce() {
        let rest = scroll_cue(0.0, Style::default());
        let low = scroll_cue(10.0, Style::default());
        assert_eq!(rest.len(), low.len());
        assert_eq!(text(&rest), ["scroll", "│", "│", ""]);
        assert_eq!(text(&low), ["scroll", "", "│", "│"]);
    }
}
