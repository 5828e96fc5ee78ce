use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

const LINKS: &str = "Work   About   Contact  ";

pub struct NavbarWidget;

impl NavbarWidget {
    /// Transparent over the hero, solid once the page is scrolled
    pub fn render(frame: &mut Frame, page: Rect, app: &App) {
        if page.height == 0 {
            return;
        }
        let theme = &app.theme;
        let row = Rect::new(page.x, page.y, page.width, 1);
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row);

        let mut base = Style::default();
        if app.navbar.is_passed() {
            base = base.bg(theme.navbar);
            frame.render_widget(Paragraph::new("").style(base), row);
        }

        let logo = Line::from(Span::styled(
            "  ◆ glide",
            base.fg(theme.yellow).add_modifier(Modifier::BOLD),
        ));
        let links = Line::from(Span::styled(LINKS, base.fg(theme.fg1))).right_aligned();
        frame.render_widget(Paragraph::new(logo), halves[0]);
        frame.render_widget(Paragraph::new(links), halves[1]);
    }
}
