use std::time::Duration;

use glide_core::drag::{ClickTarget, DragScrollController, DragViewport};
use glide_core::geometry::{LayoutBox, Point, Rect, Viewport};
use glide_core::host::{Element, Host, HostEvent, PointerEvent};
use glide_core::pointer::PointerTracker;
use glide_core::scroll::{RevealGroup, ScrollSection, ScrollThreshold};
use glide_core::AppConfig;

use crate::intro::{HeroIntro, Marquee};
use crate::theme::Theme;

/// Page pixels covered by one terminal cell
pub const CELL_WIDTH: f64 = 8.0;
pub const CELL_HEIGHT: f64 = 16.0;

const FEATURE_HEADER: f64 = 2.0 * CELL_HEIGHT;
const FEATURE_ROW: f64 = 4.0 * CELL_HEIGHT;
const SECTION_GAP: f64 = 2.0 * CELL_HEIGHT;
const GALLERY_INSET: f64 = 2.0 * CELL_WIDTH;
const GALLERY_HEIGHT: f64 = 10.0 * CELL_HEIGHT;
const FOOTER_HEIGHT: f64 = 6.0 * CELL_HEIGHT;

pub const CARD_WIDTH: f64 = 40.0 * CELL_WIDTH;
pub const CARD_GAP: f64 = 2.0 * CELL_WIDTH;
/// Width of the action button in a card's bottom-right corner
pub const CARD_ACTION_WIDTH: f64 = 9.0 * CELL_WIDTH;

/// One gallery entry
#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const CARDS: [Card; 5] = [
    Card {
        title: "Tidepool",
        blurb: "Live ocean buoy data as ambient sound",
    },
    Card {
        title: "Kiln",
        blurb: "Compile-time checked recipe scaling",
    },
    Card {
        title: "Orbit",
        blurb: "Shared whiteboard over a mesh network",
    },
    Card {
        title: "Lumen",
        blurb: "Accessible contrast linting in the editor",
    },
    Card {
        title: "Parallax",
        blurb: "Scroll storytelling for plain markdown",
    },
];

pub const FEATURES: [&str; 3] = [
    "Spring-eased cursor that grows over links and buttons",
    "Hero that drifts, fades and shrinks as the page scrolls",
    "Gallery you can grab and fling sideways",
];

/// Page sections in document coordinates for a given viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub hero: LayoutBox,
    pub features: LayoutBox,
    pub gallery: LayoutBox,
    pub footer: LayoutBox,
}

impl PageLayout {
    pub fn for_viewport(viewport: Viewport) -> Self {
        let width = viewport.width;
        let hero = LayoutBox::new(0.0, 0.0, width, viewport.height);
        let features = LayoutBox::new(
            0.0,
            hero.top + hero.height,
            width,
            FEATURE_HEADER + FEATURES.len() as f64 * FEATURE_ROW,
        );
        let gallery = LayoutBox::new(
            GALLERY_INSET,
            features.top + features.height + SECTION_GAP,
            (width - 2.0 * GALLERY_INSET).max(0.0),
            GALLERY_HEIGHT,
        );
        let footer = LayoutBox::new(
            0.0,
            gallery.top + gallery.height + SECTION_GAP,
            width,
            FOOTER_HEIGHT,
        );
        Self {
            hero,
            features,
            gallery,
            footer,
        }
    }

    pub fn document_height(&self) -> f64 {
        self.footer.top + self.footer.height
    }

    pub fn gallery_content_width() -> f64 {
        let count = CARDS.len() as f64;
        count * CARD_WIDTH + (count - 1.0) * CARD_GAP
    }
}

/// Viewport size in page pixels for a page area of `cols` x `rows` cells
pub fn viewport_for(cols: u16, rows: u16) -> Viewport {
    Viewport::new(cols as f64 * CELL_WIDTH, rows as f64 * CELL_HEIGHT)
}

/// Main application state
pub struct App {
    pub config: AppConfig,
    pub theme: Theme,
    pub host: Host,
    pub tracker: PointerTracker,
    pub hero: ScrollSection,
    pub navbar: ScrollThreshold,
    pub gallery: DragViewport,
    pub features: RevealGroup,
    pub cards: RevealGroup,
    pub intro: HeroIntro,
    pub marquee: Marquee,
    pub layout: PageLayout,
    pub status_message: Option<String>,
    pub should_quit: bool,
    /// Where the current press started, for telling clicks from drags
    press: Option<Point>,
    now: Duration,
}

impl App {
    /// Mount the showcase on a page area of `cols` x `rows` cells
    pub fn new(config: AppConfig, cols: u16, rows: u16) -> Self {
        let viewport = viewport_for(cols, rows);
        let layout = PageLayout::for_viewport(viewport);
        let host = Host::new(viewport);

        let tracker = PointerTracker::mount(&host, &config.cursor);
        let hero = ScrollSection::mount(
            &host,
            layout.hero,
            config.scroll.hero_window,
            config.scroll.hero_tracks.clone(),
        );
        let gallery = DragViewport::new(
            layout.gallery,
            PageLayout::gallery_content_width(),
            DragScrollController::from_config(&config.carousel),
        );

        Self {
            theme: Theme::default(),
            navbar: ScrollThreshold::new(config.scroll.navbar_threshold_px),
            features: RevealGroup::new(&config.reveal, FEATURES.len()),
            cards: RevealGroup::new(&config.reveal, CARDS.len()),
            intro: HeroIntro::new(),
            marquee: Marquee::default(),
            config,
            host,
            tracker,
            hero,
            gallery,
            layout,
            status_message: None,
            should_quit: false,
            press: None,
            now: Duration::ZERO,
        }
    }

    pub fn scroll_y(&self) -> f64 {
        self.host.scroll_y()
    }

    pub fn viewport(&self) -> Viewport {
        self.host.viewport()
    }

    /// Clock time of the last frame
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn max_scroll(&self) -> f64 {
        (self.layout.document_height() - self.viewport().height).max(0.0)
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Terminal resized to a page area of `cols` x `rows` cells
    pub fn resize(&mut self, cols: u16, rows: u16) {
        let viewport = viewport_for(cols, rows);
        if viewport == self.viewport() {
            return;
        }
        tracing::debug!("page resized to {}x{}", viewport.width, viewport.height);
        self.layout = PageLayout::for_viewport(viewport);
        self.host.dispatch(HostEvent::Resize { viewport });
        self.hero.relayout(self.layout.hero);
        self.gallery
            .relayout(self.layout.gallery, PageLayout::gallery_content_width());
        // Content got shorter: keep the page within bounds
        self.scroll_to(self.scroll_y());
    }

    pub fn scroll_to(&mut self, scroll_y: f64) {
        let scroll_y = scroll_y.clamp(0.0, self.max_scroll());
        self.host.dispatch(HostEvent::Scroll { scroll_y });
        if let Some(passed) = self.navbar.update(scroll_y) {
            tracing::trace!("navbar solid: {}", passed);
        }
    }

    pub fn scroll_by(&mut self, dy: f64) {
        self.scroll_to(self.scroll_y() + dy);
    }

    pub fn scroll_gallery_by(&mut self, dx: f64) {
        self.gallery.scroll_by(dx);
    }

    /// Nodes under `point`, target first
    pub fn path_at(&self, point: Point) -> Vec<Element> {
        match self.card_at(point) {
            Some((_, ClickTarget::Action)) => vec![Element::button(), Element::link()],
            Some((_, ClickTarget::Card)) => vec![Element::link()],
            None if self.navbar_link_at(point) => vec![Element::link()],
            None => Vec::new(),
        }
    }

    /// Gallery card (and which part of it) under `point`
    pub fn card_at(&self, point: Point) -> Option<(usize, ClickTarget)> {
        let rect = self.gallery.layout().client_rect(self.scroll_y());
        if !rect.contains(point) {
            return None;
        }
        let content_x = point.x - rect.x + self.gallery.scroll_left();
        let stride = CARD_WIDTH + CARD_GAP;
        let index = (content_x / stride).floor();
        if index < 0.0 || index as usize >= CARDS.len() {
            return None;
        }
        let local_x = content_x - index * stride;
        if local_x >= CARD_WIDTH {
            return None;
        }

        let on_action = local_x >= CARD_WIDTH - CARD_ACTION_WIDTH
            && point.y >= rect.bottom() - CELL_HEIGHT;
        let target = if on_action {
            ClickTarget::Action
        } else {
            ClickTarget::Card
        };
        Some((index as usize, target))
    }

    /// Client rect of card `index` before reveal styling
    pub fn card_rect(&self, index: usize) -> Rect {
        let gallery = self.gallery.layout().client_rect(self.scroll_y());
        Rect::new(
            gallery.x + index as f64 * (CARD_WIDTH + CARD_GAP) - self.gallery.scroll_left(),
            gallery.y,
            CARD_WIDTH,
            gallery.height,
        )
    }

    fn navbar_link_at(&self, point: Point) -> bool {
        // Links sit on the right half of the top row
        point.y < CELL_HEIGHT && point.x >= self.viewport().width / 2.0
    }

    /// Deliver a pointer event to every mounted component
    pub fn pointer(&mut self, event: HostEvent) {
        self.host.dispatch(event.clone());
        let response = self.gallery.route(&event, self.scroll_y());
        if response.prevent_default {
            // Text selection would start here in a page
            tracing::trace!("pointer move captured by gallery");
        }

        match &event {
            HostEvent::PointerDown(pointer) => self.press = Some(pointer.position),
            HostEvent::PointerUp(pointer) => {
                if let Some(start) = self.press.take() {
                    if is_click(start, pointer.position) {
                        self.click(pointer);
                    }
                }
            }
            HostEvent::PointerLeave(_) => self.press = None,
            _ => {}
        }
    }

    fn click(&mut self, pointer: &PointerEvent) {
        let Some((index, target)) = self.card_at(pointer.position) else {
            return;
        };
        let fired = self.gallery.click(target, pointer.position);
        let card = CARDS[index].title;
        match target {
            ClickTarget::Action => self.set_status(format!("Starred {}", card)),
            ClickTarget::Card => self.set_status(format!("Opened {}", card)),
        }
        tracing::debug!("click on {} reached {:?}", card, fired);
    }

    /// The pointer left the terminal
    pub fn pointer_left(&mut self) {
        let cursor = self.tracker.cursor();
        self.pointer(HostEvent::PointerLeave(PointerEvent::at(cursor.x, cursor.y)));
    }

    /// Advance one animation frame
    pub fn tick(&mut self, dt: Duration) {
        let time = self.host.frame(dt);
        self.now = time.elapsed;

        let scroll_y = self.scroll_y();
        let viewport = self.viewport();
        self.features
            .update(self.layout.features.client_rect(scroll_y), viewport, self.now);
        self.cards
            .update(self.layout.gallery.client_rect(scroll_y), viewport, self.now);
    }

    /// Whether the next frame will look different from this one
    pub fn is_animating(&self) -> bool {
        !self.tracker.is_settled()
            || self.gallery.controller().is_dragging()
            || self.features.is_animating(self.now)
            || self.cards.is_animating(self.now)
            || !self.intro.is_finished(self.now)
            || self.loop_on_screen()
    }

    /// A looping decoration (scroll cue or marquee) is in view
    fn loop_on_screen(&self) -> bool {
        let scroll_y = self.scroll_y();
        let screen = self.viewport().rect();
        let cue = self.hero.style().opacity > 0.0
            && self.layout.hero.client_rect(scroll_y).intersects(&screen);
        cue || self.layout.footer.client_rect(scroll_y).intersects(&screen)
    }
}

/// Press and release close enough together to count as a click
fn is_click(start: Point, end: Point) -> bool {
    (end.x - start.x).abs() < CELL_WIDTH && (end.y - start.y).abs() < CELL_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_core::drag::DragState;

    const FRAME: Duration = Duration::from_millis(16);

    fn app() -> App {
        App::new(AppConfig::default(), 160, 50)
    }

    fn gallery_point(app: &App, x: f64) -> Point {
        let rect = app.gallery.layout().client_rect(app.scroll_y());
        Point::new(x, rect.y + CELL_HEIGHT * 2.0)
    }

    #[test]
    fn test_layout_stacks_sections() {
        let layout = PageLayout::for_viewport(viewport_for(160, 50));
        assert_eq!(layout.hero.height, 800.0);
        assert_eq!(layout.features.top, 800.0);
        assert!(layout.gallery.top > layout.features.top + layout.features.height);
        assert_eq!(layout.document_height(), layout.footer.top + layout.footer.height);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut app = app();
        app.scroll_by(-50.0);
        assert_eq!(app.scroll_y(), 0.0);
        app.scroll_to(1e9);
        assert_eq!(app.scroll_y(), app.max_scroll());
        assert!(app.navbar.is_passed());
        // 544px into an 800px hero
        assert!((app.hero.progress() - 0.68).abs() < 1e-9);
    }

    #[test]
    fn test_drag_gallery() {
        let mut app = app();
        app.scroll_to(app.max_scroll());
        let start = gallery_point(&app, 800.0);
        let end = gallery_point(&app, 700.0);

        app.pointer(HostEvent::PointerDown(PointerEvent::at(start.x, start.y)));
        app.pointer(HostEvent::PointerMove(PointerEvent::at(end.x, end.y)));
        assert_eq!(app.gallery.scroll_left(), 200.0);
        assert!(app.is_animating());

        app.pointer(HostEvent::PointerUp(PointerEvent::at(end.x, end.y)));
        assert_eq!(app.gallery.state(), DragState::Idle);
        assert_eq!(app.status_message, None);
    }

    #[test]
    fn test_click_card_and_action() {
        let mut app = app();
        app.scroll_to(app.max_scroll());
        let rect = app.gallery.layout().client_rect(app.scroll_y());

        let body = Point::new(rect.x + 20.0, rect.y + 20.0);
        app.pointer(HostEvent::PointerDown(PointerEvent::at(body.x, body.y)));
        app.pointer(HostEvent::PointerUp(PointerEvent::at(body.x, body.y)));
        assert_eq!(app.status_message.as_deref(), Some("Opened Tidepool"));

        let action = Point::new(rect.x + CARD_WIDTH - 10.0, rect.bottom() - 4.0);
        assert_eq!(app.card_at(action), Some((0, ClickTarget::Action)));
        app.pointer(HostEvent::PointerDown(PointerEvent::at(action.x, action.y)));
        app.pointer(HostEvent::PointerUp(PointerEvent::at(action.x, action.y)));
        assert_eq!(app.status_message.as_deref(), Some("Starred Tidepool"));
    }

    #[test]
    fn test_focus_loss_ends_drag() {
        let mut app = app();
        app.scroll_to(app.max_scroll());
        let start = gallery_point(&app, 800.0);
        app.pointer(HostEvent::PointerMove(PointerEvent::at(start.x, start.y)));
        app.pointer(HostEvent::PointerDown(PointerEvent::at(start.x, start.y)));
        assert!(app.gallery.controller().is_dragging());

        app.pointer_left();
        assert!(!app.gallery.controller().is_dragging());
    }

    #[test]
    fn test_hover_path() {
        let app = app();
        assert!(app.path_at(Point::new(1200.0, 4.0))[0].is_interactive());
        assert!(app.path_at(Point::new(10.0, 400.0)).is_empty());
    }

    #[test]
    fn test_resize_keeps_scroll_in_bounds() {
        let mut app = app();
        app.scroll_to(app.max_scroll());
        app.resize(160, 80);
        assert!(app.scroll_y() <= app.max_scroll());
        assert_eq!(app.hero.layout().height, 1280.0);
    }

    #[test]
    fn test_reveal_after_scrolling_into_view() {
        let mut app = app();
        app.tick(FRAME);
        assert_eq!(app.features.style(0, app.now()).opacity, 0.0);

        app.scroll_to(600.0);
        for _ in 0..60 {
            app.tick(FRAME);
        }
        assert_eq!(app.features.style(0, app.now()).opacity, 1.0);
    }

    #[test]
    fn test_intro_settles_while_cue_keeps_looping() {
        let mut app = app();
        app.tick(FRAME);
        assert!(app.intro.line_offset(0, app.now()) > 0.0);
        assert!(app.is_animating());

        for _ in 0..120 {
            app.tick(FRAME);
        }
        assert!(app.intro.is_finished(app.now()));
        assert_eq!(app.intro.line_offset(2, app.now()), 0.0);
        // Hero is on screen, so the scroll cue still bounces
        assert!(app.is_animating());
    }

    #[test]
    fn test_huge_frame_gap_settles_cursor() {
        let mut app = app();
        app.pointer(HostEvent::PointerMove(PointerEvent::at(400.0, 300.0)));
        app.tick(Duration::from_secs(1_000_000));
        assert!(app.tracker.is_settled());
        assert!(app.intro.is_finished(app.now()));
    }
}
