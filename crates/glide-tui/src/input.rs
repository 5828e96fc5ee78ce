use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use glide_core::geometry::Point;
use glide_core::host::{HostEvent, PointerEvent};

use crate::app::{App, CELL_HEIGHT, CELL_WIDTH};

/// Page pixels scrolled per wheel notch or j/k press
pub const LINE_SCROLL: f64 = 3.0 * CELL_HEIGHT;
/// Gallery pixels scrolled per h/l press
pub const GALLERY_STEP: f64 = 10.0 * CELL_WIDTH;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    JumpToTop,
    JumpToBottom,
    GalleryLeft,
    GalleryRight,
    ClearStatus,
    /// Pointer input for the page, in delivery order
    Pointer(Vec<HostEvent>),
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::ScrollUp,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) | (KeyCode::PageDown, _) => Action::PageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) | (KeyCode::PageUp, _) => Action::PageUp,
        (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => Action::JumpToTop,
        (KeyCode::Char('G'), _) | (KeyCode::End, _) => Action::JumpToBottom,

        (KeyCode::Char('h'), KeyModifiers::NONE) | (KeyCode::Left, _) => Action::GalleryLeft,
        (KeyCode::Char('l'), KeyModifiers::NONE) | (KeyCode::Right, _) => Action::GalleryRight,

        (KeyCode::Esc, _) => Action::ClearStatus,
        _ => Action::None,
    }
}

/// Center of the cell at `column`, `row` of the page area, in page pixels
pub fn cell_center(column: u16, row: u16) -> Point {
    Point::new(
        (column as f64 + 0.5) * CELL_WIDTH,
        (row as f64 + 0.5) * CELL_HEIGHT,
    )
}

/// Translate a terminal mouse event into page input
///
/// Hovering emits a move followed by an over carrying the node path under the
/// pointer, the order a page delivers them in.
pub fn handle_mouse_event(mouse: MouseEvent, app: &App) -> Action {
    let position = cell_center(mouse.column, mouse.row);
    let pointer = || PointerEvent::at(position.x, position.y);
    let hover = || {
        vec![
            HostEvent::PointerMove(pointer()),
            HostEvent::PointerOver(pointer().with_path(app.path_at(position))),
        ]
    };

    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => Action::Pointer(hover()),
        MouseEventKind::Down(MouseButton::Left) => {
            Action::Pointer(vec![HostEvent::PointerDown(pointer())])
        }
        MouseEventKind::Up(MouseButton::Left) => {
            Action::Pointer(vec![HostEvent::PointerUp(pointer())])
        }
        MouseEventKind::ScrollDown => Action::ScrollDown,
        MouseEventKind::ScrollUp => Action::ScrollUp,
        MouseEventKind::ScrollLeft => Action::GalleryLeft,
        MouseEventKind::ScrollRight => Action::GalleryRight,
        _ => Action::None,
    }
}

/// Apply an action to the app
pub fn apply_action(app: &mut App, action: Action) {
    let page = app.viewport().height;
    match action {
        Action::Quit => app.should_quit = true,
        Action::ScrollDown => app.scroll_by(LINE_SCROLL),
        Action::ScrollUp => app.scroll_by(-LINE_SCROLL),
        Action::PageDown => app.scroll_by(page / 2.0),
        Action::PageUp => app.scroll_by(-page / 2.0),
        Action::JumpToTop => app.scroll_to(0.0),
        Action::JumpToBottom => app.scroll_to(app.max_scroll()),
        Action::GalleryLeft => app.scroll_gallery_by(-GALLERY_STEP),
        Action::GalleryRight => app.scroll_gallery_by(GALLERY_STEP),
        Action::ClearStatus => app.clear_status(),
        Action::Pointer(events) => {
            for event in events {
                app.pointer(event);
            }
        }
        Action::None => {}
    }
}
