//! Click-and-drag horizontal scrolling
//!
//! - `surface` - The scrollable viewport abstraction
//! - `controller` - The drag state machine
//! - `click` - Keeping nested controls' clicks from bubbling into the card
//! - `viewport` - A gallery placed on the page, routing page pointer events

pub mod click;
pub mod controller;
pub mod surface;
pub mod viewport;

pub use click::{ClickDispatcher, ClickShield, ClickTarget};
pub use controller::{CursorAffordance, DragScrollController, DragSession, DragState};
pub use surface::{ScrollRegion, ScrollSurface};
pub use viewport::DragViewport;
