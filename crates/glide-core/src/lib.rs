pub mod config;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod host;
pub mod motion;
pub mod pointer;
pub mod replay;
pub mod scroll;

pub use config::{AppConfig, CarouselConfig, CursorConfig, RevealConfig, ScrollConfig};
pub use drag::{DragScrollController, ScrollSurface};
pub use error::{Error, Result};
pub use host::{Host, HostEvent};
pub use pointer::PointerTracker;
pub use scroll::{ScrollProgressMapper, ScrollSection};
