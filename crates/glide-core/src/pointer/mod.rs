//! Pointer-synchronized cursor overlay
//!
//! - `service` - Page-wide, reference-counted pointer subscription
//! - `tracker` - Per-view spring-eased dot and ring markers

pub mod service;
pub mod tracker;

pub use service::{CursorState, PointerLease, PointerService};
pub use tracker::{MarkerFrame, OverlayFrame, PointerTracker};
