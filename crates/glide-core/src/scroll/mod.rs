//! Scroll-position-to-visual-property mapping
//!
//! ## Atomic
//! - `offset` - Anchor pairs (`"start end"`) and scroll windows
//! - `progress` - Normalized progress of an element through a window
//! - `threshold` - Scrolled-past flag with edge notification
//!
//! ## Molecular
//! - `linked` - Progress plus piecewise-linear property tracks
//! - `reveal` - In-view triggers and staggered reveal animations
//! - `section` - A scroll-linked section mounted on a host page

pub mod linked;
pub mod offset;
pub mod progress;
pub mod reveal;
pub mod section;
pub mod threshold;

pub use linked::{Property, ScrollLinked, Track, VisualStyle};
pub use offset::{Edge, ScrollOffset, ScrollWindow};
pub use progress::ScrollProgressMapper;
pub use reveal::{stagger_delay, RevealAnimation, RevealGroup, RevealObserver};
pub use section::ScrollSection;
pub use threshold::ScrollThreshold;
