//! Motion atoms shared by the pointer, scroll and drag components
//!
//! # Layers
//!
//! ## Atomic
//! - `easing` - Pure easing functions (cubic, quintic, exponential, cubic-bezier)
//! - `timing` - Progress and interpolation helpers over elapsed time
//! - `interpolate` - Piecewise-linear range mapping with boundary clamping
//! - `spring` - Per-frame damped spring integrator
//!
//! ## Molecular
//! - `tween` - Timed transition combining easing and timing
//! - `keyframes` - Multi-stop timed animation that can loop forever
//!
//! # Usage
//!
//! ```
//! use glide_core::motion::{Interpolator, Spring, SpringConfig};
//!
//! let opacity = Interpolator::linear((0.0, 0.5), (1.0, 0.0)).unwrap();
//! assert_eq!(opacity.sample(1.0), 0.0);
//!
//! let mut dot = Spring::new(SpringConfig::new(500.0, 28.0), 0.0);
//! dot.set_target(120.0);
//! dot.step(1.0 / 60.0);
//! assert!(dot.position() > 0.0);
//! ```

pub mod easing;
pub mod interpolate;
pub mod keyframes;
pub mod spring;
pub mod timing;
pub mod tween;

pub use easing::{CubicBezier, EasingType};
pub use interpolate::{CurveSpec, Interpolator};
pub use keyframes::Keyframes;
pub use spring::{Spring, Spring2D, SpringConfig};
pub use tween::Tween;
