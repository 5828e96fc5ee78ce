//! Pure easing functions for timed transitions
//!
//! Maps input progress [0, 1] to output [0, 1] with various acceleration
//! curves, including arbitrary CSS-style cubic-bezier curves.

use serde::{Deserialize, Serialize};

/// Easing curve applied to a normalized progress value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump straight to the end value when complete
    None,
    Linear,
    /// Cubic ease-out: f(t) = 1 - (1-t)³
    #[default]
    Cubic,
    /// Quintic ease-out: f(t) = 1 - (1-t)⁵
    Quintic,
    /// Exponential ease-out: f(t) = 1 - 2^(-10t)
    EaseOut,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`
    Bezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl EasingType {
    /// The expressive ease-out used by the page intro, `cubic-bezier(0.16, 1, 0.3, 1)`
    pub const EXPO_OUT: EasingType = EasingType::Bezier {
        x1: 0.16,
        y1: 1.0,
        x2: 0.3,
        y2: 1.0,
    };

    /// Symmetric ease used by looping keyframes, `cubic-bezier(0.42, 0, 0.58, 1)`
    pub const EASE_IN_OUT: EasingType = EasingType::Bezier {
        x1: 0.42,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };

    /// Apply the easing function to a progress value
    ///
    /// # Arguments
    /// * `t` - Progress value, clamped to [0, 1]
    ///
    /// # Returns
    /// Eased value, 0 at t=0 and 1 at t=1
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => cubic_ease_out(t),
            EasingType::Quintic => quintic_ease_out(t),
            EasingType::EaseOut => exponential_ease_out(t),
            EasingType::Bezier { x1, y1, x2, y2 } => CubicBezier::new(x1, y1, x2, y2).solve(t),
        }
    }
}

#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[inline]
fn quintic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

/// Cubic-bezier timing curve with endpoints fixed at (0,0) and (1,1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    cx: f64,
    bx: f64,
    ax: f64,
    cy: f64,
    by: f64,
    ay: f64,
}

impl CubicBezier {
    const NEWTON_ITERATIONS: usize = 8;
    const BISECTION_ITERATIONS: usize = 32;
    const EPSILON: f64 = 1e-7;

    /// Control point x values are clamped to [0, 1] so the curve stays a function of time
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let x1 = x1.clamp(0.0, 1.0);
        let x2 = x2.clamp(0.0, 1.0);
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let ax = 1.0 - cx - bx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        let ay = 1.0 - cy - by;
        Self {
            cx,
            bx,
            ax,
            cy,
            by,
            ay,
        }
    }

    #[inline]
    fn sample_x(&self, s: f64) -> f64 {
        ((self.ax * s + self.bx) * s + self.cx) * s
    }

    #[inline]
    fn sample_y(&self, s: f64) -> f64 {
        ((self.ay * s + self.by) * s + self.cy) * s
    }

    #[inline]
    fn sample_dx(&self, s: f64) -> f64 {
        (3.0 * self.ax * s + 2.0 * self.bx) * s + self.cx
    }

    /// Find the curve parameter whose x equals `x`
    fn param_for_x(&self, x: f64) -> f64 {
        let mut s = x;
        for _ in 0..Self::NEWTON_ITERATIONS {
            let err = self.sample_x(s) - x;
            if err.abs() < Self::EPSILON {
                return s;
            }
            let d = self.sample_dx(s);
            if d.abs() < 1e-6 {
                break;
            }
            s -= err / d;
        }

        // Newton stalled (flat derivative), fall back to bisection
        let (mut lo, mut hi) = (0.0, 1.0);
        s = x;
        for _ in 0..Self::BISECTION_ITERATIONS {
            let sample = self.sample_x(s);
            if (sample - x).abs() < Self::EPSILON {
                break;
            }
            if sample < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }

    /// Eased output for time progress `x` in [0, 1]
    pub fn solve(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        self.sample_y(self.param_for_x(x))
    }
}
