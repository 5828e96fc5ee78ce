//! Discrete damped-spring integrator
//!
//! Each frame the host advances springs by the elapsed time. Frame deltas
//! are split into fixed sub-steps so stiff springs stay stable when a frame
//! is dropped. Gaps longer than [`Spring::MAX_FRAME`] (a suspended process,
//! a stalled terminal) snap straight to the target.

use serde::{Deserialize, Serialize};

/// Spring parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    /// Restoring force per unit of displacement
    #[serde(default = "default_stiffness")]
    pub stiffness: f64,
    /// Resisting force per unit of velocity
    #[serde(default = "default_damping")]
    pub damping: f64,
    #[serde(default = "default_mass")]
    pub mass: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: default_stiffness(),
            damping: default_damping(),
            mass: default_mass(),
        }
    }
}

fn default_stiffness() -> f64 {
    100.0
}

fn default_damping() -> f64 {
    10.0
}

fn default_mass() -> f64 {
    1.0
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    /// Damping that makes this spring critically damped (`2·√(k·m)`)
    pub fn critical_damping(&self) -> f64 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Damping ratio ζ, 1.0 is critical, below 1.0 overshoots
    pub fn damping_ratio(&self) -> f64 {
        let critical = self.critical_damping();
        if critical <= 0.0 {
            return 0.0;
        }
        self.damping / critical
    }

    /// Copy of this config with damping set to the critical value
    pub fn critically_damped(self) -> Self {
        Self {
            damping: self.critical_damping(),
            ..self
        }
    }
}

/// One-dimensional spring chasing a target value
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    /// Largest integration step in seconds
    const MAX_STEP: f64 = 1.0 / 240.0;
    /// Longest frame integrated step by step, at most 240 sub-steps
    pub const MAX_FRAME: f64 = 1.0;
    /// Distance and speed under which the spring snaps to rest
    const REST_EPSILON: f64 = 0.01;

    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            position: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jump to `value` with no motion
    pub fn snap_to(&mut self, value: f64) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        (self.position - self.target).abs() < Self::REST_EPSILON
            && self.velocity.abs() < Self::REST_EPSILON
    }

    /// Advance by `dt` seconds using semi-implicit Euler
    pub fn step(&mut self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 || self.is_settled() {
            if self.is_settled() {
                self.position = self.target;
                self.velocity = 0.0;
            }
            return;
        }

        if dt > Self::MAX_FRAME {
            self.snap_to(self.target);
            return;
        }

        let mass = if self.config.mass > 0.0 {
            self.config.mass
        } else {
            1.0
        };
        let steps = (dt / Self::MAX_STEP).ceil().max(1.0) as usize;
        let h = dt / steps as f64;

        for _ in 0..steps {
            let displacement = self.position - self.target;
            let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
            self.velocity += force / mass * h;
            self.position += self.velocity * h;
        }

        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
        }
    }
}

/// Pair of springs animating a point
#[derive(Debug, Clone, PartialEq)]
pub struct Spring2D {
    pub x: Spring,
    pub y: Spring,
}

impl Spring2D {
    pub fn new(config: SpringConfig, x: f64, y: f64) -> Self {
        Self {
            x: Spring::new(config, x),
            y: Spring::new(config, y),
        }
    }

    pub fn set_target(&mut self, x: f64, y: f64) {
        self.x.set_target(x);
        self.y.set_target(y);
    }

    pub fn step(&mut self, dt: f64) {
        self.x.step(dt);
        self.y.step(dt);
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x.position(), self.y.position())
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }
}
