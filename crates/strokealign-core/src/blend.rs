//! Influence blending between original and aligned values.

use crate::error::{AlignError, AlignResult};
use glam::{DVec3, DVec4};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Blend factor in `[0, 1]`: 0 keeps the original, 1 snaps fully.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Influence(f64);

impl Influence {
    /// No movement.
    pub const NONE: Influence = Influence(0.0);
    /// Full snap.
    pub const FULL: Influence = Influence(1.0);

    /// Create an influence, rejecting NaN and values outside `[0, 1]`.
    pub fn new(value: f64) -> AlignResult<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(AlignError::InvalidInfluence(value))
        }
    }

    /// Create an influence, clamping into `[0, 1]`. NaN becomes 0.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::NONE;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Influence {
    fn default() -> Self {
        Self::FULL
    }
}

impl TryFrom<f64> for Influence {
    type Error = AlignError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Influence> for f64 {
    fn from(influence: Influence) -> Self {
        influence.0
    }
}

/// Per-coordinate linear interpolation: `x + (y - x) * t`.
pub trait Lerp: Copy {
    fn lerp_to(self, target: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp_to(self, target: Self, t: f64) -> Self {
        self + (target - self) * t
    }
}

impl Lerp for Point {
    fn lerp_to(self, target: Self, t: f64) -> Self {
        Point::new(self.x.lerp_to(target.x, t), self.y.lerp_to(target.y, t))
    }
}

impl Lerp for DVec3 {
    fn lerp_to(self, target: Self, t: f64) -> Self {
        self + (target - self) * t
    }
}

impl Lerp for DVec4 {
    fn lerp_to(self, target: Self, t: f64) -> Self {
        self + (target - self) * t
    }
}

/// Blend `original` towards `aligned` by `influence`.
///
/// Influence 0 returns `original` unchanged and influence 1 returns
/// `aligned` unchanged.
pub fn blend<T: Lerp>(original: T, aligned: T, influence: Influence) -> T {
    let t = influence.value();
    if t == 0.0 {
        original
    } else if t == 1.0 {
        aligned
    } else {
        original.lerp_to(aligned, t)
    }
}
