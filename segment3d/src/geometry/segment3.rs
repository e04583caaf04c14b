//! Finite 3D line segments.

use super::{distance3, Vector3D};

/// Representation of a closed 3D line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Segment3D {
    pub start: Vector3D,
    pub end: Vector3D,
}

impl Segment3D {
    /// Creates a new line segment.
    pub fn new(start: Vector3D, end: Vector3D) -> Self {
        Self { start, end }
    }

    /// Returns the vector from `start` to `end`.
    pub fn direction(&self) -> Vector3D {
        self.end - self.start
    }

    /// Returns the length of the line segment.
    pub fn length(&self) -> f64 {
        distance3(self.start, self.end)
    }

    /// Returns `start + t * direction`. `t` is not clamped to `[0, 1]`.
    pub fn point_at(&self, t: f64) -> Vector3D {
        self.start + self.direction() * t
    }

    /// Returns true when the squared length is below `f64::EPSILON`.
    ///
    /// This is a different threshold from the parallel check in
    /// [`crate::intersection::analyze`], which tests `‖AB × CD‖²`: a very short
    /// segment (length around 1e-5) is not degenerate here but is still
    /// reported as `Parallel` there.
    pub fn is_degenerate(&self) -> bool {
        self.direction().norm_squared() < f64::EPSILON
    }
}

impl From<((f64, f64, f64), (f64, f64, f64))> for Segment3D {
    fn from((start, end): ((f64, f64, f64), (f64, f64, f64))) -> Self {
        Self::new(start.into(), end.into())
    }
}
