//! Intersection of finite line segments in 3D space.

pub mod geometry;
pub mod intersection;
pub mod io;

pub use geometry::{Segment3D, Vector3D};
pub use intersection::{analyze, intersect, IntersectionOutcome};
