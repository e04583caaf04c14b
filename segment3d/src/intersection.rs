//! Segment–segment intersection in 3D.
//!
//! The two segments are first checked for coplanarity with a scalar triple
//! product, then intersected with the parametric line method:
//! `a.start + t·AB = b.start + s·CD`, solved by crossing both sides with
//! `AB × CD`. Both `t` and `s` must land in `[0, 1]`, endpoints included.

use crate::geometry::{scalar_triple, Segment3D, Vector3D};

/// Tolerance on `|AB · (AC × AD)|` below which the four endpoints count as coplanar.
pub const COPLANAR_EPSILON: f64 = f64::EPSILON;

/// Tolerance on `‖AB × CD‖²` below which the segments count as parallel.
pub const PARALLEL_EPSILON: f64 = f64::EPSILON;

/// Detailed result of intersecting two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntersectionOutcome {
    /// The four endpoints do not share a plane.
    NonCoplanar { triple: f64 },
    /// The direction vectors are parallel or one segment has zero length.
    Parallel { det: f64 },
    /// The supporting lines cross outside at least one segment.
    OutOfRange { t: f64, s: f64 },
    /// The segments meet at `point = a.start + t·AB = b.start + s·CD`.
    Point { point: Vector3D, t: f64, s: f64 },
}

impl IntersectionOutcome {
    /// Returns the intersection point, if any.
    pub fn point(&self) -> Option<Vector3D> {
        match *self {
            IntersectionOutcome::Point { point, .. } => Some(point),
            _ => None,
        }
    }

    pub fn is_intersection(&self) -> bool {
        matches!(self, IntersectionOutcome::Point { .. })
    }

    /// Short lowercase label for the outcome.
    pub fn reason(&self) -> &'static str {
        match self {
            IntersectionOutcome::NonCoplanar { .. } => "non-coplanar",
            IntersectionOutcome::Parallel { .. } => "parallel",
            IntersectionOutcome::OutOfRange { .. } => "out of range",
            IntersectionOutcome::Point { .. } => "intersection",
        }
    }
}

fn in_unit_range(v: f64) -> bool {
    (0.0..=1.0).contains(&v)
}

/// Intersects two segments and reports which step decided the result.
///
/// The coplanarity triple uses `b.end - a.start` as its third vector, so all
/// four endpoints are measured from `a.start`.
pub fn analyze(a: &Segment3D, b: &Segment3D) -> IntersectionOutcome {
    let ab = a.end - a.start;
    let ac = b.start - a.start;

    let triple = scalar_triple(ab, ac, b.end - a.start);
    if triple.abs() >= COPLANAR_EPSILON {
        log::debug!("segments not coplanar (triple product {triple})");
        return IntersectionOutcome::NonCoplanar { triple };
    }

    let cd = b.end - b.start;
    let cross_product = ab.cross(cd);
    let det = cross_product.dot(cross_product);
    if det.abs() < PARALLEL_EPSILON {
        log::debug!("segments parallel or degenerate (det {det})");
        return IntersectionOutcome::Parallel { det };
    }

    let t = ac.cross(cd).dot(cross_product) / det;
    let s = ac.cross(ab).dot(cross_product) / det;
    log::trace!("parametric coordinates t={t} s={s}");

    if in_unit_range(t) && in_unit_range(s) {
        IntersectionOutcome::Point {
            point: a.start + ab * t,
            t,
            s,
        }
    } else {
        log::debug!("lines cross outside the segments (t={t}, s={s})");
        IntersectionOutcome::OutOfRange { t, s }
    }
}

/// Returns the single point where `a` and `b` meet, or `None` when they are
/// not coplanar, are parallel, or cross outside their bounds.
pub fn intersect(a: &Segment3D, b: &Segment3D) -> Option<Vector3D> {
    analyze(a, b).point()
}

/// Tuple-based form of [`intersect`].
pub fn intersect_coords(
    a: ((f64, f64, f64), (f64, f64, f64)),
    b: ((f64, f64, f64), (f64, f64, f64)),
) -> Option<(f64, f64, f64)> {
    intersect(&Segment3D::from(a), &Segment3D::from(b)).map(Into::into)
}
