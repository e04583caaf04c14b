//! Basic geometry primitives for segment intersection.

mod segment3;
mod vector3;

pub use segment3::Segment3D;
pub use vector3::Vector3D;

/// Calculates the Euclidean distance between two 3D points.
pub fn distance3(a: Vector3D, b: Vector3D) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2) + (b.z - a.z).powi(2)).sqrt()
}

/// Scalar triple product `u · (v × w)`.
///
/// Equal to the signed volume of the parallelepiped spanned by the three
/// vectors; zero when they are linearly dependent.
pub fn scalar_triple(u: Vector3D, v: Vector3D, w: Vector3D) -> f64 {
    u.dot(v.cross(w))
}
