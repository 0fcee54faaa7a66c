//! Mathematical type definitions shared across the workspace.

use nalgebra::{Point2, Vector2};

/// Scalar type used throughout the library (currently `f64`).
pub type Real = f64;

/// 2D point with [`Real`] coordinates.
pub type Pt2 = Point2<Real>;
/// 2D vector with [`Real`] components.
pub type Vec2 = Vector2<Real>;
/// 2D point with integer pixel coordinates, as delivered by annotation UIs.
pub type PixelPt = Point2<i32>;

/// Widen an integer pixel point to [`Real`] coordinates.
pub fn pixel_to_real(p: &PixelPt) -> Pt2 {
    Pt2::new(p.x as Real, p.y as Real)
}
