//! World-space chair footprints.
//!
//! A [`ChairShape`] outline lives in the local frame of its orientation
//! patch, anchored at the patch corner. Placing it in the room is a
//! composition of two translations kept as distinct steps: first to the
//! placement anchor, then by the shape's centering offset. Each step has a
//! well-defined frame (corner-anchored vs. center-anchored), so the
//! composition stays auditable and testable in isolation.

use geo::{EuclideanDistance, LineString, Point as GeoPoint, Polygon};
use seatplan_core::{ChairShape, PixelPt, Pt2, Real, Vec2};

/// Translate patch-local outline vertices by the placement anchor.
///
/// The result is still corner-anchored: the patch's top-left corner now
/// sits at `anchor`.
pub fn translate_to_anchor(vertices: &[PixelPt], anchor: &Pt2) -> Vec<Pt2> {
    vertices
        .iter()
        .map(|v| Pt2::new(v.x as Real + anchor.x, v.y as Real + anchor.y))
        .collect()
}

/// Shift corner-anchored points by the shape's centering offset so the
/// outline is centered on the placement anchor.
pub fn apply_centering_offset(points: &[Pt2], offset: &Vec2) -> Vec<Pt2> {
    points.iter().map(|p| p + offset).collect()
}

/// World-space footprint polygon of `shape` placed at `anchor`.
pub fn footprint(shape: &ChairShape, anchor: &Pt2) -> Polygon<Real> {
    let at_anchor = translate_to_anchor(shape.vertices(), anchor);
    let centered = apply_centering_offset(&at_anchor, &shape.centering_offset());
    let ring: Vec<(Real, Real)> = centered.iter().map(|p| (p.x, p.y)).collect();
    Polygon::new(LineString::from(ring), vec![])
}

/// Minimum Euclidean distance from `point` to the footprint boundary or
/// interior (0 when the point lies inside the polygon).
pub fn distance_to_footprint(point: &Pt2, footprint: &Polygon<Real>) -> Real {
    GeoPoint::new(point.x, point.y).euclidean_distance(footprint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::CoordsIter;
    use seatplan_core::synthetic::square_chair_room;

    fn square_shape() -> ChairShape {
        let fixture = square_chair_room(&[Pt2::new(100.0, 100.0)], 20, 3.0).unwrap();
        fixture
            .room
            .shape(fixture.shape)
            .cloned()
            .expect("fixture shape")
    }

    #[test]
    fn translate_to_anchor_is_corner_relative() {
        let shape = square_shape();
        let moved = translate_to_anchor(shape.vertices(), &Pt2::new(100.0, 100.0));
        assert_eq!(moved[0], Pt2::new(100.0, 100.0));
        assert_eq!(moved[2], Pt2::new(120.0, 120.0));
    }

    #[test]
    fn centering_offset_recenters_on_anchor() {
        let shape = square_shape();
        let moved = translate_to_anchor(shape.vertices(), &Pt2::new(100.0, 100.0));
        let centered = apply_centering_offset(&moved, &shape.centering_offset());
        assert_eq!(centered[0], Pt2::new(90.0, 90.0));
        assert_eq!(centered[2], Pt2::new(110.0, 110.0));
    }

    #[test]
    fn footprint_is_centered_square() {
        let shape = square_shape();
        let poly = footprint(&shape, &Pt2::new(100.0, 100.0));

        let xs: Vec<Real> = poly.exterior().coords_iter().map(|c| c.x).collect();
        let ys: Vec<Real> = poly.exterior().coords_iter().map(|c| c.y).collect();
        assert_eq!(xs.iter().cloned().fold(Real::INFINITY, Real::min), 90.0);
        assert_eq!(xs.iter().cloned().fold(Real::NEG_INFINITY, Real::max), 110.0);
        assert_eq!(ys.iter().cloned().fold(Real::INFINITY, Real::min), 90.0);
        assert_eq!(ys.iter().cloned().fold(Real::NEG_INFINITY, Real::max), 110.0);
    }

    #[test]
    fn distance_zero_inside_positive_outside() {
        let shape = square_shape();
        let poly = footprint(&shape, &Pt2::new(100.0, 100.0));

        assert_eq!(distance_to_footprint(&Pt2::new(100.0, 100.0), &poly), 0.0);
        assert_eq!(distance_to_footprint(&Pt2::new(105.0, 95.0), &poly), 0.0);
        assert_eq!(distance_to_footprint(&Pt2::new(130.0, 100.0), &poly), 20.0);
        // Diagonal distance measured to the nearest corner.
        let d = distance_to_footprint(&Pt2::new(120.0, 120.0), &poly);
        assert!((d - (2.0_f64).sqrt() * 10.0).abs() < 1e-9);
    }
}
