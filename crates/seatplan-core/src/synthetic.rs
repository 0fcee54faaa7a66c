//! Deterministic synthetic rooms.
//!
//! The builders here assemble small, fully-calibrated rooms with one square
//! chair shape and a configurable set of candidate anchors. They exist so
//! graph, solver, and pipeline tests can share one well-understood fixture:
//! the calibration maps 10 pixels to one unit, and the chair is a
//! `side_px`-pixel square whose footprint is centered on its anchor.

use crate::chair::FloorImage;
use crate::math::{PixelPt, Pt2, Real};
use crate::room::{OrientationId, PlacementId, Room, ShapeId};
use crate::scale::{ScaleCalibration, ScaleOrientation};
use anyhow::Result;
use image::DynamicImage;

/// Pixels per physical unit in every synthetic room.
pub const PIXELS_PER_UNIT: Real = 10.0;

/// A synthetic room plus the ids of its entities.
#[derive(Debug)]
pub struct SyntheticRoom {
    pub room: Room,
    pub orientation: OrientationId,
    pub shape: ShapeId,
    pub placements: Vec<PlacementId>,
}

/// Blank floor-plan raster of the given size.
pub fn blank_floor(width: u32, height: u32) -> FloorImage {
    FloorImage::new(DynamicImage::new_luma8(width, height))
}

/// Room with one `side_px`-pixel square chair placed at each anchor.
///
/// The calibration segment spans 100 horizontal pixels for 10 units, so the
/// minimum separation is `units_to_distance * 10` pixels.
pub fn square_chair_room(
    anchors: &[Pt2],
    side_px: i32,
    units_to_distance: Real,
) -> Result<SyntheticRoom> {
    let floor = blank_floor(1024, 1024);
    let mut room = Room::new();

    room.set_scale(ScaleCalibration::new(
        PixelPt::new(0, 0),
        PixelPt::new(100, 0),
        units_to_distance,
        ScaleOrientation::Horizontal,
        10.0,
    )?);

    let orientation =
        room.add_orientation(PixelPt::new(0, 0), PixelPt::new(side_px, side_px), &floor)?;
    let shape = room.add_shape(
        orientation,
        vec![
            PixelPt::new(0, 0),
            PixelPt::new(side_px, 0),
            PixelPt::new(side_px, side_px),
            PixelPt::new(0, side_px),
        ],
    )?;

    let mut placements = Vec::with_capacity(anchors.len());
    for anchor in anchors {
        placements.push(room.add_placement(orientation, shape, *anchor)?);
    }

    Ok(SyntheticRoom {
        room,
        orientation,
        shape,
        placements,
    })
}

/// `n` square chairs in a horizontal line, `spacing_px` apart.
pub fn square_chair_line(
    n: usize,
    spacing_px: Real,
    side_px: i32,
    units_to_distance: Real,
) -> Result<SyntheticRoom> {
    let anchors: Vec<Pt2> = (0..n)
        .map(|i| Pt2::new(100.0 + i as Real * spacing_px, 100.0))
        .collect();
    square_chair_room(&anchors, side_px, units_to_distance)
}

/// `nx * ny` square chairs on a grid, `spacing_px` apart on both axes.
///
/// Anchors are ordered row-major (y major), matching placement-id order.
pub fn square_chair_grid(
    nx: usize,
    ny: usize,
    spacing_px: Real,
    side_px: i32,
    units_to_distance: Real,
) -> Result<SyntheticRoom> {
    let mut anchors = Vec::with_capacity(nx * ny);
    for j in 0..ny {
        for i in 0..nx {
            anchors.push(Pt2::new(
                100.0 + i as Real * spacing_px,
                100.0 + j as Real * spacing_px,
            ));
        }
    }
    square_chair_room(&anchors, side_px, units_to_distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_room_is_calibrated() {
        let fixture = square_chair_line(3, 30.0, 20, 3.0).unwrap();

        assert_eq!(fixture.room.num_placements(), 3);
        assert_eq!(
            fixture.room.scale().unwrap().min_separation_pixels(),
            3.0 * PIXELS_PER_UNIT
        );
        let (_, shape) = fixture.room.shape_for(fixture.orientation).unwrap();
        assert_eq!(shape.centering_offset().x, -10.0);
    }

    #[test]
    fn grid_room_anchor_order_matches_placement_ids() {
        let fixture = square_chair_grid(2, 2, 40.0, 20, 3.0).unwrap();
        let anchors: Vec<Pt2> = fixture
            .room
            .placements()
            .map(|(_, p)| p.anchor())
            .collect();

        assert_eq!(anchors[1], Pt2::new(140.0, 100.0));
        assert_eq!(anchors[2], Pt2::new(100.0, 140.0));
    }
}
