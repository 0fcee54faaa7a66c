//! Error taxonomy for the seating data model.
//!
//! Every mutating operation validates its arguments and referential
//! integrity before touching state, so a returned error always leaves the
//! aggregate unchanged.

use crate::math::Real;
use crate::room::{OrientationId, PlacementId, ShapeId};
use crate::scale::ScaleOrientation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoomError {
    #[error("scale length must be positive and finite, got {0}")]
    NonPositiveScaleLength(Real),
    #[error("distancing length must be positive and finite, got {0}")]
    NonPositiveDistance(Real),
    #[error("calibration segment has zero extent along the {0:?} axis")]
    DegenerateScaleSegment(ScaleOrientation),
    #[error("orientation rectangle has zero width or height")]
    EmptyOrientationRect,
    #[error(
        "orientation rectangle ({x1},{y1})..({x2},{y2}) exceeds the {width}x{height} floor image"
    )]
    RectOutOfBounds {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        width: u32,
        height: u32,
    },
    #[error("chair outline needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("orientation {0} already has a shape")]
    DuplicateShape(OrientationId),
    #[error("unknown orientation {0}")]
    OrientationNotFound(OrientationId),
    #[error("unknown shape {0}")]
    ShapeNotFound(ShapeId),
    #[error("unknown placement {0}")]
    PlacementNotFound(PlacementId),
    #[error("shape {shape} belongs to orientation {actual}, not {requested}")]
    ShapeOrientationMismatch {
        shape: ShapeId,
        requested: OrientationId,
        actual: OrientationId,
    },
    #[error("room scale has not been calibrated")]
    ScaleNotSet,
    #[error("room has no candidate placements")]
    NoPlacements,
}
