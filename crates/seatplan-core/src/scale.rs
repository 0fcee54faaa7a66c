//! Pixel-to-distance scale calibration.
//!
//! A room diagram carries a reference segment of known physical length.
//! [`ScaleCalibration`] turns that segment into a pixels-per-unit ratio and
//! the minimum pixel separation required between seats. Derived quantities
//! are recomputed eagerly on construction and on every `redefine_*` call, so
//! no stale state is ever observable.

use crate::error::RoomError;
use crate::math::{PixelPt, Real};
use serde::{Deserialize, Serialize};

/// Axis along which the reference segment spans the floor image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleOrientation {
    Horizontal,
    Vertical,
}

/// Calibrated pixel-to-distance scale for a room.
///
/// The two corner points are normalized per axis so that the stored minimum
/// corner has the smaller coordinate on each axis; calibration is therefore
/// independent of the order in which the corners were supplied.
#[derive(Debug, Clone)]
pub struct ScaleCalibration {
    corner_min: PixelPt,
    corner_max: PixelPt,
    orientation: ScaleOrientation,
    scale_length_units: Real,
    units_to_distance: Real,
    // Derived, always consistent with the fields above.
    scale_length_pixels: Real,
    pixels_per_unit: Real,
    min_separation_pixels: Real,
}

fn normalize_corners(a: PixelPt, b: PixelPt) -> (PixelPt, PixelPt) {
    (
        PixelPt::new(a.x.min(b.x), a.y.min(b.y)),
        PixelPt::new(a.x.max(b.x), a.y.max(b.y)),
    )
}

fn axis_extent(
    corner_min: &PixelPt,
    corner_max: &PixelPt,
    orientation: ScaleOrientation,
) -> Result<Real, RoomError> {
    let extent = match orientation {
        ScaleOrientation::Horizontal => corner_max.x - corner_min.x,
        ScaleOrientation::Vertical => corner_max.y - corner_min.y,
    };
    if extent == 0 {
        return Err(RoomError::DegenerateScaleSegment(orientation));
    }
    Ok(extent as Real)
}

fn check_scale_length(units: Real) -> Result<(), RoomError> {
    if !(units.is_finite() && units > 0.0) {
        return Err(RoomError::NonPositiveScaleLength(units));
    }
    Ok(())
}

fn check_distance(units: Real) -> Result<(), RoomError> {
    if !(units.is_finite() && units > 0.0) {
        return Err(RoomError::NonPositiveDistance(units));
    }
    Ok(())
}

impl ScaleCalibration {
    /// Build a calibration from two segment corners, the segment's physical
    /// length, the axis it spans, and the physical distancing length.
    ///
    /// # Errors
    ///
    /// Returns [`RoomError::NonPositiveScaleLength`] /
    /// [`RoomError::NonPositiveDistance`] for non-positive or non-finite
    /// lengths, and [`RoomError::DegenerateScaleSegment`] when the segment
    /// has zero pixel extent along the chosen axis. Nothing is constructed
    /// on failure.
    pub fn new(
        point_a: PixelPt,
        point_b: PixelPt,
        units_to_distance: Real,
        orientation: ScaleOrientation,
        scale_length_units: Real,
    ) -> Result<Self, RoomError> {
        check_scale_length(scale_length_units)?;
        check_distance(units_to_distance)?;
        let (corner_min, corner_max) = normalize_corners(point_a, point_b);
        let scale_length_pixels = axis_extent(&corner_min, &corner_max, orientation)?;

        let pixels_per_unit = scale_length_pixels / scale_length_units;
        Ok(Self {
            corner_min,
            corner_max,
            orientation,
            scale_length_units,
            units_to_distance,
            scale_length_pixels,
            pixels_per_unit,
            min_separation_pixels: pixels_per_unit * units_to_distance,
        })
    }

    fn recompute_derived(&mut self) {
        // Callers have already validated the fields; extent cannot fail here.
        let extent = match self.orientation {
            ScaleOrientation::Horizontal => self.corner_max.x - self.corner_min.x,
            ScaleOrientation::Vertical => self.corner_max.y - self.corner_min.y,
        };
        self.scale_length_pixels = extent as Real;
        self.pixels_per_unit = self.scale_length_pixels / self.scale_length_units;
        self.min_separation_pixels = self.pixels_per_unit * self.units_to_distance;
    }

    /// Replace the segment corners and recompute all derived quantities.
    pub fn redefine_points(&mut self, point_a: PixelPt, point_b: PixelPt) -> Result<(), RoomError> {
        let (corner_min, corner_max) = normalize_corners(point_a, point_b);
        axis_extent(&corner_min, &corner_max, self.orientation)?;
        self.corner_min = corner_min;
        self.corner_max = corner_max;
        self.recompute_derived();
        Ok(())
    }

    /// Replace the segment axis and recompute all derived quantities.
    pub fn redefine_orientation(&mut self, orientation: ScaleOrientation) -> Result<(), RoomError> {
        axis_extent(&self.corner_min, &self.corner_max, orientation)?;
        self.orientation = orientation;
        self.recompute_derived();
        Ok(())
    }

    /// Replace the segment's physical length and recompute all derived
    /// quantities.
    pub fn redefine_scale_length_units(&mut self, units: Real) -> Result<(), RoomError> {
        check_scale_length(units)?;
        self.scale_length_units = units;
        self.recompute_derived();
        Ok(())
    }

    /// Replace the distancing length and recompute all derived quantities.
    pub fn redefine_units_to_distance(&mut self, units: Real) -> Result<(), RoomError> {
        check_distance(units)?;
        self.units_to_distance = units;
        self.recompute_derived();
        Ok(())
    }

    /// Normalized corner with the smaller coordinate on each axis.
    pub fn corner_min(&self) -> PixelPt {
        self.corner_min
    }

    /// Normalized corner with the larger coordinate on each axis.
    pub fn corner_max(&self) -> PixelPt {
        self.corner_max
    }

    pub fn orientation(&self) -> ScaleOrientation {
        self.orientation
    }

    pub fn scale_length_units(&self) -> Real {
        self.scale_length_units
    }

    pub fn units_to_distance(&self) -> Real {
        self.units_to_distance
    }

    /// Pixel extent of the segment along the calibrated axis.
    pub fn scale_length_pixels(&self) -> Real {
        self.scale_length_pixels
    }

    pub fn pixels_per_unit(&self) -> Real {
        self.pixels_per_unit
    }

    /// Minimum pixel separation required between seats.
    pub fn min_separation_pixels(&self) -> Real {
        self.min_separation_pixels
    }
}
