//! Chair geometry entities.
//!
//! A [`ChairOrientation`] is one visually distinct chair appearance in the
//! floor plan: a normalized bounding rectangle plus the raster patch cropped
//! at that rectangle. The patch is kept for external template-matching
//! collaborators; the core never interprets its pixels. A [`ChairShape`]
//! traces the physical outline of a chair in the patch's local frame, and a
//! [`ChairPlacement`] positions an orientation/shape pair at a candidate
//! seat anchor.

use crate::error::RoomError;
use crate::math::{PixelPt, Pt2, Real, Vec2};
use crate::room::{OrientationId, ShapeId};
use image::DynamicImage;

/// Room floor-plan raster.
///
/// Treated as an opaque byte grid with a width and a height; the only
/// operation the core performs on it is cropping orientation patches.
#[derive(Debug, Clone)]
pub struct FloorImage {
    image: DynamicImage,
}

impl FloorImage {
    pub fn new(image: DynamicImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn as_image(&self) -> &DynamicImage {
        &self.image
    }

    fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> DynamicImage {
        self.image.crop_imm(x, y, width, height)
    }
}

impl From<DynamicImage> for FloorImage {
    fn from(image: DynamicImage) -> Self {
        Self::new(image)
    }
}

/// One visually distinct chair appearance in the floor plan.
#[derive(Debug, Clone)]
pub struct ChairOrientation {
    rect_min: PixelPt,
    rect_max: PixelPt,
    patch: DynamicImage,
}

impl ChairOrientation {
    /// Build an orientation from two opposite rectangle corners, cropping
    /// the reference patch from `floor`.
    ///
    /// # Errors
    ///
    /// Returns [`RoomError::EmptyOrientationRect`] for a degenerate
    /// rectangle and [`RoomError::RectOutOfBounds`] when the rectangle does
    /// not lie fully inside the floor image.
    pub fn new(point_a: PixelPt, point_b: PixelPt, floor: &FloorImage) -> Result<Self, RoomError> {
        let rect_min = PixelPt::new(point_a.x.min(point_b.x), point_a.y.min(point_b.y));
        let rect_max = PixelPt::new(point_a.x.max(point_b.x), point_a.y.max(point_b.y));

        if rect_min.x == rect_max.x || rect_min.y == rect_max.y {
            return Err(RoomError::EmptyOrientationRect);
        }
        let in_bounds = rect_min.x >= 0
            && rect_min.y >= 0
            && (rect_max.x as i64) <= floor.width() as i64
            && (rect_max.y as i64) <= floor.height() as i64;
        if !in_bounds {
            return Err(RoomError::RectOutOfBounds {
                x1: rect_min.x,
                y1: rect_min.y,
                x2: rect_max.x,
                y2: rect_max.y,
                width: floor.width(),
                height: floor.height(),
            });
        }

        let patch = floor.crop(
            rect_min.x as u32,
            rect_min.y as u32,
            (rect_max.x - rect_min.x) as u32,
            (rect_max.y - rect_min.y) as u32,
        );
        Ok(Self {
            rect_min,
            rect_max,
            patch,
        })
    }

    /// Normalized rectangle corner with the smaller coordinates.
    pub fn rect_min(&self) -> PixelPt {
        self.rect_min
    }

    /// Normalized rectangle corner with the larger coordinates.
    pub fn rect_max(&self) -> PixelPt {
        self.rect_max
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> i32 {
        self.rect_max.x - self.rect_min.x
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> i32 {
        self.rect_max.y - self.rect_min.y
    }

    /// Reference patch cropped from the floor image.
    pub fn patch(&self) -> &DynamicImage {
        &self.patch
    }
}

/// Polygon outline of a chair, in the local frame of its orientation patch.
#[derive(Debug, Clone)]
pub struct ChairShape {
    orientation: OrientationId,
    vertices: Vec<PixelPt>,
    centering_offset: Vec2,
}

impl ChairShape {
    /// Created through [`Room::add_shape`](crate::Room::add_shape), which
    /// checks that `orientation` is a member of the room first.
    pub(crate) fn new(
        orientation: OrientationId,
        vertices: Vec<PixelPt>,
        rect: &ChairOrientation,
    ) -> Result<Self, RoomError> {
        if vertices.len() < 3 {
            return Err(RoomError::TooFewVertices(vertices.len()));
        }
        // Negative half-extent of the orientation rectangle: shifts the
        // patch-corner-relative polygon onto the placement anchor.
        let centering_offset = Vec2::new(
            -(rect.width() as Real) / 2.0,
            -(rect.height() as Real) / 2.0,
        );
        Ok(Self {
            orientation,
            vertices,
            centering_offset,
        })
    }

    /// The orientation this outline belongs to.
    pub fn orientation(&self) -> OrientationId {
        self.orientation
    }

    /// Polygon vertices in patch-local coordinates.
    pub fn vertices(&self) -> &[PixelPt] {
        &self.vertices
    }

    /// Vector that re-centers the patch-local polygon onto a placement
    /// anchor.
    pub fn centering_offset(&self) -> Vec2 {
        self.centering_offset
    }
}

/// A candidate seat: an orientation/shape pair at an anchor point.
#[derive(Debug, Clone)]
pub struct ChairPlacement {
    orientation: OrientationId,
    shape: ShapeId,
    anchor: Pt2,
}

impl ChairPlacement {
    /// Created through [`Room::add_placement`](crate::Room::add_placement),
    /// which checks membership and shape/orientation consistency first.
    pub(crate) fn new(orientation: OrientationId, shape: ShapeId, anchor: Pt2) -> Self {
        Self {
            orientation,
            shape,
            anchor,
        }
    }

    pub fn orientation(&self) -> OrientationId {
        self.orientation
    }

    pub fn shape(&self) -> ShapeId {
        self.shape
    }

    /// Pixel coordinates of the seat's center.
    pub fn anchor(&self) -> Pt2 {
        self.anchor
    }
}
