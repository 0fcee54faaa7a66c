//! The owning room aggregate.
//!
//! A [`Room`] owns the calibration and all chair entities in id-keyed
//! arenas, and is the only way to create shapes and placements: every
//! mutation that adds a cross-reference validates membership against the
//! arenas first. Arenas are `BTreeMap`s, so iteration is always in ascending
//! id order — downstream node indexing does not depend on insertion history.

use crate::chair::{ChairOrientation, ChairPlacement, ChairShape, FloorImage};
use crate::error::RoomError;
use crate::math::{PixelPt, Pt2};
use crate::scale::ScaleCalibration;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier of a [`ChairOrientation`] within a room.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct OrientationId(pub(crate) u64);

/// Identifier of a [`ChairShape`] within a room.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ShapeId(pub(crate) u64);

/// Identifier of a [`ChairPlacement`] within a room.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PlacementId(pub(crate) u64);

impl OrientationId {
    /// Raw id value (for display/debugging).
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl ShapeId {
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl PlacementId {
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for OrientationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrientationId({})", self.0)
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ShapeId({})", self.0)
    }
}

impl std::fmt::Display for PlacementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PlacementId({})", self.0)
    }
}

/// Aggregate owning one room's calibration, chair geometry, candidate
/// placements, and (after solving) the selected subset.
#[derive(Debug, Default)]
pub struct Room {
    scale: Option<ScaleCalibration>,
    orientations: BTreeMap<OrientationId, ChairOrientation>,
    shapes: BTreeMap<ShapeId, ChairShape>,
    placements: BTreeMap<PlacementId, ChairPlacement>,
    next_orientation: u64,
    next_shape: u64,
    next_placement: u64,
    solution: Option<Vec<PlacementId>>,
}

impl Room {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the room's calibration wholesale.
    pub fn set_scale(&mut self, scale: ScaleCalibration) {
        self.scale = Some(scale);
    }

    pub fn scale(&self) -> Option<&ScaleCalibration> {
        self.scale.as_ref()
    }

    /// Mutable access for `redefine_*` edits by the calibration collaborator.
    pub fn scale_mut(&mut self) -> Option<&mut ScaleCalibration> {
        self.scale.as_mut()
    }

    /// Register a chair orientation, cropping its reference patch from
    /// `floor`.
    pub fn add_orientation(
        &mut self,
        point_a: PixelPt,
        point_b: PixelPt,
        floor: &FloorImage,
    ) -> Result<OrientationId, RoomError> {
        let orientation = ChairOrientation::new(point_a, point_b, floor)?;
        let id = OrientationId(self.next_orientation);
        self.next_orientation += 1;
        self.orientations.insert(id, orientation);
        Ok(id)
    }

    pub fn orientation(&self, id: OrientationId) -> Option<&ChairOrientation> {
        self.orientations.get(&id)
    }

    /// Orientations in ascending id order.
    pub fn orientations(&self) -> impl Iterator<Item = (OrientationId, &ChairOrientation)> {
        self.orientations.iter().map(|(id, o)| (*id, o))
    }

    /// Register the chair outline for `orientation`.
    ///
    /// # Errors
    ///
    /// `orientation` must be a member of this room, must not already have a
    /// shape, and the outline needs at least 3 vertices.
    pub fn add_shape(
        &mut self,
        orientation: OrientationId,
        vertices: Vec<PixelPt>,
    ) -> Result<ShapeId, RoomError> {
        let rect = self
            .orientations
            .get(&orientation)
            .ok_or(RoomError::OrientationNotFound(orientation))?;
        if self.shapes.values().any(|s| s.orientation() == orientation) {
            return Err(RoomError::DuplicateShape(orientation));
        }
        let shape = ChairShape::new(orientation, vertices, rect)?;
        let id = ShapeId(self.next_shape);
        self.next_shape += 1;
        self.shapes.insert(id, shape);
        Ok(id)
    }

    pub fn shape(&self, id: ShapeId) -> Option<&ChairShape> {
        self.shapes.get(&id)
    }

    /// Shapes in ascending id order.
    pub fn shapes(&self) -> impl Iterator<Item = (ShapeId, &ChairShape)> {
        self.shapes.iter().map(|(id, s)| (*id, s))
    }

    /// The shape registered for `orientation`, if any.
    pub fn shape_for(&self, orientation: OrientationId) -> Option<(ShapeId, &ChairShape)> {
        self.shapes
            .iter()
            .find(|(_, s)| s.orientation() == orientation)
            .map(|(id, s)| (*id, s))
    }

    /// Register a candidate seat.
    ///
    /// Both ids must be members of this room and the shape must belong to
    /// the requested orientation. Adding a candidate invalidates any
    /// recorded solution.
    pub fn add_placement(
        &mut self,
        orientation: OrientationId,
        shape: ShapeId,
        anchor: Pt2,
    ) -> Result<PlacementId, RoomError> {
        if !self.orientations.contains_key(&orientation) {
            return Err(RoomError::OrientationNotFound(orientation));
        }
        let shape_entry = self
            .shapes
            .get(&shape)
            .ok_or(RoomError::ShapeNotFound(shape))?;
        if shape_entry.orientation() != orientation {
            return Err(RoomError::ShapeOrientationMismatch {
                shape,
                requested: orientation,
                actual: shape_entry.orientation(),
            });
        }
        let id = PlacementId(self.next_placement);
        self.next_placement += 1;
        self.placements
            .insert(id, ChairPlacement::new(orientation, shape, anchor));
        self.solution = None;
        Ok(id)
    }

    /// Remove a candidate seat. Invalidates any recorded solution.
    pub fn remove_placement(&mut self, id: PlacementId) -> Result<(), RoomError> {
        self.placements
            .remove(&id)
            .ok_or(RoomError::PlacementNotFound(id))?;
        self.solution = None;
        Ok(())
    }

    pub fn placement(&self, id: PlacementId) -> Option<&ChairPlacement> {
        self.placements.get(&id)
    }

    /// Placements in ascending id order.
    pub fn placements(&self) -> impl Iterator<Item = (PlacementId, &ChairPlacement)> {
        self.placements.iter().map(|(id, p)| (*id, p))
    }

    pub fn num_placements(&self) -> usize {
        self.placements.len()
    }

    /// Record the solved seat selection.
    ///
    /// Every id must reference a placement owned by this room. The stored
    /// selection is kept in ascending id order.
    pub fn set_solution(&mut self, mut selected: Vec<PlacementId>) -> Result<(), RoomError> {
        for id in &selected {
            if !self.placements.contains_key(id) {
                return Err(RoomError::PlacementNotFound(*id));
            }
        }
        selected.sort_unstable();
        self.solution = Some(selected);
        Ok(())
    }

    /// The recorded seat selection, if a solve has run since the last
    /// candidate-set mutation.
    pub fn solution(&self) -> Option<&[PlacementId]> {
        self.solution.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chair::FloorImage;
    use crate::scale::{ScaleCalibration, ScaleOrientation};
    use image::DynamicImage;

    fn pt(x: i32, y: i32) -> PixelPt {
        PixelPt::new(x, y)
    }

    fn floor() -> FloorImage {
        FloorImage::new(DynamicImage::new_luma8(400, 400))
    }

    fn square(side: i32) -> Vec<PixelPt> {
        vec![pt(0, 0), pt(side, 0), pt(side, side), pt(0, side)]
    }

    fn room_with_chair() -> (Room, OrientationId, ShapeId) {
        let f = floor();
        let mut room = Room::new();
        let o = room.add_orientation(pt(0, 0), pt(20, 20), &f).unwrap();
        let s = room.add_shape(o, square(20)).unwrap();
        (room, o, s)
    }

    #[test]
    fn scale_replacement() {
        let mut room = Room::new();
        assert!(room.scale().is_none());

        let scale = ScaleCalibration::new(
            pt(0, 0),
            pt(100, 0),
            3.0,
            ScaleOrientation::Horizontal,
            10.0,
        )
        .unwrap();
        room.set_scale(scale);
        assert_eq!(room.scale().unwrap().min_separation_pixels(), 30.0);

        room.scale_mut()
            .unwrap()
            .redefine_units_to_distance(2.0)
            .unwrap();
        assert_eq!(room.scale().unwrap().min_separation_pixels(), 20.0);
    }

    #[test]
    fn shape_requires_registered_orientation() {
        let mut room = Room::new();
        let bogus = OrientationId(7);
        assert!(matches!(
            room.add_shape(bogus, square(20)),
            Err(RoomError::OrientationNotFound(_))
        ));
    }

    #[test]
    fn one_shape_per_orientation() {
        let (mut room, o, _) = room_with_chair();
        assert!(matches!(
            room.add_shape(o, square(20)),
            Err(RoomError::DuplicateShape(_))
        ));
    }

    #[test]
    fn placement_requires_matching_shape() {
        let f = floor();
        let (mut room, o1, s1) = room_with_chair();
        let o2 = room.add_orientation(pt(30, 0), pt(60, 30), &f).unwrap();
        let s2 = room.add_shape(o2, square(30)).unwrap();

        // Cross-pairing a shape with the wrong orientation is rejected.
        assert!(matches!(
            room.add_placement(o1, s2, Pt2::new(100.0, 100.0)),
            Err(RoomError::ShapeOrientationMismatch { .. })
        ));
        assert!(room.add_placement(o1, s1, Pt2::new(100.0, 100.0)).is_ok());
        assert!(room.add_placement(o2, s2, Pt2::new(200.0, 100.0)).is_ok());
    }

    #[test]
    fn placement_requires_members() {
        let (mut room, o, _) = room_with_chair();
        assert!(matches!(
            room.add_placement(o, ShapeId(9), Pt2::new(0.0, 0.0)),
            Err(RoomError::ShapeNotFound(_))
        ));
        assert!(matches!(
            room.add_placement(OrientationId(9), ShapeId(0), Pt2::new(0.0, 0.0)),
            Err(RoomError::OrientationNotFound(_))
        ));
    }

    #[test]
    fn remove_placement() {
        let (mut room, o, s) = room_with_chair();
        let p = room.add_placement(o, s, Pt2::new(50.0, 50.0)).unwrap();
        assert_eq!(room.num_placements(), 1);

        room.remove_placement(p).unwrap();
        assert_eq!(room.num_placements(), 0);
        assert!(matches!(
            room.remove_placement(p),
            Err(RoomError::PlacementNotFound(_))
        ));
    }

    #[test]
    fn placement_ids_are_never_reused() {
        let (mut room, o, s) = room_with_chair();
        let p0 = room.add_placement(o, s, Pt2::new(50.0, 50.0)).unwrap();
        room.remove_placement(p0).unwrap();
        let p1 = room.add_placement(o, s, Pt2::new(60.0, 50.0)).unwrap();
        assert_ne!(p0, p1);
    }

    #[test]
    fn solution_validated_and_sorted() {
        let (mut room, o, s) = room_with_chair();
        let p0 = room.add_placement(o, s, Pt2::new(50.0, 50.0)).unwrap();
        let p1 = room.add_placement(o, s, Pt2::new(150.0, 50.0)).unwrap();

        assert!(matches!(
            room.set_solution(vec![PlacementId(42)]),
            Err(RoomError::PlacementNotFound(_))
        ));
        assert!(room.solution().is_none());

        room.set_solution(vec![p1, p0]).unwrap();
        assert_eq!(room.solution().unwrap(), &[p0, p1]);
    }

    #[test]
    fn candidate_mutations_invalidate_solution() {
        let (mut room, o, s) = room_with_chair();
        let p0 = room.add_placement(o, s, Pt2::new(50.0, 50.0)).unwrap();
        room.set_solution(vec![p0]).unwrap();

        room.add_placement(o, s, Pt2::new(150.0, 50.0)).unwrap();
        assert!(room.solution().is_none());

        room.set_solution(vec![p0]).unwrap();
        room.remove_placement(p0).unwrap();
        assert!(room.solution().is_none());
    }
}
