//! Room planning session.
//!
//! [`RoomSession`] is the mutable state container handed to input
//! collaborators: it owns the room and its floor image, forwards every
//! mutation to the aggregate, and keeps an audit log of the operations that
//! shaped the current state. Solving is gated on the room being ready —
//! calibrated and holding at least one candidate seat — matching the
//! prerequisite bookkeeping of the interactive workflow this core serves.

use crate::seating::{solve_seating, SeatingConfig, SeatingReport};
use anyhow::{Context, Result};
use seatplan_core::{
    FloorImage, OrientationId, PixelPt, PlacementId, Pt2, Room, RoomError, ScaleCalibration,
    ShapeId,
};
use serde::{Deserialize, Serialize};

/// Run record identifier for the session audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(u64);

impl RunId {
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RunId({})", self.0)
    }
}

/// Classification of session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunKind {
    SetScale,
    AddOrientation,
    AddShape,
    AddPlacement,
    RemovePlacement,
    Solve,
}

/// One logged session operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub id: RunId,
    pub kind: RunKind,
    /// Short human-readable summary of what the operation touched.
    pub detail: String,
}

/// Mutable room-planning state container with an audit log.
#[derive(Debug)]
pub struct RoomSession {
    room: Room,
    floor: FloorImage,
    runs: Vec<RunRecord>,
    next_run: u64,
}

impl RoomSession {
    pub fn new(floor: FloorImage) -> Self {
        Self {
            room: Room::new(),
            floor,
            runs: Vec::new(),
            next_run: 0,
        }
    }

    fn record(&mut self, kind: RunKind, detail: String) {
        let id = RunId(self.next_run);
        self.next_run += 1;
        self.runs.push(RunRecord { id, kind, detail });
    }

    /// Replace the room's calibration.
    pub fn set_scale(&mut self, scale: ScaleCalibration) {
        self.record(
            RunKind::SetScale,
            format!(
                "min separation {:.2} px",
                scale.min_separation_pixels()
            ),
        );
        self.room.set_scale(scale);
    }

    /// Register a chair orientation from two rectangle corners.
    pub fn add_chair_orientation(
        &mut self,
        point_a: PixelPt,
        point_b: PixelPt,
    ) -> Result<OrientationId, RoomError> {
        let id = self.room.add_orientation(point_a, point_b, &self.floor)?;
        self.record(RunKind::AddOrientation, id.to_string());
        Ok(id)
    }

    /// Register the chair outline for an orientation.
    pub fn add_chair_shape(
        &mut self,
        orientation: OrientationId,
        vertices: Vec<PixelPt>,
    ) -> Result<ShapeId, RoomError> {
        let id = self.room.add_shape(orientation, vertices)?;
        self.record(RunKind::AddShape, format!("{id} for {orientation}"));
        Ok(id)
    }

    /// Register a candidate seat.
    pub fn add_chair_placement(
        &mut self,
        orientation: OrientationId,
        shape: ShapeId,
        anchor: Pt2,
    ) -> Result<PlacementId, RoomError> {
        let id = self.room.add_placement(orientation, shape, anchor)?;
        self.record(
            RunKind::AddPlacement,
            format!("{id} at ({:.1}, {:.1})", anchor.x, anchor.y),
        );
        Ok(id)
    }

    /// Remove a candidate seat.
    pub fn remove_chair_placement(&mut self, id: PlacementId) -> Result<(), RoomError> {
        self.room.remove_placement(id)?;
        self.record(RunKind::RemovePlacement, id.to_string());
        Ok(())
    }

    /// Solve seating for the current candidates and record the selection.
    ///
    /// # Errors
    ///
    /// Fails before running anything when the room is not ready:
    /// [`RoomError::ScaleNotSet`] without a calibration,
    /// [`RoomError::NoPlacements`] without candidates.
    pub fn solve(&mut self, config: &SeatingConfig) -> Result<SeatingReport> {
        if self.room.scale().is_none() {
            return Err(RoomError::ScaleNotSet.into());
        }
        if self.room.num_placements() == 0 {
            return Err(RoomError::NoPlacements.into());
        }

        let report = solve_seating(&self.room, config)?;
        self.room
            .set_solution(report.selected.clone())
            .context("recording solution on the room")?;
        self.record(
            RunKind::Solve,
            format!(
                "{} of {} seats selected",
                report.total_selected, report.candidate_count
            ),
        );
        Ok(report)
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn floor(&self) -> &FloorImage {
        &self.floor
    }

    /// Audit log of session operations, oldest first.
    pub fn runs(&self) -> &[RunRecord] {
        &self.runs
    }
}
