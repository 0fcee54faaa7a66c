//! High-level entry crate for the `seatplan-rs` toolbox.
//!
//! The workspace solves one problem: given a floor-plan raster, a
//! calibrated pixel-to-distance scale, and a set of candidate chair
//! placements, select the largest subset of seats such that no two chosen
//! seats violate the required separation.
//!
//! ## Session API
//!
//! [`pipeline::RoomSession`] is a mutable state container for interactive
//! collaborators: it owns the room and floor image, validates every
//! mutation, keeps an audit log, and gates solving on readiness.
//!
//! ```no_run
//! use seatplan::core::{PixelPt, Pt2, ScaleCalibration, ScaleOrientation};
//! use seatplan::core::synthetic::blank_floor;
//! use seatplan::pipeline::{RoomSession, SeatingConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut session = RoomSession::new(blank_floor(512, 512));
//! session.set_scale(ScaleCalibration::new(
//!     PixelPt::new(0, 0),
//!     PixelPt::new(100, 0),
//!     3.0,
//!     ScaleOrientation::Horizontal,
//!     10.0,
//! )?);
//!
//! let orientation = session.add_chair_orientation(PixelPt::new(0, 0), PixelPt::new(20, 20))?;
//! let shape = session.add_chair_shape(
//!     orientation,
//!     vec![
//!         PixelPt::new(0, 0),
//!         PixelPt::new(20, 0),
//!         PixelPt::new(20, 20),
//!         PixelPt::new(0, 20),
//!     ],
//! )?;
//! session.add_chair_placement(orientation, shape, Pt2::new(100.0, 100.0))?;
//!
//! let report = session.solve(&SeatingConfig::default())?;
//! println!("{} seats selected", report.total_selected);
//! # Ok(())
//! # }
//! ```
//!
//! ## Imperative API
//!
//! For callers managing a [`core::Room`] directly,
//! [`pipeline::solve_seating`] runs graph construction plus the exact
//! solve, and the `graph` / `solve` modules expose the individual stages
//! for custom workflows.
//!
//! ## Module Organization
//!
//! - **[`core`]**: math aliases, calibration, chair geometry, the room
//!   aggregate
//! - **[`graph`]**: footprint transforms and conflict-graph construction
//! - **[`solve`]**: Maximum Independent Set solving behind a backend trait
//! - **[`pipeline`]**: orchestration and the room session
//! - **[`prelude`]**: convenient re-exports for common use cases

/// Math aliases, calibration, chair geometry, and the room aggregate.
pub mod core {
    pub use seatplan_core::*;
}

/// Footprint transforms and conflict-graph construction.
pub mod graph {
    pub use seatplan_graph::*;
}

/// Maximum Independent Set solving behind a swappable backend.
pub mod solve {
    pub use seatplan_solve::*;
}

/// Solve orchestration and the room planning session.
pub mod pipeline {
    pub use seatplan_pipeline::*;
}

/// Convenient re-exports for common use cases.
pub mod prelude {
    pub use crate::core::{
        FloorImage, OrientationId, PixelPt, PlacementId, Pt2, Real, Room, RoomError,
        ScaleCalibration, ScaleOrientation, ShapeId, Vec2,
    };
    pub use crate::graph::{build_conflict_graph, ConflictGraph, ConflictGraphOptions};
    pub use crate::pipeline::{
        solve_and_record, solve_seating, RoomSession, SeatingConfig, SeatingReport,
    };
    pub use crate::solve::{BackendKind, MisSolution, SolveOptions};
}
