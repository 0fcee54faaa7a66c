//! Core data model for `seatplan-rs`.
//!
//! This crate contains:
//! - linear algebra type aliases (`Real`, `Pt2`, `PixelPt`, ...),
//! - the pixel-to-distance scale calibration ([`ScaleCalibration`]),
//! - chair geometry entities ([`ChairOrientation`], [`ChairShape`],
//!   [`ChairPlacement`]) and the floor-plan raster wrapper ([`FloorImage`]),
//! - the owning [`Room`] aggregate with id-keyed entity arenas and
//!   referential-integrity checks,
//! - deterministic synthetic rooms for tests ([`synthetic`]).
//!
//! The room's collaborators (annotation UIs, detectors, renderers) produce
//! the geometry stored here; the conflict-graph and solver crates consume it.

/// Chair geometry entities and the floor-plan raster wrapper.
pub mod chair;
/// Error taxonomy for the data model.
pub mod error;
/// Linear algebra type aliases and helpers.
pub mod math;
/// The owning room aggregate and its entity identifiers.
pub mod room;
/// Pixel-to-distance scale calibration.
pub mod scale;
/// Deterministic synthetic rooms for tests and examples.
pub mod synthetic;

pub use chair::{ChairOrientation, ChairPlacement, ChairShape, FloorImage};
pub use error::RoomError;
pub use math::{pixel_to_real, PixelPt, Pt2, Real, Vec2};
pub use room::{OrientationId, PlacementId, Room, ShapeId};
pub use scale::{ScaleCalibration, ScaleOrientation};
