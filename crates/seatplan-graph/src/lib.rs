//! Conflict-graph construction for candidate seats.
//!
//! This crate turns a calibrated room's placements into an undirected
//! graph whose edges mark pairs of seats that are too close to co-occupy:
//! - [`footprint`] translates a chair outline into room coordinates
//!   (two explicit, separately testable transform steps),
//! - [`build_conflict_graph`] runs the pairwise point-to-polygon distance
//!   sweep against the calibrated minimum separation.

/// Pairwise conflict sweep and the resulting graph.
pub mod conflict;
/// World-space chair footprints and point-to-polygon distance.
pub mod footprint;

pub use conflict::{build_conflict_graph, ConflictGraph, ConflictGraphOptions};
pub use footprint::{
    apply_centering_offset, distance_to_footprint, footprint, translate_to_anchor,
};
