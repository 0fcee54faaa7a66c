//! Seating-solve orchestration.
//!
//! Two complementary APIs, mirroring how collaborators drive the core:
//!
//! - **Imperative**: [`solve_seating`] builds the conflict graph for a
//!   calibrated room, runs the Maximum Independent Set solve, and returns a
//!   [`SeatingReport`]; [`solve_and_record`] additionally stores the
//!   selection on the room.
//! - **Session**: [`RoomSession`] wraps a room and its floor image, logs
//!   every mutating operation as a run record, and gates solving on the
//!   room being ready (calibration set, candidates present).

/// Imperative solve orchestration: config, report, entry points.
pub mod seating;
/// Mutable room-planning session with an audit log.
pub mod session;

pub use seating::{solve_and_record, solve_seating, SeatingConfig, SeatingReport};
pub use session::{RoomSession, RunId, RunKind, RunRecord};
