//! Imperative seating-solve orchestration.

use anyhow::{Context, Result};
use seatplan_core::{PlacementId, Room};
use seatplan_graph::{build_conflict_graph, ConflictGraphOptions};
use seatplan_solve::{solve_with_backend, BackendKind, SolveOptions};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::info;

/// Options for one seating solve.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeatingConfig {
    /// Conflict-graph construction options.
    #[serde(default)]
    pub graph: ConflictGraphOptions,
    /// Maximum Independent Set solver options.
    #[serde(default)]
    pub solve: SolveOptions,
    /// Solver backend selection.
    #[serde(default)]
    pub backend: BackendKind,
}

/// Outcome of one seating solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatingReport {
    /// Selected placement ids, ascending.
    pub selected: Vec<PlacementId>,
    /// Number of selected seats.
    pub total_selected: usize,
    /// Number of candidate placements considered.
    pub candidate_count: usize,
    /// Number of mutually-exclusive pairs in the conflict graph.
    pub conflict_edges: usize,
    /// False when a time limit stopped the search at the best incumbent
    /// instead of a proven optimum.
    pub proven_optimal: bool,
    /// Wall time of graph construction plus solve.
    pub solve_time: Duration,
}

/// Build the conflict graph for `room` and select the maximum set of
/// seats respecting the calibrated separation.
///
/// A room with no candidates yields an empty selection; a missing
/// calibration is an error. The solve itself is exact unless
/// `config.solve.time_limit` cuts it short, which the report's
/// `proven_optimal` flag records.
pub fn solve_seating(room: &Room, config: &SeatingConfig) -> Result<SeatingReport> {
    let started = Instant::now();

    let graph = build_conflict_graph(room, &config.graph).context("building conflict graph")?;
    let solution = solve_with_backend(
        config.backend,
        graph.node_count(),
        &graph.edges(),
        &config.solve,
    )
    .context("solving maximum independent set")?;

    let selected: Vec<PlacementId> = solution
        .selected
        .iter()
        .map(|&node| graph.placement_id(node))
        .collect();

    let report = SeatingReport {
        total_selected: selected.len(),
        candidate_count: graph.node_count(),
        conflict_edges: graph.edge_count(),
        proven_optimal: solution.proven_optimal,
        solve_time: started.elapsed(),
        selected,
    };
    info!(
        candidates = report.candidate_count,
        conflicts = report.conflict_edges,
        selected = report.total_selected,
        proven_optimal = report.proven_optimal,
        "seating solved"
    );
    Ok(report)
}

/// [`solve_seating`], then record the selection on the room.
pub fn solve_and_record(room: &mut Room, config: &SeatingConfig) -> Result<SeatingReport> {
    let report = solve_seating(room, config)?;
    room.set_solution(report.selected.clone())
        .context("recording solution on the room")?;
    Ok(report)
}
