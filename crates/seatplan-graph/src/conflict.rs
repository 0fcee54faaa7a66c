//! Pairwise conflict sweep over candidate seats.
//!
//! For every ordered pair `(i, j)` the sweep measures the distance from
//! placement `i`'s anchor to placement `j`'s world-space footprint and adds
//! an undirected edge when it is within the calibrated minimum separation
//! (inclusive). Anchor-to-polygon distance is deliberately asymmetric per
//! direction — a wide chair can crowd a narrow one whose own footprint stays
//! clear — so the edge exists when either direction trips.

use crate::footprint::{distance_to_footprint, footprint};
use geo::Polygon;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use rayon::prelude::*;
use seatplan_core::{PlacementId, Pt2, Real, Room, RoomError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Options for the conflict sweep.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConflictGraphOptions {
    /// Run the O(n²) pair sweep on the rayon thread pool. The sweep only
    /// reads shared state and results are merged in ascending node order,
    /// so the built graph is identical to the sequential one.
    pub parallel: bool,
}

/// Undirected graph over candidate seats; an edge marks a pair that cannot
/// both be occupied.
///
/// Node indices are assigned in ascending placement-id order, so they are
/// stable for a given candidate set regardless of insertion history.
#[derive(Debug, Clone)]
pub struct ConflictGraph {
    graph: UnGraph<PlacementId, ()>,
    nodes: Vec<PlacementId>,
}

impl ConflictGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Placement id carried by a node index.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    pub fn placement_id(&self, node: usize) -> PlacementId {
        self.nodes[node]
    }

    /// Node-index → placement-id mapping, ascending by id.
    pub fn placement_ids(&self) -> &[PlacementId] {
        &self.nodes
    }

    /// Edge list as normalized `(low, high)` node-index pairs, ascending.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges: Vec<(usize, usize)> = self
            .graph
            .edge_references()
            .map(|e| {
                let (a, b) = (e.source().index(), e.target().index());
                (a.min(b), a.max(b))
            })
            .collect();
        edges.sort_unstable();
        edges
    }

    /// Whether two placements are marked mutually exclusive.
    pub fn has_conflict(&self, a: PlacementId, b: PlacementId) -> bool {
        let (Ok(ia), Ok(ib)) = (self.nodes.binary_search(&a), self.nodes.binary_search(&b)) else {
            return false;
        };
        self.graph
            .find_edge(NodeIndex::new(ia), NodeIndex::new(ib))
            .is_some()
    }

    /// Underlying petgraph graph.
    pub fn graph(&self) -> &UnGraph<PlacementId, ()> {
        &self.graph
    }
}

/// Build the conflict graph for all placements of a calibrated room.
///
/// # Errors
///
/// Returns [`RoomError::ScaleNotSet`] when the room has no calibration yet.
pub fn build_conflict_graph(
    room: &Room,
    opts: &ConflictGraphOptions,
) -> Result<ConflictGraph, RoomError> {
    let threshold = room
        .scale()
        .ok_or(RoomError::ScaleNotSet)?
        .min_separation_pixels();

    let mut ids: Vec<PlacementId> = Vec::with_capacity(room.num_placements());
    let mut anchors: Vec<Pt2> = Vec::with_capacity(room.num_placements());
    let mut footprints: Vec<Polygon<Real>> = Vec::with_capacity(room.num_placements());
    for (id, placement) in room.placements() {
        let shape = room
            .shape(placement.shape())
            .ok_or(RoomError::ShapeNotFound(placement.shape()))?;
        ids.push(id);
        anchors.push(placement.anchor());
        footprints.push(footprint(shape, &placement.anchor()));
    }

    let n = ids.len();
    let conflicts_for = |i: usize| -> Vec<usize> {
        (0..n)
            .filter(|&j| j != i)
            .filter(|&j| distance_to_footprint(&anchors[i], &footprints[j]) <= threshold)
            .collect()
    };
    let per_node: Vec<Vec<usize>> = if opts.parallel {
        (0..n).into_par_iter().map(conflicts_for).collect()
    } else {
        (0..n).map(conflicts_for).collect()
    };

    let mut graph = UnGraph::with_capacity(n, n);
    let node_indices: Vec<NodeIndex> = ids.iter().map(|id| graph.add_node(*id)).collect();
    // Merge in ascending (i, j) order; `update_edge` makes the mirrored
    // insertion idempotent, so edge identity does not depend on sweep order.
    for (i, conflicts) in per_node.iter().enumerate() {
        for &j in conflicts {
            graph.update_edge(node_indices[i], node_indices[j], ());
        }
    }

    debug!(
        nodes = n,
        edges = graph.edge_count(),
        threshold_px = threshold,
        "conflict graph built"
    );
    Ok(ConflictGraph { graph, nodes: ids })
}
