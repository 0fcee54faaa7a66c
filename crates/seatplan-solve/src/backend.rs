//! Backend-agnostic solver interface.
//!
//! A solve is a pure function of `(node_count, edges)`; no state persists
//! across calls. Backends must return a provably maximum selection unless a
//! time limit cut the search short, in which case the best incumbent is
//! returned with `proven_optimal = false` so callers can tell the two
//! apart.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::branch_bound::BranchBoundBackend;

/// Undirected conflict edge between two node indices.
pub type Edge = (usize, usize);

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("edge ({0}, {1}) references a node outside 0..{2}")]
    EdgeOutOfRange(usize, usize, usize),
    #[error("edge ({0}, {0}) is a self-loop")]
    SelfLoop(usize),
}

/// Options for a Maximum Independent Set solve.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolveOptions {
    /// Wall-clock budget for the search. `None` runs to proven optimality;
    /// with a limit, the best incumbent found so far is returned once the
    /// deadline passes.
    pub time_limit: Option<Duration>,
    /// Emit tracing events for incumbent improvements when > 0.
    pub verbosity: usize,
}

/// Result of a solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MisSolution {
    /// Selected node indices, ascending.
    pub selected: Vec<usize>,
    /// True when the search completed and the selection is provably
    /// maximum; false when a time limit stopped the search early.
    pub proven_optimal: bool,
    /// Number of search nodes explored.
    pub nodes_explored: u64,
}

/// Interface implemented by solver backends.
pub trait MisBackend {
    /// Select a maximum-cardinality subset of `0..node_count` with no edge
    /// between any two selected nodes.
    fn solve(
        &self,
        node_count: usize,
        edges: &[Edge],
        opts: &SolveOptions,
    ) -> Result<MisSolution, SolveError>;
}

/// Supported solver backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Exact branch-and-bound search.
    #[default]
    BranchBound,
}

/// Solve with the selected backend.
///
/// This is the backend-agnostic entry point used by the pipeline.
pub fn solve_with_backend(
    backend: BackendKind,
    node_count: usize,
    edges: &[Edge],
    opts: &SolveOptions,
) -> Result<MisSolution, SolveError> {
    match backend {
        BackendKind::BranchBound => BranchBoundBackend.solve(node_count, edges, opts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_backend_is_branch_and_bound() {
        assert_eq!(BackendKind::default(), BackendKind::BranchBound);
    }

    #[test]
    fn options_serde_round_trip() {
        let opts = SolveOptions {
            time_limit: Some(Duration::from_millis(250)),
            verbosity: 1,
        };
        let json = serde_json::to_string(&opts).unwrap();
        let restored: SolveOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.time_limit, opts.time_limit);
        assert_eq!(restored.verbosity, 1);
    }
}
