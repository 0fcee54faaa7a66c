//! Maximum Independent Set solving for seat selection.
//!
//! The contract is deliberately narrow: a node count, an undirected edge
//! list, and options go in; the largest edge-free node subset comes out.
//! Backends implement [`MisBackend`] so the optimization engine stays
//! swappable; the built-in [`BranchBoundBackend`] is an exact
//! branch-and-bound search. [`brute::brute_force_mis`] is an exhaustive
//! reference implementation used by tests to certify optimality.

/// Backend trait, options, and the backend-agnostic entry point.
pub mod backend;
/// Exact branch-and-bound backend.
pub mod branch_bound;
/// Exhaustive reference solver for tiny graphs.
pub mod brute;

pub use backend::{
    solve_with_backend, BackendKind, Edge, MisBackend, MisSolution, SolveError, SolveOptions,
};
pub use branch_bound::BranchBoundBackend;
