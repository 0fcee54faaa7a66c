//! Exact branch-and-bound Maximum Independent Set search.
//!
//! The search branches on the highest-degree candidate vertex (include it
//! and discard its neighborhood, or discard it), applies the standard
//! degree-0/degree-1 inclusion reductions, prunes with the
//! `|current| + |candidates|` bound, and seeds the incumbent with a greedy
//! minimum-degree selection. The branching order is fixed — highest degree
//! first, lowest index on ties — so the returned optimum is deterministic
//! for a given input; when several optima exist, the first one found under
//! that order wins.

use crate::backend::{Edge, MisBackend, MisSolution, SolveError, SolveOptions};
use std::time::Instant;
use tracing::debug;

/// Exact branch-and-bound backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchBoundBackend;

fn build_adjacency(node_count: usize, edges: &[Edge]) -> Result<Vec<Vec<usize>>, SolveError> {
    let mut adj = vec![Vec::new(); node_count];
    for &(u, v) in edges {
        if u >= node_count || v >= node_count {
            return Err(SolveError::EdgeOutOfRange(u, v, node_count));
        }
        if u == v {
            return Err(SolveError::SelfLoop(u));
        }
        adj[u].push(v);
        adj[v].push(u);
    }
    for neighbors in &mut adj {
        neighbors.sort_unstable();
        neighbors.dedup();
    }
    Ok(adj)
}

/// Greedy minimum-degree independent set, used as the initial incumbent.
fn greedy_seed(adj: &[Vec<usize>]) -> Vec<usize> {
    let n = adj.len();
    let mut alive = vec![true; n];
    let mut degree: Vec<usize> = adj.iter().map(|a| a.len()).collect();
    let mut picked = Vec::new();

    loop {
        let Some(v) = (0..n).filter(|&v| alive[v]).min_by_key(|&v| (degree[v], v)) else {
            break;
        };
        picked.push(v);
        let mut to_remove = vec![v];
        to_remove.extend(adj[v].iter().copied().filter(|&u| alive[u]));
        for w in to_remove {
            alive[w] = false;
            for &x in &adj[w] {
                if alive[x] {
                    degree[x] -= 1;
                }
            }
        }
    }
    picked
}

struct Search<'a> {
    adj: &'a [Vec<usize>],
    best: Vec<usize>,
    nodes_explored: u64,
    deadline: Option<Instant>,
    timed_out: bool,
    verbosity: usize,
}

impl Search<'_> {
    /// Degree of each candidate within the candidate set (`candidates` is
    /// sorted ascending).
    fn candidate_degrees(&self, candidates: &[usize]) -> Vec<usize> {
        candidates
            .iter()
            .map(|&v| {
                self.adj[v]
                    .iter()
                    .filter(|u| candidates.binary_search(u).is_ok())
                    .count()
            })
            .collect()
    }

    fn explore(&mut self, current: &mut Vec<usize>, candidates: Vec<usize>) {
        let base_len = current.len();
        self.explore_inner(current, candidates);
        current.truncate(base_len);
    }

    fn explore_inner(&mut self, current: &mut Vec<usize>, mut candidates: Vec<usize>) {
        self.nodes_explored += 1;
        if self.timed_out {
            return;
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.timed_out = true;
                return;
            }
        }

        loop {
            if current.len() + candidates.len() <= self.best.len() {
                // Even taking every remaining candidate cannot beat the
                // incumbent.
                return;
            }
            if candidates.is_empty() {
                self.best = current.clone();
                if self.verbosity > 0 {
                    debug!(size = self.best.len(), "incumbent improved");
                }
                return;
            }

            let degrees = self.candidate_degrees(&candidates);

            // Isolated candidates belong to every maximum extension.
            if degrees.iter().any(|&d| d == 0) {
                let mut rest = Vec::with_capacity(candidates.len());
                for (i, &v) in candidates.iter().enumerate() {
                    if degrees[i] == 0 {
                        current.push(v);
                    } else {
                        rest.push(v);
                    }
                }
                candidates = rest;
                continue;
            }

            // A degree-1 candidate is always at least as good as its
            // neighbor: take it and drop the neighbor.
            if let Some(i) = degrees.iter().position(|&d| d == 1) {
                let v = candidates[i];
                let neighbor = self.adj[v]
                    .iter()
                    .copied()
                    .find(|u| candidates.binary_search(u).is_ok());
                current.push(v);
                candidates.retain(|&u| u != v && Some(u) != neighbor);
                continue;
            }

            // Branch on the highest-degree candidate (lowest index on ties):
            // removing it relaxes the subproblem the most.
            let mut pick = 0;
            for (i, &d) in degrees.iter().enumerate() {
                if d > degrees[pick] {
                    pick = i;
                }
            }
            let v = candidates[pick];

            let with_v: Vec<usize> = candidates
                .iter()
                .copied()
                .filter(|&u| u != v && self.adj[v].binary_search(&u).is_err())
                .collect();
            current.push(v);
            self.explore(current, with_v);
            current.pop();

            candidates.retain(|&u| u != v);
        }
    }
}

impl MisBackend for BranchBoundBackend {
    fn solve(
        &self,
        node_count: usize,
        edges: &[Edge],
        opts: &SolveOptions,
    ) -> Result<MisSolution, SolveError> {
        let adj = build_adjacency(node_count, edges)?;
        let deadline = opts.time_limit.map(|limit| Instant::now() + limit);

        let mut search = Search {
            adj: &adj,
            best: greedy_seed(&adj),
            nodes_explored: 0,
            deadline,
            timed_out: false,
            verbosity: opts.verbosity,
        };
        if opts.verbosity > 0 {
            debug!(size = search.best.len(), "greedy incumbent seeded");
        }

        let mut current = Vec::new();
        search.explore(&mut current, (0..node_count).collect());

        let mut selected = search.best;
        selected.sort_unstable();
        let solution = MisSolution {
            selected,
            proven_optimal: !search.timed_out,
            nodes_explored: search.nodes_explored,
        };
        debug!(
            selected = solution.selected.len(),
            nodes_explored = solution.nodes_explored,
            proven_optimal = solution.proven_optimal,
            "branch-and-bound finished"
        );
        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn solve(node_count: usize, edges: &[Edge]) -> MisSolution {
        BranchBoundBackend
            .solve(node_count, edges, &SolveOptions::default())
            .unwrap()
    }

    fn is_independent(selected: &[usize], edges: &[Edge]) -> bool {
        edges.iter().all(|&(u, v)| {
            !(selected.contains(&u) && selected.contains(&v))
        })
    }

    #[test]
    fn edge_free_graph_selects_everything() {
        let solution = solve(6, &[]);
        assert_eq!(solution.selected, vec![0, 1, 2, 3, 4, 5]);
        assert!(solution.proven_optimal);
    }

    #[test]
    fn complete_graph_selects_one() {
        let edges: Vec<Edge> = (0..5)
            .flat_map(|u| ((u + 1)..5).map(move |v| (u, v)))
            .collect();
        let solution = solve(5, &edges);
        assert_eq!(solution.selected.len(), 1);
        assert!(solution.proven_optimal);
    }

    #[test]
    fn path_of_four_selects_two() {
        let edges = [(0, 1), (1, 2), (2, 3)];
        let solution = solve(4, &edges);
        assert_eq!(solution.selected.len(), 2);
        assert!(is_independent(&solution.selected, &edges));
    }

    #[test]
    fn five_cycle_selects_two() {
        let edges = [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)];
        let solution = solve(5, &edges);
        assert_eq!(solution.selected.len(), 2);
        assert!(is_independent(&solution.selected, &edges));
    }

    #[test]
    fn duplicate_and_mirrored_edges_are_tolerated() {
        let edges = [(0, 1), (1, 0), (0, 1), (1, 2)];
        let solution = solve(3, &edges);
        assert_eq!(solution.selected, vec![0, 2]);
    }

    #[test]
    fn empty_problem() {
        let solution = solve(0, &[]);
        assert!(solution.selected.is_empty());
        assert!(solution.proven_optimal);
    }

    #[test]
    fn deterministic_across_runs() {
        let edges = [(0, 1), (1, 2), (2, 3), (3, 0)];
        let first = solve(4, &edges);
        let second = solve(4, &edges);
        assert_eq!(first.selected, second.selected);
    }

    #[test]
    fn rejects_malformed_edges() {
        let opts = SolveOptions::default();
        assert!(matches!(
            BranchBoundBackend.solve(3, &[(0, 3)], &opts),
            Err(SolveError::EdgeOutOfRange(0, 3, 3))
        ));
        assert!(matches!(
            BranchBoundBackend.solve(3, &[(1, 1)], &opts),
            Err(SolveError::SelfLoop(1))
        ));
    }

    #[test]
    fn expired_time_limit_returns_incumbent() {
        let edges = [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)];
        let solution = BranchBoundBackend
            .solve(
                5,
                &edges,
                &SolveOptions {
                    time_limit: Some(Duration::ZERO),
                    verbosity: 0,
                },
            )
            .unwrap();

        assert!(!solution.proven_optimal);
        assert!(is_independent(&solution.selected, &edges));
        assert!(!solution.selected.is_empty());
    }
}
