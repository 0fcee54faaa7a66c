//! Cross-checks the branch-and-bound backend against exhaustive
//! enumeration on seeded random graphs.

use rand::{rngs::StdRng, Rng, SeedableRng};
use seatplan_solve::brute::brute_force_mis;
use seatplan_solve::{BranchBoundBackend, Edge, MisBackend, SolveOptions};

fn random_edges(rng: &mut StdRng, node_count: usize, density: f64) -> Vec<Edge> {
    let mut edges = Vec::new();
    for u in 0..node_count {
        for v in (u + 1)..node_count {
            if rng.gen_bool(density) {
                edges.push((u, v));
            }
        }
    }
    edges
}

fn is_independent(selected: &[usize], edges: &[Edge]) -> bool {
    edges
        .iter()
        .all(|&(u, v)| !(selected.contains(&u) && selected.contains(&v)))
}

#[test]
fn matches_brute_force_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(0x5ea7);
    let opts = SolveOptions::default();

    for node_count in 4..=12 {
        for &density in &[0.2, 0.5, 0.8] {
            let edges = random_edges(&mut rng, node_count, density);

            let solution = BranchBoundBackend
                .solve(node_count, &edges, &opts)
                .expect("solve");
            let reference = brute_force_mis(node_count, &edges);

            assert!(
                is_independent(&solution.selected, &edges),
                "selection violates an edge (n={node_count}, density={density})"
            );
            assert_eq!(
                solution.selected.len(),
                reference.len(),
                "selection is not maximum (n={node_count}, density={density})"
            );
            assert!(solution.proven_optimal);
        }
    }
}

#[test]
fn solves_larger_sparse_graph_exactly() {
    // A 3x6 grid graph: independence number is ceil(18 / 2) = 9.
    let cols = 6;
    let rows = 3;
    let idx = |r: usize, c: usize| r * cols + c;
    let mut edges = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            if c + 1 < cols {
                edges.push((idx(r, c), idx(r, c + 1)));
            }
            if r + 1 < rows {
                edges.push((idx(r, c), idx(r + 1, c)));
            }
        }
    }

    let solution = BranchBoundBackend
        .solve(rows * cols, &edges, &SolveOptions::default())
        .expect("solve");

    assert_eq!(solution.selected.len(), 9);
    assert!(is_independent(&solution.selected, &edges));
    assert!(solution.proven_optimal);
}
