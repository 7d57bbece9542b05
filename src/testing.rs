//! Shared fixtures and brute-force oracles for the unit tests.

use fxhash::FxHashSet;
use itertools::Itertools;
use rand::Rng;

use crate::{edge::*, node::*};

/// Creates at most `m_ub` distinct random non-loop edges over nodes `0..n`.
pub fn random_simple_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
    let mut edges: Vec<Edge> = (0..m_ub)
        .map(|_| {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            Edge(u, v).normalized()
        })
        .filter(|e| !e.is_loop())
        .collect_vec();
    edges.sort_unstable();
    edges.dedup();

    edges
}

/// The triangle on `{0, 1, 2}`.
pub fn triangle_edges() -> Vec<Edge> {
    vec![Edge(0, 1), Edge(1, 2), Edge(0, 2)]
}

/// A star with center `0` and the given number of leaves.
pub fn star_edges(leaves: NumNodes) -> Vec<Edge> {
    (1..=leaves).map(|leaf| Edge(0, leaf)).collect_vec()
}

/// Two vertex-disjoint triangles on `{0, 1, 2}` and `{3, 4, 5}`.
pub fn two_triangles_edges() -> Vec<Edge> {
    let mut edges = triangle_edges();
    edges.extend(
        triangle_edges()
            .into_iter()
            .map(|Edge(u, v)| Edge(u + 3, v + 3)),
    );
    edges
}

/// Counts triangles exactly, each once at its smallest vertex.
pub fn count_triangles(n: NumNodes, edges: &[Edge]) -> u64 {
    let mut adj = vec![FxHashSet::default(); n as usize];
    for &Edge(u, v) in edges {
        adj[u as usize].insert(v);
        adj[v as usize].insert(u);
    }

    let mut triangles = 0;
    for v in 0..n {
        let nbs = adj[v as usize]
            .iter()
            .copied()
            .filter(|&u| u > v)
            .collect_vec();

        for (i, &a) in nbs.iter().enumerate() {
            for &b in &nbs[i + 1..] {
                triangles += adj[a as usize].contains(&b) as u64;
            }
        }
    }

    triangles
}

/// Degeneracy by quadratic-time peeling, as a reference for the heap-based
/// implementation.
pub fn peeling_degeneracy(n: NumNodes, edges: &[Edge]) -> NumNodes {
    let mut adj = vec![Vec::new(); n as usize];
    for &Edge(u, v) in edges {
        adj[u as usize].push(v);
        adj[v as usize].push(u);
    }

    let mut degree = adj.iter().map(|nbs| nbs.len()).collect_vec();
    let mut removed = vec![false; n as usize];
    let mut degeneracy = 0;

    for _ in 0..n {
        let v = (0..n as usize)
            .filter(|&v| !removed[v])
            .min_by_key(|&v| degree[v])
            .unwrap();

        removed[v] = true;
        degeneracy = degeneracy.max(degree[v]);

        for &u in &adj[v] {
            if !removed[u as usize] {
                degree[u as usize] -= 1;
            }
        }
    }

    degeneracy as NumNodes
}
