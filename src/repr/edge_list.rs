use itertools::Itertools;
use rand::Rng;

use crate::{ops::*, utils::*, *};

/// The raw edge sequence a graph is loaded from: a vertex count plus an
/// insertion-ordered list of endpoint pairs.
///
/// The list is immutable once built; the only derived form is a Bernoulli
/// sub-sample via [`subsample_bernoulli`](EdgeList::subsample_bernoulli).
/// Duplicate edges and self-loops are kept as supplied.
#[derive(Debug, Clone)]
pub struct EdgeList {
    number_of_nodes: NumNodes,
    edges: Vec<Edge>,
}

impl EdgeList {
    /// Builds an edge list from a sequence of edges, deriving the vertex
    /// count as one past the largest endpoint seen (`0` for no edges).
    pub fn from_edges(edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let edges: Vec<Edge> = edges.into_iter().map_into().collect_vec();
        let number_of_nodes = edges
            .iter()
            .map(|e| e.0.max(e.1) + 1)
            .max()
            .unwrap_or(0);

        Self {
            number_of_nodes,
            edges,
        }
    }

    /// Builds an edge list with an explicit vertex count, allowing trailing
    /// isolated vertices.
    ///
    /// # Panics
    /// Panics if any endpoint is not in `[0, n)`.
    pub fn with_nodes(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let edges: Vec<Edge> = edges.into_iter().map_into().collect_vec();
        assert!(edges.iter().all(|e| e.0 < n && e.1 < n));

        Self {
            number_of_nodes: n,
            edges,
        }
    }

    /// Returns all edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns an iterator over all edges in insertion order
    pub fn iter(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    /// Draws a Bernoulli(p) sub-sample of the edges: each edge is included
    /// independently with probability `prob`. Relative edge order and the
    /// vertex count are preserved.
    ///
    /// Included positions are generated with geometric skips, so the cost is
    /// O(expected sample size) rather than one random draw per edge.
    ///
    /// # Panics
    /// Panics if `prob` is not in `[0, 1]`.
    pub fn subsample_bernoulli<R: Rng>(&self, prob: f64, rng: &mut R) -> Self {
        assert!(prob.is_valid_probability());

        let edges = GeometricSkips::new(prob, self.number_of_edges())
            .iter(rng)
            .map(|i| self.edges[i as usize])
            .collect();

        Self {
            number_of_nodes: self.number_of_nodes,
            edges,
        }
    }
}

impl GraphNodeOrder for EdgeList {
    fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }
}

impl GraphEdgeOrder for EdgeList {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn derives_number_of_nodes() {
        let el = EdgeList::from_edges([(0, 1), (4, 2), (1, 1)]);
        assert_eq!(el.number_of_nodes(), 5);
        assert_eq!(el.number_of_edges(), 3);
        assert_eq!(el.edges()[1], Edge(4, 2));

        let empty = EdgeList::from_edges(std::iter::empty::<Edge>());
        assert_eq!(empty.number_of_nodes(), 0);
        assert_eq!(empty.number_of_edges(), 0);
    }

    #[test]
    fn explicit_number_of_nodes_keeps_isolated_vertices() {
        let el = EdgeList::with_nodes(10, [(0, 1), (2, 3)]);
        assert_eq!(el.number_of_nodes(), 10);
        assert_eq!(el.number_of_edges(), 2);
    }

    #[test]
    #[should_panic]
    fn explicit_number_of_nodes_rejects_out_of_range() {
        let _ = EdgeList::with_nodes(3, [(0, 3)]);
    }

    #[test]
    fn subsample_boundary_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let el = EdgeList::from_edges((0..100).map(|i| (i, i + 1)));

        let all = el.subsample_bernoulli(1.0, rng);
        assert_eq!(all.edges(), el.edges());
        assert_eq!(all.number_of_nodes(), el.number_of_nodes());

        let none = el.subsample_bernoulli(0.0, rng);
        assert!(none.edges().is_empty());
        assert_eq!(none.number_of_nodes(), el.number_of_nodes());
    }

    #[test]
    fn subsample_is_an_ordered_subset_of_expected_size() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        let el = EdgeList::from_edges((0..10_000).map(|i| (i, i + 1)));

        let sub = el.subsample_bernoulli(0.3, rng);

        // Binomial(10000, 0.3) has mean 3000 and sigma ~46
        assert!((2600..3400).contains(&(sub.number_of_edges() as usize)));
        assert_eq!(sub.number_of_nodes(), el.number_of_nodes());

        // Two-pointer subsequence check against the original order
        let mut orig = el.iter();
        for e in sub.iter() {
            assert!(orig.any(|o| o == e));
        }
    }

    #[test]
    #[should_panic]
    fn subsample_rejects_invalid_probability() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let el = EdgeList::from_edges([(0, 1)]);
        let _ = el.subsample_bernoulli(1.5, rng);
    }
}
