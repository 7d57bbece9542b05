/*!
# Degeneracy Orientation

Reorients an undirected graph along a *degeneracy ordering*: repeatedly remove
a vertex of minimum degree, relabel it with its removal rank and direct every
edge from the endpoint removed earlier to the one removed later. The result is
acyclic, keeps all `m` edges (each stored once) and its maximum out-degree
equals the degeneracy of the graph, which is small for most sparse real-world
inputs.

For triangle estimation the orientation removes the triple-counting of the
vertex-based estimator: every triangle keeps exactly one vertex with out-edges
to the other two, namely its earliest-removed corner.

The ordering itself is the classic smallest-last scheme:
- "Smallest-last ordering and clustering and graph coloring algorithms" by
  Matula and Beck
*/

use super::*;

/// Degeneracy-based edge orientation, implemented for [`CsrGraph`].
pub trait DegeneracyOrder {
    /// Reorients the graph along a degeneracy ordering and returns the
    /// degeneracy, i.e. the maximum out-degree of the result.
    ///
    /// Vertices are relabelled by removal rank, so ids handed out before this
    /// call refer to different vertices afterwards. Degrees then mean
    /// out-degrees, neighborhoods only list higher-labelled vertices (born
    /// sorted, no re-sort needed) and the wedge weights are zeroed; recompute
    /// them before sampling. Calling this on an already directed graph is a
    /// no-op.
    ///
    /// Runs in `O(n log n + m log n)` time and `O(n + m)` extra space.
    ///
    /// ** Requires a graph without self-loops **
    fn orient_by_degeneracy(&mut self) -> NumNodes;
}

impl DegeneracyOrder for CsrGraph {
    fn orient_by_degeneracy(&mut self) -> NumNodes {
        if self.is_directed() {
            return self.max_degree();
        }

        let n = self.number_of_nodes();
        let m = self.number_of_edges();

        // cursor[l + 1] starts out as the base offset of label l's bucket and
        // has counted up to the final offset array once all buckets are full
        let mut cursor: Vec<NumEdges> = vec![0; n as usize + 1];
        let mut adjacency = vec![0 as Node; m as usize];

        {
            let (nbs, degree) = self.peeling_parts();
            let mut heap = IndexedMinHeap::new(degree);

            let mut reserved: NumEdges = 0;
            for rank in 0..n {
                cursor[rank as usize + 1] = reserved;

                let k = heap.pop_min().unwrap();
                for &u in &nbs[k] {
                    let slot = heap.decrement(u);
                    if slot >= heap.len() {
                        // u was removed before k: recover its label from the
                        // slot it is parked at and emit the edge u -> k
                        let label = n as usize - 1 - slot;
                        adjacency[cursor[label + 1] as usize] = rank;
                        cursor[label + 1] += 1;
                    } else {
                        // the edge k -> u is only emitted once u is removed;
                        // reserve its slot in k's bucket already
                        reserved += 1;
                    }
                }
            }
        }

        self.install_directed(SlicedBuffer::new(adjacency, cursor));
        self.max_degree()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::*;

    fn build(edges: Vec<Edge>) -> CsrGraph {
        let mut graph = CsrGraph::from_edge_list(&EdgeList::from_edges(edges));
        graph.sort_adjacency();
        graph
    }

    #[test]
    fn triangle_orientation_is_unique() {
        let mut graph = build(triangle_edges());
        assert_eq!(graph.orient_by_degeneracy(), 2);

        assert!(graph.is_directed());
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.as_neighbors_slice(0), [1, 2]);
        assert_eq!(graph.as_neighbors_slice(1), [2]);
        assert!(graph.as_neighbors_slice(2).is_empty());
    }

    #[test]
    fn clique_orientation_is_a_total_order() {
        let edges = (0..5 as Node)
            .tuple_combinations()
            .map(|(u, v)| Edge(u, v))
            .collect_vec();

        let mut graph = build(edges);
        assert_eq!(graph.orient_by_degeneracy(), 4);

        for v in graph.vertices() {
            assert_eq!(graph.as_neighbors_slice(v), ((v + 1)..5).collect_vec());
        }
    }

    #[test]
    fn star_peels_leaves_first() {
        let mut graph = build(star_edges(5));
        assert_eq!(graph.orient_by_degeneracy(), 1);

        assert_eq!(graph.number_of_edges(), 5);
        assert!(graph.degrees().all(|d| d <= 1));
        for v in graph.vertices() {
            assert!(graph.neighbors_of(v).all(|u| u > v));
        }
    }

    #[test]
    fn reorienting_is_a_no_op() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1000);
        let mut graph = build(random_simple_edges(rng, 30, 120));

        assert!(!graph.is_directed());
        let degeneracy = graph.orient_by_degeneracy();

        let before = graph
            .vertices()
            .map(|v| graph.as_neighbors_slice(v).to_vec())
            .collect_vec();

        assert_eq!(graph.orient_by_degeneracy(), degeneracy);

        let after = graph
            .vertices()
            .map(|v| graph.as_neighbors_slice(v).to_vec())
            .collect_vec();
        assert_eq!(before, after);
    }

    #[test]
    fn randomized_structure_and_degeneracy() {
        let rng = &mut Pcg64Mcg::seed_from_u64(31415);

        for n in [10 as NumNodes, 40, 80] {
            for m_ub in [2 * n as NumEdges, 6 * n as NumEdges] {
                let edges = random_simple_edges(rng, n, m_ub);
                let m = edges.len() as NumEdges;
                let expected_degeneracy = peeling_degeneracy(n, &edges);
                let triangles = count_triangles(n, &edges);

                let mut graph = CsrGraph::from_edge_list(&EdgeList::with_nodes(n, edges));
                graph.sort_adjacency();

                assert_eq!(graph.orient_by_degeneracy(), expected_degeneracy);
                assert_eq!(graph.number_of_edges(), m);

                let mut closed = 0u64;
                for v in graph.vertices() {
                    let nbs = graph.as_neighbors_slice(v);
                    assert!(nbs.is_sorted());
                    assert!(nbs.iter().all(|&u| u > v));

                    for (i, &a) in nbs.iter().enumerate() {
                        for &b in &nbs[i + 1..] {
                            closed += graph.has_edge(a, b) as u64;
                        }
                    }
                }

                // every triangle has exactly one out-wedge hinge
                assert_eq!(closed, triangles);
            }
        }
    }
}
