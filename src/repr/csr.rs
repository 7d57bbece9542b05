/*!
# Compressed Sparse Row Graphs

[`CsrGraph`] stores a graph in *Compressed Sparse Row* form: one flat
adjacency buffer holding all neighborhoods back to back, plus an offset array
delimiting the per-vertex slices. The memory footprint is `O(n + m)` with no
per-node allocations, and both full scans and neighborhood scans are cache
friendly.

The graph is built once from an [`EdgeList`](crate::repr::EdgeList) and is
structurally immutable afterwards: there is no edge editing. The two mutating
operations we do support keep the CSR shape intact:
[`CsrGraph::sort_adjacency`] rewrites the buffer in place without moving
slice boundaries, and [`DegeneracyOrder`](crate::algo::DegeneracyOrder) swaps
in a reoriented buffer it produced on the side.

On top of the plain adjacency queries, the representation owns the state
needed by the wedge samplers: a cumulative weight array over vertices where
vertex `v` contributes `d(v) * (d(v) - 1) / 2` wedges. See
[`CsrGraph::assign_wedge_weights`] and the sampling queries below.
*/

use rand::Rng;

use crate::{edge::*, node::*, ops::*, repr::EdgeList, utils::SlicedBuffer};

/// A static graph in CSR form that doubles as the wedge-sampling state.
///
/// After [`DegeneracyOrder`](crate::algo::DegeneracyOrder) ran on the graph,
/// vertices are relabelled by removal rank and each neighborhood only keeps
/// the higher-ranked neighbors. All adjacency queries below work unchanged on
/// this directed variant; `degree` then refers to the out-degree.
///
/// # Examples
/// ```
/// use tricount::prelude::*;
///
/// let el = EdgeList::from_edges([(0, 1), (1, 2), (0, 2)]);
/// let mut graph = CsrGraph::from_edge_list(&el);
/// graph.sort_adjacency();
///
/// assert_eq!(graph.number_of_nodes(), 3);
/// assert_eq!(graph.number_of_edges(), 3);
/// assert!(graph.has_edge(2, 0));
/// assert!(!graph.is_directed());
/// ```
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Flat adjacency buffer, sliced per vertex
    nbs: SlicedBuffer<Node>,
    /// Degree of every vertex, i.e. the length of its slice
    degree: Vec<NumNodes>,
    /// Inclusive prefix sums of per-vertex wedge counts
    wedge_weights: Vec<NumWedges>,
    directed: bool,
}

impl CsrGraph {
    /// Builds the undirected representation of a given edge list.
    ///
    /// Every edge contributes an entry to both endpoint neighborhoods, so a
    /// list of `m` edges yields a buffer of `2m` entries. Entries within a
    /// neighborhood appear in input order; call [`CsrGraph::sort_adjacency`]
    /// before any adjacency tests.
    ///
    /// Runs in `O(n + m)` with two passes over the list: the first counts
    /// degrees, the second scatters every edge into the slices of both its
    /// endpoints.
    ///
    /// # Panics
    /// Panics if the edge list has no nodes or contains an endpoint `>= n`.
    pub fn from_edge_list(el: &EdgeList) -> Self {
        let n = el.number_of_nodes();
        assert!(n > 0, "graph needs at least one vertex");

        let mut degree = vec![0 as NumNodes; n as usize];
        for Edge(u, v) in el.iter() {
            assert!(u < n && v < n);
            degree[u as usize] += 1;
            degree[v as usize] += 1;
        }

        let mut offsets: Vec<NumEdges> = Vec::with_capacity(n as usize + 1);
        let mut total: NumEdges = 0;
        offsets.push(0);
        for deg in degree.iter_mut() {
            total += *deg as NumEdges;
            offsets.push(total);
            // the zeroed degrees double as write cursors in the second pass
            // and count back up to their true values
            *deg = 0;
        }

        let mut buffer = vec![0 as Node; total as usize];
        for Edge(u, v) in el.iter() {
            buffer[(offsets[u as usize] + degree[u as usize] as NumEdges) as usize] = v;
            degree[u as usize] += 1;
            buffer[(offsets[v as usize] + degree[v as usize] as NumEdges) as usize] = u;
            degree[v as usize] += 1;
        }

        Self {
            nbs: SlicedBuffer::new(buffer, offsets),
            degree,
            wedge_weights: vec![0; n as usize],
            directed: false,
        }
    }

    /// Returns *true* if the graph was reoriented by a degeneracy ordering.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Rewrites every neighborhood into ascending order in `O(n + m)`.
    ///
    /// A comparison sort per slice would cost `O(m log n)`. Instead we run a
    /// single counting pass: scanning vertices in increasing order and
    /// scattering each `v` into the slices of all its neighbors fills every
    /// slice in ascending order. The pass reuses the degree array as write
    /// cursors, exactly like construction does.
    ///
    /// Sorted neighborhoods are required by [`AdjacencyTest::has_edge`] and
    /// by [`CsrGraph::sample_triangle_at_edge`]. Only valid on the
    /// undirected graph; the directed variant is born sorted.
    pub fn sort_adjacency(&mut self) {
        debug_assert!(!self.directed);

        let n = self.nbs.number_of_slices();
        let mut sorted = vec![0 as Node; self.nbs.number_of_entries() as usize];

        self.degree.fill(0);
        for v in 0..n {
            for &u in &self.nbs[v] {
                let pos =
                    self.nbs.raw_offset_slice()[u as usize] + self.degree[u as usize] as NumEdges;
                sorted[pos as usize] = v;
                self.degree[u as usize] += 1;
            }
        }

        self.nbs.replace_buffer(sorted);
    }

    /// Computes the per-vertex wedge weights and returns the total number of
    /// wedges in the graph.
    ///
    /// Vertex `v` hinges `d(v) * (d(v) - 1) / 2` wedges where `d` is its
    /// (out-)degree. The weights are stored as inclusive prefix sums so that
    /// sampling a hinge proportional to its weight reduces to a binary
    /// search, see [`CsrGraph::sample_wedge_hinge`].
    ///
    /// [`DegeneracyOrder`](crate::algo::DegeneracyOrder) invalidates the
    /// weights; recompute them afterwards.
    pub fn assign_wedge_weights(&mut self) -> NumWedges {
        let mut total: NumWedges = 0;
        for (weight, &deg) in self.wedge_weights.iter_mut().zip(&self.degree) {
            let d = deg as NumWedges;
            total += d * d.saturating_sub(1) / 2;
            *weight = total;
        }
        total
    }

    /// Total number of wedges as of the last
    /// [`CsrGraph::assign_wedge_weights`].
    pub fn total_wedges(&self) -> NumWedges {
        self.wedge_weights.last().copied().unwrap_or(0)
    }

    /// Samples a wedge hinge, i.e. a vertex drawn with probability
    /// proportional to the number of wedges it hinges.
    ///
    /// Draws a uniform value below the total weight and locates the owning
    /// vertex by binary search over the cumulative weights. Vertices of
    /// degree below two own an empty weight range and are never returned.
    ///
    /// ** Requires assigned wedge weights and at least one wedge **
    pub fn sample_wedge_hinge<R: Rng>(&self, rng: &mut R) -> Node {
        let total = self.total_wedges();
        debug_assert!(total > 0);

        let r = rng.random_range(0..total);
        self.wedge_weights.partition_point(|&w| w <= r) as Node
    }

    /// Samples a uniformly random wedge and reports whether it is closed,
    /// i.e. whether its two endpoints are adjacent.
    ///
    /// The hinge is drawn via [`CsrGraph::sample_wedge_hinge`]; the endpoint
    /// pair is then uniform among all distinct neighbor pairs of the hinge.
    ///
    /// ** Requires sorted neighborhoods and at least one wedge **
    pub fn sample_closed_wedge<R: Rng>(&self, rng: &mut R) -> bool {
        let v = self.sample_wedge_hinge(rng);
        let deg = self.degree_of(v);
        debug_assert!(deg >= 2);

        let i = rng.random_range(0..deg);
        // uniform over all neighbors except the i-th
        let mut j = rng.random_range(0..deg - 1);
        if j >= i {
            j += 1;
        }

        let nbs = self.as_neighbors_slice(v);
        self.has_edge(nbs[i as usize], nbs[j as usize])
    }

    /// Samples a random triangle candidate at the edge `e` and returns its
    /// estimator contribution.
    ///
    /// Let `s` be the endpoint of smaller degree and `t` the other one. A
    /// uniform neighbor `w != t` of `s` is drawn; if `{s, t, w}` forms a
    /// triangle, the sample contributes `d(s) - 1`, otherwise `0`. Averaged
    /// over edges and neighbor picks this is an unbiased estimate of three
    /// times the per-edge triangle count.
    ///
    /// The exclusion of `t` uses that neighborhoods are sorted: a uniform
    /// index below `d(s) - 1` is shifted past `t` whenever the neighbor it
    /// hits compares greater or equal to `t`.
    ///
    /// ** Requires an undirected graph with sorted neighborhoods and
    /// `e` to be one of its edges **
    pub fn sample_triangle_at_edge<R: Rng>(&self, e: Edge, rng: &mut R) -> NumNodes {
        debug_assert!(!self.directed);

        let Edge(s, t) = e;
        let (s, t) = if self.degree_of(s) <= self.degree_of(t) {
            (s, t)
        } else {
            (t, s)
        };

        let deg = self.degree_of(s);
        if deg < 2 {
            return 0;
        }

        let nbs = self.as_neighbors_slice(s);
        let i = rng.random_range(0..deg - 1) as usize;
        let mut w = nbs[i];
        if t <= w {
            w = nbs[i + 1];
        }

        if self.has_edge(t, w) {
            deg - 1
        } else {
            0
        }
    }

    /// Grants the degeneracy orderer simultaneous access to the immutable
    /// adjacency structure and the mutable degree array it peels.
    pub(crate) fn peeling_parts(&mut self) -> (&SlicedBuffer<Node>, &mut [NumNodes]) {
        (&self.nbs, &mut self.degree)
    }

    /// Installs the reoriented adjacency produced by the degeneracy orderer.
    ///
    /// Degrees are rebuilt from the new slice sizes (the peeling scrambled
    /// the old array) and the wedge weights are cleared as they refer to the
    /// old degrees.
    pub(crate) fn install_directed(&mut self, nbs: SlicedBuffer<Node>) {
        debug_assert_eq!(nbs.len(), self.nbs.len());
        debug_assert!(!self.directed);

        self.nbs = nbs;
        self.directed = true;

        for v in 0..self.nbs.number_of_slices() {
            self.degree[v as usize] = self.nbs.size_of(v) as NumNodes;
        }
        self.wedge_weights.fill(0);
    }
}

impl GraphNodeOrder for CsrGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.number_of_slices()
    }
}

impl GraphEdgeOrder for CsrGraph {
    fn number_of_edges(&self) -> NumEdges {
        if self.directed {
            self.nbs.number_of_entries()
        } else {
            self.nbs.number_of_entries() / 2
        }
    }
}

impl AdjacencyList for CsrGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.degree[u as usize]
    }
}

impl AdjacencyTest for CsrGraph {
    /// Binary search for the larger endpoint in the smaller endpoint's
    /// neighborhood. On the directed graph all edges point from smaller to
    /// larger label, so searching in this direction covers both variants.
    ///
    /// ** Requires sorted neighborhoods **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        let (lo, hi) = if u <= v { (u, v) } else { (v, u) };
        let nbs = &self.nbs[lo];
        debug_assert!(nbs.is_sorted());
        nbs.binary_search(&hi).is_ok()
    }
}

impl NeighborsSlice for CsrGraph {
    fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        &self.nbs[u]
    }
}
