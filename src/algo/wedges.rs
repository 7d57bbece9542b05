/*!
# Wedge-Sampling Triangle Estimators

Monte Carlo estimators for the number of triangles in a graph, built on the
observation that a triangle is a *closed wedge*: a path of two edges whose
endpoints are adjacent. Instead of enumerating wedges, both estimators sample
a small number of them and scale the closed fraction back up.

Two independent estimators are provided:
- [`WedgeSampling`]: samples wedges directly, hinge-first. On the undirected
  graph every triangle is hit at each of its three corners; on the
  degeneracy-oriented graph (see
  [`DegeneracyOrder`](crate::algo::DegeneracyOrder)) at exactly one, which
  both removes the overcount and concentrates the closed fraction.
- [`estimate_triangles_edge_based`]: extends (a Bernoulli sample of) the
  edges to wedges at their lower-degree endpoint.

The estimators follow:
- "Triadic Measures on Graphs: The Power of Wedge Sampling" by Seshadhri,
  Pinar and Kolda
- "Wedge Sampling for Computing Clustering Coefficients and Triangle Counts
  on Large Graphs" by Seshadhri, Pinar and Kolda
*/

use rand::Rng;

use super::*;

/// Adaptive driver for the hinge-first wedge-sampling estimator.
///
/// A batch of `trials` uniform wedges is sampled and the closed ones counted.
/// If fewer than `target_closed` of them were closed, the batch size is grown
/// by `growth` and a fresh batch is drawn, up to a hard ceiling of
/// `max_trials` per batch. The first batch already starts at
/// `target_closed * growth` trials. Only the final batch enters the estimate;
/// earlier batches merely establish that the sample was too small for the
/// requested accuracy.
///
/// The ceiling makes (nearly) triangle-free graphs terminate with a zero or
/// low-confidence estimate instead of doubling forever.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use tricount::{algo::*, prelude::*};
///
/// let el = EdgeList::from_edges([(0, 1), (1, 2), (0, 2)]);
/// let mut graph = CsrGraph::from_edge_list(&el);
/// graph.sort_adjacency();
///
/// let rng = &mut rand_pcg::Pcg64Mcg::seed_from_u64(123);
/// let estimate = WedgeSampling::new().estimate_triangles(&mut graph, rng);
/// assert_eq!(estimate.triangles, 1.0);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct WedgeSampling {
    target_closed: u64,
    growth: u64,
    max_trials: u64,
}

impl Default for WedgeSampling {
    fn default() -> Self {
        Self {
            target_closed: 2500,
            growth: 2,
            max_trials: 1 << 26,
        }
    }
}

impl WedgeSampling {
    /// Creates a driver with the default policy: grow batches by `2` until
    /// one contains `2500` closed wedges, capped at `2^26` trials per batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of closed wedges a batch must contain to be accepted.
    pub fn target_closed(mut self, target: u64) -> Self {
        assert!(target > 0);
        self.target_closed = target;
        self
    }

    /// Sets the factor by which the batch size grows between batches.
    pub fn growth(mut self, growth: u64) -> Self {
        assert!(growth >= 2);
        self.growth = growth;
        self
    }

    /// Sets the hard ceiling on the number of trials in a single batch.
    pub fn max_trials(mut self, max_trials: u64) -> Self {
        assert!(max_trials > 0);
        self.max_trials = max_trials;
        self
    }

    /// Estimates the number of triangles in `graph` by adaptive wedge
    /// sampling.
    ///
    /// Assigns the wedge weights, then samples batches as described on
    /// [`WedgeSampling`] and scales the closed fraction of the final batch to
    /// `closed/trials * total_wedges / overcount`. The overcount is `3` on an
    /// undirected graph and `1` on a degeneracy-oriented one. A graph without
    /// any wedge short-circuits to a zero estimate with zero trials.
    ///
    /// ** Requires sorted neighborhoods **
    pub fn estimate_triangles<R: Rng>(&self, graph: &mut CsrGraph, rng: &mut R) -> WedgeEstimate {
        let total_wedges = graph.assign_wedge_weights();
        let overcount = if graph.is_directed() { 1.0 } else { 3.0 };

        if total_wedges == 0 {
            return WedgeEstimate {
                triangles: 0.0,
                closed_wedges: 0,
                trials: 0,
                total_wedges,
            };
        }

        let mut trials = self.target_closed;
        let mut closed;
        loop {
            trials = trials.saturating_mul(self.growth).min(self.max_trials);
            closed = (0..trials)
                .filter(|_| graph.sample_closed_wedge(rng))
                .count() as u64;

            if closed >= self.target_closed || trials >= self.max_trials {
                break;
            }
        }

        WedgeEstimate {
            triangles: (closed as f64 / trials as f64) * total_wedges as f64 / overcount,
            closed_wedges: closed,
            trials,
            total_wedges,
        }
    }
}

/// Result of [`WedgeSampling::estimate_triangles`].
#[derive(Debug, Copy, Clone)]
pub struct WedgeEstimate {
    /// Estimated number of triangles
    pub triangles: f64,
    /// Closed wedges in the final batch
    pub closed_wedges: u64,
    /// Size of the final batch
    pub trials: u64,
    /// Number of wedges in the graph
    pub total_wedges: NumWedges,
}

/// Estimates the number of triangles from a Bernoulli sample of the edges.
///
/// Every supplied edge is extended to a random wedge at its lower-degree
/// endpoint via [`CsrGraph::sample_triangle_at_edge`] and the contributions
/// are summed to `sum / (3 * prob)`. With `prob = 1` and the full edge set
/// this is an unbiased one-shot estimate; thinning the edges by
/// [`EdgeList::subsample_bernoulli`] with the same `prob` trades accuracy for
/// a proportionally smaller pass.
///
/// ** Requires an undirected graph with sorted neighborhoods; `edges` must be
/// edges of the graph and `prob` must lie in `(0, 1]` **
pub fn estimate_triangles_edge_based<R: Rng>(
    graph: &CsrGraph,
    edges: impl IntoIterator<Item = Edge>,
    prob: f64,
    rng: &mut R,
) -> f64 {
    assert!(!graph.is_directed());
    assert!(prob.is_valid_nonzero_probability());

    let sum: u64 = edges
        .into_iter()
        .map(|e| graph.sample_triangle_at_edge(e, rng) as u64)
        .sum();

    sum as f64 / (3.0 * prob)
}
