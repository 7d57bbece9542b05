//! Estimates the triangle count of an edge-list file with every sampler the
//! library provides and prints the estimates together with per-phase timings.
//!
//! Usage: `approx_triangles <path> [seed]`

use std::{io::Result, time::Instant};

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use tricount::{algo::*, io::EdgeListReader, prelude::*};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let path = args.next().expect("require path argument");
    let seed = args.next().map(|s| s.parse().expect("seed must be an integer"));

    let mut rng = match seed {
        Some(seed) => Pcg64Mcg::seed_from_u64(seed),
        None => Pcg64Mcg::from_os_rng(),
    };

    let start = Instant::now();
    let edges = EdgeListReader::new().try_read_file(&path)?;
    println!(
        "read {} nodes and {} edges from {} in {} ms",
        edges.number_of_nodes(),
        edges.number_of_edges(),
        path,
        start.elapsed().as_millis()
    );

    if edges.number_of_edges() == 0 {
        println!("graph has no edges and thus no triangles");
        return Ok(());
    }

    let start = Instant::now();
    let mut graph = CsrGraph::from_edge_list(&edges);
    graph.sort_adjacency();
    println!("built graph in {} ms", start.elapsed().as_millis());

    let sampling = WedgeSampling::default();

    let start = Instant::now();
    let undirected = sampling.estimate_triangles(&mut graph, &mut rng);
    println!(
        "vertex sampling (undirected): {:.1} triangles ({} closed of {} samples, {} wedges) in {} ms",
        undirected.triangles,
        undirected.closed_wedges,
        undirected.trials,
        undirected.total_wedges,
        start.elapsed().as_millis()
    );

    // Spend a comparable budget on the edge-based estimator by keeping each
    // edge with probability trials / m.
    let prob = (undirected.trials as f64 / edges.number_of_edges() as f64).min(1.0);
    let start = Instant::now();
    let estimate = if prob > 0.0 {
        let sample = edges.subsample_bernoulli(prob, &mut rng);
        estimate_triangles_edge_based(&graph, sample.iter(), prob, &mut rng)
    } else {
        0.0
    };
    println!(
        "edge sampling (p = {:.4}): {:.1} triangles in {} ms",
        prob,
        estimate,
        start.elapsed().as_millis()
    );

    let start = Instant::now();
    let degeneracy = graph.orient_by_degeneracy();
    println!(
        "oriented graph with degeneracy {} in {} ms",
        degeneracy,
        start.elapsed().as_millis()
    );

    let start = Instant::now();
    let oriented = sampling.estimate_triangles(&mut graph, &mut rng);
    println!(
        "vertex sampling (oriented): {:.1} triangles ({} closed of {} samples, {} wedges) in {} ms",
        oriented.triangles,
        oriented.closed_wedges,
        oriented.trials,
        oriented.total_wedges,
        start.elapsed().as_millis()
    );

    Ok(())
}
