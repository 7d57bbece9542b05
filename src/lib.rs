/*!
`tricount` estimates the number of triangles in large graphs that are
- **unlabelled and unsigned** : Nodes are numbered `0` to `n - 1`
- **unweighted** : Neither nodes nor edges have a weight attached to them
- **undirected** : Inputs are undirected; a directed view only appears internally after orientation

Instead of enumerating triangles, the library samples wedges (paths of length two) at random and
checks which of them close into a triangle. A few thousand closed samples already pin the count
down to a few percent, independent of the graph size.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
As most common graphs do not exceed `2^32` nodes, this should normally suffice and save space as compared to `u64/usize`.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

Graphs enter as an [`EdgeList`](crate::repr::EdgeList) (usually read from a file, see [`io`]) and
are compacted into a [`CsrGraph`](crate::repr::CsrGraph) for sampling. The undirected
representation stores every edge in the lists of both endpoints. Orienting the graph along a
degeneracy order (see [`algo::DegeneracyOrder`]) replaces it by a directed variant that keeps each
edge once and relabels nodes by their elimination rank, which shrinks the wedge space the
estimator has to cover.

# Design

All estimators are provided as configurable structs that one can alter to their needs using the
*Builder* / *Setter* pattern before calling the configured algorithm on a provided graph.
Smaller building blocks such as the orientation are implemented via traits on the graph itself,
making them usable without configuring anything beforehand.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, and the graph representations,
- [`algo`] includes the wedge-sampling estimators and the degeneracy orientation,
- [`io`] includes a reader for plain edge-list files,
- [`utils`] includes helper structs such as the indexed heap and the geometric skip sampler the algorithms are built on.

In most use-cases, `use tricount::{prelude::*, algo::*};` suffices for your needs.

# When to use
You should only use this library if the following apply:
- Your graphs are unlabelled and unweighted
- An accurate estimate of the triangle count suffices
- Performance is important

If you need exact counts or more general graph functionality, it might make sense for you to
check out [petgraph](https://crates.io/crates/petgraph) for general graph algorithms in *Rust* or
[NetworKit](https://networkit.github.io/) who provide high-performance (exact and approximate)
triangle counting in *C++* and *Python*.
*/

pub mod algo;
pub mod edge;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

/// `tricount::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}

pub use prelude::*;
