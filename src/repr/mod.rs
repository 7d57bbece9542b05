/*!
# Graph Representations

Two representations cover the life of a graph in this crate:
- [`EdgeList`]: the raw, insertion-ordered edge sequence as loaded from input,
- [`CsrGraph`]: the compact adjacency structure every algorithm runs on.
*/

mod csr;
mod edge_list;

pub use csr::*;
pub use edge_list::*;
