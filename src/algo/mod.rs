/*!
# Graph Algorithms

This module provides the **algorithms** built on top of the CSR representation:
the degeneracy-based edge orientation and the randomized triangle estimators.
All algorithms are re-exported at the top level of this module, so you can
simply do:
```rust
use tricount::algo::*;
```
*/

mod degeneracy;
mod wedges;

use crate::{prelude::*, utils::*};

pub use degeneracy::*;
pub use wedges::*;
