/*!
# Utilities

Provides the building blocks the graph representation and the samplers are
assembled from:
- [`SlicedBuffer`](self::sliced_buffer::SlicedBuffer): the backing store of [`CsrGraph`](crate::repr::CsrGraph),
- [`IndexedMinHeap`](self::indexed_heap::IndexedMinHeap): the decrease-key heap driving the degeneracy peeling,
- [`GeometricSkips`](self::geometric::GeometricSkips): skip-based Bernoulli index sampling for the edge sub-sampler.

Apart from the [`Probability`] helper, you probably do not need to interact
with this module directly.
*/

use num::{One, Zero};

pub mod geometric;
pub mod indexed_heap;
pub mod sliced_buffer;

pub use geometric::GeometricSkips;
pub use indexed_heap::IndexedMinHeap;
pub use sliced_buffer::SlicedBuffer;

/// Helper trait for probabilities
pub trait Probability {
    /// Returns *true* if the probability is valid (ie. between `0` and `1`)
    fn is_valid_probability(&self) -> bool;

    /// Returns *true* if the probability is valid and non-zero (ie. in `(0, 1]`)
    fn is_valid_nonzero_probability(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probability(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }

    fn is_valid_nonzero_probability(&self) -> bool {
        Self::zero().lt(self) && Self::one().ge(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probability_bounds() {
        assert!(0.0f64.is_valid_probability());
        assert!(0.5f64.is_valid_probability());
        assert!(1.0f64.is_valid_probability());
        assert!(!1.5f64.is_valid_probability());
        assert!(!(-0.1f64).is_valid_probability());
        assert!(!f64::NAN.is_valid_probability());

        assert!(!0.0f64.is_valid_nonzero_probability());
        assert!(1.0f64.is_valid_nonzero_probability());
    }
}
