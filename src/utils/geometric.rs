use rand::Rng;
use rand_distr::Geometric;

use crate::utils::Probability;

/// How the iterator advances between included indices.
///
/// The boundary probabilities get their own arms so that the geometric
/// distribution is only ever constructed for `p` strictly inside `(0, 1)`,
/// where a skip is guaranteed finite and non-zero.
#[derive(Debug, Copy, Clone)]
enum SkipMode {
    /// `p = 0.0`: no index is ever included
    Never,
    /// `p = 1.0`: every index is included
    Every,
    /// `p` in `(0, 1)`: gaps between inclusions are geometrically distributed
    Geometric(Geometric),
}

/// Yields the indices of a Bernoulli(p) subset of `0..stop` without drawing a
/// random number per index.
///
/// A draw `g` from the geometric distribution counts the failures before the
/// first success and equals `ceil(ln(r) / ln(1-p)) - 1` for `r` uniform in the
/// open interval `(0, 1)`; the iterator advances its cursor by `g`, includes
/// the index it lands on, and steps past it. Included indices are therefore
/// strictly increasing and the cost is O(expected sample size) rather than
/// O(stop) draws.
#[derive(Debug, Copy, Clone)]
pub struct GeometricSkips {
    /// Inclusion probability per index
    prob: f64,
    /// Exclusive upper bound on yielded indices
    stop: u64,
}

impl GeometricSkips {
    /// Creates a new skip sampler over `0..stop`.
    ///
    /// # Panics
    /// Panics if `prob` is not in `[0, 1]`.
    pub fn new(prob: f64, stop: u64) -> Self {
        assert!(prob.is_valid_probability());

        Self { prob, stop }
    }

    /// Creates the iterator of included indices
    pub fn iter<R: Rng>(self, rng: &mut R) -> GeometricSkipsIter<'_, R> {
        let mode = if self.prob == 0.0 {
            SkipMode::Never
        } else if self.prob == 1.0 {
            SkipMode::Every
        } else {
            SkipMode::Geometric(Geometric::new(self.prob).unwrap())
        };

        GeometricSkipsIter {
            mode,
            rng,
            stop: self.stop,
            cur: 0,
        }
    }
}

/// An iterator over the included indices of a Bernoulli scan
#[derive(Debug)]
pub struct GeometricSkipsIter<'a, R>
where
    R: Rng,
{
    mode: SkipMode,
    rng: &'a mut R,
    stop: u64,
    cur: u64,
}

impl<R> Iterator for GeometricSkipsIter<'_, R>
where
    R: Rng,
{
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        match self.mode {
            SkipMode::Never => None,
            SkipMode::Every => {
                if self.cur >= self.stop {
                    return None;
                }
                self.cur += 1;
                Some(self.cur - 1)
            }
            SkipMode::Geometric(distr) => {
                let gap = self.rng.sample(distr);

                // Tiny probabilities can produce gaps beyond u64 range
                let Some(next) = self.cur.checked_add(gap) else {
                    self.cur = self.stop;
                    return None;
                };

                if next >= self.stop {
                    self.cur = self.stop;
                    return None;
                }

                self.cur = next + 1;
                Some(next)
            }
        }
    }
}
