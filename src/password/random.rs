use rand::{Rng, RngCore};

/// Source of uniformly distributed indices
pub trait RandomSource {
    /// Returns a value in `0..bound`. `bound` must be non-zero.
    ///
    /// [`generate`](super::generate) reduces the result modulo `bound`, so an
    /// out-of-range value skews the output but never panics.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: RngCore> RandomSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Adapts a generator of floats in `[0, 1)` into a [`RandomSource`]
pub struct Unit<F>(F);

impl<F: FnMut() -> f64> Unit<F> {
    pub fn new(next: F) -> Self {
        Self(next)
    }
}

impl<F: FnMut() -> f64> RandomSource for Unit<F> {
    fn next_index(&mut self, bound: usize) -> usize {
        let value = (self.0)();
        let index = (value * bound as f64).floor();

        // a source yielding 1.0 (or garbage) must still land in range
        if index.is_nan() || index < 0.0 {
            0
        } else {
            (index as usize).min(bound - 1)
        }
    }
}
