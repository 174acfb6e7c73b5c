use rand::{Rng as _, SeedableRng as _};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Seeded random stream owned by one wallpaper procedure.
///
/// Every draw goes through an explicit `&mut WallRng`, so a procedure's output depends only on
/// its seeds and the order of its calls.
#[derive(Clone, Debug)]
pub struct WallRng {
    seed: u64,
    inner: Xoshiro256PlusPlus,
}

impl WallRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            inner: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    /// Restart the stream from `seed`, discarding the current state.
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::seeded(seed);
    }

    /// Seed the stream was last (re)started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform float in `[0, 1)`.
    pub fn random(&mut self) -> f64 {
        self.inner.random::<f64>()
    }

    /// Uniform integer in `lo..=hi`; an inverted range yields `lo`.
    pub fn randint(&mut self, lo: i64, hi: i64) -> i64 {
        if hi <= lo {
            return lo;
        }
        self.inner.random_range(lo..=hi)
    }

    /// Uniform float between `a` and `b`, in either order.
    pub fn uniform(&mut self, a: f64, b: f64) -> f64 {
        a + (b - a) * self.random()
    }

    /// True with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.random() < p
    }

    /// Uniform index into a collection of `len` items.
    ///
    /// # Panics
    /// Panics if `len` is zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.inner.random_range(0..len)
    }

    /// Uniformly chosen element of `items`.
    ///
    /// # Panics
    /// Panics if `items` is empty.
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.index(items.len())]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wallpaper/rng.rs"]
mod tests;
