//! Injectable random number sources.
//!
//! Every rough operation draws its jitter from a [`RandomSource`]. The
//! built-in [`Rng`] is a small deterministic generator, so a fixed seed
//! reproduces a drawing exactly. Callers that want fresh output each run can
//! seed it from entropy or plug in their own source.

/// Anything that can produce uniform floats in `[0, 1)`.
///
/// ## Rust Lesson #8: Traits as Seams
///
/// A trait is like a TypeScript interface. Code written against
/// `R: RandomSource` works with our LCG in tests and with any other
/// generator in production - the compiler generates a copy per type.
pub trait RandomSource {
    /// Next uniform float in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Next uniform float in `[min, max)`.
    ///
    /// `min > max` is allowed and samples the reversed range.
    #[inline]
    fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// A fast, deterministic pseudo-random number generator.
///
/// Uses a Linear Congruential Generator (LCG) with parameters from
/// Numerical Recipes for good statistical properties while being
/// extremely fast.
///
/// # Example
/// ```
/// use rough_sketch::rng::{RandomSource, Rng};
///
/// let mut rng = Rng::new(12345);
/// let value = rng.next_f64(); // Returns value in [0, 1)
/// assert!((0.0..1.0).contains(&value));
/// ```
#[derive(Clone, Debug)]
pub struct Rng {
    state: u64,
}

impl Rng {
    /// Create a new RNG with the given seed.
    ///
    /// The same seed will always produce the same sequence of numbers.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { state: seed.wrapping_add(1) }
    }

    /// Get the next raw u64 value.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self.state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }
}

impl RandomSource for Rng {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        // Use high bits for better distribution
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new(0)
    }
}
