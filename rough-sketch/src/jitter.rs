//! The jitter source every rough builder draws from.

use crate::geometry::Point;
use crate::rng::RandomSource;

/// Uniform sample from `[min, max)` scaled by `roughness`.
///
/// With `roughness == 0.0` the result is always `0.0`, which collapses every
/// builder to its ideal geometry.
#[inline]
pub fn offset<R: RandomSource + ?Sized>(min: f64, max: f64, roughness: f64, rng: &mut R) -> f64 {
    roughness * rng.next_range(min, max)
}

/// Shorthand for `offset(-magnitude, magnitude, ..)`.
#[inline]
pub fn symmetric<R: RandomSource + ?Sized>(magnitude: f64, roughness: f64, rng: &mut R) -> f64 {
    offset(-magnitude, magnitude, roughness, rng)
}

/// Shift both coordinates of `at` by independent symmetric jitter.
///
/// The x offset is drawn before the y offset.
#[inline]
pub fn point<R: RandomSource + ?Sized>(at: Point, magnitude: f64, roughness: f64, rng: &mut R) -> Point {
    let dx = symmetric(magnitude, roughness, rng);
    let dy = symmetric(magnitude, roughness, rng);
    at.translate(dx, dy)
}
