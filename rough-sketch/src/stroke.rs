//! Sketchy/hand-drawn straight strokes.
//!
//! Provides RoughJS-style line transformation to give vector graphics
//! a hand-drawn appearance:
//! - Endpoint randomization (roughness)
//! - Line bowing (curvature through two interior control points)
//! - Double-stroke effect (a second, tighter pass over the first)
//!
//! # Example
//! ```
//! use rough_sketch::{Point, Rng, StyleConfig};
//! use rough_sketch::stroke::double_line;
//!
//! let mut rng = Rng::new(42);
//! let ops = double_line(Point::new(0.0, 0.0), Point::new(100.0, 0.0), &StyleConfig::default(), &mut rng);
//! assert_eq!(ops.len(), 4); // move + curve, twice
//! ```

use log::debug;

use crate::config::StyleConfig;
use crate::drawing::Instruction;
use crate::geometry::Point;
use crate::jitter;
use crate::rng::RandomSource;

/// Jitter magnitude actually used for the segment `p1 -> p2`.
///
/// Short segments get a smaller cap so the jitter can never swamp the
/// stroke itself: when `offset² · 100 > length²` the cap becomes
/// `sqrt(length² / 10)`.
pub fn effective_offset(p1: Point, p2: Point, max_randomness_offset: f64) -> f64 {
    let length_sq = p1.distance_sq(p2);
    if max_randomness_offset * max_randomness_offset * 100.0 > length_sq {
        let clamped = (length_sq / 10.0).sqrt();
        debug!(
            "short stroke ({:.3}px): jitter cap {} clamped to {:.3}",
            length_sq.sqrt(),
            max_randomness_offset,
            clamped
        );
        clamped
    } else {
        max_randomness_offset
    }
}

/// One rough cubic approximation of the segment `p1 -> p2`.
///
/// `move_to` prepends a `Move` to the (jittered) start point. `overlay`
/// halves every jitter range, which is how the second pass of a double
/// stroke stays close to the first.
pub fn rough_line<R: RandomSource + ?Sized>(
    p1: Point,
    p2: Point,
    config: &StyleConfig,
    rng: &mut R,
    move_to: bool,
    overlay: bool,
) -> Vec<Instruction> {
    let roughness = config.roughness;
    let offset = effective_offset(p1, p2, config.max_randomness_offset);
    let magnitude = if overlay { offset / 2.0 } else { offset };

    // Where the two interior control points fall along the chord
    let diverge = 0.2 + rng.next_f64() * 0.2;

    // Bowing: perpendicular displacement proportional to the chord
    let bow_x = config.bowing * offset * (p2.y - p1.y) / 200.0;
    let bow_y = config.bowing * offset * (p1.x - p2.x) / 200.0;
    let bow_x = jitter::symmetric(bow_x, roughness, rng);
    let bow_y = jitter::symmetric(bow_y, roughness, rng);

    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;

    let mut ops = Vec::with_capacity(2);
    if move_to {
        ops.push(Instruction::Move(jitter::point(p1, magnitude, roughness, rng)));
    }

    let ctrl1 = Point::new(bow_x + p1.x + dx * diverge, bow_y + p1.y + dy * diverge);
    let ctrl2 = Point::new(bow_x + p1.x + 2.0 * dx * diverge, bow_y + p1.y + 2.0 * dy * diverge);

    ops.push(Instruction::CubicCurveTo {
        ctrl1: jitter::point(ctrl1, magnitude, roughness, rng),
        ctrl2: jitter::point(ctrl2, magnitude, roughness, rng),
        to: jitter::point(p2, magnitude, roughness, rng),
    });
    ops
}

/// Draw `p1 -> p2` twice: a full-jitter base stroke, then a half-jitter
/// overlay. Both passes start with their own `Move`.
pub fn double_line<R: RandomSource + ?Sized>(
    p1: Point,
    p2: Point,
    config: &StyleConfig,
    rng: &mut R,
) -> Vec<Instruction> {
    let mut ops = rough_line(p1, p2, config, rng, true, false);
    ops.extend(rough_line(p1, p2, config, rng, true, true));
    ops
}
