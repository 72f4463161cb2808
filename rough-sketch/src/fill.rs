//! Fill boundary traces and the hatch-pattern transform.

use log::warn;

use crate::config::StyleConfig;
use crate::drawing::Instruction;
use crate::geometry::Point;
use crate::jitter;
use crate::rng::RandomSource;

/// Jittered polyline around a fill boundary.
///
/// `xs[i]`/`ys[i]` pair up into one boundary point. Fewer than 3 points
/// produce no instructions. Every point gets its own jitter of up to
/// `max_randomness_offset · roughness` per axis; there is no double pass
/// and no spline.
pub fn solid_fill<R: RandomSource + ?Sized>(
    xs: &[f64],
    ys: &[f64],
    config: &StyleConfig,
    rng: &mut R,
) -> Vec<Instruction> {
    if xs.len() != ys.len() {
        warn!(
            "fill boundary has {} x and {} y coordinates, using the first {}",
            xs.len(),
            ys.len(),
            xs.len().min(ys.len())
        );
    }

    let count = xs.len().min(ys.len());
    if count < 3 {
        return Vec::new();
    }

    let offset = config.max_randomness_offset;
    xs.iter()
        .zip(ys)
        .enumerate()
        .map(|(i, (&x, &y))| {
            let p = jitter::point(Point::new(x, y), offset, config.roughness, rng);
            if i == 0 { Instruction::Move(p) } else { Instruction::LineTo(p) }
        })
        .collect()
}

/// Rotate `point` about `center` (given `sin θ`, `cos θ`) and scale the
/// result vertically by `aspect`.
///
/// Hatch fillers rotate the shape into a frame where hatch lines are
/// horizontal, generate lines there, then map back with the inverse.
///
/// Expanded:
/// ```text
/// x' = (-cx·cos - cy·sin + cx) + cos·x + sin·y
/// y' = (aspect·(cx·sin - cy·cos) + cy) - aspect·sin·x + aspect·cos·y
/// ```
pub fn affine_transform(point: Point, center: Point, sin: f64, cos: f64, aspect: f64) -> Point {
    let a = -center.x * cos - center.y * sin + center.x;
    let b = aspect * (center.x * sin - center.y * cos) + center.y;
    let e = -aspect * sin;
    let f = aspect * cos;
    Point::new(a + cos * point.x + sin * point.y, b + e * point.x + f * point.y)
}
