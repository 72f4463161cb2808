//! Straight-edged shapes: lines, polylines, polygons and rectangles.

use crate::config::StyleConfig;
use crate::drawing::Instruction;
use crate::error::SketchError;
use crate::geometry::Point;
use crate::rng::RandomSource;
use crate::stroke::double_line;

/// A single double-stroked line.
pub fn line<R: RandomSource + ?Sized>(
    p1: Point,
    p2: Point,
    config: &StyleConfig,
    rng: &mut R,
) -> Vec<Instruction> {
    double_line(p1, p2, config, rng)
}

/// Double-stroke every consecutive pair, plus the closing pair if `close`.
///
/// Exactly two points degrade to [`line`] (no closing edge is added); fewer
/// than two is an [`SketchError::EmptyShape`].
pub fn linear_path<R: RandomSource + ?Sized>(
    points: &[Point],
    close: bool,
    config: &StyleConfig,
    rng: &mut R,
) -> Result<Vec<Instruction>, SketchError> {
    match points.len() {
        0 | 1 => Err(SketchError::EmptyShape { shape: "linear path", points: points.len() }),
        2 => Ok(line(points[0], points[1], config, rng)),
        n => {
            // Each edge is 4 ops: (move + curve) x 2 passes
            let mut ops = Vec::with_capacity(n * 4);
            for pair in points.windows(2) {
                ops.extend(double_line(pair[0], pair[1], config, rng));
            }
            if close {
                ops.extend(double_line(points[n - 1], points[0], config, rng));
            }
            Ok(ops)
        }
    }
}

/// A closed linear path.
pub fn polygon<R: RandomSource + ?Sized>(
    points: &[Point],
    config: &StyleConfig,
    rng: &mut R,
) -> Result<Vec<Instruction>, SketchError> {
    linear_path(points, true, config, rng)
}

/// Corners of an axis-aligned rectangle, in drawing order.
///
/// Negative sizes reflect the rectangle; zero sizes give a degenerate but
/// valid outline.
pub fn rectangle_corners(x: f64, y: f64, width: f64, height: f64) -> [Point; 4] {
    [
        Point::new(x, y),
        Point::new(x + width, y),
        Point::new(x + width, y + height),
        Point::new(x, y + height),
    ]
}
