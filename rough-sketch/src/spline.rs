//! Catmull-Rom style spline fitting through sampled points.
//!
//! Curved primitives (ellipses, arcs, free-form curves) are sampled into a
//! point list and then turned into a chain of cubic beziers here. The first
//! and last points only steer the tangents: the chain runs from `points[1]`
//! to `points[len - 2]`.

use crate::config::StyleConfig;
use crate::drawing::Instruction;
use crate::error::SketchError;
use crate::geometry::Point;
use crate::jitter;
use crate::rng::RandomSource;
use crate::stroke::double_line;

/// Fit a smooth cubic chain through `points`.
///
/// - 2 points: a double-stroked rough line between them.
/// - 3 points: one curve from `points[1]` to `points[2]`.
/// - more: one curve per interior span, with control points derived from
///   the neighbours and `1 - curve_tightness` as the tension factor.
///
/// `close_to` appends a jittered `LineTo` back to that point.
pub fn fit_spline<R: RandomSource + ?Sized>(
    points: &[Point],
    close_to: Option<Point>,
    config: &StyleConfig,
    rng: &mut R,
) -> Result<Vec<Instruction>, SketchError> {
    let len = points.len();
    let mut ops = match len {
        0 | 1 => return Err(SketchError::EmptyShape { shape: "spline", points: len }),
        2 => double_line(points[0], points[1], config, rng),
        3 => vec![
            Instruction::Move(points[1]),
            Instruction::CubicCurveTo { ctrl1: points[1], ctrl2: points[2], to: points[2] },
        ],
        _ => catmull_rom(points, 1.0 - config.curve_tightness),
    };

    if let Some(close) = close_to {
        ops.push(Instruction::LineTo(jitter::point(
            close,
            config.max_randomness_offset,
            config.roughness,
            rng,
        )));
    }
    Ok(ops)
}

/// Bezier chain for `len > 3` points with tension `s`.
fn catmull_rom(points: &[Point], s: f64) -> Vec<Instruction> {
    let mut ops = Vec::with_capacity(points.len() - 2);
    ops.push(Instruction::Move(points[1]));

    // ## Rust Lesson #12: Windows
    //
    // `.windows(4)` yields overlapping slices [p0,p1,p2,p3], [p1,p2,p3,p4], ...
    // exactly the neighbourhood each span needs - no index arithmetic.
    for w in points.windows(4) {
        let (prev, from, to, next) = (w[0], w[1], w[2], w[3]);
        let ctrl1 = Point::new(
            from.x + s * (to.x - prev.x) / 6.0,
            from.y + s * (to.y - prev.y) / 6.0,
        );
        let ctrl2 = Point::new(
            to.x - s * (next.x - from.x) / 6.0,
            to.y - s * (next.y - from.y) / 6.0,
        );
        ops.push(Instruction::CubicCurveTo { ctrl1, ctrl2, to });
    }
    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Rng;

    fn samples(n: usize) -> Vec<Point> {
        (0..n).map(|i| Point::new(i as f64 * 10.0, ((i * 7) % 5) as f64)).collect()
    }

    #[test]
    fn too_few_points_is_an_error() {
        let mut rng = Rng::new(1);
        for n in 0..2 {
            let err = fit_spline(&samples(n), None, &StyleConfig::default(), &mut rng).unwrap_err();
            assert_eq!(err, SketchError::EmptyShape { shape: "spline", points: n });
        }
    }

    #[test]
    fn two_points_delegate_to_double_line() {
        let pts = samples(2);
        let config = StyleConfig::default();
        let fitted = fit_spline(&pts, None, &config, &mut Rng::new(5)).unwrap();
        let direct = double_line(pts[0], pts[1], &config, &mut Rng::new(5));
        assert_eq!(fitted, direct);
    }

    #[test]
    fn three_points_single_curve() {
        let pts = samples(3);
        let ops = fit_spline(&pts, None, &StyleConfig::default(), &mut Rng::new(1)).unwrap();
        assert_eq!(
            ops,
            vec![
                Instruction::Move(pts[1]),
                Instruction::CubicCurveTo { ctrl1: pts[1], ctrl2: pts[2], to: pts[2] },
            ]
        );
    }

    #[test]
    fn chain_passes_through_interior_points() {
        let pts = samples(8);
        let ops = fit_spline(&pts, None, &StyleConfig::default(), &mut Rng::new(1)).unwrap();

        assert_eq!(ops.len(), 1 + pts.len() - 3);
        assert_eq!(ops[0], Instruction::Move(pts[1]));
        for (i, op) in ops.iter().enumerate().skip(1) {
            assert_eq!(op.end_point(), pts[i + 1]);
        }
    }

    #[test]
    fn catmull_rom_control_points_match_formula() {
        let pts = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(20.0, 10.0), Point::new(30.0, 10.0)];
        let near = |a: Point, x: f64, y: f64| (a.x - x).abs() < 1e-9 && (a.y - y).abs() < 1e-9;

        // tightness 0: ctrl1 = p1 + (p2 - p0) / 6, ctrl2 = p2 - (p3 - p1) / 6
        let ops = fit_spline(&pts, None, &StyleConfig::smooth(), &mut Rng::new(1)).unwrap();
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0], Instruction::Move(pts[1]));
        let Instruction::CubicCurveTo { ctrl1, ctrl2, to } = ops[1] else {
            panic!("expected a curve, got {:?}", ops[1]);
        };
        assert!(near(ctrl1, 40.0 / 3.0, 5.0 / 3.0), "{:?}", ctrl1);
        assert!(near(ctrl2, 50.0 / 3.0, 25.0 / 3.0), "{:?}", ctrl2);
        assert_eq!(to, pts[2]);

        // tightness 0.5 halves the tangent contribution
        let config = StyleConfig::smooth().with_curve_tightness(0.5);
        let ops = fit_spline(&pts, None, &config, &mut Rng::new(1)).unwrap();
        let Instruction::CubicCurveTo { ctrl1, ctrl2, .. } = ops[1] else {
            panic!("expected a curve, got {:?}", ops[1]);
        };
        assert!(near(ctrl1, 35.0 / 3.0, 5.0 / 6.0), "{:?}", ctrl1);
        assert!(near(ctrl2, 55.0 / 3.0, 55.0 / 6.0), "{:?}", ctrl2);
    }

    #[test]
    fn full_tightness_gives_straight_chords() {
        let pts = samples(6);
        let config = StyleConfig::default().with_curve_tightness(1.0);
        let ops = fit_spline(&pts, None, &config, &mut Rng::new(1)).unwrap();

        for (i, op) in ops.iter().enumerate().skip(1) {
            let Instruction::CubicCurveTo { ctrl1, ctrl2, to } = *op else {
                panic!("expected curve");
            };
            assert_eq!(ctrl1, pts[i]);
            assert_eq!(ctrl2, pts[i + 1]);
            assert_eq!(to, pts[i + 1]);
        }
    }

    #[test]
    fn collinear_points_stay_on_the_line() {
        let pts: Vec<Point> = (0..6).map(|i| Point::new(i as f64 * 3.0, i as f64 * 3.0)).collect();
        let ops = fit_spline(&pts, None, &StyleConfig::default(), &mut Rng::new(1)).unwrap();
        for op in &ops[1..] {
            let Instruction::CubicCurveTo { ctrl1, ctrl2, .. } = *op else {
                panic!("expected curve");
            };
            assert!((ctrl1.x - ctrl1.y).abs() < 1e-12);
            assert!((ctrl2.x - ctrl2.y).abs() < 1e-12);
        }
    }

    #[test]
    fn close_point_appends_line() {
        let pts = samples(5);
        let close = Point::new(-4.0, 2.0);
        let ops = fit_spline(&pts, Some(close), &StyleConfig::smooth(), &mut Rng::new(1)).unwrap();
        assert_eq!(ops.last(), Some(&Instruction::LineTo(close)));
    }

    #[test]
    fn close_point_is_jittered_within_offset() {
        let pts = samples(5);
        let close = Point::new(0.0, 0.0);
        let config = StyleConfig::default().with_max_randomness_offset(2.0);
        for seed in 0..20 {
            let ops = fit_spline(&pts, Some(close), &config, &mut Rng::new(seed)).unwrap();
            let end = ops.last().unwrap().end_point();
            assert!(end.x.abs() <= 2.0 && end.y.abs() <= 2.0);
        }
    }
}
