//! Rough rendering of SVG path data.
//!
//! ## Curve Conversion
//!
//! The drawing instruction set only has moves, lines and cubics. Quadratic
//! segments are raised to the equivalent cubic and elliptical arcs are split
//! into cubics, both with lyon_geom, before being roughened.
//!
//! ## Pen State
//!
//! Segments are processed in order with a [`PenState`] value threaded from
//! one to the next. Curves leave the pen on their *jittered* endpoint, so the
//! following segment continues from where the ink actually stopped.

use lyon_geom::{point, vector, Angle, ArcFlags, QuadraticBezierSegment, SvgArc};
use log::trace;
use svgtypes::{PathParser, PathSegment};

use crate::config::StyleConfig;
use crate::drawing::Instruction;
use crate::error::SketchError;
use crate::geometry::Point;
use crate::jitter;
use crate::rng::RandomSource;
use crate::stroke::double_line;

/// Pen position carried between path segments.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PenState {
    /// Where the next segment starts.
    pub position: Point,
    /// Start of the current sub-path, the target of `Z`.
    pub subpath_start: Point,
    /// Mirror of the last cubic's second control point (for `S`).
    pub cubic_reflection: Option<Point>,
    /// Mirror of the last quadratic's control point (for `T`).
    pub quad_reflection: Option<Point>,
}

impl PenState {
    /// Resolve a segment coordinate against the pen.
    #[inline]
    fn resolve(&self, abs: bool, x: f64, y: f64) -> Point {
        if abs {
            Point::new(x, y)
        } else {
            self.position.translate(x, y)
        }
    }
}

/// Parse `d` and render every segment roughly.
///
/// Parsing happens up front: a malformed string fails before anything is
/// drawn.
pub fn path<R: RandomSource + ?Sized>(
    d: &str,
    config: &StyleConfig,
    rng: &mut R,
) -> Result<Vec<Instruction>, SketchError> {
    let segments = PathParser::from(d).collect::<Result<Vec<_>, _>>()?;
    trace!("rough path: {} segments", segments.len());

    let (_, ops) = segments.iter().enumerate().fold(
        (PenState::default(), Vec::new()),
        |(pen, mut ops), (i, current)| {
            // The first segment is its own predecessor
            let previous = if i > 0 { &segments[i - 1] } else { current };
            let (pen, segment_ops) = process_segment(pen, current, previous, config, rng);
            ops.extend(segment_ops);
            (pen, ops)
        },
    );
    Ok(ops)
}

/// Render one segment starting from `pen`; returns the updated pen and the
/// segment's instructions.
pub fn process_segment<R: RandomSource + ?Sized>(
    pen: PenState,
    current: &PathSegment,
    previous: &PathSegment,
    config: &StyleConfig,
    rng: &mut R,
) -> (PenState, Vec<Instruction>) {
    let mut next = pen;
    let ops = match *current {
        PathSegment::MoveTo { abs, x, y } => {
            let target = pen.resolve(abs, x, y);
            next.position = target;
            next.subpath_start = target;
            vec![Instruction::Move(jitter::point(
                target,
                config.max_randomness_offset,
                config.roughness,
                rng,
            ))]
        }
        PathSegment::LineTo { abs, x, y } => {
            let target = pen.resolve(abs, x, y);
            next.position = target;
            double_line(pen.position, target, config, rng)
        }
        PathSegment::HorizontalLineTo { abs, x } => {
            let x = if abs { x } else { pen.position.x + x };
            let target = Point::new(x, pen.position.y);
            next.position = target;
            double_line(pen.position, target, config, rng)
        }
        PathSegment::VerticalLineTo { abs, y } => {
            let y = if abs { y } else { pen.position.y + y };
            let target = Point::new(pen.position.x, y);
            next.position = target;
            double_line(pen.position, target, config, rng)
        }
        PathSegment::ClosePath { .. } => {
            next.position = pen.subpath_start;
            if pen.position != pen.subpath_start {
                double_line(pen.position, pen.subpath_start, config, rng)
            } else {
                Vec::new()
            }
        }
        PathSegment::CurveTo { abs, x1, y1, x2, y2, x, y } => {
            let ctrl1 = pen.resolve(abs, x1, y1);
            let ctrl2 = pen.resolve(abs, x2, y2);
            let end = pen.resolve(abs, x, y);
            let (ops, landed) = bezier_to(pen.position, ctrl1, ctrl2, end, config, rng);
            next.position = landed;
            next.cubic_reflection = Some(end.reflect(ctrl2));
            ops
        }
        PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
            let ctrl1 = match previous {
                PathSegment::CurveTo { .. } | PathSegment::SmoothCurveTo { .. } => {
                    pen.cubic_reflection.unwrap_or(pen.position)
                }
                _ => pen.position,
            };
            let ctrl2 = pen.resolve(abs, x2, y2);
            let end = pen.resolve(abs, x, y);
            let (ops, landed) = bezier_to(pen.position, ctrl1, ctrl2, end, config, rng);
            next.position = landed;
            next.cubic_reflection = Some(end.reflect(ctrl2));
            ops
        }
        PathSegment::Quadratic { abs, x1, y1, x, y } => {
            let ctrl = pen.resolve(abs, x1, y1);
            let end = pen.resolve(abs, x, y);
            let (ops, landed) = quad_to(pen.position, ctrl, end, config, rng);
            next.position = landed;
            next.quad_reflection = Some(end.reflect(ctrl));
            ops
        }
        PathSegment::SmoothQuadratic { abs, x, y } => {
            let ctrl = match previous {
                PathSegment::Quadratic { .. } | PathSegment::SmoothQuadratic { .. } => {
                    pen.quad_reflection.unwrap_or(pen.position)
                }
                _ => pen.position,
            };
            let end = pen.resolve(abs, x, y);
            let (ops, landed) = quad_to(pen.position, ctrl, end, config, rng);
            next.position = landed;
            next.quad_reflection = Some(end.reflect(ctrl));
            ops
        }
        PathSegment::EllipticalArc { abs, rx, ry, x_axis_rotation, large_arc, sweep, x, y } => {
            let end = pen.resolve(abs, x, y);
            let (ops, landed) = arc_to(pen.position, end, rx, ry, x_axis_rotation, large_arc, sweep, config, rng);
            next.position = landed;
            ops
        }
    };
    (next, ops)
}

/// Doubled rough cubic from `from`.
///
/// The first pass starts exactly at `from`, the second at a jittered copy;
/// the second pass also uses a slightly wider jitter. Returns the
/// instructions and the second pass's (jittered) endpoint.
fn bezier_to<R: RandomSource + ?Sized>(
    from: Point,
    ctrl1: Point,
    ctrl2: Point,
    end: Point,
    config: &StyleConfig,
    rng: &mut R,
) -> (Vec<Instruction>, Point) {
    let roughness = config.roughness;
    let spreads = [config.max_randomness_offset, config.max_randomness_offset + 0.5];

    let mut ops = Vec::with_capacity(4);
    let mut landed = end;
    for (pass, spread) in spreads.into_iter().enumerate() {
        let start = if pass == 0 { from } else { jitter::point(from, spread, roughness, rng) };
        ops.push(Instruction::Move(start));

        landed = jitter::point(end, spread, roughness, rng);
        ops.push(Instruction::CubicCurveTo {
            ctrl1: jitter::point(ctrl1, spread, roughness, rng),
            ctrl2: jitter::point(ctrl2, spread, roughness, rng),
            to: landed,
        });
    }
    (ops, landed)
}

/// Doubled rough quadratic from `from`, emitted as cubics.
fn quad_to<R: RandomSource + ?Sized>(
    from: Point,
    ctrl: Point,
    end: Point,
    config: &StyleConfig,
    rng: &mut R,
) -> (Vec<Instruction>, Point) {
    let roughness = config.roughness;
    let spreads = [1.0 * (1.0 + roughness * 0.2), 1.5 * (1.0 + roughness * 0.22)];

    let mut ops = Vec::with_capacity(4);
    let mut landed = end;
    for spread in spreads {
        let start = jitter::point(from, spread, roughness, rng);
        ops.push(Instruction::Move(start));

        landed = jitter::point(end, spread, roughness, rng);
        let bent = jitter::point(ctrl, spread, roughness, rng);
        let cubic = QuadraticBezierSegment {
            from: point(start.x, start.y),
            ctrl: point(bent.x, bent.y),
            to: point(landed.x, landed.y),
        }
        .to_cubic();
        ops.push(Instruction::CubicCurveTo {
            ctrl1: Point::new(cubic.ctrl1.x, cubic.ctrl1.y),
            ctrl2: Point::new(cubic.ctrl2.x, cubic.ctrl2.y),
            to: landed,
        });
    }
    (ops, landed)
}

/// SVG elliptical arc from `from` to `end`, split into rough cubics.
#[allow(clippy::too_many_arguments)]
fn arc_to<R: RandomSource + ?Sized>(
    from: Point,
    end: Point,
    rx: f64,
    ry: f64,
    x_axis_rotation: f64,
    large_arc: bool,
    sweep: bool,
    config: &StyleConfig,
    rng: &mut R,
) -> (Vec<Instruction>, Point) {
    let (rx, ry) = (rx.abs(), ry.abs());
    if from == end || rx == 0.0 || ry == 0.0 {
        return (double_line(from, end, config, rng), end);
    }

    let arc = SvgArc {
        from: point(from.x, from.y),
        to: point(end.x, end.y),
        radii: vector(rx, ry),
        x_rotation: Angle::degrees(x_axis_rotation),
        flags: ArcFlags { large_arc, sweep },
    };
    let mut cubics = Vec::new();
    arc.for_each_cubic_bezier(&mut |segment| {
        cubics.push((
            Point::new(segment.ctrl1.x, segment.ctrl1.y),
            Point::new(segment.ctrl2.x, segment.ctrl2.y),
            Point::new(segment.to.x, segment.to.y),
        ));
    });

    let mut ops = Vec::with_capacity(cubics.len() * 4);
    let mut pen = from;
    for (ctrl1, ctrl2, to) in cubics {
        let (segment_ops, landed) = bezier_to(pen, ctrl1, ctrl2, to, config, rng);
        ops.extend(segment_ops);
        pen = landed;
    }
    (ops, pen)
}
