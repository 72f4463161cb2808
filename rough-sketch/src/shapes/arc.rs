//! Sketchy elliptical arcs.

use std::f64::consts::TAU;

use log::debug;

use crate::config::StyleConfig;
use crate::drawing::Instruction;
use crate::error::SketchError;
use crate::geometry::Point;
use crate::jitter;
use crate::rng::RandomSource;
use crate::shapes::MAX_TRACE_SAMPLES;
use crate::spline::fit_spline;
use crate::stroke::double_line;

/// How (and whether) an arc is closed back to its centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArcClosure {
    /// Just the curved part.
    #[default]
    Open,
    /// Plain `LineTo` centre and back to the start point, no extra jitter.
    Straight,
    /// Pie slice: double-stroked chords from the centre to both ends.
    Sketched,
}

/// Bring `start` into `[0, 2π)` (moving `stop` by the same amount) and
/// clamp spans wider than one turn to exactly `[0, 2π]`.
pub fn normalize_angles(start: f64, stop: f64) -> (f64, f64) {
    let (mut start, mut stop) = (start, stop);
    if start < 0.0 {
        let turns = (-start / TAU).ceil();
        start += turns * TAU;
        stop += turns * TAU;
    }
    if stop - start > TAU {
        debug!("arc span {:.3} exceeds a full turn, clamping", stop - start);
        start = 0.0;
        stop = TAU;
    }
    (start, stop)
}

/// Double-traced rough arc of the ellipse centred on `center`.
#[allow(clippy::too_many_arguments)]
pub fn arc<R: RandomSource + ?Sized>(
    center: Point,
    width: f64,
    height: f64,
    start: f64,
    stop: f64,
    closure: ArcClosure,
    config: &StyleConfig,
    rng: &mut R,
) -> Result<Vec<Instruction>, SketchError> {
    let roughness = config.roughness;

    let mut rx = (width / 2.0).abs();
    let mut ry = (height / 2.0).abs();
    rx += jitter::symmetric(rx * 0.01, roughness, rng);
    ry += jitter::symmetric(ry * 0.01, roughness, rng);

    let (start, stop) = normalize_angles(start, stop);
    let ellipse_increment = TAU / config.curve_step_count;
    let increment = (ellipse_increment / 2.0).min((stop - start) / 2.0);

    let trace = ArcTrace { center, rx, ry, start, stop, increment };
    let outer = trace.points(1.0, roughness, rng);
    let inner = trace.points(1.5, roughness, rng);

    let mut ops = fit_spline(&outer, None, config, rng)?;
    ops.extend(fit_spline(&inner, None, config, rng)?);

    let start_point = center.on_ellipse(rx, ry, start);
    match closure {
        ArcClosure::Open => {}
        ArcClosure::Straight => {
            ops.push(Instruction::LineTo(center));
            ops.push(Instruction::LineTo(start_point));
        }
        ArcClosure::Sketched => {
            let stop_point = center.on_ellipse(rx, ry, stop);
            ops.extend(double_line(center, start_point, config, rng));
            ops.extend(double_line(center, stop_point, config, rng));
        }
    }
    Ok(ops)
}

/// Geometry shared by both traces of one arc.
pub(crate) struct ArcTrace {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
    pub start: f64,
    pub stop: f64,
    pub increment: f64,
}

impl ArcTrace {
    /// Sample points for one trace: a 90%-radius lead-in, one jittered
    /// sample per increment from a slightly shifted start up to `stop`,
    /// and the exact stop point twice so the spline ends on it.
    pub fn points<R: RandomSource + ?Sized>(&self, spread: f64, roughness: f64, rng: &mut R) -> Vec<Point> {
        let Self { center, rx, ry, start, stop, mut increment } = *self;
        let first = start + jitter::offset(-0.1, 0.1, roughness, rng);

        // Zero or reversed spans still emit their single in-range sample.
        let span = stop - first;
        let steps = if span < 0.0 || span.is_nan() {
            0
        } else if increment > 0.0 {
            let intervals = (span / increment).floor();
            if intervals >= MAX_TRACE_SAMPLES as f64 {
                // Widen the step so the capped samples still reach `stop`
                increment = span / MAX_TRACE_SAMPLES as f64;
                MAX_TRACE_SAMPLES + 1
            } else {
                intervals as usize + 1
            }
        } else {
            1
        };

        let mut points = Vec::with_capacity(steps + 3);
        points.push(jitter::point(
            center.on_ellipse(0.9 * rx, 0.9 * ry, first - increment),
            spread,
            roughness,
            rng,
        ));
        for k in 0..steps {
            let angle = first + k as f64 * increment;
            points.push(jitter::point(center.on_ellipse(rx, ry, angle), spread, roughness, rng));
        }
        let end = center.on_ellipse(rx, ry, stop);
        points.push(end);
        points.push(end);
        points
    }
}
