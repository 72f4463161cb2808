//! Sketchy ellipses.
//!
//! The outline is sampled at `curve_step_count` angles, each sample nudged
//! by a little jitter, and the samples are fitted with the spline fitter.
//! Two traces are drawn: the first overlaps its own start by a random phase,
//! the second (looser) one closes exactly. Together they give the familiar
//! "went around twice" wobble.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::config::StyleConfig;
use crate::drawing::Instruction;
use crate::error::SketchError;
use crate::geometry::Point;
use crate::jitter;
use crate::rng::RandomSource;
use crate::shapes::MAX_TRACE_SAMPLES;
use crate::spline::fit_spline;

/// Per-sample jitter of the first trace.
const OUTER_SPREAD: f64 = 1.0;
/// Per-sample jitter of the second trace.
const INNER_SPREAD: f64 = 1.5;

/// Double-traced rough ellipse centred on `center`.
pub fn ellipse<R: RandomSource + ?Sized>(
    center: Point,
    width: f64,
    height: f64,
    config: &StyleConfig,
    rng: &mut R,
) -> Result<Vec<Instruction>, SketchError> {
    let roughness = config.roughness;
    let increment = TAU / config.curve_step_count;

    let mut rx = (width / 2.0).abs();
    let mut ry = (height / 2.0).abs();
    rx += jitter::symmetric(rx * 0.05, roughness, rng);
    ry += jitter::symmetric(ry * 0.05, roughness, rng);

    let overlap1 = jitter::offset(0.4, 1.0, roughness, rng);
    let overlap2 = jitter::offset(0.1, overlap1, roughness, rng);

    let trace = EllipseTrace { center, rx, ry, increment };
    let outer = trace.points(OUTER_SPREAD, increment * overlap2, roughness, rng);
    let inner = trace.points(INNER_SPREAD, 0.0, roughness, rng);

    let mut ops = fit_spline(&outer, None, config, rng)?;
    ops.extend(fit_spline(&inner, None, config, rng)?);
    Ok(ops)
}

/// Geometry shared by both traces of one ellipse.
pub(crate) struct EllipseTrace {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
    pub increment: f64,
}

impl EllipseTrace {
    /// Sample points for one trace.
    ///
    /// Layout: a lead-in point just before the start (at 90% radius), one
    /// sample per increment around the full turn, then three closing points
    /// that carry the trace past its start by `overlap` radians.
    pub fn points<R: RandomSource + ?Sized>(
        &self,
        spread: f64,
        overlap: f64,
        roughness: f64,
        rng: &mut R,
    ) -> Vec<Point> {
        let Self { center, rx, ry, increment } = *self;
        let start = jitter::offset(-0.5, 0.5, roughness, rng) - FRAC_PI_2;
        let steps = (((TAU - 0.01) / increment).ceil().max(0.0) as usize).min(MAX_TRACE_SAMPLES);

        let mut points = Vec::with_capacity(steps + 4);
        points.push(jitter::point(
            center.on_ellipse(0.9 * rx, 0.9 * ry, start - increment),
            spread,
            roughness,
            rng,
        ));
        for k in 0..steps {
            let angle = start + k as f64 * increment;
            points.push(jitter::point(center.on_ellipse(rx, ry, angle), spread, roughness, rng));
        }
        points.push(jitter::point(
            center.on_ellipse(rx, ry, start + TAU + overlap * 0.5),
            spread,
            roughness,
            rng,
        ));
        points.push(jitter::point(
            center.on_ellipse(0.98 * rx, 0.98 * ry, start + overlap),
            spread,
            roughness,
            rng,
        ));
        points.push(jitter::point(
            center.on_ellipse(0.9 * rx, 0.9 * ry, start + overlap * 0.5),
            spread,
            roughness,
            rng,
        ));
        points
    }
}
