//! The checked drawing entry point.
//!
//! [`Renderer`] owns the random source and exposes one method per primitive.
//! Every method validates its [`StyleConfig`] before drawing anything and
//! wraps the result in a [`Drawing`].
//!
//! ## Rust Lesson #9: Default Type Parameters
//!
//! `Renderer<R: RandomSource = Rng>` means plain `Renderer` is a
//! `Renderer<Rng>`. Most callers never name the generator, while tests
//! can still plug in a scripted source:
//!
//! ```
//! use rough_sketch::{Point, Renderer, StyleConfig};
//!
//! let mut renderer = Renderer::with_seed(42);
//! let drawing = renderer
//!     .line(Point::new(0.0, 0.0), Point::new(100.0, 0.0), &StyleConfig::default())
//!     .unwrap();
//! assert_eq!(drawing.contour_count(), 2);
//! ```

use log::trace;

use crate::config::StyleConfig;
use crate::drawing::Drawing;
use crate::error::SketchError;
use crate::fill;
use crate::geometry::Point;
use crate::jitter;
use crate::path;
use crate::rng::{RandomSource, Rng};
use crate::shapes::arc::{self, ArcClosure};
use crate::shapes::{ellipse, linear};
use crate::spline::fit_spline;

/// Draws rough primitives from a single random stream.
///
/// Calls consume randomness in order, so the same seed and the same call
/// sequence always produce the same drawings.
#[derive(Debug, Clone)]
pub struct Renderer<R: RandomSource = Rng> {
    rng: R,
}

impl Renderer<Rng> {
    /// Renderer over the built-in generator.
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: Rng::new(seed) }
    }
}

impl<R: RandomSource> Renderer<R> {
    /// Renderer over any random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Borrow the random source, e.g. to reseed between drawings.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Consume the renderer and hand back its random source.
    pub fn into_inner(self) -> R {
        self.rng
    }

    /// A double-stroked line from `p1` to `p2`.
    pub fn line(&mut self, p1: Point, p2: Point, config: &StyleConfig) -> Result<Drawing, SketchError> {
        config.validate()?;
        trace!("line ({:.2}, {:.2}) -> ({:.2}, {:.2})", p1.x, p1.y, p2.x, p2.y);
        Ok(Drawing::stroke(linear::line(p1, p2, config, &mut self.rng)))
    }

    /// A polyline through `points`, closed back to the first point if `close`.
    pub fn linear_path(
        &mut self,
        points: &[Point],
        close: bool,
        config: &StyleConfig,
    ) -> Result<Drawing, SketchError> {
        config.validate()?;
        trace!("linear path: {} points, close={}", points.len(), close);
        linear::linear_path(points, close, config, &mut self.rng).map(Drawing::stroke)
    }

    /// A closed polyline.
    pub fn polygon(&mut self, points: &[Point], config: &StyleConfig) -> Result<Drawing, SketchError> {
        config.validate()?;
        trace!("polygon: {} points", points.len());
        linear::polygon(points, config, &mut self.rng).map(Drawing::stroke)
    }

    /// An axis-aligned rectangle with its top-left corner at `(x, y)`.
    pub fn rectangle(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        config: &StyleConfig,
    ) -> Result<Drawing, SketchError> {
        config.validate()?;
        trace!("rectangle {:.2}x{:.2} at ({:.2}, {:.2})", width, height, x, y);
        let corners = linear::rectangle_corners(x, y, width, height);
        linear::polygon(&corners, config, &mut self.rng).map(Drawing::stroke)
    }

    /// An ellipse centred on `(cx, cy)` with the given full width and height.
    pub fn ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        width: f64,
        height: f64,
        config: &StyleConfig,
    ) -> Result<Drawing, SketchError> {
        config.validate()?;
        trace!("ellipse {:.2}x{:.2} at ({:.2}, {:.2})", width, height, cx, cy);
        ellipse::ellipse(Point::new(cx, cy), width, height, config, &mut self.rng).map(Drawing::stroke)
    }

    /// A circle centred on `(cx, cy)`.
    pub fn circle(&mut self, cx: f64, cy: f64, diameter: f64, config: &StyleConfig) -> Result<Drawing, SketchError> {
        self.ellipse(cx, cy, diameter, diameter, config)
    }

    /// Part of an ellipse, from angle `start` to `stop` (radians,
    /// clockwise in screen coordinates).
    #[allow(clippy::too_many_arguments)]
    pub fn arc(
        &mut self,
        cx: f64,
        cy: f64,
        width: f64,
        height: f64,
        start: f64,
        stop: f64,
        closure: ArcClosure,
        config: &StyleConfig,
    ) -> Result<Drawing, SketchError> {
        config.validate()?;
        trace!("arc {:.3}..{:.3} at ({:.2}, {:.2}), {:?}", start, stop, cx, cy, closure);
        arc::arc(Point::new(cx, cy), width, height, start, stop, closure, config, &mut self.rng)
            .map(Drawing::stroke)
    }

    /// A double-traced spline through arbitrary points.
    ///
    /// Each trace jitters every point independently, repeats the first and
    /// last points as tangent guides, and fits the result.
    pub fn curve(&mut self, points: &[Point], config: &StyleConfig) -> Result<Drawing, SketchError> {
        config.validate()?;
        if points.len() < 2 {
            return Err(SketchError::EmptyShape { shape: "curve", points: points.len() });
        }
        trace!("curve: {} points", points.len());

        let roughness = config.roughness;
        let spreads = [1.0 * (1.0 + 0.2 * roughness), 1.5 * (1.0 + 0.22 * roughness)];
        let mut ops = Vec::new();
        for spread in spreads {
            let trace = curve_trace(points, spread, roughness, &mut self.rng);
            ops.extend(fit_spline(&trace, None, config, &mut self.rng)?);
        }
        Ok(Drawing::stroke(ops))
    }

    /// Rough rendering of SVG path data.
    pub fn path(&mut self, d: &str, config: &StyleConfig) -> Result<Drawing, SketchError> {
        config.validate()?;
        trace!("path: {} bytes of path data", d.len());
        path::path(d, config, &mut self.rng).map(Drawing::stroke)
    }

    /// Jittered fill boundary through `(xs[i], ys[i])`.
    ///
    /// Fewer than three points gives an empty (but valid) fill drawing.
    pub fn solid_fill(&mut self, xs: &[f64], ys: &[f64], config: &StyleConfig) -> Result<Drawing, SketchError> {
        config.validate()?;
        trace!("solid fill: {} points", xs.len().min(ys.len()));
        Ok(Drawing::fill(fill::solid_fill(xs, ys, config, &mut self.rng)))
    }
}

impl Default for Renderer<Rng> {
    fn default() -> Self {
        Self::new(Rng::default())
    }
}

/// Jittered copy of `points` with the ends doubled.
fn curve_trace<R: RandomSource + ?Sized>(points: &[Point], spread: f64, roughness: f64, rng: &mut R) -> Vec<Point> {
    let mut trace = Vec::with_capacity(points.len() + 2);
    trace.push(jitter::point(points[0], spread, roughness, rng));
    trace.push(jitter::point(points[0], spread, roughness, rng));
    for (i, &p) in points.iter().enumerate().skip(1) {
        trace.push(jitter::point(p, spread, roughness, rng));
        if i == points.len() - 1 {
            trace.push(jitter::point(p, spread, roughness, rng));
        }
    }
    trace
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::{DrawingKind, Instruction};
    use std::f64::consts::{FRAC_PI_2, TAU};

    /// Replays a fixed cycle of values, for pinning down draw order.
    struct Scripted {
        values: Vec<f64>,
        next: usize,
    }

    impl RandomSource for Scripted {
        fn next_f64(&mut self) -> f64 {
            let v = self.values[self.next % self.values.len()];
            self.next += 1;
            v
        }
    }

    #[test]
    fn smooth_rectangle_hits_corners() {
        let mut r = Renderer::with_seed(1);
        let d = r.rectangle(10.0, 20.0, 30.0, 40.0, &StyleConfig::smooth()).unwrap();
        assert_eq!(d.kind, DrawingKind::StrokePath);
        assert_eq!(d.len(), 16);
        assert_eq!(d.instructions[0], Instruction::Move(Point::new(10.0, 20.0)));
        assert_eq!(d.instructions[1].end_point(), Point::new(40.0, 20.0));
        assert_eq!(d.instructions[5].end_point(), Point::new(40.0, 60.0));
        assert_eq!(d.instructions[9].end_point(), Point::new(10.0, 60.0));
        assert_eq!(d.instructions[13].end_point(), Point::new(10.0, 20.0));
    }

    #[test]
    fn two_point_linear_path_is_a_line() {
        let cfg = StyleConfig::default();
        let (a, b) = (Point::new(0.0, 0.0), Point::new(25.0, 5.0));
        let path = Renderer::with_seed(6).linear_path(&[a, b], true, &cfg).unwrap();
        let line = Renderer::with_seed(6).line(a, b, &cfg).unwrap();
        assert_eq!(path, line);
    }

    #[test]
    fn invalid_config_is_rejected_before_drawing() {
        let mut r = Renderer::with_seed(3);
        let cfg = StyleConfig::default().with_curve_step_count(0.0);
        let err = r.ellipse(0.0, 0.0, 10.0, 10.0, &cfg).unwrap_err();
        assert!(matches!(err, SketchError::InvalidConfig { option: "curve_step_count", .. }));

        let cfg = StyleConfig::default().with_roughness(f64::NAN);
        assert!(r.line(Point::new(0.0, 0.0), Point::new(1.0, 1.0), &cfg).is_err());

        // Nothing was drawn, so the stream is untouched
        let mut fresh = Renderer::with_seed(3).into_inner();
        assert_eq!(r.into_inner().next_u64(), fresh.next_u64());
    }

    #[test]
    fn same_seed_same_drawings() {
        let cfg = StyleConfig::default();
        let draw = |seed| {
            let mut r = Renderer::with_seed(seed);
            let a = r.ellipse(50.0, 50.0, 40.0, 30.0, &cfg).unwrap();
            let b = r.path("M0 0 C10 20 30 20 40 0", &cfg).unwrap();
            (a, b)
        };
        assert_eq!(draw(12), draw(12));
        assert_ne!(draw(12), draw(13));
    }

    #[test]
    fn negative_arc_angles_normalize() {
        let cfg = StyleConfig::default();
        let a = Renderer::with_seed(2)
            .arc(0.0, 0.0, 60.0, 60.0, -FRAC_PI_2, 0.0, ArcClosure::Open, &cfg)
            .unwrap();
        let b = Renderer::with_seed(2)
            .arc(0.0, 0.0, 60.0, 60.0, 3.0 * FRAC_PI_2, TAU, ArcClosure::Open, &cfg)
            .unwrap();
        assert_eq!(a.len(), b.len());
        for (x, y) in a.instructions.iter().zip(&b.instructions) {
            assert!(x.end_point().distance(y.end_point()) < 1e-6);
        }
    }

    #[test]
    fn solid_fill_is_a_fill_drawing() {
        let mut r = Renderer::with_seed(4);
        let cfg = StyleConfig::default();
        let d = r.solid_fill(&[0.0, 10.0, 10.0, 0.0], &[0.0, 0.0, 10.0, 10.0], &cfg).unwrap();
        assert_eq!(d.kind, DrawingKind::FillPath);
        assert_eq!(d.len(), 4);
        assert_eq!(d.contour_count(), 1);

        let empty = r.solid_fill(&[0.0, 1.0], &[0.0, 1.0], &cfg).unwrap();
        assert_eq!(empty.kind, DrawingKind::FillPath);
        assert!(empty.is_empty());
    }

    #[test]
    fn malformed_path_fails() {
        let err = Renderer::with_seed(1).path("M 0 0 Q", &StyleConfig::default()).unwrap_err();
        assert!(matches!(err, SketchError::MalformedPathString(_)));
    }

    #[test]
    fn circle_is_equal_axis_ellipse() {
        let cfg = StyleConfig::default();
        let c = Renderer::with_seed(8).circle(5.0, 5.0, 20.0, &cfg).unwrap();
        let e = Renderer::with_seed(8).ellipse(5.0, 5.0, 20.0, 20.0, &cfg).unwrap();
        assert_eq!(c, e);
    }

    #[test]
    fn curve_needs_two_points() {
        let err = Renderer::with_seed(1)
            .curve(&[Point::new(1.0, 1.0)], &StyleConfig::default())
            .unwrap_err();
        assert_eq!(err, SketchError::EmptyShape { shape: "curve", points: 1 });
    }

    #[test]
    fn smooth_curve_passes_through_points() {
        let pts = [Point::new(0.0, 0.0), Point::new(20.0, 10.0), Point::new(40.0, 0.0)];
        let d = Renderer::with_seed(1).curve(&pts, &StyleConfig::smooth()).unwrap();

        // Two traces, each one contour
        assert_eq!(d.contour_count(), 2);
        let anchors: Vec<Point> = d.instructions.iter().map(Instruction::end_point).collect();
        for p in pts {
            assert!(anchors.contains(&p), "{:?} missing", p);
        }
    }

    #[test]
    fn scripted_source_drives_jitter() {
        // A source stuck at 0.5 means every symmetric jitter is zero
        let mut r = Renderer::new(Scripted { values: vec![0.5], next: 0 });
        let cfg = StyleConfig::default();
        let d = r.line(Point::new(0.0, 0.0), Point::new(10.0, 0.0), &cfg).unwrap();
        assert_eq!(d.instructions[0], Instruction::Move(Point::new(0.0, 0.0)));
        assert_eq!(d.instructions[1].end_point(), Point::new(10.0, 0.0));
        assert!(r.rng_mut().next > 0);
    }
}
