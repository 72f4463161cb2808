//! # rough-sketch
//!
//! Hand-drawn ("sketchy") stroke generation. Lines, polygons, ellipses,
//! arcs, free curves and SVG path data come out as short lists of drawing
//! instructions (move, line, cubic) with seeded jitter, bowing and a double
//! stroke, ready for any vector backend.
//!
//! ## Rust Lesson #7: Modules
//!
//! Rust modules are like ES6 modules but more explicit:
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level
//!
//! The low-level builders (`stroke`, `spline`, `shapes`, ...) stay public for
//! callers composing their own primitives; [`Renderer`] is the usual entry.

pub mod config;
pub mod drawing;
pub mod error;
pub mod fill;
pub mod geometry;
pub mod jitter;
pub mod path;
pub mod renderer;
pub mod rng;
pub mod shapes;
pub mod spline;
pub mod stroke;

// Re-export common types at crate root for convenience.
pub use config::{StyleConfig, MAX_CURVE_STEP_COUNT};
pub use drawing::{Drawing, DrawingKind, Instruction};
pub use error::SketchError;
pub use fill::affine_transform;
pub use geometry::Point;
pub use path::PenState;
pub use renderer::Renderer;
pub use rng::{RandomSource, Rng};
pub use shapes::ArcClosure;
