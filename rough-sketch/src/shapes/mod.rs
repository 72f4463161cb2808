//! Shape builders.
//!
//! Each builder turns shape parameters into a raw instruction list. They
//! assume a validated [`StyleConfig`](crate::StyleConfig); the
//! [`Renderer`](crate::Renderer) is the checked entry point.

pub mod arc;
pub mod ellipse;
pub mod linear;

pub use arc::ArcClosure;

/// Cap on the samples in one ellipse or arc trace.
pub(crate) const MAX_TRACE_SAMPLES: usize = 100_000;
