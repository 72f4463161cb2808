//! CLI command implementations.
//!
//! This module contains the implementations for the various CLI subcommands:
//! - `draw` - Draw a single hand-drawn primitive
//! - `recipe` - Render a YAML composition of many shapes
//! - `benchmark` - Time every primitive

pub mod common;
pub mod draw;
pub mod recipe;
pub mod benchmark;

pub use draw::cmd_draw;
pub use recipe::cmd_recipe;
pub use benchmark::cmd_benchmark;
