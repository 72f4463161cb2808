//! Core geometry types for rough-sketch.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! In JS you'd write: `const point = { x: 1.0, y: 2.0 }`
//! In Rust, we define a `struct` with explicit types.
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Debug` = like console.log, lets you print with `{:?}`
//! - `Clone` = can duplicate the value (like spread: `{...obj}`)
//! - `Copy` = can copy implicitly (small stack values only)
//! - `PartialEq` = can compare with `==`

/// A 2D point with x,y coordinates.
///
/// `f64` = 64-bit float (like JS's `number` but explicitly sized)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

// ============================================================================
// IMPLEMENTATIONS (methods)
// ============================================================================
//
// ## Rust Lesson #5: impl blocks
//
// In JS you'd use class methods: `class Point { distance() {...} }`
// In Rust, we separate data (struct) from behavior (impl).

impl Point {
    /// Create a new point.
    ///
    /// Called as: `Point::new(1.0, 2.0)` (like static method)
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared distance to another point.
    ///
    /// Cheaper than [`Point::distance`] and enough for comparisons.
    #[inline]
    pub fn distance_sq(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// This point shifted by `(dx, dy)`.
    #[inline]
    pub fn translate(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Mirror `pivot` through this point: `self + (self - pivot)`.
    ///
    /// Used for the implicit first control point of smooth path curves.
    #[inline]
    pub fn reflect(&self, pivot: Point) -> Point {
        Point::new(2.0 * self.x - pivot.x, 2.0 * self.y - pivot.y)
    }

    /// Point on an axis-aligned ellipse centred here, at `angle` radians.
    #[inline]
    pub fn on_ellipse(&self, rx: f64, ry: f64, angle: f64) -> Point {
        Point::new(self.x + rx * angle.cos(), self.y + ry * angle.sin())
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

// ============================================================================
// TESTS
// ============================================================================
