//! Style configuration shared by every rough primitive.

use crate::error::SketchError;

/// Largest accepted `curve_step_count`.
pub const MAX_CURVE_STEP_COUNT: f64 = 10_000.0;

/// Configuration for the sketchy/hand-drawn look.
///
/// Based on the RoughJS option set: jitter magnitude, bowing and the
/// sampling density of curved shapes.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleConfig {
    /// Scale on every jitter magnitude (0.0 = exact geometry, 1.0+ = rough)
    pub roughness: f64,
    /// How far straight strokes bow away from the chord
    pub bowing: f64,
    /// Cap on per-point jitter before roughness scaling (in pixels)
    pub max_randomness_offset: f64,
    /// Samples per full revolution of an ellipse or arc
    pub curve_step_count: f64,
    /// 0.0 = loose Catmull-Rom curve, 1.0 = straight chords between samples
    pub curve_tightness: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            roughness: 1.0,
            bowing: 1.0,
            max_randomness_offset: 2.0,
            curve_step_count: 9.0,
            curve_tightness: 0.0,
        }
    }
}

impl StyleConfig {
    /// A config that reproduces ideal geometry: no roughness, no bowing.
    pub fn smooth() -> Self {
        Self::default().with_roughness(0.0).with_bowing(0.0)
    }

    /// Create a new config with specified roughness.
    pub fn with_roughness(mut self, roughness: f64) -> Self {
        self.roughness = roughness;
        self
    }

    /// Create a new config with specified bowing.
    pub fn with_bowing(mut self, bowing: f64) -> Self {
        self.bowing = bowing;
        self
    }

    /// Create a new config with specified jitter cap.
    pub fn with_max_randomness_offset(mut self, offset: f64) -> Self {
        self.max_randomness_offset = offset;
        self
    }

    /// Create a new config with specified curve sampling density.
    pub fn with_curve_step_count(mut self, steps: f64) -> Self {
        self.curve_step_count = steps;
        self
    }

    /// Create a new config with specified curve tightness.
    pub fn with_curve_tightness(mut self, tightness: f64) -> Self {
        self.curve_tightness = tightness;
        self
    }

    /// Check every option against its domain.
    ///
    /// Public drawing operations call this before touching any geometry so
    /// a bad option fails at the entry point, never halfway through a shape.
    pub fn validate(&self) -> Result<(), SketchError> {
        let options = [
            ("roughness", self.roughness),
            ("bowing", self.bowing),
            ("max_randomness_offset", self.max_randomness_offset),
            ("curve_step_count", self.curve_step_count),
            ("curve_tightness", self.curve_tightness),
        ];
        for (name, value) in options {
            if !value.is_finite() {
                return Err(SketchError::invalid(name, format!("must be finite, got {}", value)));
            }
        }

        if self.roughness < 0.0 {
            return Err(SketchError::invalid(
                "roughness",
                format!("must be >= 0, got {}", self.roughness),
            ));
        }
        if self.max_randomness_offset < 0.0 {
            return Err(SketchError::invalid(
                "max_randomness_offset",
                format!("must be >= 0, got {}", self.max_randomness_offset),
            ));
        }
        if self.curve_step_count <= 0.0 {
            return Err(SketchError::invalid(
                "curve_step_count",
                format!("must be > 0, got {}", self.curve_step_count),
            ));
        }
        if self.curve_step_count > MAX_CURVE_STEP_COUNT {
            return Err(SketchError::invalid(
                "curve_step_count",
                format!("must be <= {}, got {}", MAX_CURVE_STEP_COUNT, self.curve_step_count),
            ));
        }
        Ok(())
    }
}
