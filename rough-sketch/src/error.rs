//! Error type for rough drawing operations.
//!
//! ## Rust Lesson #20: Error Handling
//!
//! Rust uses `Result<T, E>` instead of exceptions. `thiserror` derives the
//! `Display` and `std::error::Error` boilerplate from the `#[error]`
//! attributes, so each variant documents its own message.

use thiserror::Error;

/// Why a drawing could not be produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SketchError {
    /// A style option is outside its domain.
    #[error("invalid style option `{option}`: {reason}")]
    InvalidConfig { option: &'static str, reason: String },

    /// Too few points to build the requested shape.
    #[error("{shape} needs at least 2 points, got {points}")]
    EmptyShape { shape: &'static str, points: usize },

    /// The path string could not be parsed.
    #[error("malformed path data: {0}")]
    MalformedPathString(String),
}

impl SketchError {
    pub(crate) fn invalid(option: &'static str, reason: impl Into<String>) -> Self {
        SketchError::InvalidConfig { option, reason: reason.into() }
    }
}

impl From<svgtypes::Error> for SketchError {
    fn from(err: svgtypes::Error) -> Self {
        SketchError::MalformedPathString(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = SketchError::invalid("curve_step_count", "must be > 0, got 0");
        assert_eq!(
            err.to_string(),
            "invalid style option `curve_step_count`: must be > 0, got 0"
        );

        let err = SketchError::EmptyShape { shape: "linear path", points: 1 };
        assert_eq!(err.to_string(), "linear path needs at least 2 points, got 1");
    }
}
