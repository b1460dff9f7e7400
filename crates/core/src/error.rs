//! Error types for the potential-nav core.

use thiserror::Error;

use crate::position::Position;

/// Errors produced while building or rendering a navigation world.
///
/// All variants are raised at construction time; a valid world never fails
/// during a step.
#[derive(Debug, Error)]
pub enum NavError {
    /// A numeric parameter was outside its valid range (e.g. `sigma <= 0`).
    #[error("invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        name: String,
        value: f64,
        reason: String,
    },

    /// Width or height was zero when creating a world extent or canvas.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A world configuration could not be deserialized.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A snapshot or file write failed.
    #[error("i/o error: {0}")]
    Io(String),
}

impl NavError {
    /// Shorthand for building a [`NavError::InvalidParameter`].
    pub fn invalid_parameter(name: &str, value: f64, reason: &str) -> Self {
        NavError::InvalidParameter {
            name: name.to_owned(),
            value,
            reason: reason.to_owned(),
        }
    }
}

/// Rejects `value` unless it is finite and strictly positive.
pub(crate) fn require_positive(name: &str, value: f64) -> Result<f64, NavError> {
    if !value.is_finite() {
        return Err(NavError::invalid_parameter(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(NavError::invalid_parameter(name, value, "must be > 0"));
    }
    Ok(value)
}

/// Rejects `position` if either coordinate is NaN or infinite.
///
/// The failing coordinate is reported as `{name}.x` or `{name}.y`.
pub(crate) fn require_finite(name: &str, position: Position) -> Result<Position, NavError> {
    for (axis, value) in [("x", position.x), ("y", position.y)] {
        if !value.is_finite() {
            return Err(NavError::invalid_parameter(
                &format!("{name}.{axis}"),
                value,
                "must be finite",
            ));
        }
    }
    Ok(position)
}
