//! Error types for source construction.

use std::fmt;

/// Errors arising from invalid canonical source parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// A dimension that must be strictly positive was not.
    NonPositiveDimension {
        /// Name of the dimension.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A parameter contained NaN or infinity.
    NonFinite {
        /// Name of the parameter.
        name: &'static str,
    },
    /// A line current needs at least two vertices.
    TooFewVertices {
        /// Number of vertices supplied.
        count: usize,
    },
    /// The diametral quadrature of a cylinder needs at least one step.
    ZeroSteps,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveDimension { name, value } => {
                write!(f, "{name} must be positive, got {value}")
            }
            Self::NonFinite { name } => write!(f, "{name} must be finite"),
            Self::TooFewVertices { count } => {
                write!(f, "line current needs at least 2 vertices, got {count}")
            }
            Self::ZeroSteps => write!(f, "diametral_steps must be at least 1"),
        }
    }
}

impl std::error::Error for GeometryError {}

pub(crate) fn finite(v: f64, name: &'static str) -> Result<f64, GeometryError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(GeometryError::NonFinite { name })
    }
}

pub(crate) fn finite_vec(
    v: magnetar_core::Vec3,
    name: &'static str,
) -> Result<magnetar_core::Vec3, GeometryError> {
    if v.iter().all(|c| c.is_finite()) {
        Ok(v)
    } else {
        Err(GeometryError::NonFinite { name })
    }
}

pub(crate) fn positive(v: f64, name: &'static str) -> Result<f64, GeometryError> {
    finite(v, name)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(GeometryError::NonPositiveDimension { name, value: v })
    }
}
