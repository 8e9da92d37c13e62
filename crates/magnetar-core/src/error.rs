//! Error types shared by every Magnetar crate.
//!
//! Split by subsystem: rigid transforms and source field evaluation.
//! Collection-level errors live in `magnetar-collection`.

use std::error::Error;
use std::fmt;

use crate::kind::SourceKind;

/// Errors from the rigid transform engine and pose mutation.
#[derive(Clone, Debug, PartialEq)]
pub enum TransformError {
    /// The rotation axis has zero (or non-finite) length.
    DegenerateAxis {
        /// The offending axis as supplied.
        axis: [f64; 3],
    },
    /// An angle, displacement, or position contained NaN or infinity.
    NonFinite {
        /// Which input was not finite.
        what: &'static str,
    },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateAxis { axis } => {
                write!(f, "degenerate rotation axis {axis:?}")
            }
            Self::NonFinite { what } => write!(f, "{what} must be finite"),
        }
    }
}

impl Error for TransformError {}

/// Errors raised by a source's field capability.
///
/// Collections propagate these unchanged: the engine never interprets,
/// retries, or masks a member's failure.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldError {
    /// The query point coincides with a singularity of the source
    /// geometry (on a wire, an edge, a face, or a point dipole).
    Singular {
        /// Kind of the source that could not be evaluated.
        kind: SourceKind,
        /// Description of the singular location.
        reason: String,
    },
    /// The query point contained NaN or infinity.
    NonFiniteQuery {
        /// The offending point.
        point: [f64; 3],
    },
    /// A source implementation failed for another reason.
    ExecutionFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Singular { kind, reason } => {
                write!(f, "{kind} source is singular at query point: {reason}")
            }
            Self::NonFiniteQuery { point } => {
                write!(f, "query point {point:?} is not finite")
            }
            Self::ExecutionFailed { reason } => write!(f, "field evaluation failed: {reason}"),
        }
    }
}

impl Error for FieldError {}
