//! Error types for collection operations.

use std::error::Error;
use std::fmt;

use magnetar_core::{FieldError, SourceId, TransformError};

/// Errors from registry, broadcast and sweep operations.
#[derive(Clone, Debug, PartialEq)]
pub enum CollectionError {
    /// A source was added that is already a member, under
    /// [`DuplicatePolicy::Reject`](crate::DuplicatePolicy::Reject).
    DuplicateSource {
        /// Identity of the duplicate source.
        id: SourceId,
    },
    /// Removal by identity named a source that is not a member.
    SourceNotFound {
        /// Identity of the missing source.
        id: SourceId,
    },
    /// Removal by index named a position outside the member list.
    IndexOutOfRange {
        /// The index as supplied (may be negative).
        index: isize,
        /// Number of members at the time of the call.
        len: usize,
    },
    /// A broadcast transform was rejected.
    Transform(TransformError),
    /// A member failed to evaluate its field.
    Field(FieldError),
    /// The bounded worker pool for a sweep could not be built.
    WorkerPool {
        /// Description of the failure.
        reason: String,
    },
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSource { id } => write!(f, "source {id} is already a member"),
            Self::SourceNotFound { id } => write!(f, "source {id} is not a member"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for collection of {len}")
            }
            Self::Transform(e) => write!(f, "transform rejected: {e}"),
            Self::Field(e) => write!(f, "field evaluation failed: {e}"),
            Self::WorkerPool { reason } => write!(f, "cannot build worker pool: {reason}"),
        }
    }
}

impl Error for CollectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transform(e) => Some(e),
            Self::Field(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TransformError> for CollectionError {
    fn from(e: TransformError) -> Self {
        Self::Transform(e)
    }
}

impl From<FieldError> for CollectionError {
    fn from(e: FieldError) -> Self {
        Self::Field(e)
    }
}
