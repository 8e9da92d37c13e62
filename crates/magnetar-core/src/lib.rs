//! Core types and traits for the Magnetar field engine.
//!
//! This is the leaf crate of the workspace. It defines the fundamental
//! abstractions every other crate builds on: source identity and kind
//! tags, the rigid transform engine, per-source pose state, the
//! [`Posable`] and [`FieldSource`] capability traits, and the shared
//! [`SourceRef`] handle through which collections alias sources.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod handle;
pub mod id;
pub mod kind;
pub mod pose;
pub mod rotation;
pub mod traits;

pub use error::{FieldError, TransformError};
pub use handle::SourceRef;
pub use id::{SourceId, Vec3};
pub use kind::SourceKind;
pub use pose::{Anchor, Pose};
pub use rotation::{
    check_finite, check_finite_vec, compose_orientation, rotate_direction, rotate_vector, unit_axis,
    Orientation,
};
pub use traits::{FieldSource, Posable};
