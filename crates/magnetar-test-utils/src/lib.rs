//! Test utilities and mock sources for Magnetar development.
//!
//! Provides mock implementations of [`FieldSource`] for exercising
//! collections without real field laws, plus seeded [`fixtures`] for
//! reproducible assemblies and query points.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use magnetar_core::{FieldError, FieldSource, Pose, SourceKind, Vec3};

macro_rules! posable {
    ($ty:ty) => {
        impl magnetar_core::Posable for $ty {
            fn pose(&self) -> &Pose {
                &self.pose
            }

            fn pose_mut(&mut self) -> &mut Pose {
                &mut self.pose
            }
        }
    };
}

/// Source whose canonical field is the same vector everywhere.
///
/// The world field is that vector rotated by the current orientation,
/// which makes orientation changes easy to observe.
#[derive(Debug, Default)]
pub struct ConstantSource {
    pose: Pose,
    field: Vec3,
}

impl ConstantSource {
    pub fn new(field: Vec3) -> Self {
        Self {
            pose: Pose::default(),
            field,
        }
    }
}

posable!(ConstantSource);

impl FieldSource for ConstantSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Custom
    }

    fn local_field(&self, _point: &Vec3) -> Result<Vec3, FieldError> {
        Ok(self.field)
    }
}

/// Source that fails deterministically.
///
/// Built with [`new`](Self::new) it fails on every evaluation; with
/// [`after`](Self::after) it returns zero for the first `n` evaluations
/// and fails from then on.
#[derive(Debug)]
pub struct FailingSource {
    pose: Pose,
    reason: String,
    succeed_for: usize,
    calls: AtomicUsize,
}

impl FailingSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self::after(0, reason)
    }

    pub fn after(succeed_for: usize, reason: impl Into<String>) -> Self {
        Self {
            pose: Pose::default(),
            reason: reason.into(),
            succeed_for,
            calls: AtomicUsize::new(0),
        }
    }
}

posable!(FailingSource);

impl FieldSource for FailingSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Custom
    }

    fn local_field(&self, _point: &Vec3) -> Result<Vec3, FieldError> {
        let n = self.calls.fetch_add(1, Ordering::Relaxed);
        if n < self.succeed_for {
            Ok(Vec3::zeros())
        } else {
            Err(FieldError::ExecutionFailed {
                reason: self.reason.clone(),
            })
        }
    }
}

/// Shared view of a [`CountingSource`]'s evaluation count.
///
/// Stays readable after the source itself has been moved into a
/// [`SourceRef`](magnetar_core::SourceRef).
#[derive(Clone, Debug, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Constant source that counts how often its field is evaluated.
#[derive(Debug)]
pub struct CountingSource {
    pose: Pose,
    field: Vec3,
    calls: CallCounter,
}

impl CountingSource {
    pub fn new(field: Vec3) -> Self {
        Self {
            pose: Pose::default(),
            field,
            calls: CallCounter::default(),
        }
    }

    /// Handle to the evaluation counter.
    pub fn calls(&self) -> CallCounter {
        self.calls.clone()
    }
}

posable!(CountingSource);

impl FieldSource for CountingSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Custom
    }

    fn local_field(&self, _point: &Vec3) -> Result<Vec3, FieldError> {
        self.calls.bump();
        Ok(self.field)
    }
}
