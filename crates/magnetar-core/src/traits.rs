//! Capability traits implemented by every field source.
//!
//! The engine depends only on these two traits. [`Posable`] covers pose
//! reads and rigid motion; [`FieldSource`] adds the kind tag and the
//! pose-dependent field evaluation built on a canonical-frame field law.

use std::any::Any;
use std::fmt;

use rayon::prelude::*;

use crate::error::{FieldError, TransformError};
use crate::id::Vec3;
use crate::kind::SourceKind;
use crate::pose::{Anchor, Pose};
use crate::rotation::Orientation;

/// An object with a world pose that can be moved and rotated.
///
/// Implementors only provide access to their [`Pose`]; every motion is
/// a provided method so all kinds move identically and canonical
/// geometry is never touched.
pub trait Posable {
    /// Current pose.
    fn pose(&self) -> &Pose;

    /// Mutable access to the pose.
    fn pose_mut(&mut self) -> &mut Pose;

    /// World position of the local origin.
    fn position(&self) -> Vec3 {
        self.pose().position()
    }

    /// Current orientation.
    fn orientation(&self) -> Orientation {
        self.pose().orientation()
    }

    /// Overwrite the position.
    fn set_position(&mut self, position: Vec3) -> Result<(), TransformError> {
        self.pose_mut().set_position(position)
    }

    /// Overwrite the orientation with `angle` degrees about `axis`.
    fn set_orientation(&mut self, angle: f64, axis: &Vec3) -> Result<(), TransformError> {
        let orientation = Orientation::new(angle, axis)?;
        self.pose_mut().set_orientation(orientation);
        Ok(())
    }

    /// Shift the position by `displacement`.
    fn translate(&mut self, displacement: &Vec3) -> Result<(), TransformError> {
        self.pose_mut().translate(displacement)
    }

    /// Rotate by `angle` degrees about `axis` through `anchor`.
    ///
    /// See [`Pose::rotate`].
    fn rotate(&mut self, angle: f64, axis: &Vec3, anchor: Anchor) -> Result<(), TransformError> {
        self.pose_mut().rotate(angle, axis, anchor)
    }
}

/// A posed source of magnetic field.
///
/// Implementors supply [`local_field`](Self::local_field), the field law
/// of their canonical (unrotated, origin-centred) geometry. The provided
/// [`field_at`](Self::field_at) applies the current pose around it.
///
/// # Thread Safety
///
/// `Send + Sync` is required so that sweeps may evaluate different
/// sources, or different points of one source, on worker threads.
/// Evaluation takes `&self` and must not mutate the source.
pub trait FieldSource: Any + Posable + fmt::Debug + Send + Sync {
    /// Geometry family of this source.
    fn kind(&self) -> SourceKind;

    /// Field of the canonical geometry at a point in the canonical frame.
    fn local_field(&self, point: &Vec3) -> Result<Vec3, FieldError>;

    /// Field at a world point under the current pose.
    fn field_at(&self, point: &Vec3) -> Result<Vec3, FieldError> {
        if !point.iter().all(|c| c.is_finite()) {
            return Err(FieldError::NonFiniteQuery {
                point: [point.x, point.y, point.z],
            });
        }
        let pose = self.pose();
        let local = self.local_field(&pose.to_local(point))?;
        Ok(pose.to_world(&local))
    }

    /// Field at each of `points`, in order.
    ///
    /// With `parallel`, points are evaluated on the rayon pool that is
    /// current for the calling thread. The first failure aborts the batch.
    fn field_batch(&self, points: &[Vec3], parallel: bool) -> Result<Vec<Vec3>, FieldError> {
        if parallel {
            points.par_iter().map(|p| self.field_at(p)).collect()
        } else {
            points.iter().map(|p| self.field_at(p)).collect()
        }
    }
}

impl dyn FieldSource {
    /// Attempt to downcast a trait object to a concrete source type.
    ///
    /// Lets collaborators that need kind-specific parameters (a renderer
    /// reading box dimensions, say) reach them after branching on
    /// [`FieldSource::kind`].
    pub fn downcast_ref<T: FieldSource>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}
