//! Shared, identity-carrying handles to field sources.
//!
//! A [`SourceRef`] is how collections hold sources: cloning a handle
//! aliases the same source, so a move applied through one collection is
//! visible through every other collection (and every loose handle) that
//! holds it. The source lives as long as any handle does.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{FieldError, TransformError};
use crate::id::{SourceId, Vec3};
use crate::kind::SourceKind;
use crate::pose::{Anchor, Pose};
use crate::rotation::Orientation;
use crate::traits::{FieldSource, Posable};

/// Shared handle to a field source.
///
/// Equality and hashing use the [`SourceId`] allocated when the handle
/// was created, never the source's parameters: two identical magnets
/// wrapped separately are distinct members of a collection.
///
/// Evaluation takes a read lock; pose mutation takes a write lock for
/// the duration of a single update. A poisoned lock is recovered, since
/// a pose is plain data that no update leaves half-written.
///
/// ```
/// use magnetar_core::{FieldError, FieldSource, Pose, Posable, SourceKind, SourceRef, Vec3};
///
/// #[derive(Debug, Default)]
/// struct Uniform { pose: Pose }
/// impl Posable for Uniform {
///     fn pose(&self) -> &Pose { &self.pose }
///     fn pose_mut(&mut self) -> &mut Pose { &mut self.pose }
/// }
/// impl FieldSource for Uniform {
///     fn kind(&self) -> SourceKind { SourceKind::Custom }
///     fn local_field(&self, _p: &Vec3) -> Result<Vec3, FieldError> { Ok(Vec3::z()) }
/// }
///
/// let a = SourceRef::new(Uniform::default());
/// let b = a.clone();
/// a.translate(&Vec3::x()).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(b.position(), Vec3::x());
/// ```
#[derive(Clone)]
pub struct SourceRef {
    id: SourceId,
    kind: SourceKind,
    inner: Arc<RwLock<dyn FieldSource>>,
}

impl SourceRef {
    /// Wrap a source in a new shared handle with a fresh identity.
    pub fn new<S: FieldSource>(source: S) -> Self {
        let kind = source.kind();
        let inner: Arc<RwLock<dyn FieldSource>> = Arc::new(RwLock::new(source));
        Self {
            id: SourceId::next(),
            kind,
            inner,
        }
    }

    /// Identity of the aliased source.
    pub fn id(&self) -> SourceId {
        self.id
    }

    /// Geometry family of the aliased source.
    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// `true` if both handles alias the same source.
    pub fn ptr_eq(&self, other: &SourceRef) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of live handles to this source.
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Read access to the source, e.g. for downcasting to its concrete type.
    pub fn read(&self) -> RwLockReadGuard<'_, dyn FieldSource> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, dyn FieldSource> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the current pose.
    pub fn pose(&self) -> Pose {
        *self.read().pose()
    }

    /// Current world position.
    pub fn position(&self) -> Vec3 {
        self.read().position()
    }

    /// Current orientation.
    pub fn orientation(&self) -> Orientation {
        self.read().orientation()
    }

    /// Overwrite the position.
    pub fn set_position(&self, position: Vec3) -> Result<(), TransformError> {
        self.write().set_position(position)
    }

    /// Overwrite the orientation with `angle` degrees about `axis`.
    pub fn set_orientation(&self, angle: f64, axis: &Vec3) -> Result<(), TransformError> {
        self.write().set_orientation(angle, axis)
    }

    /// Shift the position by `displacement`.
    pub fn translate(&self, displacement: &Vec3) -> Result<(), TransformError> {
        self.write().translate(displacement)
    }

    /// Rotate by `angle` degrees about `axis` through `anchor`.
    pub fn rotate(&self, angle: f64, axis: &Vec3, anchor: Anchor) -> Result<(), TransformError> {
        self.write().rotate(angle, axis, anchor)
    }

    /// Field at a world point under the current pose.
    pub fn field_at(&self, point: &Vec3) -> Result<Vec3, FieldError> {
        self.read().field_at(point)
    }

    /// Field at each of `points`, in order.
    pub fn field_batch(&self, points: &[Vec3], parallel: bool) -> Result<Vec<Vec3>, FieldError> {
        self.read().field_batch(points, parallel)
    }
}

impl PartialEq for SourceRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SourceRef {}

impl Hash for SourceRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceRef")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("pose", &self.pose())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Posable;

    #[derive(Debug, Default)]
    struct Probe {
        pose: Pose,
        strength: f64,
    }

    impl Posable for Probe {
        fn pose(&self) -> &Pose {
            &self.pose
        }
        fn pose_mut(&mut self) -> &mut Pose {
            &mut self.pose
        }
    }

    impl FieldSource for Probe {
        fn kind(&self) -> SourceKind {
            SourceKind::Custom
        }
        fn local_field(&self, _point: &Vec3) -> Result<Vec3, FieldError> {
            Ok(Vec3::new(0.0, 0.0, self.strength))
        }
    }

    #[test]
    fn clones_alias_the_same_source() {
        let a = SourceRef::new(Probe::default());
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        assert_eq!(a.handle_count(), 2);
        b.translate(&Vec3::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(a.position(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn separately_wrapped_sources_are_distinct() {
        let a = SourceRef::new(Probe::default());
        let b = SourceRef::new(Probe::default());
        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn transforms_never_touch_canonical_parameters() {
        let h = SourceRef::new(Probe {
            pose: Pose::default(),
            strength: 2.5,
        });
        h.translate(&Vec3::x()).unwrap();
        h.rotate(90.0, &Vec3::x(), Anchor::Point(Vec3::zeros())).unwrap();
        h.set_orientation(10.0, &Vec3::y()).unwrap();
        let guard = h.read();
        let probe = guard.downcast_ref::<Probe>().unwrap();
        assert_eq!(probe.strength, 2.5);
    }

    #[test]
    fn failed_transform_reports_error() {
        let h = SourceRef::new(Probe::default());
        let err = h.rotate(45.0, &Vec3::zeros(), Anchor::SelfPosition).unwrap_err();
        assert!(matches!(err, TransformError::DegenerateAxis { .. }));
        assert_eq!(h.orientation(), Orientation::default());
    }

    #[test]
    fn kind_is_cached() {
        let h = SourceRef::new(Probe::default());
        assert_eq!(h.kind(), SourceKind::Custom);
    }

    #[test]
    fn debug_includes_id_and_kind() {
        let h = SourceRef::new(Probe::default());
        let s = format!("{h:?}");
        assert!(s.contains("SourceRef"));
        assert!(s.contains("Custom"));
    }
}
