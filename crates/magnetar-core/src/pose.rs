//! Per-source pose state and anchored rigid motion.

use crate::error::TransformError;
use crate::id::Vec3;
use crate::rotation::{check_finite_vec, rotate_vector, unit_axis, Orientation};

/// Pivot for a rotation.
///
/// [`Anchor::SelfPosition`] pivots each source about its own current
/// position, so only its orientation changes. [`Anchor::Point`] pivots
/// about a shared world point, so the source orbits the point while its
/// orientation changes by the same increment.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Anchor {
    /// Pivot about the rotated object's own position.
    #[default]
    SelfPosition,
    /// Pivot about an explicit world point.
    Point(Vec3),
}

impl Anchor {
    /// The pivot used for an object currently at `own_position`.
    pub fn resolve(&self, own_position: &Vec3) -> Vec3 {
        match self {
            Self::SelfPosition => *own_position,
            Self::Point(p) => *p,
        }
    }
}

impl From<Vec3> for Anchor {
    fn from(p: Vec3) -> Self {
        Self::Point(p)
    }
}

impl From<Option<Vec3>> for Anchor {
    fn from(p: Option<Vec3>) -> Self {
        p.map_or(Self::SelfPosition, Self::Point)
    }
}

/// World placement of a source: position plus orientation.
///
/// Field evaluation maps a world query point into the canonical frame
/// with [`to_local`](Self::to_local), evaluates the canonical field law
/// there, and rotates the result back with [`to_world`](Self::to_world).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    position: Vec3,
    orientation: Orientation,
}

impl Pose {
    /// Build a pose from a position and an orientation.
    pub fn new(position: Vec3, orientation: Orientation) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Pose at `position` with the canonical orientation.
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Orientation::default())
    }

    /// World position of the local origin.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Overwrite the position.
    pub fn set_position(&mut self, position: Vec3) -> Result<(), TransformError> {
        check_finite_vec(&position, "position")?;
        self.position = position;
        Ok(())
    }

    /// Overwrite the orientation.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Shift the position by `displacement`.
    pub fn translate(&mut self, displacement: &Vec3) -> Result<(), TransformError> {
        check_finite_vec(displacement, "displacement")?;
        self.position += displacement;
        Ok(())
    }

    /// Rotate by `angle` degrees about `axis` through `anchor`.
    ///
    /// The position is carried around the resolved pivot and the
    /// orientation is composed with the same increment. With
    /// [`Anchor::SelfPosition`] the pivot is the current position, so the
    /// position is returned bit-for-bit unchanged.
    ///
    /// On error the pose is left untouched.
    pub fn rotate(&mut self, angle: f64, axis: &Vec3, anchor: Anchor) -> Result<(), TransformError> {
        unit_axis(axis)?;
        if let Anchor::Point(p) = &anchor {
            check_finite_vec(p, "anchor")?;
        }
        let pivot = anchor.resolve(&self.position);
        let position = rotate_vector(&self.position, angle, axis, &pivot)?;
        let orientation = self.orientation.compose(angle, axis)?;
        self.position = position;
        self.orientation = orientation;
        Ok(())
    }

    /// Map a world point into the canonical frame.
    pub fn to_local(&self, point: &Vec3) -> Vec3 {
        self.orientation.apply_inverse(&(point - self.position))
    }

    /// Rotate a canonical-frame vector into the world frame.
    pub fn to_world(&self, v: &Vec3) -> Vec3 {
        self.orientation.apply(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn self_anchored_rotation_keeps_position_exactly() {
        let mut pose = Pose::at(Vec3::new(1.25, -3.5, 7.0));
        pose.rotate(37.0, &Vec3::new(1.0, 2.0, 3.0), Anchor::SelfPosition)
            .unwrap();
        assert_eq!(pose.position(), Vec3::new(1.25, -3.5, 7.0));
        assert_relative_eq!(pose.orientation().angle(), 37.0, epsilon = 1e-10);
    }

    #[test]
    fn explicit_anchor_orbits_and_spins() {
        let mut pose = Pose::default();
        pose.rotate(90.0, &Vec3::y(), Anchor::Point(Vec3::x())).unwrap();
        assert_relative_eq!(pose.position(), Vec3::new(1.0, 0.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!(pose.orientation().angle(), 90.0, epsilon = 1e-10);
        assert_relative_eq!(pose.orientation().axis(), Vec3::y(), epsilon = 1e-12);
    }

    #[test]
    fn failed_rotation_leaves_pose_untouched() {
        let mut pose = Pose::at(Vec3::new(1.0, 2.0, 3.0));
        let before = pose;
        assert!(pose.rotate(10.0, &Vec3::zeros(), Anchor::SelfPosition).is_err());
        assert!(pose
            .rotate(10.0, &Vec3::z(), Anchor::Point(Vec3::new(f64::NAN, 0.0, 0.0)))
            .is_err());
        assert_eq!(pose, before);
    }

    #[test]
    fn translate_rejects_non_finite() {
        let mut pose = Pose::default();
        let err = pose
            .translate(&Vec3::new(0.0, f64::INFINITY, 0.0))
            .unwrap_err();
        assert_eq!(err, TransformError::NonFinite { what: "displacement" });
        assert_eq!(pose.position(), Vec3::zeros());
    }

    #[test]
    fn local_world_round_trip() {
        let pose = Pose::new(
            Vec3::new(1.0, 2.0, 3.0),
            Orientation::new(64.0, &Vec3::new(-1.0, 0.5, 2.0)).unwrap(),
        );
        let p = Vec3::new(-4.0, 0.25, 9.0);
        let local = pose.to_local(&p);
        let back = pose.to_world(&local) + pose.position();
        assert_relative_eq!(back, p, epsilon = 1e-12);
    }

    #[test]
    fn anchor_from_option() {
        assert_eq!(Anchor::from(None), Anchor::SelfPosition);
        assert_eq!(Anchor::from(Some(Vec3::x())), Anchor::Point(Vec3::x()));
    }
}
