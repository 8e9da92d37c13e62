//! Rigid transform engine: angle/axis rotations about an anchor and
//! orientation composition.
//!
//! Angles are in degrees throughout the public API. Axes need not be
//! unit length; they are normalized here and rejected if degenerate.
//! Internally rotations are unit quaternions, which makes composition
//! exact up to floating-point rounding.

use nalgebra::{Unit, UnitQuaternion};

use crate::error::TransformError;
use crate::id::Vec3;

/// Normalize a rotation axis.
///
/// Returns [`TransformError::DegenerateAxis`] for a zero-length or
/// non-finite axis.
pub fn unit_axis(axis: &Vec3) -> Result<Unit<Vec3>, TransformError> {
    let norm = axis.norm();
    if norm == 0.0 || !norm.is_finite() {
        return Err(TransformError::DegenerateAxis {
            axis: [axis.x, axis.y, axis.z],
        });
    }
    Ok(Unit::new_unchecked(axis / norm))
}

/// Reject a non-finite scalar transform input.
pub fn check_finite(v: f64, what: &'static str) -> Result<(), TransformError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(TransformError::NonFinite { what })
    }
}

/// Reject a transform vector with any non-finite component.
pub fn check_finite_vec(v: &Vec3, what: &'static str) -> Result<(), TransformError> {
    if v.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(TransformError::NonFinite { what })
    }
}

fn quaternion(angle: f64, axis: &Unit<Vec3>) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(axis, angle.to_radians())
}

/// Rotate `vector` by `angle` degrees about `axis` through `anchor`.
///
/// Computes `R(vector - anchor) + anchor` with the right-hand rule. The
/// axis is validated even when `angle` is zero; a zero angle then
/// returns `vector` unchanged without touching trigonometry.
///
/// ```
/// use magnetar_core::{rotate_vector, Vec3};
///
/// let p = rotate_vector(&Vec3::zeros(), 90.0, &Vec3::y(), &Vec3::x()).unwrap();
/// assert!((p - Vec3::new(1.0, 0.0, 1.0)).norm() < 1e-12);
/// ```
pub fn rotate_vector(
    vector: &Vec3,
    angle: f64,
    axis: &Vec3,
    anchor: &Vec3,
) -> Result<Vec3, TransformError> {
    let axis = unit_axis(axis)?;
    check_finite(angle, "rotation angle")?;
    if angle == 0.0 {
        return Ok(*vector);
    }
    Ok(quaternion(angle, &axis) * (vector - anchor) + anchor)
}

/// Rotate a free vector (direction, field value) about the origin.
pub fn rotate_direction(vector: &Vec3, angle: f64, axis: &Vec3) -> Result<Vec3, TransformError> {
    rotate_vector(vector, angle, axis, &Vec3::zeros())
}

/// Compose an existing orientation with an incoming rotation.
///
/// Returns the single `(angle, unit axis)` pair equivalent to applying
/// the existing rotation first and the incoming one second.
pub fn compose_orientation(
    existing_angle: f64,
    existing_axis: &Vec3,
    incoming_angle: f64,
    incoming_axis: &Vec3,
) -> Result<(f64, Vec3), TransformError> {
    let composed =
        Orientation::new(existing_angle, existing_axis)?.compose(incoming_angle, incoming_axis)?;
    Ok((composed.angle(), composed.axis()))
}

/// Angle/axis orientation of a source relative to its canonical geometry.
///
/// The axis is always unit length. The angle is in degrees; composed
/// orientations land in `[0, 360]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    angle: f64,
    axis: Unit<Vec3>,
}

impl Default for Orientation {
    /// Zero rotation about `+z`, the canonical pose.
    fn default() -> Self {
        Self {
            angle: 0.0,
            axis: Vec3::z_axis(),
        }
    }
}

impl Orientation {
    /// Build an orientation, normalizing `axis`.
    pub fn new(angle: f64, axis: &Vec3) -> Result<Self, TransformError> {
        let axis = unit_axis(axis)?;
        check_finite(angle, "orientation angle")?;
        Ok(Self { angle, axis })
    }

    /// Decompose a unit quaternion into angle/axis form.
    ///
    /// A vanishing vector part (identity or full turn) maps to the
    /// canonical `+z` axis.
    pub fn from_rotation(rotation: &UnitQuaternion<f64>) -> Self {
        let imag = rotation.imag();
        let sin_half = imag.norm();
        let angle = 2.0 * sin_half.atan2(rotation.scalar());
        let axis = if sin_half > 0.0 {
            Unit::new_unchecked(imag / sin_half)
        } else {
            Vec3::z_axis()
        };
        Self {
            angle: angle.to_degrees(),
            axis,
        }
    }

    /// Rotation angle in degrees.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Unit rotation axis.
    pub fn axis(&self) -> Vec3 {
        self.axis.into_inner()
    }

    /// The orientation as a unit quaternion.
    pub fn rotation(&self) -> UnitQuaternion<f64> {
        quaternion(self.angle, &self.axis)
    }

    /// `true` if this orientation leaves vectors unchanged.
    pub fn is_identity(&self) -> bool {
        self.angle == 0.0
    }

    /// Apply an incoming rotation after this one.
    pub fn compose(&self, angle: f64, axis: &Vec3) -> Result<Self, TransformError> {
        let axis = unit_axis(axis)?;
        check_finite(angle, "rotation angle")?;
        if angle == 0.0 {
            return Ok(*self);
        }
        Ok(Self::from_rotation(&(quaternion(angle, &axis) * self.rotation())))
    }

    /// Rotate a vector from the canonical frame into the world frame.
    pub fn apply(&self, v: &Vec3) -> Vec3 {
        if self.is_identity() {
            return *v;
        }
        self.rotation() * v
    }

    /// Rotate a vector from the world frame into the canonical frame.
    pub fn apply_inverse(&self, v: &Vec3) -> Vec3 {
        if self.is_identity() {
            return *v;
        }
        self.rotation().inverse() * v
    }
}
