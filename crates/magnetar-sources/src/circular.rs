//! Circular current loop.

use std::f64::consts::PI;

use magnetar_core::{FieldError, FieldSource, Orientation, Pose, SourceKind, Vec3};

use crate::error::{finite, positive, GeometryError};
use crate::special::{ellip_ke, MU0};

/// A circular current loop of the given diameter in the canonical
/// xy-plane, centred at the origin.
///
/// Positive current circulates counter-clockwise seen from +z, so the
/// field at the centre points along +z.
#[derive(Clone, Debug)]
pub struct CircularCurrent {
    pose: Pose,
    current: f64,
    diameter: f64,
}

impl_posable!(CircularCurrent);

impl CircularCurrent {
    /// Create a loop carrying `current` (A).
    pub fn new(current: f64, diameter: f64) -> Result<Self, GeometryError> {
        Ok(Self {
            pose: Pose::default(),
            current: finite(current, "current")?,
            diameter: positive(diameter, "diameter")?,
        })
    }

    /// Place the loop at `position`.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.pose = Pose::new(position, self.pose.orientation());
        self
    }

    /// Give the loop an initial orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.pose.set_orientation(orientation);
        self
    }

    /// Current (A).
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Diameter (mm).
    pub fn diameter(&self) -> f64 {
        self.diameter
    }
}

impl FieldSource for CircularCurrent {
    fn kind(&self) -> SourceKind {
        SourceKind::CircularCurrent
    }

    fn local_field(&self, p: &Vec3) -> Result<Vec3, FieldError> {
        let r = self.diameter / 2.0;
        let rho = (p.x * p.x + p.y * p.y).sqrt();
        let z = p.z;

        let near = (r - rho).powi(2) + z * z;
        if near == 0.0 {
            return Err(FieldError::Singular {
                kind: SourceKind::CircularCurrent,
                reason: "query point lies on the wire".to_string(),
            });
        }
        let far = (r + rho).powi(2) + z * z;
        let (k, e) = ellip_ke((near / far).sqrt());
        let pre = MU0 * self.current / (2.0 * PI) / far.sqrt();

        let b_z = pre * (k + (r * r - rho * rho - z * z) / near * e);
        if rho == 0.0 {
            return Ok(Vec3::new(0.0, 0.0, b_z));
        }
        let b_rho = pre * z / rho * (-k + (r * r + rho * rho + z * z) / near * e);
        Ok(Vec3::new(b_rho * p.x / rho, b_rho * p.y / rho, b_z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use crate::Dipole;
    use approx::assert_relative_eq;

    #[test]
    fn reference_value() {
        let c = CircularCurrent::new(10.0, 2.0).unwrap();
        let b = c.field_at(&Vec3::new(0.0, 0.0, 2.0)).unwrap();
        assert_eq!(b.x, 0.0);
        assert_eq!(b.y, 0.0);
        assert_relative_eq!(b.z, 0.561_985_18, epsilon = 1e-8);
    }

    #[test]
    fn centre_field() {
        // μ0 I / (2R)
        let c = CircularCurrent::new(3.0, 4.0).unwrap();
        let b = c.field_at(&Vec3::zeros()).unwrap();
        assert_relative_eq!(b.z, MU0 * 3.0 / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn far_field_approaches_dipole() {
        let c = CircularCurrent::new(1.0, 2.0).unwrap();
        let d = Dipole::new(Vec3::new(0.0, 0.0, MU0 * PI)).unwrap();
        let p = Vec3::new(0.0, 3.0, 20.0);
        let bc = c.field_at(&p).unwrap();
        let bd = d.field_at(&p).unwrap();
        assert!((bc - bd).norm() < 1e-2 * bd.norm(), "{bc:?} vs {bd:?}");
    }

    #[test]
    fn wire_is_singular() {
        let c = CircularCurrent::new(1.0, 2.0).unwrap();
        let err = c.field_at(&Vec3::new(0.0, 1.0, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            FieldError::Singular {
                kind: SourceKind::CircularCurrent,
                ..
            }
        ));
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(CircularCurrent::new(1.0, 0.0).is_err());
        assert!(CircularCurrent::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn compliance_suite() {
        compliance::run_full_compliance(|| CircularCurrent::new(-4.0, 3.0).unwrap());
    }
}
