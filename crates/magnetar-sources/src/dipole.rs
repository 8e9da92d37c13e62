//! Point magnetic dipole.

use magnetar_core::{FieldError, FieldSource, Orientation, Pose, SourceKind, Vec3};

use crate::error::{finite_vec, GeometryError};
use crate::special::FOUR_PI;

/// A point magnetic dipole with moment `m` in mT·mm³.
///
/// # Examples
///
/// ```
/// use magnetar_core::{FieldSource, Vec3};
/// use magnetar_sources::Dipole;
///
/// let d = Dipole::new(Vec3::new(0.0, 0.0, 1.0)).unwrap();
/// let b = d.field_at(&Vec3::new(1.0, 0.0, 0.0)).unwrap();
/// assert!((b.z + 1.0 / (4.0 * std::f64::consts::PI)).abs() < 1e-15);
/// ```
#[derive(Clone, Debug)]
pub struct Dipole {
    pose: Pose,
    moment: Vec3,
}

impl_posable!(Dipole);

impl Dipole {
    /// Create a dipole at the origin.
    pub fn new(moment: Vec3) -> Result<Self, GeometryError> {
        Ok(Self {
            pose: Pose::default(),
            moment: finite_vec(moment, "moment")?,
        })
    }

    /// Place the dipole at `position`.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.pose = Pose::new(position, self.pose.orientation());
        self
    }

    /// Give the dipole an initial orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.pose.set_orientation(orientation);
        self
    }

    /// Moment in the canonical frame (mT·mm³).
    pub fn moment(&self) -> Vec3 {
        self.moment
    }
}

impl FieldSource for Dipole {
    fn kind(&self) -> SourceKind {
        SourceKind::Dipole
    }

    fn local_field(&self, point: &Vec3) -> Result<Vec3, FieldError> {
        let r = point.norm();
        if r == 0.0 {
            return Err(FieldError::Singular {
                kind: SourceKind::Dipole,
                reason: "query point coincides with the dipole".to_string(),
            });
        }
        let r3 = r * r * r;
        let r5 = r3 * r * r;
        let m = self.moment;
        Ok((3.0 * m.dot(point) * point / r5 - m / r3) / FOUR_PI)
    }
}
