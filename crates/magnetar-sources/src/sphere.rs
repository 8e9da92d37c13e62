//! Homogeneously magnetized sphere.

use magnetar_core::{FieldError, FieldSource, Orientation, Pose, SourceKind, Vec3};

use crate::error::{finite_vec, positive, GeometryError};

/// A homogeneously magnetized sphere centred on its position.
///
/// Outside, the field is exactly that of a point dipole with moment
/// `M·V`. Inside it is uniform, `2M/3`.
#[derive(Clone, Debug)]
pub struct SphereMagnet {
    pose: Pose,
    magnetization: Vec3,
    diameter: f64,
}

impl_posable!(SphereMagnet);

impl SphereMagnet {
    /// Create a sphere of the given `diameter`.
    pub fn new(magnetization: Vec3, diameter: f64) -> Result<Self, GeometryError> {
        Ok(Self {
            pose: Pose::default(),
            magnetization: finite_vec(magnetization, "magnetization")?,
            diameter: positive(diameter, "diameter")?,
        })
    }

    /// Place the sphere at `position`.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.pose = Pose::new(position, self.pose.orientation());
        self
    }

    /// Give the sphere an initial orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.pose.set_orientation(orientation);
        self
    }

    /// Magnetization in the canonical frame (mT).
    pub fn magnetization(&self) -> Vec3 {
        self.magnetization
    }

    /// Diameter (mm).
    pub fn diameter(&self) -> f64 {
        self.diameter
    }
}

impl FieldSource for SphereMagnet {
    fn kind(&self) -> SourceKind {
        SourceKind::SphereMagnet
    }

    fn local_field(&self, point: &Vec3) -> Result<Vec3, FieldError> {
        let radius = self.diameter / 2.0;
        let r = point.norm();
        let m = self.magnetization;
        if r > radius {
            let r3 = r * r * r;
            let r5 = r3 * r * r;
            Ok(radius.powi(3) / 3.0 * (3.0 * m.dot(point) * point / r5 - m / r3))
        } else {
            Ok(m * (2.0 / 3.0))
        }
    }
}
