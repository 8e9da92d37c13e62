//! Homogeneously magnetized cylinder.

use std::f64::consts::PI;

use magnetar_core::{FieldError, FieldSource, Orientation, Pose, SourceKind, Vec3};

use crate::error::{finite_vec, positive, GeometryError};
use crate::special::{cel, FOUR_PI};

/// Default number of mantle strips used for the transverse component.
pub const DEFAULT_DIAMETRAL_STEPS: usize = 50;

/// A homogeneously magnetized cylinder with its axis along canonical z.
///
/// The axial magnetization component is evaluated in closed form with
/// [`cel`]. The transverse component is approximated by the field of
/// `diametral_steps` finite line charges spread around the mantle.
#[derive(Clone, Debug)]
pub struct CylinderMagnet {
    pose: Pose,
    magnetization: Vec3,
    diameter: f64,
    height: f64,
    diametral_steps: usize,
}

impl_posable!(CylinderMagnet);

impl CylinderMagnet {
    /// Create a cylinder from `dimension = [diameter, height]`.
    pub fn new(magnetization: Vec3, dimension: [f64; 2]) -> Result<Self, GeometryError> {
        let magnetization = finite_vec(magnetization, "magnetization")?;
        let diameter = positive(dimension[0], "diameter")?;
        let height = positive(dimension[1], "height")?;
        Ok(Self {
            pose: Pose::default(),
            magnetization,
            diameter,
            height,
            diametral_steps: DEFAULT_DIAMETRAL_STEPS,
        })
    }

    /// Place the cylinder at `position`.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.pose = Pose::new(position, self.pose.orientation());
        self
    }

    /// Give the cylinder an initial orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.pose.set_orientation(orientation);
        self
    }

    /// Set the number of mantle strips for the transverse component.
    pub fn with_diametral_steps(mut self, steps: usize) -> Result<Self, GeometryError> {
        if steps == 0 {
            return Err(GeometryError::ZeroSteps);
        }
        self.diametral_steps = steps;
        Ok(self)
    }

    /// Magnetization in the canonical frame (mT).
    pub fn magnetization(&self) -> Vec3 {
        self.magnetization
    }

    /// `[diameter, height]` (mm).
    pub fn dimension(&self) -> [f64; 2] {
        [self.diameter, self.height]
    }

    /// Number of mantle strips for the transverse component.
    pub fn diametral_steps(&self) -> usize {
        self.diametral_steps
    }

    fn singular(reason: &str) -> FieldError {
        FieldError::Singular {
            kind: SourceKind::CylinderMagnet,
            reason: reason.to_string(),
        }
    }

    /// Field of the axial magnetization `mz` (Derby and Olbert).
    fn axial(&self, mz: f64, p: &Vec3) -> Result<Vec3, FieldError> {
        let a = self.diameter / 2.0;
        let h = self.height / 2.0;
        let rho = (p.x * p.x + p.y * p.y).sqrt();

        let zp = p.z + h;
        let zm = p.z - h;
        let kc = |z: f64| ((z * z + (a - rho).powi(2)) / (z * z + (a + rho).powi(2))).sqrt();
        let kp = kc(zp);
        let km = kc(zm);
        if kp == 0.0 || km == 0.0 {
            return Err(Self::singular("query point lies on a mantle edge"));
        }

        let sp = (zp * zp + (rho + a).powi(2)).sqrt();
        let sm = (zm * zm + (rho + a).powi(2)).sqrt();
        let gamma = (a - rho) / (a + rho);
        let b0 = mz / PI;

        let b_rho = b0 * (a / sp * cel(kp, 1.0, 1.0, -1.0) - a / sm * cel(km, 1.0, 1.0, -1.0));
        let b_z = b0 * a / (a + rho)
            * (zp / sp * cel(kp, gamma * gamma, 1.0, gamma)
                - zm / sm * cel(km, gamma * gamma, 1.0, gamma));

        if rho == 0.0 {
            return Ok(Vec3::new(0.0, 0.0, b_z));
        }
        Ok(Vec3::new(b_rho * p.x / rho, b_rho * p.y / rho, b_z))
    }

    /// Field of the transverse magnetization `(mx, my)` from mantle strips.
    fn transverse(&self, mx: f64, my: f64, p: &Vec3) -> Result<Vec3, FieldError> {
        let a = self.diameter / 2.0;
        let h = self.height / 2.0;
        let n = self.diametral_steps;
        let width = a * 2.0 * PI / n as f64;

        let mut b = Vec3::zeros();
        for k in 0..n {
            let phi = 2.0 * PI * (k as f64 + 0.5) / n as f64;
            let (sin, cos) = phi.sin_cos();
            let lambda = (mx * cos + my * sin) * width;
            let dx = p.x - a * cos;
            let dy = p.y - a * sin;
            let d = (dx * dx + dy * dy).sqrt();
            if d == 0.0 {
                if p.z.abs() <= h {
                    return Err(Self::singular("query point lies on a mantle strip"));
                }
                // On the strip's extension the field is purely axial.
                b.z += lambda / FOUR_PI * (1.0 / (h - p.z).abs() - 1.0 / (h + p.z).abs());
                continue;
            }
            let r_top = (d * d + (h - p.z).powi(2)).sqrt();
            let r_bottom = (d * d + (h + p.z).powi(2)).sqrt();
            let e_perp = lambda / (FOUR_PI * d) * ((h - p.z) / r_top + (h + p.z) / r_bottom);
            let e_z = lambda / FOUR_PI * (1.0 / r_top - 1.0 / r_bottom);
            b += Vec3::new(e_perp * dx / d, e_perp * dy / d, e_z);
        }

        let rho = (p.x * p.x + p.y * p.y).sqrt();
        if rho < a && p.z.abs() < h {
            b.x += mx;
            b.y += my;
        }
        Ok(b)
    }
}

impl FieldSource for CylinderMagnet {
    fn kind(&self) -> SourceKind {
        SourceKind::CylinderMagnet
    }

    fn local_field(&self, point: &Vec3) -> Result<Vec3, FieldError> {
        let m = self.magnetization;
        let mut b = Vec3::zeros();
        if m.z != 0.0 {
            b += self.axial(m.z, point)?;
        }
        if m.x != 0.0 || m.y != 0.0 {
            b += self.transverse(m.x, m.y, point)?;
        }
        Ok(b)
    }
}
