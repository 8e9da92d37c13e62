//! Homogeneously magnetized cuboid.

use magnetar_core::{FieldError, FieldSource, Orientation, Pose, SourceKind, Vec3};

use crate::error::{finite_vec, positive, GeometryError};
use crate::special::FOUR_PI;

/// A homogeneously magnetized cuboid.
///
/// In the canonical frame the box is centred at the origin with its
/// sides parallel to the axes; `dimension = [a, b, c]` are the full side
/// lengths along x, y and z.
///
/// The field is the closed-form field of the magnetic surface charge
/// `σ = M·n` on the six faces. Inside the magnet the magnetization is
/// added, giving `B` rather than `μ0·H`.
///
/// # Examples
///
/// ```
/// use magnetar_core::{FieldSource, Vec3};
/// use magnetar_sources::BoxMagnet;
///
/// let magnet = BoxMagnet::new(Vec3::new(0.0, 0.0, 1000.0), Vec3::new(1.0, 1.0, 1.0)).unwrap();
/// let b = magnet.field_at(&Vec3::new(1.0, 0.0, 1.0)).unwrap();
/// assert!((b.x - 42.9223532).abs() < 1e-6);
/// assert!((b.z - 13.7461635).abs() < 1e-6);
/// ```
#[derive(Clone, Debug)]
pub struct BoxMagnet {
    pose: Pose,
    magnetization: Vec3,
    dimension: Vec3,
}

impl_posable!(BoxMagnet);

impl BoxMagnet {
    /// Create a box at the canonical pose.
    ///
    /// Returns `Err` if any side length is not strictly positive or any
    /// component is not finite.
    pub fn new(magnetization: Vec3, dimension: Vec3) -> Result<Self, GeometryError> {
        let magnetization = finite_vec(magnetization, "magnetization")?;
        positive(dimension.x, "dimension.x")?;
        positive(dimension.y, "dimension.y")?;
        positive(dimension.z, "dimension.z")?;
        Ok(Self {
            pose: Pose::default(),
            magnetization,
            dimension,
        })
    }

    /// Place the box at `position`.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.pose = Pose::new(position, self.pose.orientation());
        self
    }

    /// Give the box an initial orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.pose.set_orientation(orientation);
        self
    }

    /// Magnetization in the canonical frame (mT).
    pub fn magnetization(&self) -> Vec3 {
        self.magnetization
    }

    /// Side lengths `[a, b, c]` (mm).
    pub fn dimension(&self) -> Vec3 {
        self.dimension
    }

    fn singular(reason: &str) -> FieldError {
        FieldError::Singular {
            kind: SourceKind::BoxMagnet,
            reason: reason.to_string(),
        }
    }
}

/// `∫_{v1}^{v2} dv / sqrt(v² + a2)`, robust for `a2 == 0`.
fn line_integral(v1: f64, v2: f64, a2: f64) -> Result<f64, FieldError> {
    if a2 > 0.0 {
        let a = a2.sqrt();
        return Ok((v2 / a).asinh() - (v1 / a).asinh());
    }
    if v1 * v2 > 0.0 {
        return Ok((v2.abs().ln() - v1.abs().ln()) * v2.signum());
    }
    Err(BoxMagnet::singular("query point lies on an edge"))
}

/// Geometric factor of a uniformly charged rectangle.
///
/// The rectangle lies in the plane `q[2] == offset` and spans
/// `[-h0, h0] × [-h1, h1]` in `q[0], q[1]`. Returns
/// `∫∫ (q - r') / |q - r'|³ dA` in the same component order.
fn face_factor(q: [f64; 3], h0: f64, h1: f64, offset: f64) -> Result<[f64; 3], FieldError> {
    let w = q[2] - offset;
    let us = [(-h0 - q[0], -1.0), (h0 - q[0], 1.0)];
    let vs = [(-h1 - q[1], -1.0), (h1 - q[1], 1.0)];

    let mut f = [0.0; 3];
    for &(u, su) in &us {
        f[0] += su * line_integral(vs[0].0, vs[1].0, u * u + w * w)?;
    }
    for &(v, sv) in &vs {
        f[1] += sv * line_integral(us[0].0, us[1].0, v * v + w * w)?;
    }
    if w == 0.0 {
        let inside = us[0].0 < 0.0 && us[1].0 > 0.0 && vs[0].0 < 0.0 && vs[1].0 > 0.0;
        if inside {
            return Err(BoxMagnet::singular("query point lies on a face"));
        }
    } else {
        for &(u, su) in &us {
            for &(v, sv) in &vs {
                let r = (u * u + v * v + w * w).sqrt();
                f[2] += su * sv * (u * v / (w * r)).atan();
            }
        }
    }
    Ok(f)
}

impl FieldSource for BoxMagnet {
    fn kind(&self) -> SourceKind {
        SourceKind::BoxMagnet
    }

    fn local_field(&self, point: &Vec3) -> Result<Vec3, FieldError> {
        let half = self.dimension / 2.0;
        let mut b = Vec3::zeros();

        // Face pairs normal to axis k span the cyclically next two axes.
        for k in 0..3 {
            let m = self.magnetization[k];
            if m == 0.0 {
                continue;
            }
            let i = (k + 1) % 3;
            let j = (k + 2) % 3;
            let q = [point[i], point[j], point[k]];
            for sign in [-1.0, 1.0] {
                let f = face_factor(q, half[i], half[j], sign * half[k])?;
                let sigma = sign * m / FOUR_PI;
                b[i] += sigma * f[0];
                b[j] += sigma * f[1];
                b[k] += sigma * f[2];
            }
        }

        let inside = (0..3).all(|t| point[t].abs() < half[t]);
        if inside {
            b += self.magnetization;
        }
        Ok(b)
    }
}
