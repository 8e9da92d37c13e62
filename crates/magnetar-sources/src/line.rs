//! Current along a polyline.

use magnetar_core::{FieldError, FieldSource, Orientation, Pose, SourceKind, Vec3};

use crate::error::{finite, finite_vec, GeometryError};
use crate::special::{FOUR_PI, MU0};

/// Relative threshold below which a query point counts as lying on a
/// segment.
const ON_SEGMENT_TOL: f64 = 1e-15;

/// A current flowing through straight segments between consecutive
/// vertices, given in the canonical frame.
///
/// The polyline is open; repeat the first vertex at the end to close it.
#[derive(Clone, Debug)]
pub struct LineCurrent {
    pose: Pose,
    current: f64,
    vertices: Vec<Vec3>,
}

impl_posable!(LineCurrent);

impl LineCurrent {
    /// Create a line current through `vertices` (at least two).
    pub fn new(current: f64, vertices: Vec<Vec3>) -> Result<Self, GeometryError> {
        if vertices.len() < 2 {
            return Err(GeometryError::TooFewVertices {
                count: vertices.len(),
            });
        }
        for v in &vertices {
            finite_vec(*v, "vertex")?;
        }
        Ok(Self {
            pose: Pose::default(),
            current: finite(current, "current")?,
            vertices,
        })
    }

    /// Place the polyline's local origin at `position`.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.pose = Pose::new(position, self.pose.orientation());
        self
    }

    /// Give the polyline an initial orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.pose.set_orientation(orientation);
        self
    }

    /// Current (A).
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Vertices in the canonical frame (mm).
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    fn singular(reason: &str) -> FieldError {
        FieldError::Singular {
            kind: SourceKind::LineCurrent,
            reason: reason.to_string(),
        }
    }
}

impl FieldSource for LineCurrent {
    fn kind(&self) -> SourceKind {
        SourceKind::LineCurrent
    }

    fn local_field(&self, p: &Vec3) -> Result<Vec3, FieldError> {
        let pre = MU0 * self.current / FOUR_PI;
        let mut b = Vec3::zeros();
        for seg in self.vertices.windows(2) {
            let r1 = p - seg[0];
            let r2 = p - seg[1];
            let n1 = r1.norm();
            let n2 = r2.norm();
            if n1 == 0.0 || n2 == 0.0 {
                return Err(Self::singular("query point lies on a vertex"));
            }
            let cross = r1.cross(&r2);
            let s = n1 * n2 + r1.dot(&r2);
            if s <= ON_SEGMENT_TOL * n1 * n2 {
                return Err(Self::singular("query point lies on a segment"));
            }
            // Collinear beyond the segment: no contribution.
            if cross == Vec3::zeros() {
                continue;
            }
            b += cross * (pre * (n1 + n2) / (n1 * n2 * s));
        }
        Ok(b)
    }
}
