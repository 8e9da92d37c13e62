//! Group transforms applied to every member of a collection.
//!
//! Each broadcast is checked once up front, so a rejected transform
//! leaves every member untouched.

use magnetar_core::{check_finite, check_finite_vec, unit_axis, Anchor, Vec3};
use tracing::debug;

use crate::error::CollectionError;
use crate::registry::Collection;

impl Collection {
    /// Shift every member by `displacement`.
    pub fn move_by(&self, displacement: &Vec3) -> Result<(), CollectionError> {
        check_finite_vec(displacement, "displacement")?;
        debug!(members = self.len(), ?displacement, "move collection");
        for s in self {
            s.translate(displacement)?;
        }
        Ok(())
    }

    /// Rotate every member by `angle` degrees about `axis`.
    ///
    /// With [`Anchor::SelfPosition`] each member turns about its own
    /// position, so only orientations change. With [`Anchor::Point`] every
    /// member orbits the shared pivot and its orientation changes by the
    /// same increment, exactly as if each were rotated on its own about
    /// that point.
    pub fn rotate(&self, angle: f64, axis: &Vec3, anchor: Anchor) -> Result<(), CollectionError> {
        unit_axis(axis)?;
        check_finite(angle, "rotation angle")?;
        if let Anchor::Point(p) = &anchor {
            check_finite_vec(p, "anchor")?;
        }
        debug!(members = self.len(), angle, ?axis, ?anchor, "rotate collection");
        for s in self {
            s.rotate(angle, axis, anchor)?;
        }
        Ok(())
    }
}
