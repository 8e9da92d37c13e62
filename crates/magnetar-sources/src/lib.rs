//! Reference field sources for the Magnetar engine.
//!
//! Provides six source kinds, each a canonical geometry with a
//! closed-form (or quadrature) field law wrapped in a
//! [`Pose`](magnetar_core::Pose):
//!
//! - [`BoxMagnet`]: homogeneously magnetized cuboid
//! - [`CylinderMagnet`]: homogeneously magnetized cylinder
//! - [`SphereMagnet`]: homogeneously magnetized sphere
//! - [`LineCurrent`]: current along a polyline
//! - [`CircularCurrent`]: circular current loop
//! - [`Dipole`]: point magnetic dipole
//!
//! # Units
//!
//! Lengths in millimetres, magnetization (polarization) and field in
//! millitesla, currents in amperes, dipole moments in mT·mm³.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Implements [`Posable`](magnetar_core::Posable) by delegating to a
/// `pose` field.
macro_rules! impl_posable {
    ($ty:ty) => {
        impl magnetar_core::Posable for $ty {
            fn pose(&self) -> &magnetar_core::Pose {
                &self.pose
            }

            fn pose_mut(&mut self) -> &mut magnetar_core::Pose {
                &mut self.pose
            }
        }
    };
}

pub mod box_magnet;
pub mod circular;
pub mod cylinder;
pub mod dipole;
pub mod error;
pub mod line;
pub mod special;
pub mod sphere;

#[cfg(test)]
pub(crate) mod compliance;

pub use box_magnet::BoxMagnet;
pub use circular::CircularCurrent;
pub use cylinder::CylinderMagnet;
pub use dipole::Dipole;
pub use error::GeometryError;
pub use line::LineCurrent;
pub use special::MU0;
pub use sphere::SphereMagnet;
