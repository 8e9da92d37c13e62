//! Magnetar: magnetostatic fields of posable magnet and current assemblies.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Magnetar sub-crates. For most users, adding `magnetar` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use magnetar::prelude::*;
//!
//! // Two magnets and a coil, all magnetized / wound along +z.
//! let cube = SourceRef::new(BoxMagnet::new(Vec3::new(0.0, 0.0, 1000.0), Vec3::new(1.0, 1.0, 1.0)).unwrap());
//! let rod = SourceRef::new(
//!     CylinderMagnet::new(Vec3::new(0.0, 0.0, 1000.0), [1.0, 1.0])
//!         .unwrap()
//!         .with_position(Vec3::new(3.0, 0.0, 0.0)),
//! );
//! let coil = SourceRef::new(CircularCurrent::new(10.0, 4.0).unwrap());
//!
//! let mut assembly = Collection::from_members([&cube, &rod], DuplicatePolicy::Skip).unwrap();
//! assembly.add(&coil).unwrap();
//!
//! // Tilt the whole assembly about a shared pivot, then lift it.
//! assembly.rotate(30.0, &Vec3::y(), Anchor::Point(Vec3::new(1.5, 0.0, 0.0))).unwrap();
//! assembly.move_by(&Vec3::new(0.0, 0.0, 2.0)).unwrap();
//!
//! // Field at one point, and over a batch in parallel.
//! let b = assembly.field_at(&Vec3::new(1.0, 1.0, 6.0)).unwrap();
//! let sweep = assembly
//!     .field_sweep(&[Vec3::new(1.0, 1.0, 6.0), Vec3::new(-4.0, 0.0, 5.0)], true)
//!     .unwrap();
//! assert_eq!(sweep[0], b);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `magnetar-core` | IDs, kinds, errors, rigid transforms, pose, capability traits, `SourceRef` |
//! | [`sources`] | `magnetar-sources` | Reference magnets, currents and dipole; special functions |
//! | [`collection`] | `magnetar-collection` | Collection registry, group transforms, superposition |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and transforms (`magnetar-core`).
///
/// Contains [`types::SourceRef`], the [`types::Posable`] and
/// [`types::FieldSource`] capability traits, and the rigid transform
/// functions [`types::rotate_vector`] and [`types::compose_orientation`].
pub use magnetar_core as types;

/// Reference field sources (`magnetar-sources`).
///
/// [`sources::BoxMagnet`], [`sources::CylinderMagnet`],
/// [`sources::SphereMagnet`], [`sources::LineCurrent`],
/// [`sources::CircularCurrent`] and [`sources::Dipole`].
pub use magnetar_sources as sources;

/// Collections, group transforms, and field superposition
/// (`magnetar-collection`).
pub use magnetar_collection as collection;

/// Common imports for typical Magnetar usage.
///
/// ```rust
/// use magnetar::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use magnetar_core::{
        Anchor, FieldSource, Orientation, Posable, Pose, SourceId, SourceKind, SourceRef, Vec3,
    };

    // Errors
    pub use magnetar_core::{FieldError, TransformError};
    pub use magnetar_collection::CollectionError;
    pub use magnetar_sources::GeometryError;

    // Sources
    pub use magnetar_sources::{
        BoxMagnet, CircularCurrent, CylinderMagnet, Dipole, LineCurrent, SphereMagnet,
    };

    // Collection
    pub use magnetar_collection::{Collection, DuplicatePolicy, Member, SweepConfig};
}
