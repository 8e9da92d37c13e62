//! Benchmark profiles for the Magnetar field engine.
//!
//! Provides pre-built assemblies and query grids for benchmarking:
//!
//! - [`reference_assembly`]: box, cylinder and sphere magnets of the
//!   toolbox reference scenario
//! - [`mixed_assembly`]: seeded assembly cycling through every source kind
//! - [`plane_grid`]: regular grid of query points in the `xz`-plane

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use magnetar_collection::{Collection, DuplicatePolicy};
use magnetar_core::{SourceRef, Vec3};
use magnetar_sources::{BoxMagnet, CylinderMagnet, SphereMagnet};
use magnetar_test_utils::fixtures::random_assembly;

/// Three unit magnets magnetized along +z, side by side on the x axis.
pub fn reference_assembly() -> Collection {
    let m = Vec3::new(0.0, 0.0, 1000.0);
    let members = vec![
        SourceRef::new(
            BoxMagnet::new(m, Vec3::new(1.0, 1.0, 1.0))
                .unwrap()
                .with_position(Vec3::new(-2.0, 0.0, 0.0)),
        ),
        SourceRef::new(CylinderMagnet::new(m, [1.0, 1.0]).unwrap()),
        SourceRef::new(
            SphereMagnet::new(m, 1.0)
                .unwrap()
                .with_position(Vec3::new(2.0, 0.0, 0.0)),
        ),
    ];
    Collection::from_members(members, DuplicatePolicy::Reject).unwrap()
}

/// `n` sources of every kind, reproducible from `seed`.
pub fn mixed_assembly(seed: u64, n: usize) -> Collection {
    Collection::from_members(random_assembly(seed, n), DuplicatePolicy::Reject).unwrap()
}

/// `side × side` points spanning `[-extent, extent]²` in the plane `y = 0.1`.
///
/// The small offset keeps the grid off symmetry planes where wire and
/// edge singularities sit.
pub fn plane_grid(side: usize, extent: f64) -> Vec<Vec3> {
    let step = if side > 1 {
        2.0 * extent / (side - 1) as f64
    } else {
        0.0
    };
    (0..side)
        .flat_map(|i| {
            (0..side).map(move |k| {
                Vec3::new(-extent + i as f64 * step, 0.1, -extent + k as f64 * step)
            })
        })
        .collect()
}
