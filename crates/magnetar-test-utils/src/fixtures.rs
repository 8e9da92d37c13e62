//! Seeded fixtures: random query points and mixed source assemblies.
//!
//! Every generator takes an explicit seed and uses ChaCha8 so that a
//! failing property or benchmark input can be reproduced exactly.

use std::f64::consts::PI;

use magnetar_core::{Orientation, SourceRef, Vec3};
use magnetar_sources::{
    BoxMagnet, CircularCurrent, CylinderMagnet, Dipole, LineCurrent, SphereMagnet,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn vec_in(rng: &mut ChaCha8Rng, extent: f64) -> Vec3 {
    Vec3::new(
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
    )
}

fn orientation(rng: &mut ChaCha8Rng) -> Orientation {
    loop {
        let axis = vec_in(rng, 1.0);
        if let Ok(o) = Orientation::new(rng.gen_range(-180.0..180.0), &axis) {
            return o;
        }
    }
}

/// `n` query points uniformly distributed in the cube `[-extent, extent]³`.
pub fn random_points(seed: u64, n: usize, extent: f64) -> Vec<Vec3> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| vec_in(&mut rng, extent)).collect()
}

/// `n` sources cycling through every reference kind, each with random
/// parameters, position within `[-10, 10]³` mm and orientation.
///
/// Sizes stay below 2 mm so that well separated query points avoid the
/// geometric singularities.
pub fn random_assembly(seed: u64, n: usize) -> Vec<SourceRef> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .filter_map(|i| {
            let position = vec_in(&mut rng, 10.0);
            let o = orientation(&mut rng);
            let m = vec_in(&mut rng, 1000.0);
            let size = rng.gen_range(0.5..2.0);
            let source = match i % 6 {
                0 => SourceRef::new(
                    BoxMagnet::new(m, Vec3::new(size, size * 0.8, size * 0.6))
                        .ok()?
                        .with_position(position)
                        .with_orientation(o),
                ),
                1 => SourceRef::new(
                    CylinderMagnet::new(m, [size, size * 0.7])
                        .ok()?
                        .with_position(position)
                        .with_orientation(o),
                ),
                2 => SourceRef::new(
                    SphereMagnet::new(m, size)
                        .ok()?
                        .with_position(position)
                        .with_orientation(o),
                ),
                3 => SourceRef::new(
                    Dipole::new(m * size.powi(3))
                        .ok()?
                        .with_position(position)
                        .with_orientation(o),
                ),
                4 => SourceRef::new(
                    CircularCurrent::new(rng.gen_range(-50.0..50.0), size)
                        .ok()?
                        .with_position(position)
                        .with_orientation(o),
                ),
                _ => {
                    let vertices = (0..=8)
                        .map(|k| {
                            let t = 2.0 * PI * k as f64 / 8.0;
                            Vec3::new(size * t.cos(), size * t.sin(), 0.2 * k as f64)
                        })
                        .collect();
                    SourceRef::new(
                        LineCurrent::new(rng.gen_range(-50.0..50.0), vertices)
                            .ok()?
                            .with_position(position)
                            .with_orientation(o),
                    )
                }
            };
            Some(source)
        })
        .collect()
}
