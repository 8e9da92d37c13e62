//! Superposition across heterogeneous members.

use approx::assert_relative_eq;
use magnetar_collection::{Collection, DuplicatePolicy, SweepConfig};
use magnetar_core::{Anchor, SourceRef, Vec3};
use magnetar_sources::{BoxMagnet, CylinderMagnet, SphereMagnet};
use magnetar_test_utils::fixtures::{random_assembly, random_points};

fn reference_magnets() -> (SourceRef, SourceRef, SourceRef) {
    let m = Vec3::new(0.0, 0.0, 1000.0);
    (
        SourceRef::new(BoxMagnet::new(m, Vec3::new(1.0, 1.0, 1.0)).unwrap()),
        SourceRef::new(CylinderMagnet::new(m, [1.0, 1.0]).unwrap()),
        SourceRef::new(SphereMagnet::new(m, 1.0).unwrap()),
    )
}

#[test]
fn reference_collection_value() {
    let (b, c, s) = reference_magnets();
    let col = Collection::from_members([&b, &c, &s], DuplicatePolicy::Skip).unwrap();
    let total = col.field_at(&Vec3::new(1.0, 0.0, 1.0)).unwrap();
    assert_relative_eq!(total.x, 99.336_062_5, epsilon = 1e-6);
    assert!(total.y.abs() < 1e-10);
    assert_relative_eq!(total.z, 31.272_768_3, epsilon = 1e-6);
}

#[test]
fn total_is_sum_of_members() {
    let sources = random_assembly(11, 18);
    let col = Collection::from_members(sources.clone(), DuplicatePolicy::Skip).unwrap();
    for p in random_points(12, 10, 40.0) {
        let p = p + Vec3::new(0.0, 0.0, 60.0);
        let expected = sources
            .iter()
            .map(|s| s.field_at(&p).unwrap())
            .fold(Vec3::zeros(), |acc, b| acc + b);
        assert_eq!(col.field_at(&p).unwrap(), expected);
    }
}

#[test]
fn order_independent_under_remove_and_re_add() {
    let (b, c, s) = reference_magnets();
    let mut col = Collection::from_members([&b, &c, &s], DuplicatePolicy::Skip).unwrap();
    let p = Vec3::new(0.7, -1.3, 2.1);
    let before = col.field_at(&p).unwrap();

    let removed = col.remove(0).unwrap();
    col.add(removed).unwrap();
    assert_eq!(col.ids().collect::<Vec<_>>(), vec![c.id(), s.id(), b.id()]);
    assert_relative_eq!(col.field_at(&p).unwrap(), before, epsilon = 1e-9);
}

#[test]
fn sweep_matches_pointwise() {
    let col = Collection::from_members(random_assembly(5, 12), DuplicatePolicy::Skip).unwrap();
    let points: Vec<Vec3> = random_points(6, 64, 5.0)
        .into_iter()
        .map(|p| p + Vec3::new(50.0, 0.0, 0.0))
        .collect();
    let sweep = col.field_sweep(&points, false).unwrap();
    assert_eq!(sweep.len(), points.len());
    for (p, b) in points.iter().zip(&sweep) {
        assert_eq!(*b, col.field_at(p).unwrap());
    }
}

#[test]
fn parallel_sweep_is_bit_identical() {
    let col = Collection::from_members(random_assembly(21, 30), DuplicatePolicy::Skip).unwrap();
    col.rotate(33.0, &Vec3::new(1.0, -1.0, 2.0), Anchor::Point(Vec3::new(3.0, 0.0, 0.0)))
        .unwrap();
    let points: Vec<Vec3> = random_points(22, 200, 30.0)
        .into_iter()
        .map(|p| p + Vec3::new(0.0, 80.0, 0.0))
        .collect();

    let sequential = col.field_sweep(&points, false).unwrap();
    let parallel = col.field_sweep(&points, true).unwrap();
    let pooled = col
        .field_sweep_with(&points, &SweepConfig::parallel().with_workers(3))
        .unwrap();
    let single = col
        .field_sweep_with(&points, &SweepConfig::parallel().with_workers(1))
        .unwrap();
    assert_eq!(sequential, parallel);
    assert_eq!(sequential, pooled);
    assert_eq!(sequential, single);
}

#[test]
fn sweep_sees_current_pose() {
    let (b, _, _) = reference_magnets();
    let col = Collection::from_members(&b, DuplicatePolicy::Skip).unwrap();
    let points = [Vec3::new(1.0, 0.0, 1.0)];
    let before = col.field_sweep(&points, true).unwrap();
    col.move_by(&Vec3::new(0.0, 0.0, 5.0)).unwrap();
    let after = col.field_sweep(&points, true).unwrap();
    assert_ne!(before, after);
    assert_eq!(after[0], b.field_at(&points[0]).unwrap());
}
