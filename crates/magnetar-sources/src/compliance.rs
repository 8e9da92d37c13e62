//! FieldSource compliance test helpers.
//!
//! These functions verify that a source kind honours the pose contract:
//! its field moves and rotates rigidly with it. Reused across every
//! source kind's test module. Probe points sit well away from the
//! canonical geometry, so sources under test should fit inside a few
//! millimetres of the origin.

use magnetar_core::{rotate_direction, Anchor, FieldSource, Vec3};

const TOL: f64 = 1e-9;

fn probes() -> Vec<Vec3> {
    vec![
        Vec3::new(6.0, 0.5, -1.0),
        Vec3::new(-4.0, 5.0, 2.5),
        Vec3::new(0.3, -0.7, 7.0),
        Vec3::new(3.0, 3.0, 3.0),
        Vec3::new(-5.5, -2.0, -4.0),
    ]
}

fn assert_close(a: &Vec3, b: &Vec3, what: &str) {
    let scale = a.norm().max(b.norm()).max(1.0);
    assert!(
        (a - b).norm() <= TOL * scale,
        "{what}: {a:?} != {b:?} (|Δ| = {})",
        (a - b).norm()
    );
}

/// Assert that evaluating the same point twice gives the same field.
pub fn assert_deterministic<S: FieldSource>(source: &S) {
    for p in probes() {
        let a = source.field_at(&p).unwrap();
        let b = source.field_at(&p).unwrap();
        assert_eq!(a, b, "field at {p:?} is non-deterministic");
    }
}

/// Assert that translating the source translates its field.
pub fn assert_translation_covariant<S: FieldSource>(make: impl Fn() -> S) {
    let reference = make();
    let d = Vec3::new(12.0, -7.5, 30.0);
    let mut moved = make();
    moved.translate(&d).unwrap();
    for p in probes() {
        let expected = reference.field_at(&p).unwrap();
        let got = moved.field_at(&(p + d)).unwrap();
        assert_close(&got, &expected, "translation covariance");
    }
}

/// Assert that rotating the source about an external anchor rotates its
/// field: `B'(R·(p - a) + a) == R·B(p)`.
pub fn assert_rotation_covariant<S: FieldSource>(make: impl Fn() -> S) {
    let reference = make();
    let anchor = Vec3::new(1.0, -2.0, 0.5);
    let axis = Vec3::new(1.0, 2.0, -0.5);
    let angle = 73.0;
    let mut rotated = make();
    rotated.rotate(angle, &axis, Anchor::Point(anchor)).unwrap();
    for p in probes() {
        let q = rotate_direction(&(p - anchor), angle, &axis).unwrap() + anchor;
        let expected = rotate_direction(&reference.field_at(&p).unwrap(), angle, &axis).unwrap();
        let got = rotated.field_at(&q).unwrap();
        assert_close(&got, &expected, "rotation covariance");
    }
}

/// Assert that a rotation followed by its inverse restores the field.
pub fn assert_rotation_reversible<S: FieldSource>(make: impl Fn() -> S) {
    let reference = make();
    let mut s = make();
    let axis = Vec3::new(0.0, 1.0, 1.0);
    s.rotate(140.0, &axis, Anchor::SelfPosition).unwrap();
    s.rotate(-140.0, &axis, Anchor::SelfPosition).unwrap();
    for p in probes() {
        assert_close(
            &s.field_at(&p).unwrap(),
            &reference.field_at(&p).unwrap(),
            "rotate then unrotate",
        );
    }
}

/// Assert that batched evaluation matches pointwise evaluation, in order,
/// both sequentially and in parallel.
pub fn assert_batch_matches_pointwise<S: FieldSource>(source: &S) {
    let points = probes();
    let pointwise: Vec<Vec3> = points.iter().map(|p| source.field_at(p).unwrap()).collect();
    for parallel in [false, true] {
        let batch = source.field_batch(&points, parallel).unwrap();
        assert_eq!(batch, pointwise, "batch (parallel = {parallel}) differs");
    }
}

/// Run all compliance checks against sources built by `make`.
pub fn run_full_compliance<S: FieldSource>(make: impl Fn() -> S) {
    let source = make();
    assert_deterministic(&source);
    assert_batch_matches_pointwise(&source);
    assert_translation_covariant(&make);
    assert_rotation_covariant(&make);
    assert_rotation_reversible(&make);
}
