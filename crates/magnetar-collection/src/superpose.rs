//! Field superposition over collection members.
//!
//! Contributions are always summed in member order, starting from zero,
//! so single-point, sequential-sweep and parallel-sweep results agree
//! bit for bit.

use magnetar_core::{FieldError, SourceRef, Vec3};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::debug;

use crate::config::SweepConfig;
use crate::error::CollectionError;
use crate::registry::Collection;

impl Collection {
    /// Total field at `point`.
    ///
    /// An empty collection yields the zero vector. The first member
    /// failure is returned unchanged.
    pub fn field_at(&self, point: &Vec3) -> Result<Vec3, FieldError> {
        let mut total = Vec3::zeros();
        for s in self {
            total += s.field_at(point)?;
        }
        Ok(total)
    }

    /// Total field at each of `points`, in order.
    ///
    /// With `parallel`, members are evaluated concurrently on the shared
    /// rayon pool. Any member failure fails the whole sweep.
    pub fn field_sweep(&self, points: &[Vec3], parallel: bool) -> Result<Vec<Vec3>, FieldError> {
        debug!(members = self.len(), points = points.len(), parallel, "field sweep");
        self.sweep_members(points, parallel)
    }

    /// Total field at each of `points`, executed as `config` describes.
    ///
    /// An explicit worker count runs the sweep on a dedicated pool of that
    /// size, built for this call.
    pub fn field_sweep_with(
        &self,
        points: &[Vec3],
        config: &SweepConfig,
    ) -> Result<Vec<Vec3>, CollectionError> {
        if !config.parallel || config.workers.is_none() {
            return Ok(self.field_sweep(points, config.parallel)?);
        }
        let workers = config.resolved_workers();
        debug!(
            members = self.len(),
            points = points.len(),
            workers,
            "field sweep on dedicated pool"
        );
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("magnetar-sweep-{i}"))
            .build()
            .map_err(|e| CollectionError::WorkerPool {
                reason: e.to_string(),
            })?;
        Ok(pool.install(|| self.sweep_members(points, true))?)
    }

    fn sweep_members(&self, points: &[Vec3], parallel: bool) -> Result<Vec<Vec3>, FieldError> {
        if points.is_empty() {
            return Ok(Vec::new());
        }
        let members: Vec<&SourceRef> = self.iter().collect();
        let batches: Vec<Vec<Vec3>> = if parallel {
            members
                .par_iter()
                .map(|s| s.field_batch(points, true))
                .collect::<Result<_, _>>()?
        } else {
            members
                .iter()
                .map(|s| s.field_batch(points, false))
                .collect::<Result<_, _>>()?
        };

        let mut total = vec![Vec3::zeros(); points.len()];
        for batch in &batches {
            for (t, b) in total.iter_mut().zip(batch) {
                *t += b;
            }
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::DuplicatePolicy;
    use magnetar_core::{FieldSource, SourceKind};
    use magnetar_sources::Dipole;
    use magnetar_test_utils::{ConstantSource, CountingSource, FailingSource};

    #[test]
    fn empty_collection_is_zero() {
        let col = Collection::new();
        assert_eq!(col.field_at(&Vec3::x()).unwrap(), Vec3::zeros());
        let sweep = col.field_sweep(&[Vec3::x(), Vec3::y()], true).unwrap();
        assert_eq!(sweep, vec![Vec3::zeros(); 2]);
    }

    #[test]
    fn empty_points_give_empty_sweep() {
        let col = Collection::from_members(
            SourceRef::new(ConstantSource::new(Vec3::x())),
            DuplicatePolicy::Skip,
        )
        .unwrap();
        assert!(col.field_sweep(&[], false).unwrap().is_empty());
        assert!(col
            .field_sweep_with(&[], &SweepConfig::parallel().with_workers(2))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn sums_members() {
        let col = Collection::from_members(
            [
                SourceRef::new(ConstantSource::new(Vec3::new(1.0, 0.0, 0.0))),
                SourceRef::new(ConstantSource::new(Vec3::new(0.0, 2.0, 0.0))),
                SourceRef::new(ConstantSource::new(Vec3::new(0.0, 0.0, 3.0))),
            ],
            DuplicatePolicy::Skip,
        )
        .unwrap();
        assert_eq!(col.field_at(&Vec3::zeros()).unwrap(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn single_dipole_is_exact() {
        let d = Dipole::new(Vec3::z()).unwrap();
        let expected = d.field_at(&Vec3::x()).unwrap();
        let col = Collection::from_members(SourceRef::new(d), DuplicatePolicy::Skip).unwrap();
        let b = col.field_at(&Vec3::x()).unwrap();
        assert_eq!(b, expected);
        assert_eq!(b, Vec3::new(0.0, 0.0, -1.0 / (4.0 * std::f64::consts::PI)));
    }

    #[test]
    fn member_failure_propagates_unchanged() {
        let col = Collection::from_members(
            [
                SourceRef::new(ConstantSource::new(Vec3::x())),
                SourceRef::new(FailingSource::new("broken")),
            ],
            DuplicatePolicy::Skip,
        )
        .unwrap();
        let expected = FieldError::ExecutionFailed {
            reason: "broken".into(),
        };
        assert_eq!(col.field_at(&Vec3::zeros()).unwrap_err(), expected);
        for parallel in [false, true] {
            assert_eq!(
                col.field_sweep(&[Vec3::zeros(), Vec3::x()], parallel).unwrap_err(),
                expected
            );
        }
        assert_eq!(
            col.field_sweep_with(&[Vec3::x()], &SweepConfig::parallel().with_workers(2))
                .unwrap_err(),
            CollectionError::Field(expected)
        );
    }

    #[test]
    fn member_failing_mid_batch_fails_whole_sweep() {
        let points: Vec<Vec3> = (0..32).map(|i| Vec3::new(i as f64, 1.0, 0.0)).collect();
        for parallel in [false, true] {
            let col = Collection::from_members(
                [
                    SourceRef::new(ConstantSource::new(Vec3::x())),
                    SourceRef::new(FailingSource::after(10, "ran out")),
                    SourceRef::new(ConstantSource::new(Vec3::y())),
                ],
                DuplicatePolicy::Skip,
            )
            .unwrap();
            assert_eq!(
                col.field_sweep(&points, parallel).unwrap_err(),
                FieldError::ExecutionFailed {
                    reason: "ran out".into(),
                }
            );
        }

        let col = Collection::from_members(
            SourceRef::new(FailingSource::after(5, "ran out")),
            DuplicatePolicy::Skip,
        )
        .unwrap();
        assert!(matches!(
            col.field_sweep_with(&points, &SweepConfig::parallel().with_workers(3)),
            Err(CollectionError::Field(FieldError::ExecutionFailed { .. }))
        ));
    }

    #[test]
    fn sweep_evaluates_each_member_once_per_point() {
        let counting = CountingSource::new(Vec3::z());
        let calls = counting.calls();
        let col = Collection::from_members(SourceRef::new(counting), DuplicatePolicy::Skip).unwrap();
        let points: Vec<Vec3> = (0..17).map(|i| Vec3::new(i as f64, 0.0, 0.0)).collect();
        col.field_sweep(&points, true).unwrap();
        assert_eq!(calls.get(), 17);
    }

    #[test]
    fn sweep_matches_field_at() {
        let col = Collection::from_members(
            [
                SourceRef::new(Dipole::new(Vec3::new(1.0, 2.0, 3.0)).unwrap()),
                SourceRef::new(Dipole::new(Vec3::new(-3.0, 0.5, 1.0)).unwrap()),
            ],
            DuplicatePolicy::Skip,
        )
        .unwrap();
        col.get(1).unwrap().set_position(Vec3::new(0.0, 0.0, 1.0)).unwrap();
        let points = [Vec3::new(2.0, 1.0, 0.0), Vec3::new(-1.0, 3.0, 4.0)];
        let sweep = col.field_sweep(&points, false).unwrap();
        for (p, b) in points.iter().zip(&sweep) {
            assert_eq!(*b, col.field_at(p).unwrap());
        }
        assert!(col.kinds().all(|k| k == SourceKind::Dipole));
    }
}
