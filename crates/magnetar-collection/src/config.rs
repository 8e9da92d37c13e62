//! Sweep configuration.

/// Upper bound on an explicit worker count.
pub const MAX_WORKERS: usize = 256;

/// How a batch field sweep is executed.
///
/// ```
/// use magnetar_collection::SweepConfig;
///
/// let cfg = SweepConfig::parallel().with_workers(4);
/// assert_eq!(cfg.resolved_workers(), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepConfig {
    /// Evaluate members, and points within each member, concurrently.
    /// Default: `false`.
    pub parallel: bool,
    /// Size of a dedicated worker pool for this sweep. `None` = the
    /// shared rayon pool. Ignored when `parallel` is `false`.
    pub workers: Option<usize>,
}

impl SweepConfig {
    /// Sequential sweep on the calling thread.
    pub fn sequential() -> Self {
        Self::default()
    }

    /// Parallel sweep on the shared pool.
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            workers: None,
        }
    }

    /// Use a dedicated pool of `workers` threads.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Resolve the worker count that a parallel sweep will use.
    ///
    /// Explicit values are clamped to `[1, MAX_WORKERS]`. `None` resolves
    /// to the size of the shared pool.
    pub fn resolved_workers(&self) -> usize {
        match self.workers {
            Some(n) => n.clamp(1, MAX_WORKERS),
            None => rayon::current_num_threads(),
        }
    }
}
