//! Source identity and the [`Vec3`] type alias.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A three-component vector in the world or a source's canonical frame.
///
/// Used for positions, directions, axes, and field values alike.
/// Canonical units are millimetres for positions and millitesla for
/// fields, but the engine only requires consistency across a collection.
pub type Vec3 = nalgebra::Vector3<f64>;

/// Counter for unique [`SourceId`] allocation.
static SOURCE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a shared source.
///
/// Allocated from a monotonic atomic counter via [`SourceId::next`] when a
/// source is wrapped in a [`SourceRef`](crate::SourceRef). Cloning the
/// handle preserves the ID, so two handles compare equal exactly when
/// they alias the same source. Collections de-duplicate on this value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceId(u64);

impl SourceId {
    /// Allocate a fresh, unique source ID.
    ///
    /// Each call returns an ID never returned before within this
    /// process. Thread-safe.
    pub fn next() -> Self {
        Self(SOURCE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
