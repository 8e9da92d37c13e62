//! Ordered, identity-deduplicated member registry.

use std::collections::HashSet;

use indexmap::IndexMap;
use magnetar_core::{SourceId, SourceKind, SourceRef};
use tracing::warn;

use crate::error::CollectionError;

/// What to do when an added source is already a member.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Log a warning and leave the existing member in place.
    #[default]
    Skip,
    /// Fail the whole add with [`CollectionError::DuplicateSource`].
    Reject,
}

/// Input accepted by [`Collection::add`] and [`Collection::from_members`].
///
/// Anything that is not a source, a collection, or a sequence of those is
/// rejected at compile time. Nested collections and sequences are
/// flattened in order.
#[derive(Clone, Debug)]
pub enum Member {
    /// A single shared source.
    Source(SourceRef),
    /// Every member of another collection, in its order.
    Collection(Collection),
    /// A sequence of members, flattened in order.
    Many(Vec<Member>),
}

impl From<SourceRef> for Member {
    fn from(s: SourceRef) -> Self {
        Self::Source(s)
    }
}

impl From<&SourceRef> for Member {
    fn from(s: &SourceRef) -> Self {
        Self::Source(s.clone())
    }
}

impl From<Collection> for Member {
    fn from(c: Collection) -> Self {
        Self::Collection(c)
    }
}

impl From<&Collection> for Member {
    fn from(c: &Collection) -> Self {
        Self::Collection(c.clone())
    }
}

impl<T: Into<Member>> From<Vec<T>> for Member {
    fn from(v: Vec<T>) -> Self {
        Self::Many(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Member>, const N: usize> From<[T; N]> for Member {
    fn from(v: [T; N]) -> Self {
        Self::Many(v.into_iter().map(Into::into).collect())
    }
}

impl Member {
    fn flatten_into(self, out: &mut Vec<SourceRef>) {
        match self {
            Self::Source(s) => out.push(s),
            Self::Collection(c) => out.extend(c.members.into_values()),
            Self::Many(v) => {
                for m in v {
                    m.flatten_into(out);
                }
            }
        }
    }
}

/// An ordered group of shared sources.
///
/// Members keep their insertion order across adds and removals. Each
/// source appears at most once, compared by identity. Cloning a
/// collection clones the handles, so both copies alias the same sources.
///
/// ```
/// use magnetar_collection::Collection;
/// use magnetar_core::{SourceRef, Vec3};
/// use magnetar_sources::Dipole;
///
/// let a = SourceRef::new(Dipole::new(Vec3::z()).unwrap());
/// let b = SourceRef::new(Dipole::new(Vec3::x()).unwrap());
///
/// let inner = Collection::from_members([&a, &b], Default::default()).unwrap();
/// let mut outer = Collection::new();
/// outer.add(inner).unwrap();
/// outer.add(&a).unwrap(); // already a member: skipped
/// assert_eq!(outer.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Collection {
    members: IndexMap<SourceId, SourceRef>,
    policy: DuplicatePolicy,
}

impl Collection {
    /// Empty collection with the default [`DuplicatePolicy`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the policy applied by [`add`](Self::add).
    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build a collection from `members` under `policy`.
    ///
    /// The policy is also kept for later [`add`](Self::add) calls.
    pub fn from_members(
        members: impl Into<Member>,
        policy: DuplicatePolicy,
    ) -> Result<Self, CollectionError> {
        let mut c = Self::new().with_policy(policy);
        c.add(members)?;
        Ok(c)
    }

    /// Policy applied by [`add`](Self::add).
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Append `members` under the collection's policy.
    ///
    /// Returns how many sources were actually inserted.
    pub fn add(&mut self, members: impl Into<Member>) -> Result<usize, CollectionError> {
        self.add_with(members, self.policy)
    }

    /// Append `members` under an explicit `policy`.
    ///
    /// Under [`DuplicatePolicy::Reject`] the add is all-or-nothing: if any
    /// flattened source is already a member, or appears twice in the
    /// input, nothing is inserted.
    pub fn add_with(
        &mut self,
        members: impl Into<Member>,
        policy: DuplicatePolicy,
    ) -> Result<usize, CollectionError> {
        let mut flat = Vec::new();
        members.into().flatten_into(&mut flat);

        if policy == DuplicatePolicy::Reject {
            let mut seen = HashSet::with_capacity(flat.len());
            for s in &flat {
                if self.members.contains_key(&s.id()) || !seen.insert(s.id()) {
                    return Err(CollectionError::DuplicateSource { id: s.id() });
                }
            }
        }

        let mut added = 0;
        for s in flat {
            if self.members.contains_key(&s.id()) {
                warn!(id = %s.id(), kind = %s.kind(), "skipping duplicate source");
                continue;
            }
            self.members.insert(s.id(), s);
            added += 1;
        }
        Ok(added)
    }

    /// Append every member of `other`, in its order.
    pub fn extend_from(&mut self, other: &Collection) -> Result<usize, CollectionError> {
        self.add(other)
    }

    /// Remove and return the member at `index`.
    ///
    /// Negative indices count from the end, so `-1` is the last member.
    pub fn remove(&mut self, index: isize) -> Result<SourceRef, CollectionError> {
        let len = self.members.len();
        let resolved = if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else {
            Some(index.unsigned_abs())
        };
        resolved
            .and_then(|i| self.members.shift_remove_index(i))
            .map(|(_, s)| s)
            .ok_or(CollectionError::IndexOutOfRange { index, len })
    }

    /// Remove and return the last member.
    pub fn pop(&mut self) -> Result<SourceRef, CollectionError> {
        self.remove(-1)
    }

    /// Remove `source` by identity and return the stored handle.
    pub fn remove_source(&mut self, source: &SourceRef) -> Result<SourceRef, CollectionError> {
        self.members
            .shift_remove(&source.id())
            .ok_or(CollectionError::SourceNotFound { id: source.id() })
    }

    /// Remove every member.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// `true` if there are no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// `true` if `source` is a member.
    pub fn contains(&self, source: &SourceRef) -> bool {
        self.members.contains_key(&source.id())
    }

    /// Member at `index` in insertion order.
    pub fn get(&self, index: usize) -> Option<&SourceRef> {
        self.members.get_index(index).map(|(_, s)| s)
    }

    /// Members in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &SourceRef> + '_ {
        self.members.values()
    }

    /// Member identities in insertion order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = SourceId> + '_ {
        self.members.keys().copied()
    }

    /// Member kinds in insertion order.
    pub fn kinds(&self) -> impl ExactSizeIterator<Item = SourceKind> + '_ {
        self.members.values().map(SourceRef::kind)
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a SourceRef;
    type IntoIter = indexmap::map::Values<'a, SourceId, SourceRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.values()
    }
}
