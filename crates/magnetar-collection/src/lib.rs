//! Source collections for the Magnetar field engine.
//!
//! A [`Collection`] is an ordered, identity-deduplicated group of shared
//! [`SourceRef`](magnetar_core::SourceRef) handles. It provides:
//!
//! - **Registry**: add, remove and merge members, flattening nested
//!   collections ([`registry`])
//! - **Broadcast**: one translation or anchored rotation applied to every
//!   member ([`broadcast`])
//! - **Superposition**: total field at a point or over a batch of points,
//!   optionally in parallel ([`superpose`])
//!
//! Collections never own their sources exclusively. A source may sit in
//! several collections at once, and a move issued through any of them is
//! visible through all.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod broadcast;
pub mod config;
pub mod error;
pub mod registry;
pub mod superpose;

pub use config::SweepConfig;
pub use error::CollectionError;
pub use registry::{Collection, DuplicatePolicy, Member};
