//! `tessera-types` is the typed columnar serialization layer of Tessera.
//!
//! It converts native Rust values into Apache Arrow columnar arrays and back,
//! so that typed, batched values can be handed to a logging/visualization
//! transport as schema-tagged columnar records.
//!
//! The crate is organized bottom-up:
//!
//! - [`loggable`]: the [`Loggable`] trait, the per-datatype codec seam between
//!   native values and Arrow arrays.
//! - [`datatypes`] and [`components`]: the concrete type catalog. Components
//!   delegate their physical representation to a datatype and differ only in
//!   their extension-type name.
//! - [`arraylike`]: [`ArrayLike`], the tagged union of a single value, a
//!   sequence of values, or a pre-built Arrow array, resolved exactly once
//!   into a canonical array.
//! - [`batch`]: [`Batch`], a normalized array tagged with its registered
//!   extension-type name, with required and optional construction paths.
//! - [`schema`] and [`record`]: data-driven record (archetype) descriptors
//!   and the assembled, immutable [`Record`].
//! - [`registry`]: the process-wide extension-type registry used to
//!   reconstruct typed batches from untyped columnar storage.
//! - [`archetypes`]: typed builders ([`archetypes::Mesh3D`],
//!   [`archetypes::Points3D`]) over the data-driven machinery.
//!
//! The layer is computation-only: no I/O, no async. Arrays and batches are
//! immutable once built and freely shareable across threads; the registry is
//! the only shared mutable state and is internally synchronized.

pub mod archetypes;
pub mod arraylike;
pub mod batch;
pub mod components;
pub mod datatypes;
pub mod loggable;
pub mod record;
pub mod registry;
pub mod schema;

pub use arraylike::ArrayLike;
pub use batch::Batch;
pub use loggable::Loggable;
pub use record::Record;
pub use schema::{FieldKind, FieldSpec, RecordSchema};
