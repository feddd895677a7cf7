//! Archetypes: typed builders over the data-driven record machinery.
//!
//! An archetype is nothing more than a [`RecordSchema`](crate::RecordSchema)
//! plus a convenience builder; assembly and validation are shared by every
//! archetype through [`RecordSchema::assemble`](crate::RecordSchema::assemble).

mod mesh3d;
mod points3d;

pub use mesh3d::Mesh3D;
pub use points3d::Points3D;
