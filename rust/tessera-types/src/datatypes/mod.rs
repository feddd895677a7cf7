//! Concrete datatypes: the leaf codecs of the type catalog.
//!
//! Each datatype owns one physical Arrow representation. Components (see
//! [`crate::components`]) delegate to these and differ only in their
//! extension-type name.

mod class_id;
mod float32;
mod instance_key;
mod material;
mod mesh_properties;
mod rgba32;
mod uint32;
mod utf8;
mod vec3d;

pub use class_id::ClassId;
pub use float32::Float32;
pub use instance_key::InstanceKey;
pub use material::Material;
pub use mesh_properties::MeshProperties;
pub use rgba32::Rgba32;
pub use uint32::UInt32;
pub use utf8::Utf8;
pub use vec3d::Vec3D;
