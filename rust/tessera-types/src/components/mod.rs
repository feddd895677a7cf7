//! Components: the named fields archetypes are built from.
//!
//! A component carries no physical representation of its own. It delegates
//! encoding, decoding, and the Arrow datatype to one of the
//! [`datatypes`](crate::datatypes) and contributes only its own
//! extension-type name, so that e.g. a `Position3D` batch and a `Vector3D`
//! batch share a physical layout yet stay distinguishable in storage.

use arrow_array::{Array, ArrayRef};
use arrow_schema::DataType;
use tessera_common::Result;

use crate::arraylike::ArrayLike;
use crate::datatypes;
use crate::loggable::Loggable;

/// Declares a component delegating to a datatype.
macro_rules! component {
    ($(#[$meta:meta])* $name:ident($datatype:ty) = $type_name:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name(pub $datatype);

        impl From<$datatype> for $name {
            fn from(value: $datatype) -> Self {
                $name(value)
            }
        }

        impl Loggable for $name {
            const TYPE_NAME: &'static str = $type_name;

            fn arrow_datatype() -> DataType {
                <$datatype>::arrow_datatype()
            }

            fn to_arrow_opt(values: impl IntoIterator<Item = Option<Self>>) -> Result<ArrayRef> {
                <$datatype>::to_arrow_opt(values.into_iter().map(|v| v.map(|v| v.0)))
            }

            fn from_arrow_opt(array: &dyn Array) -> Result<Vec<Option<Self>>> {
                Ok(<$datatype>::from_arrow_opt(array)?
                    .into_iter()
                    .map(|v| v.map($name))
                    .collect())
            }
        }
    };
}

component!(
    /// A position in 3D space.
    Position3D(datatypes::Vec3D) = "tessera.components.Position3D"
);

component!(
    /// A direction vector in 3D space, e.g. a vertex normal.
    Vector3D(datatypes::Vec3D) = "tessera.components.Vector3D"
);

component!(
    /// An RGBA color.
    Color(datatypes::Rgba32) = "tessera.components.Color"
);

component!(
    /// A radius, in world units.
    Radius(datatypes::Float32) = "tessera.components.Radius"
);

component!(
    /// A human-readable text label.
    Text(datatypes::Utf8) = "tessera.components.Text"
);

component!(
    /// A class id for the instance it is attached to.
    ClassId(datatypes::ClassId) = "tessera.components.ClassId"
);

component!(
    /// A unique identifier for an individual instance within a batch.
    InstanceKey(datatypes::InstanceKey) = "tessera.components.InstanceKey"
);

component!(
    /// Material properties for a mesh as a whole.
    Material(datatypes::Material) = "tessera.components.Material"
);

component!(
    /// Per-mesh properties, including indexed drawing.
    MeshProperties(datatypes::MeshProperties) = "tessera.components.MeshProperties"
);

impl From<[f32; 3]> for Position3D {
    fn from(xyz: [f32; 3]) -> Self {
        Position3D(datatypes::Vec3D(xyz))
    }
}

impl From<[f32; 3]> for Vector3D {
    fn from(xyz: [f32; 3]) -> Self {
        Vector3D(datatypes::Vec3D(xyz))
    }
}

impl From<[u8; 4]> for Color {
    fn from(rgba: [u8; 4]) -> Self {
        Color(rgba.into())
    }
}

impl From<u32> for Color {
    fn from(rgba: u32) -> Self {
        Color(datatypes::Rgba32(rgba))
    }
}

impl From<f32> for Radius {
    fn from(radius: f32) -> Self {
        Radius(datatypes::Float32(radius))
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Text(text.into())
    }
}

impl From<String> for Text {
    fn from(text: String) -> Self {
        Text(text.into())
    }
}

impl From<u16> for ClassId {
    fn from(id: u16) -> Self {
        ClassId(datatypes::ClassId(id))
    }
}

impl From<u64> for InstanceKey {
    fn from(key: u64) -> Self {
        InstanceKey(datatypes::InstanceKey(key))
    }
}

// Array-like conveniences for the common native input shapes.

impl From<Vec<[f32; 3]>> for ArrayLike<Position3D> {
    fn from(values: Vec<[f32; 3]>) -> Self {
        ArrayLike::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<[f32; 3]>> for ArrayLike<Vector3D> {
    fn from(values: Vec<[f32; 3]>) -> Self {
        ArrayLike::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<[u8; 4]>> for ArrayLike<Color> {
    fn from(values: Vec<[u8; 4]>) -> Self {
        ArrayLike::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<f32>> for ArrayLike<Radius> {
    fn from(values: Vec<f32>) -> Self {
        ArrayLike::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<&str>> for ArrayLike<Text> {
    fn from(values: Vec<&str>) -> Self {
        ArrayLike::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<u16>> for ArrayLike<ClassId> {
    fn from(values: Vec<u16>) -> Self {
        ArrayLike::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<u64>> for ArrayLike<InstanceKey> {
    fn from(values: Vec<u64>) -> Self {
        ArrayLike::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl From<datatypes::Material> for ArrayLike<Material> {
    fn from(material: datatypes::Material) -> Self {
        ArrayLike::Single(Material(material))
    }
}

impl From<datatypes::MeshProperties> for ArrayLike<MeshProperties> {
    fn from(props: datatypes::MeshProperties) -> Self {
        ArrayLike::Single(MeshProperties(props))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_share_their_datatype_layout() {
        assert_eq!(
            Position3D::arrow_datatype(),
            datatypes::Vec3D::arrow_datatype()
        );
        assert_eq!(Color::arrow_datatype(), datatypes::Rgba32::arrow_datatype());
        assert_ne!(Position3D::TYPE_NAME, datatypes::Vec3D::TYPE_NAME);
    }

    #[test]
    fn test_delegated_round_trip() {
        let values = vec![
            Position3D::from([0.0, 1.0, 0.0]),
            Position3D::from([1.0, 0.0, 0.0]),
        ];
        let array = Position3D::to_arrow(&values).unwrap();
        assert_eq!(Position3D::from_arrow(array.as_ref()).unwrap(), values);
    }
}
