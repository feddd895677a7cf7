use std::sync::Arc;

use arrow_array::builder::{ListBuilder, UInt32Builder};
use arrow_array::{Array, ArrayRef, StructArray};
use arrow_buffer::NullBufferBuilder;
use arrow_schema::{DataType, Field, Fields};
use tessera_common::{Result, error::Error};

use crate::loggable::Loggable;

/// Per-mesh properties, including indexed drawing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeshProperties {
    /// Triangle indices into the vertex buffer, three per triangle. When
    /// absent, each triplet of vertex positions is drawn as one triangle.
    pub indices: Option<Vec<u32>>,
}

impl MeshProperties {
    pub fn from_triangle_indices(indices: impl IntoIterator<Item = u32>) -> MeshProperties {
        MeshProperties {
            indices: Some(indices.into_iter().collect()),
        }
    }
}

fn struct_fields() -> Fields {
    Fields::from(vec![Field::new(
        "indices",
        DataType::List(Arc::new(Field::new("item", DataType::UInt32, false))),
        true,
    )])
}

impl Loggable for MeshProperties {
    const TYPE_NAME: &'static str = "tessera.datatypes.MeshProperties";

    fn arrow_datatype() -> DataType {
        DataType::Struct(struct_fields())
    }

    fn to_arrow_opt(values: impl IntoIterator<Item = Option<Self>>) -> Result<ArrayRef> {
        let mut indices = ListBuilder::new(UInt32Builder::new())
            .with_field(Arc::new(Field::new("item", DataType::UInt32, false)));
        let mut validity = NullBufferBuilder::new(0);
        for value in values {
            match value {
                Some(props) => {
                    match props.indices {
                        Some(list) => {
                            indices.values().append_slice(&list);
                            indices.append(true);
                        }
                        None => indices.append(false),
                    }
                    validity.append(true);
                }
                None => {
                    indices.append(false);
                    validity.append(false);
                }
            }
        }
        let child: ArrayRef = Arc::new(indices.finish());
        StructArray::try_new(struct_fields(), vec![child], validity.finish())
            .map(|array| Arc::new(array) as ArrayRef)
            .map_err(|e| Error::arrow("building mesh properties struct array", e))
    }

    /// Decoding mesh properties from columnar storage is not supported yet.
    ///
    /// This is a terminal "feature unavailable" state, not malformed input;
    /// callers should branch on
    /// [`Error::is_not_implemented`](tessera_common::error::Error::is_not_implemented).
    fn from_arrow_opt(_array: &dyn Array) -> Result<Vec<Option<Self>>> {
        Err(Error::not_implemented(
            "decoding tessera.datatypes.MeshProperties from columnar storage",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_produces_the_declared_layout() {
        let values = vec![
            Some(MeshProperties::from_triangle_indices([2, 1, 0])),
            Some(MeshProperties::default()),
            None,
        ];
        let array = MeshProperties::to_arrow_opt(values).unwrap();
        assert_eq!(array.len(), 3);
        assert_eq!(array.data_type(), &MeshProperties::arrow_datatype());
        assert!(array.is_valid(0));
        assert!(array.is_valid(1));
        assert!(array.is_null(2));
    }

    #[test]
    fn test_decode_is_an_explicit_not_implemented_state() {
        let array = MeshProperties::to_arrow(&[MeshProperties::default()]).unwrap();
        let err = MeshProperties::from_arrow(array.as_ref()).unwrap_err();
        assert!(err.is_not_implemented());
    }
}
