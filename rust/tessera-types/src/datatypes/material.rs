use std::sync::Arc;

use arrow_array::builder::UInt32Builder;
use arrow_array::{Array, ArrayRef, StructArray, UInt32Array};
use arrow_buffer::NullBufferBuilder;
use arrow_schema::{DataType, Field, Fields};
use tessera_common::{Result, error::Error};

use crate::datatypes::Rgba32;
use crate::loggable::{Loggable, downcast_array};

/// Material properties of a mesh as a whole.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Material {
    /// Optional color multiplied with the default albedo.
    pub albedo_factor: Option<Rgba32>,
}

impl Material {
    pub fn from_albedo_factor(albedo_factor: impl Into<Rgba32>) -> Material {
        Material {
            albedo_factor: Some(albedo_factor.into()),
        }
    }
}

fn struct_fields() -> Fields {
    Fields::from(vec![Field::new("albedo_factor", DataType::UInt32, true)])
}

impl Loggable for Material {
    const TYPE_NAME: &'static str = "tessera.datatypes.Material";

    fn arrow_datatype() -> DataType {
        DataType::Struct(struct_fields())
    }

    fn to_arrow_opt(values: impl IntoIterator<Item = Option<Self>>) -> Result<ArrayRef> {
        let mut albedo = UInt32Builder::new();
        let mut validity = NullBufferBuilder::new(0);
        for value in values {
            match value {
                Some(material) => {
                    match material.albedo_factor {
                        Some(color) => albedo.append_value(color.0),
                        None => albedo.append_null(),
                    }
                    validity.append(true);
                }
                None => {
                    albedo.append_null();
                    validity.append(false);
                }
            }
        }
        let child: ArrayRef = Arc::new(albedo.finish());
        StructArray::try_new(struct_fields(), vec![child], validity.finish())
            .map(|array| Arc::new(array) as ArrayRef)
            .map_err(|e| Error::arrow("building material struct array", e))
    }

    fn from_arrow_opt(array: &dyn Array) -> Result<Vec<Option<Self>>> {
        let array = downcast_array::<StructArray>(array, Self::TYPE_NAME)?;
        let albedo = array.column_by_name("albedo_factor").ok_or_else(|| {
            Error::corrupt_data(Self::TYPE_NAME, "missing 'albedo_factor' child column")
        })?;
        let albedo = downcast_array::<UInt32Array>(albedo.as_ref(), Self::TYPE_NAME)?;
        let mut out = Vec::with_capacity(array.len());
        for row in 0..array.len() {
            if array.is_null(row) {
                out.push(None);
                continue;
            }
            let albedo_factor = albedo.is_valid(row).then(|| Rgba32(albedo.value(row)));
            out.push(Some(Material { albedo_factor }));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_with_partial_fields() {
        let values = vec![
            Some(Material::from_albedo_factor([0xcc, 0x00, 0xcc, 0xff])),
            Some(Material::default()),
            None,
        ];
        let array = Material::to_arrow_opt(values.clone()).unwrap();
        assert_eq!(Material::from_arrow_opt(array.as_ref()).unwrap(), values);
    }

    #[test]
    fn test_physical_layout_is_a_struct() {
        let array = Material::to_arrow(&[Material::default()]).unwrap();
        assert_eq!(array.data_type(), &Material::arrow_datatype());
    }
}
