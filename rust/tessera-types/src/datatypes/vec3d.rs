use std::sync::Arc;

use arrow_array::builder::{FixedSizeListBuilder, Float32Builder};
use arrow_array::{Array, ArrayRef, FixedSizeListArray, Float32Array};
use arrow_schema::{DataType, Field};
use tessera_common::{Result, error::Error, verify_data};

use crate::loggable::{Loggable, downcast_array};

/// A vector in 3D space.
///
/// Stored as a fixed-size list of three 32-bit floats, so a column of
/// vectors is one contiguous float buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3D(pub [f32; 3]);

impl Vec3D {
    pub const ZERO: Vec3D = Vec3D([0.0; 3]);

    pub fn new(x: f32, y: f32, z: f32) -> Vec3D {
        Vec3D([x, y, z])
    }

    pub fn x(&self) -> f32 {
        self.0[0]
    }

    pub fn y(&self) -> f32 {
        self.0[1]
    }

    pub fn z(&self) -> f32 {
        self.0[2]
    }
}

impl From<[f32; 3]> for Vec3D {
    fn from(xyz: [f32; 3]) -> Self {
        Vec3D(xyz)
    }
}

impl Loggable for Vec3D {
    const TYPE_NAME: &'static str = "tessera.datatypes.Vec3D";

    fn arrow_datatype() -> DataType {
        DataType::FixedSizeList(Arc::new(Field::new("item", DataType::Float32, false)), 3)
    }

    fn to_arrow_opt(values: impl IntoIterator<Item = Option<Self>>) -> Result<ArrayRef> {
        let mut builder = FixedSizeListBuilder::new(Float32Builder::new(), 3)
            .with_field(Arc::new(Field::new("item", DataType::Float32, false)));
        for value in values {
            match value {
                Some(Vec3D(xyz)) => {
                    builder.values().append_slice(&xyz);
                    builder.append(true);
                }
                None => {
                    // The child slots of a null vector still need values.
                    builder.values().append_slice(&[0.0; 3]);
                    builder.append(false);
                }
            }
        }
        Ok(Arc::new(builder.finish()))
    }

    fn from_arrow_opt(array: &dyn Array) -> Result<Vec<Option<Self>>> {
        let list = downcast_array::<FixedSizeListArray>(array, Self::TYPE_NAME)?;
        verify_data!(vector_width, list.value_length() == 3);
        let mut out = Vec::with_capacity(list.len());
        for row in 0..list.len() {
            if list.is_null(row) {
                out.push(None);
                continue;
            }
            let cell = list.value(row);
            let cell = downcast_array::<Float32Array>(cell.as_ref(), Self::TYPE_NAME)?;
            if cell.null_count() != 0 {
                return Err(Error::corrupt_data(
                    Self::TYPE_NAME,
                    format!("null component inside vector cell at row {row}"),
                ));
            }
            out.push(Some(Vec3D([cell.value(0), cell.value(1), cell.value(2)])));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_with_nulls() {
        let values = vec![Some(Vec3D::new(1.0, 2.0, 3.0)), None, Some(Vec3D::ZERO)];
        let array = Vec3D::to_arrow_opt(values.clone()).unwrap();
        assert_eq!(array.len(), 3);
        assert_eq!(Vec3D::from_arrow_opt(array.as_ref()).unwrap(), values);
    }

    #[test]
    fn test_physical_layout_is_a_fixed_size_float_list() {
        let array = Vec3D::to_arrow(&[Vec3D::new(0.0, 1.0, 0.0)]).unwrap();
        assert_eq!(array.data_type(), &Vec3D::arrow_datatype());
    }

    #[test]
    fn test_wrong_width_is_corrupt_data() {
        let mut builder = FixedSizeListBuilder::new(Float32Builder::new(), 2)
            .with_field(Arc::new(Field::new("item", DataType::Float32, false)));
        builder.values().append_slice(&[1.0, 2.0]);
        builder.append(true);
        let array = builder.finish();
        let err = Vec3D::from_arrow_opt(&array).unwrap_err();
        assert!(matches!(
            err.kind(),
            tessera_common::error::ErrorKind::CorruptData { .. }
        ));
    }
}
