use std::sync::Arc;

use arrow_array::{Array, ArrayRef, Float32Array};
use arrow_schema::DataType;
use tessera_common::{Result, error::Error};

use crate::loggable::{Loggable, downcast_array};

/// A single-precision 32-bit IEEE 754 floating point number.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Float32(pub f32);

impl Float32 {
    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<f32> for Float32 {
    fn from(value: f32) -> Self {
        Float32(value)
    }
}

impl TryFrom<f64> for Float32 {
    type Error = Error;

    /// Widening inputs are narrowed to 32 bits; values whose magnitude
    /// exceeds the 32-bit float range are rejected rather than saturated.
    fn try_from(value: f64) -> Result<Float32> {
        if value.is_finite() && value.abs() > f32::MAX as f64 {
            return Err(Error::conversion(
                Float32::TYPE_NAME,
                format!("{value} is out of range for a 32-bit float"),
            ));
        }
        Ok(Float32(value as f32))
    }
}

impl Loggable for Float32 {
    const TYPE_NAME: &'static str = "tessera.datatypes.Float32";

    fn arrow_datatype() -> DataType {
        DataType::Float32
    }

    fn to_arrow_opt(values: impl IntoIterator<Item = Option<Self>>) -> Result<ArrayRef> {
        let array: Float32Array = values.into_iter().map(|v| v.map(|v| v.0)).collect();
        Ok(Arc::new(array))
    }

    fn from_arrow_opt(array: &dyn Array) -> Result<Vec<Option<Self>>> {
        let array = downcast_array::<Float32Array>(array, Self::TYPE_NAME)?;
        Ok(array.iter().map(|v| v.map(Float32)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let values = vec![
            Float32(0.0),
            Float32(-1.5),
            Float32(f32::MAX),
            Float32(f32::MIN_POSITIVE),
        ];
        let array = Float32::to_arrow(&values).unwrap();
        assert_eq!(Float32::from_arrow(array.as_ref()).unwrap(), values);
    }

    #[test]
    fn test_out_of_range_f64_is_a_conversion_error() {
        let err = Float32::try_from(1.0e300_f64).unwrap_err();
        assert!(matches!(
            err.kind(),
            tessera_common::error::ErrorKind::Conversion { .. }
        ));
        // The boundary itself is representable.
        assert_eq!(
            Float32::try_from(f32::MAX as f64).unwrap(),
            Float32(f32::MAX)
        );
        // Infinities are representable and pass through.
        assert_eq!(Float32::try_from(f64::INFINITY).unwrap(), Float32(f32::INFINITY));
    }

    #[test]
    fn test_decode_of_null_cell_is_corrupt_data() {
        let array = Float32::to_arrow_opt(vec![Some(Float32(1.0)), None]).unwrap();
        let err = Float32::from_arrow(array.as_ref()).unwrap_err();
        assert!(matches!(
            err.kind(),
            tessera_common::error::ErrorKind::CorruptData { .. }
        ));
    }
}
