use std::sync::Arc;

use arrow_array::{Array, ArrayRef, UInt32Array};
use arrow_schema::DataType;
use tessera_common::{Result, error::Error};

use crate::loggable::{Loggable, downcast_array};

/// An unsigned 32-bit integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UInt32(pub u32);

impl From<u32> for UInt32 {
    fn from(value: u32) -> Self {
        UInt32(value)
    }
}

impl TryFrom<u64> for UInt32 {
    type Error = Error;

    fn try_from(value: u64) -> Result<UInt32> {
        u32::try_from(value)
            .map(UInt32)
            .map_err(|_| out_of_range(value as i128))
    }
}

impl TryFrom<i64> for UInt32 {
    type Error = Error;

    fn try_from(value: i64) -> Result<UInt32> {
        u32::try_from(value)
            .map(UInt32)
            .map_err(|_| out_of_range(value as i128))
    }
}

fn out_of_range(value: i128) -> Error {
    Error::conversion(
        UInt32::TYPE_NAME,
        format!("{value} is out of range for an unsigned 32-bit integer"),
    )
}

impl Loggable for UInt32 {
    const TYPE_NAME: &'static str = "tessera.datatypes.UInt32";

    fn arrow_datatype() -> DataType {
        DataType::UInt32
    }

    fn to_arrow_opt(values: impl IntoIterator<Item = Option<Self>>) -> Result<ArrayRef> {
        let array: UInt32Array = values.into_iter().map(|v| v.map(|v| v.0)).collect();
        Ok(Arc::new(array))
    }

    fn from_arrow_opt(array: &dyn Array) -> Result<Vec<Option<Self>>> {
        let array = downcast_array::<UInt32Array>(array, Self::TYPE_NAME)?;
        Ok(array.iter().map(|v| v.map(UInt32)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let values = vec![UInt32(0), UInt32(42), UInt32(u32::MAX)];
        let array = UInt32::to_arrow(&values).unwrap();
        assert_eq!(UInt32::from_arrow(array.as_ref()).unwrap(), values);
    }

    #[test]
    fn test_narrowing_coercion_is_range_checked() {
        assert_eq!(UInt32::try_from(7u64).unwrap(), UInt32(7));
        assert!(UInt32::try_from(u64::MAX).is_err());
        assert!(UInt32::try_from(-1i64).is_err());
    }
}
