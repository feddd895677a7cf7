use std::sync::Arc;

use arrow_array::{Array, ArrayRef, UInt16Array};
use arrow_schema::DataType;
use tessera_common::{Result, error::Error};

use crate::loggable::{Loggable, downcast_array};

/// A 16-bit identifier referring to a class definition (labels, colors)
/// maintained outside this layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassId(pub u16);

impl From<u16> for ClassId {
    fn from(id: u16) -> Self {
        ClassId(id)
    }
}

impl TryFrom<u32> for ClassId {
    type Error = Error;

    fn try_from(id: u32) -> Result<ClassId> {
        u16::try_from(id).map(ClassId).map_err(|_| {
            Error::conversion(
                ClassId::TYPE_NAME,
                format!("{id} is out of range for an unsigned 16-bit class id"),
            )
        })
    }
}

impl Loggable for ClassId {
    const TYPE_NAME: &'static str = "tessera.datatypes.ClassId";

    fn arrow_datatype() -> DataType {
        DataType::UInt16
    }

    fn to_arrow_opt(values: impl IntoIterator<Item = Option<Self>>) -> Result<ArrayRef> {
        let array: UInt16Array = values.into_iter().map(|v| v.map(|v| v.0)).collect();
        Ok(Arc::new(array))
    }

    fn from_arrow_opt(array: &dyn Array) -> Result<Vec<Option<Self>>> {
        let array = downcast_array::<UInt16Array>(array, Self::TYPE_NAME)?;
        Ok(array.iter().map(|v| v.map(ClassId)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_and_coercion() {
        let values = vec![ClassId(0), ClassId(u16::MAX)];
        let array = ClassId::to_arrow(&values).unwrap();
        assert_eq!(ClassId::from_arrow(array.as_ref()).unwrap(), values);

        assert_eq!(ClassId::try_from(17u32).unwrap(), ClassId(17));
        assert!(ClassId::try_from(70_000u32).is_err());
    }
}
