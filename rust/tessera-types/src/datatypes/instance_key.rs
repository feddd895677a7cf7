use std::sync::Arc;

use arrow_array::{Array, ArrayRef, UInt64Array};
use arrow_schema::DataType;
use tessera_common::Result;

use crate::loggable::{Loggable, downcast_array};

/// A unique identifier for an individual instance within a batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstanceKey(pub u64);

impl From<u64> for InstanceKey {
    fn from(key: u64) -> Self {
        InstanceKey(key)
    }
}

impl Loggable for InstanceKey {
    const TYPE_NAME: &'static str = "tessera.datatypes.InstanceKey";

    fn arrow_datatype() -> DataType {
        DataType::UInt64
    }

    fn to_arrow_opt(values: impl IntoIterator<Item = Option<Self>>) -> Result<ArrayRef> {
        let array: UInt64Array = values.into_iter().map(|v| v.map(|v| v.0)).collect();
        Ok(Arc::new(array))
    }

    fn from_arrow_opt(array: &dyn Array) -> Result<Vec<Option<Self>>> {
        let array = downcast_array::<UInt64Array>(array, Self::TYPE_NAME)?;
        Ok(array.iter().map(|v| v.map(InstanceKey)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let values = vec![InstanceKey(0), InstanceKey(u64::MAX)];
        let array = InstanceKey::to_arrow(&values).unwrap();
        assert_eq!(InstanceKey::from_arrow(array.as_ref()).unwrap(), values);
    }
}
