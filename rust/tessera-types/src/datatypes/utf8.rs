use std::sync::Arc;

use arrow_array::{Array, ArrayRef, LargeStringArray};
use arrow_schema::DataType;
use tessera_common::Result;

use crate::loggable::{Loggable, downcast_array};

/// An immutable UTF-8 string.
///
/// Stored as a variable-width column (offsets buffer plus one contiguous
/// data buffer).
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Utf8(pub Arc<str>);

impl Utf8 {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Utf8 {
    fn from(s: &str) -> Self {
        Utf8(s.into())
    }
}

impl From<String> for Utf8 {
    fn from(s: String) -> Self {
        Utf8(s.into())
    }
}

impl std::fmt::Display for Utf8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Loggable for Utf8 {
    const TYPE_NAME: &'static str = "tessera.datatypes.Utf8";

    fn arrow_datatype() -> DataType {
        DataType::LargeUtf8
    }

    fn to_arrow_opt(values: impl IntoIterator<Item = Option<Self>>) -> Result<ArrayRef> {
        let array: LargeStringArray = values.into_iter().map(|v| v.map(|v| v.0)).collect();
        Ok(Arc::new(array))
    }

    fn from_arrow_opt(array: &dyn Array) -> Result<Vec<Option<Self>>> {
        let array = downcast_array::<LargeStringArray>(array, Self::TYPE_NAME)?;
        Ok(array.iter().map(|v| v.map(Utf8::from)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_empty_and_unicode() {
        let values = vec![Utf8::from("vertex"), Utf8::from(""), Utf8::from("péché")];
        let array = Utf8::to_arrow(&values).unwrap();
        assert_eq!(Utf8::from_arrow(array.as_ref()).unwrap(), values);
    }

    #[test]
    fn test_empty_string_is_not_a_null() {
        let array = Utf8::to_arrow_opt(vec![Some(Utf8::from("")), None]).unwrap();
        let decoded = Utf8::from_arrow_opt(array.as_ref()).unwrap();
        assert_eq!(decoded, vec![Some(Utf8::from("")), None]);
    }
}
