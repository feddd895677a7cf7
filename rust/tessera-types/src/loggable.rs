//! The [`Loggable`] trait: the codec seam between native values and their
//! Arrow columnar representation.

use arrow_array::{Array, ArrayRef};
use arrow_schema::DataType;
use tessera_common::{Result, error::Error};

/// A value that can be encoded into (and decoded from) a typed Arrow array.
///
/// Every loggable type owns a globally unique extension-type name and a fixed
/// physical Arrow representation. Encoding and decoding are total for
/// well-formed input: `from_arrow(to_arrow(v)) == v` for every representable
/// value.
///
/// Implementations must not alter the physical Arrow layout when passing
/// arrays through; interoperability with the wider Arrow ecosystem depends on
/// byte-for-byte compatibility for primitive types.
pub trait Loggable: Clone + Send + Sync + Sized + 'static {
    /// Fully qualified extension-type name, e.g. `tessera.datatypes.Float32`.
    const TYPE_NAME: &'static str;

    /// The physical Arrow representation of this type.
    fn arrow_datatype() -> DataType;

    /// Encodes a sequence of optional values into a columnar array, order
    /// preserved, with `None` encoded as a null slot.
    fn to_arrow_opt(values: impl IntoIterator<Item = Option<Self>>) -> Result<ArrayRef>;

    /// Encodes a slice of values into a columnar array with no null slots.
    fn to_arrow(values: &[Self]) -> Result<ArrayRef> {
        Self::to_arrow_opt(values.iter().cloned().map(Some))
    }

    /// Decodes a columnar array into native values, preserving null slots.
    ///
    /// Fails with a corrupt-data error if the array's physical layout does
    /// not match [`Self::arrow_datatype`], or with a not-implemented error
    /// for codecs whose decode path is intentionally unfinished.
    fn from_arrow_opt(array: &dyn Array) -> Result<Vec<Option<Self>>>;

    /// Decodes a columnar array that is expected to carry no nulls.
    fn from_arrow(array: &dyn Array) -> Result<Vec<Self>> {
        Self::from_arrow_opt(array)?
            .into_iter()
            .enumerate()
            .map(|(row, value)| {
                value.ok_or_else(|| {
                    Error::corrupt_data(Self::TYPE_NAME, format!("unexpected null at row {row}"))
                })
            })
            .collect()
    }
}

/// Downcasts an untyped array to a concrete Arrow array type, reporting a
/// corrupt-data error (malformed columnar cells) on mismatch.
pub(crate) fn downcast_array<'a, A: Array + 'static>(
    array: &'a dyn Array,
    type_name: &str,
) -> Result<&'a A> {
    array.as_any().downcast_ref::<A>().ok_or_else(|| {
        Error::corrupt_data(
            type_name,
            format!("unexpected physical cell layout {}", array.data_type()),
        )
    })
}
