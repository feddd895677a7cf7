//! [`Batch`]: a normalized columnar array tagged with its registered
//! extension-type name.

use arrow_array::ArrayRef;
use tessera_common::{Result, error::Error};

use crate::arraylike::ArrayLike;
use crate::loggable::Loggable;
use crate::registry;

/// A columnar array of `T` values tagged with `T`'s extension-type name.
///
/// Batches are immutable once built; a new value requires a new batch. The
/// tag is always resolvable through the extension-type registry: both
/// construction paths register the type (idempotently) before tagging.
///
/// An absent optional batch is represented as `Option<Batch>::None`, a
/// sentinel distinct from a zero-length batch.
#[derive(Clone, Debug)]
pub struct Batch {
    name: &'static str,
    array: ArrayRef,
}

impl Batch {
    /// Builds a batch for a required field.
    ///
    /// Fails with a missing-required-field error when the input is absent or
    /// normalizes to a zero-length array.
    pub fn required<T: Loggable>(input: Option<ArrayLike<T>>) -> Result<Batch> {
        let binding = registry::register_loggable::<T>()?;
        let Some(input) = input else {
            return Err(Error::missing_required_field(T::TYPE_NAME));
        };
        let array = input.normalize()?;
        if array.is_empty() {
            return Err(Error::missing_required_field(T::TYPE_NAME));
        }
        Ok(Batch {
            name: binding.name(),
            array,
        })
    }

    /// Builds a batch for an optional field.
    ///
    /// Absent input (explicit no-value) yields `Ok(None)`, never an error.
    /// Present input is normalized without an emptiness check, so an empty
    /// sequence yields a zero-length batch, distinguishable from `None`.
    pub fn optional<T: Loggable>(input: Option<ArrayLike<T>>) -> Result<Option<Batch>> {
        let Some(input) = input else {
            return Ok(None);
        };
        let binding = registry::register_loggable::<T>()?;
        Ok(Some(Batch {
            name: binding.name(),
            array: input.normalize()?,
        }))
    }

    /// Reconstructs a typed batch from untyped columnar storage.
    ///
    /// Resolves `name` through the extension-type registry and validates the
    /// array's physical layout against the registered binding.
    pub fn from_registry(name: &str, array: ArrayRef) -> Result<Batch> {
        let binding = registry::resolve(name)?;
        binding.codec().validate(array.as_ref())?;
        Ok(Batch {
            name: binding.name(),
            array,
        })
    }

    pub(crate) fn from_parts(name: &'static str, array: ArrayRef) -> Batch {
        Batch { name, array }
    }

    /// The extension-type name this batch is tagged with.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The underlying columnar array, physical layout untouched.
    pub fn array(&self) -> &ArrayRef {
        &self.array
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Decodes the batch back into native values.
    pub fn decode<T: Loggable>(&self) -> Result<Vec<T>> {
        if self.name != T::TYPE_NAME {
            return Err(Error::type_mismatch(T::TYPE_NAME, self.name));
        }
        T::from_arrow(self.array.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::Float32;
    use tessera_common::error::ErrorKind;

    #[test]
    fn test_required_absent_fails() {
        let err = Batch::required::<Float32>(None).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::MissingRequiredField { .. }));
    }

    #[test]
    fn test_required_empty_fails() {
        let err = Batch::required(Some(ArrayLike::<Float32>::Sequence(vec![]))).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::MissingRequiredField { .. }));
    }

    #[test]
    fn test_optional_absent_is_a_sentinel_not_an_error() {
        let batch = Batch::optional::<Float32>(None).unwrap();
        assert!(batch.is_none());
    }

    #[test]
    fn test_optional_empty_is_a_zero_length_batch() {
        let batch = Batch::optional(Some(ArrayLike::<Float32>::Sequence(vec![])))
            .unwrap()
            .unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn test_batch_tag_is_resolvable() {
        let batch = Batch::required(Some(ArrayLike::from(Float32(1.0)))).unwrap();
        let binding = crate::registry::resolve(batch.name()).unwrap();
        assert_eq!(binding.arrow_datatype(), &Float32::arrow_datatype());
    }

    #[test]
    fn test_from_registry_round_trip() {
        let batch = Batch::required(Some(ArrayLike::from(vec![Float32(1.0), Float32(2.0)])))
            .unwrap();
        let rebuilt = Batch::from_registry(batch.name(), batch.array().clone()).unwrap();
        assert_eq!(rebuilt.decode::<Float32>().unwrap(), vec![
            Float32(1.0),
            Float32(2.0)
        ]);
    }

    #[test]
    fn test_from_registry_rejects_mismatched_storage() {
        // Registration happens as a side effect of building any batch.
        Batch::required(Some(ArrayLike::from(Float32(1.0)))).unwrap();
        let ints: ArrayRef = std::sync::Arc::new(arrow_array::Int64Array::from(vec![1i64]));
        let err = Batch::from_registry(Float32::TYPE_NAME, ints).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::TypeMismatch { .. }));
    }
}
