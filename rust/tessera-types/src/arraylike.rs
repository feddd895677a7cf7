//! [`ArrayLike`]: the tagged union of caller-supplied inputs, resolved once
//! into a canonical columnar array.

use arrow_array::ArrayRef;
use tessera_common::{Result, error::Error};

use crate::loggable::Loggable;

/// A value, a sequence of values, or a pre-built Arrow array.
///
/// `ArrayLike` is resolved exactly once by [`normalize`](ArrayLike::normalize)
/// and never inspected ad hoc downstream. Insertion order of a sequence is
/// semantically meaningful: it is the positional index within the resulting
/// array.
pub enum ArrayLike<T: Loggable> {
    /// A single value, normalized into a length-1 array.
    Single(T),

    /// An ordered sequence of values, normalized into an array of matching
    /// length.
    Sequence(Vec<T>),

    /// An already-columnar array. Passed through unchanged (zero-copy) when
    /// its physical type matches `T`'s declared representation.
    Array(ArrayRef),
}

impl<T: Loggable> ArrayLike<T> {
    /// Resolves this input into one canonical columnar array.
    ///
    /// Normalization is idempotent: feeding an already-normalized array back
    /// in yields the identical array.
    ///
    /// Fails with a type-mismatch error when a pre-built array's physical
    /// type cannot be unified with `T`'s declared representation, or with a
    /// not-implemented error when no conversion path exists yet for this
    /// datatype.
    pub fn normalize(self) -> Result<ArrayRef> {
        match self {
            ArrayLike::Single(value) => T::to_arrow(std::slice::from_ref(&value)),
            ArrayLike::Sequence(values) => T::to_arrow(&values),
            ArrayLike::Array(array) => {
                let expected = T::arrow_datatype();
                if array.data_type() == &expected {
                    Ok(array)
                } else {
                    Err(Error::type_mismatch(
                        expected.to_string(),
                        array.data_type().to_string(),
                    ))
                }
            }
        }
    }

    /// Number of values this input will occupy once normalized.
    pub fn len(&self) -> usize {
        match self {
            ArrayLike::Single(_) => 1,
            ArrayLike::Sequence(values) => values.len(),
            ArrayLike::Array(array) => array.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Loggable> From<T> for ArrayLike<T> {
    fn from(value: T) -> Self {
        ArrayLike::Single(value)
    }
}

impl<T: Loggable> From<Vec<T>> for ArrayLike<T> {
    fn from(values: Vec<T>) -> Self {
        ArrayLike::Sequence(values)
    }
}

impl<T: Loggable> From<&[T]> for ArrayLike<T> {
    fn from(values: &[T]) -> Self {
        ArrayLike::Sequence(values.to_vec())
    }
}

impl<T: Loggable, const N: usize> From<[T; N]> for ArrayLike<T> {
    fn from(values: [T; N]) -> Self {
        ArrayLike::Sequence(values.into())
    }
}

impl<T: Loggable> From<ArrayRef> for ArrayLike<T> {
    fn from(array: ArrayRef) -> Self {
        ArrayLike::Array(array)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::datatypes::Float32;

    #[test]
    fn test_single_normalizes_to_length_one() {
        let array = ArrayLike::from(Float32(1.5)).normalize().unwrap();
        assert_eq!(array.len(), 1);
        assert_eq!(array.data_type(), &Float32::arrow_datatype());
    }

    #[test]
    fn test_sequence_preserves_order() {
        let input = vec![Float32(3.0), Float32(1.0), Float32(2.0)];
        let array = ArrayLike::from(input.clone()).normalize().unwrap();
        assert_eq!(Float32::from_arrow(array.as_ref()).unwrap(), input);
    }

    #[test]
    fn test_prebuilt_array_passes_through_zero_copy() {
        let array = ArrayLike::from(vec![Float32(1.0), Float32(2.0)])
            .normalize()
            .unwrap();
        let again = ArrayLike::<Float32>::from(array.clone())
            .normalize()
            .unwrap();
        assert!(Arc::ptr_eq(&array, &again));
    }

    #[test]
    fn test_incompatible_prebuilt_array_is_a_type_mismatch() {
        let ints: ArrayRef = Arc::new(arrow_array::Int64Array::from(vec![1i64, 2]));
        let err = ArrayLike::<Float32>::from(ints).normalize().unwrap_err();
        assert!(matches!(
            err.kind(),
            tessera_common::error::ErrorKind::TypeMismatch { .. }
        ));
    }
}
