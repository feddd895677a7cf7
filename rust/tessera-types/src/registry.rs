//! Process-wide extension-type registry.
//!
//! Maps a globally unique extension-type name to its physical Arrow
//! representation and the codec strategy object responsible for it. The
//! registry is initialized lazily on first use and never torn down.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use arrow_array::{Array, ArrayRef};
use arrow_schema::DataType;
use tessera_common::{Result, error::Error};

use crate::loggable::Loggable;

/// Codec strategy object backing a registered extension type.
///
/// Implementations are injected at registration time; there is no dynamic
/// patching of generated behavior.
pub trait ArrayCodec: Send + Sync + 'static {
    /// The extension-type name this codec is registered under.
    fn type_name(&self) -> &'static str;

    /// The physical Arrow representation of arrays handled by this codec.
    fn arrow_datatype(&self) -> DataType;

    /// Canonical zero-length array for this type.
    fn empty_array(&self) -> ArrayRef {
        arrow_array::new_empty_array(&self.arrow_datatype())
    }

    /// Validates that an untyped array matches this codec's physical layout.
    fn validate(&self, array: &dyn Array) -> Result<()> {
        let expected = self.arrow_datatype();
        if array.data_type() == &expected {
            Ok(())
        } else {
            Err(Error::type_mismatch(
                expected.to_string(),
                array.data_type().to_string(),
            ))
        }
    }
}

/// [`ArrayCodec`] derived from a [`Loggable`] implementation.
pub struct LoggableCodec<T: Loggable> {
    _marker: PhantomData<fn() -> T>,
}

impl<T: Loggable> Default for LoggableCodec<T> {
    fn default() -> Self {
        LoggableCodec {
            _marker: PhantomData,
        }
    }
}

impl<T: Loggable> ArrayCodec for LoggableCodec<T> {
    fn type_name(&self) -> &'static str {
        T::TYPE_NAME
    }

    fn arrow_datatype(&self) -> DataType {
        T::arrow_datatype()
    }
}

/// A registered (name, physical type, codec) binding.
#[derive(Clone)]
pub struct ExtensionBinding {
    name: &'static str,
    datatype: DataType,
    codec: Arc<dyn ArrayCodec>,
}

impl ExtensionBinding {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn arrow_datatype(&self) -> &DataType {
        &self.datatype
    }

    pub fn codec(&self) -> &Arc<dyn ArrayCodec> {
        &self.codec
    }

    pub fn empty_array(&self) -> ArrayRef {
        self.codec.empty_array()
    }
}

impl std::fmt::Debug for ExtensionBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtensionBinding")
            .field("name", &self.name)
            .field("datatype", &self.datatype)
            .finish()
    }
}

static REGISTRY: LazyLock<RwLock<HashMap<&'static str, ExtensionBinding>>> =
    LazyLock::new(Default::default);

/// Registers an extension type.
///
/// Registration is idempotent for identical bindings: the first writer wins
/// and later identical registrations (including concurrent ones) observe a
/// no-op. Re-registering a name with a different physical type fails with a
/// type-conflict error and leaves the existing binding untouched.
pub fn register(codec: Arc<dyn ArrayCodec>) -> Result<ExtensionBinding> {
    let name = codec.type_name();
    let datatype = codec.arrow_datatype();
    {
        let map = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = map.get(name) {
            return check_binding(existing, &datatype);
        }
    }
    let mut map = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    match map.entry(name) {
        std::collections::hash_map::Entry::Occupied(entry) => {
            // Lost the race to another writer.
            check_binding(entry.get(), &datatype)
        }
        std::collections::hash_map::Entry::Vacant(entry) => {
            log::debug!("registered extension type '{name}' with physical type {datatype}");
            let binding = ExtensionBinding {
                name,
                datatype,
                codec,
            };
            entry.insert(binding.clone());
            Ok(binding)
        }
    }
}

/// Registers `T`'s codec under [`Loggable::TYPE_NAME`].
pub fn register_loggable<T: Loggable>() -> Result<ExtensionBinding> {
    register(Arc::new(LoggableCodec::<T>::default()))
}

/// Resolves a registered extension-type name to its binding.
pub fn resolve(name: &str) -> Result<ExtensionBinding> {
    REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(name)
        .cloned()
        .ok_or_else(|| Error::unknown_type(name))
}

fn check_binding(existing: &ExtensionBinding, datatype: &DataType) -> Result<ExtensionBinding> {
    if existing.datatype == *datatype {
        Ok(existing.clone())
    } else {
        Err(Error::type_conflict(
            existing.name,
            format!(
                "existing physical type {}, new physical type {datatype}",
                existing.datatype
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_common::error::ErrorKind;

    #[derive(Clone)]
    struct WidgetA;

    impl Loggable for WidgetA {
        const TYPE_NAME: &'static str = "tessera.testing.registry.Widget";

        fn arrow_datatype() -> DataType {
            DataType::UInt8
        }

        fn to_arrow_opt(_: impl IntoIterator<Item = Option<Self>>) -> Result<ArrayRef> {
            unreachable!()
        }

        fn from_arrow_opt(_: &dyn Array) -> Result<Vec<Option<Self>>> {
            unreachable!()
        }
    }

    #[derive(Clone)]
    struct WidgetB;

    impl Loggable for WidgetB {
        const TYPE_NAME: &'static str = "tessera.testing.registry.Widget";

        fn arrow_datatype() -> DataType {
            DataType::Int64
        }

        fn to_arrow_opt(_: impl IntoIterator<Item = Option<Self>>) -> Result<ArrayRef> {
            unreachable!()
        }

        fn from_arrow_opt(_: &dyn Array) -> Result<Vec<Option<Self>>> {
            unreachable!()
        }
    }

    #[test]
    fn test_register_is_idempotent_for_identical_bindings() {
        register_loggable::<WidgetA>().unwrap();
        register_loggable::<WidgetA>().unwrap();
        let binding = resolve(WidgetA::TYPE_NAME).unwrap();
        assert_eq!(binding.arrow_datatype(), &DataType::UInt8);
    }

    #[test]
    fn test_conflicting_rebind_fails_and_first_writer_wins() {
        register_loggable::<WidgetA>().unwrap();
        let err = register_loggable::<WidgetB>().unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::TypeConflict { name, .. }
            if name == WidgetA::TYPE_NAME));
        let binding = resolve(WidgetA::TYPE_NAME).unwrap();
        assert_eq!(binding.arrow_datatype(), &DataType::UInt8);
    }

    #[test]
    fn test_resolve_unregistered_name_fails() {
        let err = resolve("tessera.testing.registry.Nothing").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::UnknownType { .. }));
    }

    #[test]
    fn test_concurrent_identical_registration_is_safe() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| register_loggable::<WidgetA>().map(|_| ())))
            .collect();
        for handle in handles {
            handle.join().unwrap().unwrap();
        }
    }
}
