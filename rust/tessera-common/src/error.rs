use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

pub type StdErrorBoxed = Box<dyn std::error::Error + Send + Sync + 'static>;

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// `true` for the "codec intentionally unfinished" signal, the one
    /// condition callers are expected to branch on rather than treat as
    /// fatal.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self.kind(), ErrorKind::NotImplemented { .. })
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn conversion(datatype: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::Conversion {
                datatype: datatype.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Error {
        Error(
            ErrorKind::TypeMismatch {
                expected: expected.into(),
                actual: actual.into(),
            }
            .into(),
        )
    }

    pub fn missing_required_field(field: impl Into<String>) -> Error {
        Error(
            ErrorKind::MissingRequiredField {
                field: field.into(),
            }
            .into(),
        )
    }

    pub fn length_mismatch(field: impl Into<String>, expected: usize, actual: usize) -> Error {
        Error(
            ErrorKind::LengthMismatch {
                field: field.into(),
                expected,
                actual,
            }
            .into(),
        )
    }

    pub fn type_conflict(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::TypeConflict {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn unknown_type(name: impl Into<String>) -> Error {
        Error(ErrorKind::UnknownType { name: name.into() }.into())
    }

    pub fn corrupt_data(element: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::CorruptData {
                element: element.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn not_implemented(message: impl Into<String>) -> Error {
        Error(
            ErrorKind::NotImplemented {
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn arrow<E>(context: impl Into<String>, source: E) -> Error
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error(
            ErrorKind::Arrow {
                context: context.into(),
                source: Box::new(source),
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("cannot convert value to '{datatype}': {message}")]
    Conversion { datatype: String, message: String },

    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("missing required field '{field}'")]
    MissingRequiredField { field: String },

    #[error("length mismatch for field '{field}': expected {expected}, got {actual}")]
    LengthMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("extension type '{name}' already registered with a different binding: {message}")]
    TypeConflict { name: String, message: String },

    #[error("unknown extension type '{name}'")]
    UnknownType { name: String },

    #[error("corrupt columnar data in '{element}': {message}")]
    CorruptData { element: String, message: String },

    #[error("not yet implemented: {message}")]
    NotImplemented { message: String },

    #[error("Arrow error: {context}")]
    Arrow {
        context: String,
        source: StdErrorBoxed,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<std::convert::Infallible> for Error {
    fn from(_: std::convert::Infallible) -> Self {
        Error::invalid_arg("conversion", "infallible")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_implemented_is_branchable() {
        let err = Error::not_implemented("MeshProperties decode");
        assert!(err.is_not_implemented());

        let err = Error::unknown_type("tessera.components.Nope");
        assert!(!err.is_not_implemented());
    }

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = Error::missing_required_field("vertex_positions");
        assert!(err.to_string().contains("vertex_positions"));

        let err = Error::length_mismatch("vertex_colors", 3, 2);
        let msg = err.to_string();
        assert!(msg.contains("vertex_colors"));
        assert!(msg.contains('3'));
        assert!(msg.contains('2'));
    }
}
