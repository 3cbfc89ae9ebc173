use crate::witness::TypeWitness;
use std::fmt;

/// Errors that can occur when accessing an [`AnyValue`](crate::AnyValue)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Attempted to access a value with a type that doesn't match what was stored
    TypeMismatch {
        /// The type currently held by the value
        actual: TypeWitness,
        /// The type the caller asked for
        requested: TypeWitness,
    },
}

impl ValueError {
    pub(crate) fn mismatch(actual: TypeWitness, requested: TypeWitness) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            actual = actual.name(),
            requested = requested.name(),
            "typed access on AnyValue failed"
        );
        ValueError::TypeMismatch { actual, requested }
    }

    /// The type that was stored when the error was raised
    pub fn actual(&self) -> TypeWitness {
        match self {
            ValueError::TypeMismatch { actual, .. } => *actual,
        }
    }

    /// The type that was requested
    pub fn requested(&self) -> TypeWitness {
        match self {
            ValueError::TypeMismatch { requested, .. } => *requested,
        }
    }
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValueError::TypeMismatch { actual, requested } => write!(
                f,
                "type mismatch: value holds `{}`, requested `{}`",
                actual, requested
            ),
        }
    }
}

impl std::error::Error for ValueError {}
