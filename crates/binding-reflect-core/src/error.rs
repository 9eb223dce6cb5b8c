//! Error types for model construction.
//!
//! Construction either succeeds completely or fails with one of these errors;
//! there is no partially built model.
//!
//! ## Error Hierarchy
//!
//! ```text
//! ReflectError
//! ├── UnknownClass    - member names a class id that does not exist
//! ├── UnresolvedType  - type id neither declared nor explained by the query
//! ├── CompositeCycle  - composite query answers loop back on themselves
//! └── Context         - any of the above, tagged with the declaration being reflected
//! ```

use thiserror::Error;

use crate::TypeId;

/// Errors that abort model construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReflectError {
    /// A member declaration names a class id that was never declared while a
    /// global scope already exists.
    #[error("unknown class identifier {class_id} for member '{member}'")]
    UnknownClass {
        /// The offending class id.
        class_id: TypeId,
        /// The declared member name.
        member: String,
    },

    /// A type id is not registered and the composite query cannot explain it.
    #[error("unresolved type {id}")]
    UnresolvedType {
        /// The id that could not be resolved.
        id: TypeId,
    },

    /// Resolving a composite type led back to itself.
    #[error("composite type {id} refers to itself")]
    CompositeCycle {
        /// The id where the cycle was detected.
        id: TypeId,
    },

    /// An error annotated with the declaration that triggered it.
    ///
    /// The wrapped error is part of the message, so it is not reported again
    /// through `Error::source`.
    #[error("{inner} while reflecting {context}")]
    Context {
        /// Declaration context, e.g. `Widget.resize`.
        context: String,
        /// The underlying error.
        inner: Box<ReflectError>,
    },
}

impl ReflectError {
    /// Wrap this error with declaration context.
    pub fn while_reflecting(self, context: impl Into<String>) -> Self {
        ReflectError::Context {
            context: context.into(),
            inner: Box::new(self),
        }
    }

    /// Get the innermost error, skipping context layers.
    pub fn root(&self) -> &ReflectError {
        match self {
            ReflectError::Context { inner, .. } => inner.root(),
            other => other,
        }
    }

    /// Check if this is (or wraps) an unknown class error.
    pub fn is_unknown_class(&self) -> bool {
        matches!(self.root(), ReflectError::UnknownClass { .. })
    }

    /// Check if this is (or wraps) an unresolved type error.
    pub fn is_unresolved_type(&self) -> bool {
        matches!(self.root(), ReflectError::UnresolvedType { .. })
    }
}
