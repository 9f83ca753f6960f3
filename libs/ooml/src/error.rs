//! # DSL Errors
//!
//! Error types surfaced by the modeling layer.

use thiserror::Error;

/// Errors raised by solid construction and materialization.
///
/// The adapter performs no recovery, retry, or fallback: backend failures
/// propagate to the caller of `materialize` (or of a composite factory,
/// since composites materialize their operands eagerly) boxed but otherwise
/// untouched.
#[derive(Debug, Error)]
pub enum OomlError {
    /// Constructor arguments that cannot describe a shape.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Geometry construction failed inside the geometry backend.
    #[error("geometry construction failed: {0}")]
    Geometry(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Boolean computation failed inside the BSP backend.
    #[error("boolean operation failed: {0}")]
    Boolean(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl OomlError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Wraps a geometry backend failure.
    pub fn geometry(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Geometry(Box::new(source))
    }

    /// Wraps a BSP backend failure.
    pub fn boolean(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Boolean(Box::new(source))
    }
}
