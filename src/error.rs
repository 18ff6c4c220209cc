//! Error types for the `@modelFunction` transformer.

use resource_context::ContextError;
use thiserror::Error;

/// Errors that can occur while transforming a directive occurrence.
#[derive(Debug, Error)]
pub enum TransformerError {
    /// The directive is used somewhere it is not allowed, e.g. on a type without `@model`.
    #[error("Invalid directive usage on {type_name}: {message}")]
    InvalidDirective { type_name: String, message: String },

    /// A required directive argument is absent or blank.
    #[error("@{directive} requires a non-empty '{argument}' argument")]
    MissingArgument { directive: String, argument: String },

    /// Directive arguments could not be decoded.
    #[error("Invalid arguments for @{directive}: {source}")]
    InvalidArguments {
        directive: String,
        #[source]
        source: serde_json::Error,
    },

    /// Transformer configuration could not be parsed.
    #[error("Invalid transformer configuration: {0}")]
    Config(#[source] serde_json::Error),

    /// The resource context rejected a whole-graph operation.
    #[error(transparent)]
    Context(#[from] ContextError),
}

impl TransformerError {
    pub fn invalid_directive(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        TransformerError::InvalidDirective {
            type_name: type_name.into(),
            message: message.into(),
        }
    }
}
