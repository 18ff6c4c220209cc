//! # Context Errors
//!
//! Errors raised by the registry itself. Inserting and reading never fail; only
//! whole-graph operations such as dependency ordering do.

use crate::entry::ResourceKey;

/// Errors that can occur within the resource context.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ContextError {
    #[error("Resource {resource} depends on unknown resource {dependency}")]
    UnknownDependency {
        resource: ResourceKey,
        dependency: ResourceKey,
    },
    #[error("Dependency cycle between resources: {0:?}")]
    DependencyCycle(Vec<ResourceKey>),
}
