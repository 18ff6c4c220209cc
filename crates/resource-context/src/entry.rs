//! # ResourceEntry Trait
//!
//! The `ResourceEntry` trait is the contract every stored resource implements so the
//! generic [`TransformerContext`](crate::TransformerContext) can log it and order it
//! without knowing anything about the concrete descriptor types.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// Logical identifier of a resource inside the registry.
///
/// Keys are compared and ordered as plain strings, so a `BTreeMap` keyed by
/// `ResourceKey` iterates in a stable, reproducible order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceKey(String);

impl ResourceKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for ResourceKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Trait that any resource descriptor must implement to be stored in a registry.
///
/// # Dependency Edges
/// `depends_on` lists the keys that must be provisioned before this resource.
/// The registry never validates edges on insert; [`TransformerContext::dependency_order`]
/// checks them when an order is requested.
///
/// [`TransformerContext::dependency_order`]: crate::TransformerContext::dependency_order
pub trait ResourceEntry: Clone + Debug {
    /// Short name of the resource kind (e.g., `"Role"`), used in log fields.
    fn kind(&self) -> &'static str;

    /// Keys of the resources this one depends on.
    fn depends_on(&self) -> &[ResourceKey];
}
