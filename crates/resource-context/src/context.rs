//! # Transformer Context
//!
//! The in-memory registry shared by every transformer pass.
//!
//! ## Key Types
//!
//! - [`TransformerContext`]: resources keyed by [`ResourceKey`] plus the stack-membership
//!   side table.
//!
//! Both tables are `BTreeMap`s, so iteration, stack extraction and dependency ordering
//! are reproducible from one run to the next.

use crate::entry::{ResourceEntry, ResourceKey};
use crate::error::ContextError;
use crate::registry::ResourceRegistry;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, warn};

/// The accumulating resource registry.
///
/// # Architecture Note
/// The context owns every descriptor written by every transformer pass. Stages never
/// hold references into it across calls; they look resources up by key again, which
/// keeps the borrow story simple and lets each stage take `&mut impl ResourceRegistry`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformerContext<R: ResourceEntry> {
    resources: BTreeMap<ResourceKey, R>,
    stack_mapping: BTreeMap<ResourceKey, String>,
}

impl<R: ResourceEntry> Default for TransformerContext<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ResourceEntry> TransformerContext<R> {
    pub fn new() -> Self {
        Self {
            resources: BTreeMap::new(),
            stack_mapping: BTreeMap::new(),
        }
    }

    /// Number of stored resources.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// All keys, in key order.
    pub fn keys(&self) -> impl Iterator<Item = &ResourceKey> {
        self.resources.keys()
    }

    /// All resources with their keys, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&ResourceKey, &R)> {
        self.resources.iter()
    }

    /// The stack a resource was mapped to, if any.
    pub fn stack_of(&self, key: &ResourceKey) -> Option<&str> {
        self.stack_mapping.get(key).map(String::as_str)
    }

    /// Every resource mapped to `stack`, in key order.
    ///
    /// Resources that were mapped but never stored are skipped.
    pub fn resources_in_stack<'a>(&'a self, stack: &'a str) -> Vec<(&'a ResourceKey, &'a R)> {
        self.stack_mapping
            .iter()
            .filter(|(_, owner)| owner.as_str() == stack)
            .filter_map(|(key, _)| self.resources.get_key_value(key))
            .collect()
    }

    /// Orders every stored resource so that each one comes after everything it
    /// depends on.
    ///
    /// Resources with no remaining dependencies are emitted in key order, so the
    /// result is deterministic for a given registry.
    ///
    /// # Errors
    /// - [`ContextError::UnknownDependency`] if an edge points at a key that is not stored.
    /// - [`ContextError::DependencyCycle`] if the edges do not form a DAG.
    pub fn dependency_order(&self) -> Result<Vec<ResourceKey>, ContextError> {
        let mut pending: BTreeMap<&ResourceKey, usize> = BTreeMap::new();
        let mut dependents: BTreeMap<&ResourceKey, Vec<&ResourceKey>> = BTreeMap::new();

        for (key, resource) in &self.resources {
            let deps = resource.depends_on();
            for dep in deps {
                if !self.resources.contains_key(dep) {
                    return Err(ContextError::UnknownDependency {
                        resource: key.clone(),
                        dependency: dep.clone(),
                    });
                }
                dependents.entry(dep).or_default().push(key);
            }
            pending.insert(key, deps.len());
        }

        let mut ready: BTreeSet<&ResourceKey> = pending
            .iter()
            .filter(|(_, remaining)| **remaining == 0)
            .map(|(key, _)| *key)
            .collect();
        let mut order = Vec::with_capacity(self.resources.len());

        while let Some(key) = ready.pop_first() {
            order.push(key.clone());
            let Some(children) = dependents.get(key) else {
                continue;
            };
            for &child in children {
                if let Some(remaining) = pending.get_mut(child) {
                    *remaining -= 1;
                    if *remaining == 0 {
                        ready.insert(child);
                    }
                }
            }
        }

        if order.len() != self.resources.len() {
            let stuck: Vec<ResourceKey> = pending
                .into_iter()
                .filter(|(_, remaining)| *remaining > 0)
                .map(|(key, _)| key.clone())
                .collect();
            warn!(count = stuck.len(), "Dependency cycle");
            return Err(ContextError::DependencyCycle(stuck));
        }

        Ok(order)
    }
}

impl<R: ResourceEntry> ResourceRegistry<R> for TransformerContext<R> {
    fn get_resource(&self, key: &ResourceKey) -> Option<&R> {
        let resource = self.resources.get(key);
        debug!(%key, found = resource.is_some(), "Get");
        resource
    }

    fn set_resource(&mut self, key: ResourceKey, resource: R) {
        let kind = resource.kind();
        if self.resources.insert(key.clone(), resource).is_some() {
            warn!(kind, %key, "Overwrote existing resource");
        } else {
            info!(kind, %key, size = self.resources.len(), "Stored");
        }
    }

    fn map_resource_to_stack(&mut self, stack: &str, key: &ResourceKey) {
        debug!(stack, %key, "Mapped to stack");
        self.stack_mapping.insert(key.clone(), stack.to_string());
    }
}
