use crate::entry::{ResourceEntry, ResourceKey};

/// The key-value contract transformer stages use to read and write resources.
///
/// `set_resource` may overwrite an existing entry. Callers that need idempotency check
/// [`has_resource`](ResourceRegistry::has_resource) first and skip the write.
pub trait ResourceRegistry<R: ResourceEntry> {
    /// Fetch a resource by key.
    fn get_resource(&self, key: &ResourceKey) -> Option<&R>;

    /// Store a resource under `key`.
    fn set_resource(&mut self, key: ResourceKey, resource: R);

    /// Record that `key` belongs to the logical stack `stack`.
    fn map_resource_to_stack(&mut self, stack: &str, key: &ResourceKey);

    /// Check whether a resource is stored under `key`.
    fn has_resource(&self, key: &ResourceKey) -> bool {
        self.get_resource(key).is_some()
    }
}
