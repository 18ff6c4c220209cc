//! # Mock Registry & Testing Guide
//!
//! The `MockRegistry<R>` type implements the same [`ResourceRegistry`] API as
//! [`TransformerContext`] but records every call and checks writes against an
//! expectation queue. It lets you assert *exactly* which resources a transformer stage
//! creates, and in which order, or that it creates none at all.
//!
//! ## When to use the Mock vs the Real Context
//!
//! | Feature | MockRegistry | TransformerContext |
//! |---------|--------------|--------------------|
//! | **Write assertions** | Every `set_resource` must be expected | None |
//! | **Call log** | Full (`calls()`) | Tracing only |
//! | **State** | Real (wraps a context) | Real |
//! | **Use Case** | Idempotency and write-order tests | Whole-pipeline tests |
//!
//! ## Example
//!
//! ```rust
//! use resource_context::mock::MockRegistry;
//! use resource_context::{ResourceEntry, ResourceKey, ResourceRegistry, TransformerContext};
//!
//! #[derive(Clone, Debug)]
//! struct Queue;
//! impl ResourceEntry for Queue {
//!     fn kind(&self) -> &'static str { "Queue" }
//!     fn depends_on(&self) -> &[ResourceKey] { &[] }
//! }
//!
//! // 1. Expect one write
//! let mut mock = MockRegistry::<Queue>::new();
//! mock.expect_set("JobsQueue");
//!
//! // 2. Run the code under test
//! let key = ResourceKey::from("JobsQueue");
//! if !mock.has_resource(&key) {
//!     mock.set_resource(key, Queue);
//! }
//!
//! // 3. Verify
//! mock.verify();
//! assert_eq!(mock.writes(), 1);
//!
//! // A second pass over the same registry must not write again
//! let mut again = MockRegistry::seeded(mock.into_inner());
//! let key = ResourceKey::from("JobsQueue");
//! if !again.has_resource(&key) {
//!     again.set_resource(key, Queue);
//! }
//! assert_eq!(again.writes(), 0);
//! ```

use crate::context::TransformerContext;
use crate::entry::{ResourceEntry, ResourceKey};
use crate::registry::ResourceRegistry;
use std::cell::RefCell;
use std::collections::VecDeque;

/// One call made against a [`MockRegistry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryCall {
    Get(ResourceKey),
    Set(ResourceKey),
    MapToStack { stack: String, key: ResourceKey },
}

/// A registry with call recording and write expectations.
///
/// Writes are strict: a `set_resource` with no matching expectation at the front of the
/// queue panics, so unexpected mutations fail the test at the point they happen.
pub struct MockRegistry<R: ResourceEntry> {
    inner: TransformerContext<R>,
    calls: RefCell<Vec<RegistryCall>>,
    expectations: VecDeque<ResourceKey>,
}

impl<R: ResourceEntry> Default for MockRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ResourceEntry> MockRegistry<R> {
    /// Creates a mock over an empty context.
    pub fn new() -> Self {
        Self::seeded(TransformerContext::new())
    }

    /// Creates a mock over an existing context, e.g. one filled by an earlier pass.
    pub fn seeded(inner: TransformerContext<R>) -> Self {
        Self {
            inner,
            calls: RefCell::new(Vec::new()),
            expectations: VecDeque::new(),
        }
    }

    /// Expects the next write to be for `key`.
    pub fn expect_set(&mut self, key: impl Into<ResourceKey>) -> &mut Self {
        self.expectations.push_back(key.into());
        self
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<RegistryCall> {
        self.calls.borrow().clone()
    }

    /// Number of `set_resource` calls made so far.
    pub fn writes(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, RegistryCall::Set(_)))
            .count()
    }

    /// Verifies that all expected writes happened.
    pub fn verify(&self) {
        if !self.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining: {:?}",
                self.expectations.len(),
                self.expectations
            );
        }
    }

    /// Read access to the wrapped context.
    pub fn context(&self) -> &TransformerContext<R> {
        &self.inner
    }

    /// Gives the wrapped context back, e.g. to seed the next pass.
    pub fn into_inner(self) -> TransformerContext<R> {
        self.inner
    }
}

impl<R: ResourceEntry> ResourceRegistry<R> for MockRegistry<R> {
    fn get_resource(&self, key: &ResourceKey) -> Option<&R> {
        self.calls.borrow_mut().push(RegistryCall::Get(key.clone()));
        self.inner.get_resource(key)
    }

    fn set_resource(&mut self, key: ResourceKey, resource: R) {
        match self.expectations.pop_front() {
            Some(expected) if expected == key => {}
            Some(expected) => panic!("Expected set_resource({expected}), got set_resource({key})"),
            None => panic!("Unexpected set_resource({key})"),
        }
        self.calls.borrow_mut().push(RegistryCall::Set(key.clone()));
        self.inner.set_resource(key, resource);
    }

    fn map_resource_to_stack(&mut self, stack: &str, key: &ResourceKey) {
        self.calls.borrow_mut().push(RegistryCall::MapToStack {
            stack: stack.to_string(),
            key: key.clone(),
        });
        self.inner.map_resource_to_stack(stack, key);
    }
}
