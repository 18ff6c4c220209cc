//! # Resource Context
//!
//! This crate provides the shared, accumulating registry that transformer stages write
//! infrastructure resources into. Later stages render everything in the registry into a
//! deployable template; this crate only stores, groups and orders.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Entry Layer** ([`ResourceEntry`]) - What a stored resource must be able to tell us
//!    (its kind and the keys it depends on).
//! 2. **Registry Layer** ([`ResourceRegistry`]) - The get/set/exists/stack-mapping contract
//!    that transformer stages program against.
//! 3. **Storage Layer** ([`TransformerContext`]) - The in-memory implementation, with
//!    stack extraction and dependency ordering on top.
//!
//! Transformer stages are written against the trait, not the struct, so they can be
//! exercised against [`mock::MockRegistry`] in tests.
//!
//! ## Example
//!
//! ```rust
//! use resource_context::{ResourceEntry, ResourceKey, ResourceRegistry, TransformerContext};
//!
//! #[derive(Clone, Debug)]
//! struct Bucket {
//!     depends_on: Vec<ResourceKey>,
//! }
//!
//! impl ResourceEntry for Bucket {
//!     fn kind(&self) -> &'static str { "Bucket" }
//!     fn depends_on(&self) -> &[ResourceKey] { &self.depends_on }
//! }
//!
//! let mut ctx = TransformerContext::new();
//! let key = ResourceKey::from("AssetsBucket");
//!
//! if !ctx.has_resource(&key) {
//!     ctx.set_resource(key.clone(), Bucket { depends_on: vec![] });
//!     ctx.map_resource_to_stack("StorageStack", &key);
//! }
//!
//! assert_eq!(ctx.stack_of(&key), Some("StorageStack"));
//! assert_eq!(ctx.dependency_order().unwrap(), vec![key]);
//! ```
//!
//! ## Concurrency Model
//!
//! A registry is owned by one transformer pass at a time and is mutated through `&mut`.
//! The check-then-insert sequences callers perform are therefore never interleaved.

pub mod context;
pub mod entry;
pub mod error;
pub mod mock;
pub mod registry;
pub mod tracing;

// Re-export core types for convenience
pub use context::TransformerContext;
pub use entry::{ResourceEntry, ResourceKey};
pub use error::ContextError;
pub use registry::ResourceRegistry;
