//! # Model Function Transformer
//!
//! > **Turn `@modelFunction` on a `@model` type into a shared, deduplicated resource graph.**
//!
//! Given a type like
//!
//! ```graphql
//! type Widget @model @modelFunction(name: "widgets-${env}", region: "us-east-1") { ... }
//! ```
//!
//! the transformer writes an execution role, a function-backed data source, a function
//! configuration and five resolvers (`createWidget`, `updateWidget`, `deleteWidget`,
//! `getWidget`, `listWidgets`) into a shared [`TransformerContext`]. Several types naming
//! the same function share one role, data source and function configuration.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Idempotent by key
//! Every shared resource key is a pure function of `(name, region)`. The builder checks
//! the registry before each write, so running it again is a no-op that returns the same
//! keys. See [`graph`].
//!
//! ### Deferred expressions, not strings
//! Anything resolved at deploy time (the function address, the role name) is an
//! [`Expr`], including the two-branch `Conditional` on whether an environment
//! parameter is set. Tests inspect the branches directly.
//!
//! ### Injected registry and configuration
//! The builder only sees the [`ResourceRegistry`] trait and a [`TransformerConfig`].
//! Tests swap in [`MockRegistry`](resource_context::mock::MockRegistry) to assert the
//! exact write sequence.
//!
//! ## 🗺️ Module Tour
//!
//! | Module | Role |
//! |--------|------|
//! | [`transformer`] | Entry point: validation, then graph, then resolvers |
//! | [`graph`] | Role, data source and function configuration, created at most once |
//! | [`resolver`] | One resolver per generated field |
//! | [`address`] | Environment-aware function address |
//! | [`naming`] | Deterministic resource keys and display names |
//! | [`resources`] | Typed descriptors and their template fragments |
//! | [`mapping`] | Request/response mapping templates |
//! | [`expression`] | Deploy-time intrinsic expressions |
//! | [`directive`] | Annotated types and directive arguments |
//! | [`config`] / [`error`] | Configuration and error types |
//!
//! The registry itself lives in the `resource-context` crate.
//!
//! ## 🚀 Quick Start
//!
//! ```
//! use model_function_transformer::directive::{AnnotatedType, Directive};
//! use model_function_transformer::ModelFunctionTransformer;
//! use resource_context::TransformerContext;
//!
//! let widget = AnnotatedType::new("Widget")
//!     .with_directive(Directive::new("model"))
//!     .with_directive(Directive::new("modelFunction").with_argument("name", "echo"));
//!
//! let mut ctx = TransformerContext::new();
//! let outcomes = ModelFunctionTransformer::default()
//!     .transform_schema(&[widget], &mut ctx)
//!     .unwrap();
//!
//! assert_eq!(outcomes[0].resolvers.len(), 5);
//! assert_eq!(ctx.len(), 8);
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod address;
pub mod config;
pub mod directive;
pub mod error;
pub mod expression;
pub mod graph;
pub mod mapping;
pub mod naming;
pub mod resolver;
pub mod resources;
pub mod transformer;

pub use config::TransformerConfig;
pub use error::TransformerError;
pub use expression::Expr;
pub use graph::{FunctionGraph, GraphBuilder};
pub use resolver::{Operation, OperationType, ResolverAttacher};
pub use resources::Resource;
pub use transformer::{ModelFunctionTransformer, TransformOutcome, TransformPhase};

pub use resource_context::{ResourceRegistry, TransformerContext};
