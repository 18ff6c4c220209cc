//! # Resolver Attacher
//!
//! One resolver per generated field, bound to the shared data source and function
//! configuration built by [`GraphBuilder`](crate::graph::GraphBuilder).
//!
//! | Operation | Type       | Field for `Widget` |
//! |-----------|------------|--------------------|
//! | create    | `Mutation` | `createWidget`     |
//! | update    | `Mutation` | `updateWidget`     |
//! | delete    | `Mutation` | `deleteWidget`     |
//! | get       | `Query`    | `getWidget`        |
//! | list      | `Query`    | `listWidgets`      |
//!
//! Resolver keys are not checked for existence before writing. Each `(type, operation)`
//! pair is visited once per schema pass, so a collision means the caller processed the
//! same type twice.

use crate::config::TransformerConfig;
use crate::expression::Expr;
use crate::graph::FunctionGraph;
use crate::naming::{self, Purpose};
use crate::resources::{Resolver, Resource};
use resource_context::{ResourceKey, ResourceRegistry};
use std::fmt;
use tracing::{info, instrument};

/// Root operation type a generated field lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    Query,
    Mutation,
}

impl OperationType {
    pub fn as_str(self) -> &'static str {
        match self {
            OperationType::Query => "Query",
            OperationType::Mutation => "Mutation",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed set of generated operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Update,
    Delete,
    Get,
    List,
}

impl Operation {
    /// Attachment order for one annotated type.
    pub const ALL: [Operation; 5] = [
        Operation::Create,
        Operation::Update,
        Operation::Delete,
        Operation::Get,
        Operation::List,
    ];

    pub fn operation_type(self) -> OperationType {
        match self {
            Operation::Create | Operation::Update | Operation::Delete => OperationType::Mutation,
            Operation::Get | Operation::List => OperationType::Query,
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::Get => "get",
            Operation::List => "list",
        }
    }

    /// Field name for this operation on `type_name`; `list` uses the plural.
    pub fn field_name(self, type_name: &str) -> String {
        let subject = match self {
            Operation::List => naming::plural(type_name),
            _ => type_name.to_string(),
        };
        format!("{}{}", self.verb(), naming::upper_first(&subject))
    }
}

/// Writes resolver resources into the registry.
pub struct ResolverAttacher<'a> {
    config: &'a TransformerConfig,
}

impl<'a> ResolverAttacher<'a> {
    pub fn new(config: &'a TransformerConfig) -> Self {
        Self { config }
    }

    /// Create the resolver for `field_name` on `operation_type` and return its key.
    #[instrument(skip(self, ctx, graph), fields(function_config = %graph.function_config))]
    pub fn attach<R: ResourceRegistry<Resource>>(
        &self,
        ctx: &mut R,
        graph: &FunctionGraph,
        operation_type: OperationType,
        field_name: &str,
    ) -> ResourceKey {
        let key = naming::resolver_key(operation_type.as_str(), field_name);
        let resolver = Resolver::new(
            Expr::get_att(self.config.api_logical_id.clone(), "ApiId"),
            operation_type.as_str(),
            field_name,
            graph.data_source.clone(),
            graph.function_config.clone(),
        );

        ctx.set_resource(key.clone(), Resource::Resolver(resolver));
        ctx.map_resource_to_stack(&self.config.stack_name, &key);
        info!(purpose = %Purpose::Resolver, %key, stack = %self.config.stack_name, "Created");
        key
    }
}
