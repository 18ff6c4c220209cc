//! # Directive Handler
//!
//! Entry point for one `@modelFunction` occurrence. A single pass moves through:
//!
//! ```text
//! Unvalidated -> Validated -> GraphBuilt -> ResolversAttached
//! ```
//!
//! Validation happens before the registry is touched, so a rejected type leaves the
//! context exactly as it was. Past validation nothing can fail.
//!
//! [`ModelFunctionTransformer::transform_schema`] runs the handler over a whole schema,
//! one type at a time, which is the only ordering the idempotency checks rely on.

use crate::config::TransformerConfig;
use crate::directive::{get_directive_arguments, AnnotatedType, Directive};
use crate::error::TransformerError;
use crate::graph::{FunctionGraph, GraphBuilder};
use crate::resolver::{Operation, ResolverAttacher};
use crate::resources::Resource;
use resource_context::{ResourceKey, ResourceRegistry};
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// Progress of one directive occurrence through the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformPhase {
    Unvalidated,
    Validated,
    GraphBuilt,
    ResolversAttached,
}

impl fmt::Display for TransformPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransformPhase::Unvalidated => "Unvalidated",
            TransformPhase::Validated => "Validated",
            TransformPhase::GraphBuilt => "GraphBuilt",
            TransformPhase::ResolversAttached => "ResolversAttached",
        };
        f.write_str(name)
    }
}

/// What one directive occurrence produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutcome {
    pub type_name: String,
    pub graph: FunctionGraph,
    /// Resolver keys in attachment order.
    pub resolvers: Vec<ResourceKey>,
    pub phase: TransformPhase,
}

#[derive(Debug, Clone, Default)]
pub struct ModelFunctionTransformer {
    config: TransformerConfig,
}

impl ModelFunctionTransformer {
    pub fn new(config: TransformerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransformerConfig {
        &self.config
    }

    pub fn directive_name(&self) -> &str {
        &self.config.directive_name
    }

    /// Handle one directive occurrence on `definition`.
    ///
    /// # Errors
    ///
    /// * [`TransformerError::InvalidDirective`] if the type lacks the `@model` directive or
    ///   carries the directive more than once.
    /// * [`TransformerError::MissingArgument`] / [`TransformerError::InvalidArguments`] if
    ///   the directive's arguments cannot be read.
    ///
    /// The registry is unchanged whenever an error is returned.
    #[instrument(skip(self, definition, directive, ctx), fields(type_name = %definition.name))]
    pub fn object<R: ResourceRegistry<Resource>>(
        &self,
        definition: &AnnotatedType,
        directive: &Directive,
        ctx: &mut R,
    ) -> Result<TransformOutcome, TransformerError> {
        let mut phase = TransformPhase::Unvalidated;

        self.validate(definition)?;
        let args = get_directive_arguments(directive)?;
        advance(&mut phase, TransformPhase::Validated);

        let graph = GraphBuilder::new(&self.config).ensure(ctx, &args);
        advance(&mut phase, TransformPhase::GraphBuilt);

        let attacher = ResolverAttacher::new(&self.config);
        let resolvers = Operation::ALL
            .iter()
            .map(|op| {
                let field_name = op.field_name(&definition.name);
                attacher.attach(ctx, &graph, op.operation_type(), &field_name)
            })
            .collect::<Vec<_>>();
        advance(&mut phase, TransformPhase::ResolversAttached);

        info!(
            function = %args.name,
            function_config = %graph.function_config,
            resolvers = resolvers.len(),
            "Attached model function"
        );

        Ok(TransformOutcome {
            type_name: definition.name.clone(),
            graph,
            resolvers,
            phase,
        })
    }

    /// Run [`object`](Self::object) over every type carrying the directive, in order.
    ///
    /// Stops at the first error. Types processed before it keep their resources.
    pub fn transform_schema<R: ResourceRegistry<Resource>>(
        &self,
        types: &[AnnotatedType],
        ctx: &mut R,
    ) -> Result<Vec<TransformOutcome>, TransformerError> {
        let mut outcomes = Vec::new();
        for definition in types {
            let Some(directive) = definition.directive(self.directive_name()) else {
                debug!(type_name = %definition.name, "No @{} directive, skipping", self.directive_name());
                continue;
            };
            outcomes.push(self.object(definition, directive, ctx)?);
        }
        info!(types = outcomes.len(), "Schema transformed");
        Ok(outcomes)
    }

    fn validate(&self, definition: &AnnotatedType) -> Result<(), TransformerError> {
        if definition.directives.is_empty()
            || !definition.has_directive(&self.config.model_directive_name)
        {
            warn!(type_name = %definition.name, "Rejected: missing @{}", self.config.model_directive_name);
            return Err(TransformerError::invalid_directive(
                &definition.name,
                format!(
                    "Types annotated with @{} must also be annotated with @{}.",
                    self.config.directive_name, self.config.model_directive_name
                ),
            ));
        }

        let occurrences = definition
            .directives
            .iter()
            .filter(|d| d.name == self.config.directive_name)
            .count();
        if occurrences > 1 {
            warn!(type_name = %definition.name, occurrences, "Rejected: repeated @{}", self.config.directive_name);
            return Err(TransformerError::invalid_directive(
                &definition.name,
                format!(
                    "@{} may appear at most once per type, found {occurrences}.",
                    self.config.directive_name
                ),
            ));
        }
        Ok(())
    }
}

fn advance(phase: &mut TransformPhase, next: TransformPhase) {
    debug!(from = %phase, to = %next, "Phase change");
    *phase = next;
}
