//! Demo: two `@model` types sharing one function.
//!
//! Prints every generated resource as a JSON template fragment, dependencies first.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run   # include reuse decisions and phase changes
//! ```

use model_function_transformer::directive::{AnnotatedType, Directive};
use model_function_transformer::ModelFunctionTransformer;
use resource_context::tracing::setup_tracing;
use resource_context::{ResourceRegistry, TransformerContext};
use serde_json::json;
use tracing::info;

fn model_type(name: &str) -> AnnotatedType {
    AnnotatedType::new(name)
        .with_directive(Directive::new("model"))
        .with_directive(
            Directive::new("modelFunction")
                .with_argument("name", "shared-fn-${env}")
                .with_argument("region", "us-east-1"),
        )
}

fn main() -> Result<(), String> {
    setup_tracing();

    let schema = vec![
        model_type("Widget"),
        model_type("Gadget"),
        AnnotatedType::new("Note").with_directive(Directive::new("model")),
    ];

    let transformer = ModelFunctionTransformer::default();
    let mut ctx = TransformerContext::new();
    let outcomes = transformer
        .transform_schema(&schema, &mut ctx)
        .map_err(|e| e.to_string())?;

    for outcome in &outcomes {
        info!(
            type_name = %outcome.type_name,
            function_config = %outcome.graph.function_config,
            resolvers = outcome.resolvers.len(),
            "Transformed"
        );
    }

    let order = ctx.dependency_order().map_err(|e| e.to_string())?;
    let mut resources = Vec::with_capacity(order.len());
    for key in order {
        if let Some(resource) = ctx.get_resource(&key) {
            resources.push(json!({ "LogicalId": key, "Resource": resource }));
        }
    }

    let stack = &transformer.config().stack_name;
    info!(stack = %stack, resources = ctx.resources_in_stack(stack).len(), "Done");

    let rendered = serde_json::to_string_pretty(&resources).map_err(|e| e.to_string())?;
    println!("{rendered}");
    Ok(())
}
