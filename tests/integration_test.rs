use model_function_transformer::directive::{AnnotatedType, Directive, DirectiveArguments};
use model_function_transformer::resources::Resource;
use model_function_transformer::{
    address, Expr, GraphBuilder, ModelFunctionTransformer, TransformerConfig, TransformerError,
};
use resource_context::mock::MockRegistry;
use resource_context::{ResourceEntry, ResourceKey, ResourceRegistry, TransformerContext};
use std::collections::BTreeMap;

// --- Schema fixtures ---

fn function_directive(name: &str, region: Option<&str>) -> Directive {
    let directive = Directive::new("modelFunction").with_argument("name", name);
    match region {
        Some(region) => directive.with_argument("region", region),
        None => directive,
    }
}

fn model_type(type_name: &str, function: &str, region: Option<&str>) -> AnnotatedType {
    AnnotatedType::new(type_name)
        .with_directive(Directive::new("model"))
        .with_directive(function_directive(function, region))
}

fn transform(types: &[AnnotatedType]) -> TransformerContext<Resource> {
    let mut ctx = TransformerContext::new();
    ModelFunctionTransformer::default()
        .transform_schema(types, &mut ctx)
        .expect("schema should transform");
    ctx
}

fn count_of(ctx: &TransformerContext<Resource>, kind: &str) -> usize {
    ctx.iter().filter(|(_, r)| r.kind() == kind).count()
}

/// Building the same graph twice keeps one of each shared resource and writes nothing
/// the second time.
#[test]
fn test_graph_builder_is_idempotent() {
    let config = TransformerConfig::default();
    let builder = GraphBuilder::new(&config);
    let args = DirectiveArguments::new("echo", Some("us-west-2"));

    let mut ctx = TransformerContext::new();
    let first = builder.ensure(&mut ctx, &args);
    let snapshot = ctx.clone();

    let mut mock = MockRegistry::seeded(ctx);
    let second = builder.ensure(&mut mock, &args);
    mock.verify();

    assert_eq!(mock.writes(), 0);
    assert_eq!(first, second);
    let ctx = mock.into_inner();
    assert_eq!(ctx, snapshot);
    assert_eq!(count_of(&ctx, "Role"), 1);
    assert_eq!(count_of(&ctx, "DataSource"), 1);
    assert_eq!(count_of(&ctx, "FunctionConfig"), 1);
}

#[test]
fn test_dependency_order_runs_role_to_resolvers() {
    let ctx = transform(&[model_type("Widget", "echo", None)]);
    let order = ctx.dependency_order().unwrap();
    let position = |key: &str| {
        order
            .iter()
            .position(|k| k.as_str() == key)
            .unwrap_or_else(|| panic!("{key} missing from {order:?}"))
    };

    let role = position("Echo7868AABELambdaDataSourceRole");
    let data_source = position("Echo7868AABELambdaDataSource");
    let function_config = position("InvokeEcho7868AABELambdaDataSource");
    assert!(role < data_source);
    assert!(data_source < function_config);

    for (key, resource) in ctx.iter() {
        if resource.kind() == "Resolver" {
            assert!(function_config < position(key.as_str()), "{key} before its function");
        }
    }
}

#[test]
fn test_validation_gate_leaves_registry_unchanged() {
    let mut ctx = transform(&[model_type("Widget", "echo", None)]);
    let before = ctx.clone();

    let unmodelled = AnnotatedType::new("Gadget").with_directive(function_directive("other", None));
    let err = ModelFunctionTransformer::default()
        .transform_schema(&[unmodelled], &mut ctx)
        .unwrap_err();

    assert!(matches!(err, TransformerError::InvalidDirective { .. }));
    assert_eq!(ctx.len(), before.len());
    assert_eq!(ctx, before);
}

#[test]
fn test_env_placeholder_in_function_address() {
    let config = TransformerConfig::default();
    let arn = address::function_arn("myFn-${env}", None, &config);
    let (defined, undefined) = arn.branches().unwrap();

    let mut variables = BTreeMap::new();
    variables.insert("env".to_string(), Expr::reference("env"));
    assert_eq!(
        defined,
        &Expr::sub(
            "arn:aws:lambda:${AWS::Region}:${AWS::AccountId}:function:myFn-${env}",
            variables
        )
    );
    assert_eq!(
        undefined,
        &Expr::sub(
            "arn:aws:lambda:${AWS::Region}:${AWS::AccountId}:function:myFn",
            BTreeMap::new()
        )
    );
}

#[test]
fn test_operation_coverage() {
    let ctx = transform(&[model_type("Widget", "echo", None)]);

    let mut fields: Vec<(String, String)> = ctx
        .iter()
        .filter_map(|(_, r)| r.as_resolver())
        .map(|r| (r.type_name.clone(), r.field_name.clone()))
        .collect();
    fields.sort();
    assert_eq!(
        fields,
        vec![
            ("Mutation".to_string(), "createWidget".to_string()),
            ("Mutation".to_string(), "deleteWidget".to_string()),
            ("Mutation".to_string(), "updateWidget".to_string()),
            ("Query".to_string(), "getWidget".to_string()),
            ("Query".to_string(), "listWidgets".to_string()),
        ]
    );

    for resolver in ctx.iter().filter_map(|(_, r)| r.as_resolver()) {
        let binding = resolver.binding();
        assert_eq!(binding.data_source_name.as_str(), "Echo7868AABELambdaDataSource");
        assert_eq!(binding.function_config_id.as_str(), "InvokeEcho7868AABELambdaDataSource");
    }
}

#[test]
fn test_types_share_one_function_graph() {
    let ctx = transform(&[
        model_type("Widget", "shared-fn", None),
        model_type("Gadget", "shared-fn", None),
    ]);

    assert_eq!(count_of(&ctx, "Role"), 1);
    assert_eq!(count_of(&ctx, "DataSource"), 1);
    assert_eq!(count_of(&ctx, "FunctionConfig"), 1);
    assert_eq!(count_of(&ctx, "Resolver"), 10);
    let resolver_keys: Vec<&str> = ctx
        .keys()
        .map(ResourceKey::as_str)
        .filter(|key| key.ends_with("Resolver"))
        .collect();
    assert!(resolver_keys.contains(&"QueryListWidgetsResolver"));
    assert!(resolver_keys.contains(&"QueryListGadgetsResolver"));
    assert_eq!(resolver_keys.len(), 10);

    let function_config = ResourceKey::from("InvokeSharedFn4A187C5DLambdaDataSource");
    assert!(ctx.has_resource(&function_config));
    for (key, resource) in ctx.iter().filter(|(_, r)| r.kind() == "Resolver") {
        assert_eq!(resource.depends_on(), &[function_config.clone()], "{key}");
    }
    assert_eq!(ctx.resources_in_stack("ModelFunctionStack").len(), 13);
}

#[test]
fn test_regions_keep_graphs_apart() {
    let ctx = transform(&[
        model_type("Widget", "echo", Some("us-east-1")),
        model_type("Gadget", "echo", None),
    ]);

    assert_eq!(count_of(&ctx, "FunctionConfig"), 2);
    assert!(ctx.has_resource(&ResourceKey::from("InvokeEchoUsEast11C96FF4CLambdaDataSource")));
    assert!(ctx.has_resource(&ResourceKey::from("InvokeEcho7868AABELambdaDataSource")));
}

#[test]
fn test_rendered_template_fragments() {
    let ctx = transform(&[model_type("Widget", "echo-${env}", Some("eu-west-1"))]);
    let function = ctx
        .get_resource(&ResourceKey::from("InvokeEchoEnvEuWest15AAD5D83LambdaDataSource"))
        .expect("function configuration");

    let value = serde_json::to_value(function).unwrap();
    assert_eq!(value["Type"], "AWS::AppSync::FunctionConfiguration");
    assert_eq!(value["DependsOn"][0], "EchoEnvEuWest15AAD5D83LambdaDataSource");
    assert_eq!(value["Properties"]["FunctionVersion"], "2018-05-29");

    let data_source = ctx
        .get_resource(&ResourceKey::from("EchoEnvEuWest15AAD5D83LambdaDataSource"))
        .expect("data source");
    let arn = &serde_json::to_value(data_source).unwrap()["Properties"]["LambdaConfig"]
        ["LambdaFunctionArn"]["Fn::If"];
    assert_eq!(arn[0], "HasEnvironmentParameter");
    assert_eq!(
        arn[2]["Fn::Sub"],
        "arn:aws:lambda:eu-west-1:${AWS::AccountId}:function:echo"
    );
}

/// Targets whose readable names collapse to the same PascalCase form still get their
/// own graphs, and each type's resolvers stay bound to its own function.
#[test]
fn test_similar_targets_do_not_share_a_graph() {
    let mut ctx = TransformerContext::new();
    let outcomes = ModelFunctionTransformer::default()
        .transform_schema(
            &[
                model_type("Widget", "my-fn", None),
                model_type("Gadget", "myFn", None),
                model_type("Thing", "orders", Some("us-east-1")),
                model_type("Other", "orders-us-east-1", None),
            ],
            &mut ctx,
        )
        .unwrap();

    assert_eq!(count_of(&ctx, "FunctionConfig"), 4);
    assert_eq!(count_of(&ctx, "DataSource"), 4);
    assert_eq!(count_of(&ctx, "Role"), 4);
    assert_ne!(outcomes[0].graph.data_source, outcomes[1].graph.data_source);
    assert_ne!(outcomes[2].graph.data_source, outcomes[3].graph.data_source);

    let config = TransformerConfig::default();
    let expected = [
        ("my-fn", None),
        ("myFn", None),
        ("orders", Some("us-east-1")),
        ("orders-us-east-1", None),
    ];
    for (outcome, (name, region)) in outcomes.iter().zip(expected) {
        let data_source = ctx
            .get_resource(&outcome.graph.data_source)
            .and_then(Resource::as_data_source)
            .expect("data source");
        assert_eq!(
            data_source.lambda_config.lambda_function_arn,
            address::function_arn(name, region, &config),
            "{}",
            outcome.type_name
        );
    }
}
