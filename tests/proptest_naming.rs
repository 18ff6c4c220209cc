//! Property-based tests using proptest
//!
//! Key determinism, key distinctness, key shape and builder idempotency over
//! randomized function names and regions.

use model_function_transformer::directive::DirectiveArguments;
use model_function_transformer::naming::{self, Purpose};
use model_function_transformer::{address, GraphBuilder, TransformerConfig};
use proptest::prelude::*;
use resource_context::mock::MockRegistry;
use resource_context::TransformerContext;

/// Function names as users write them, optionally with the environment suffix.
fn arb_function_name() -> impl Strategy<Value = String> {
    ("[a-zA-Z][a-zA-Z0-9_-]{0,30}", any::<bool>()).prop_map(|(base, with_env)| {
        if with_env {
            format!("{base}-${{env}}")
        } else {
            base
        }
    })
}

fn arb_region() -> impl Strategy<Value = String> {
    prop_oneof!["us-east-1", "us-west-2", "eu-west-1", "ap-southeast-2", "[a-z]{2}-[a-z]{4,9}-[1-9]"]
}

proptest! {
    #[test]
    fn test_shared_keys_are_deterministic(name in arb_function_name(), region in prop::option::of(arb_region())) {
        let region = region.as_deref();
        for purpose in [Purpose::Role, Purpose::DataSource, Purpose::FunctionConfig] {
            prop_assert_eq!(
                naming::shared_key(purpose, &name, region),
                naming::shared_key(purpose, &name, region)
            );
        }
    }

    #[test]
    fn test_region_changes_every_shared_key(name in arb_function_name(), region in arb_region()) {
        prop_assert_ne!(naming::role_key(&name, Some(&region)), naming::role_key(&name, None));
        prop_assert_ne!(
            naming::data_source_key(&name, Some(&region)),
            naming::data_source_key(&name, None)
        );
        prop_assert_ne!(
            naming::function_config_key(&name, Some(&region)),
            naming::function_config_key(&name, None)
        );
    }

    #[test]
    fn test_distinct_targets_get_distinct_keys(
        a in (arb_function_name(), prop::option::of(arb_region())),
        b in (arb_function_name(), prop::option::of(arb_region())),
    ) {
        prop_assume!(a != b);
        prop_assert_ne!(
            naming::data_source_key(&a.0, a.1.as_deref()),
            naming::data_source_key(&b.0, b.1.as_deref())
        );
    }

    #[test]
    fn test_case_and_punctuation_variants_stay_apart(
        words in prop::collection::vec("[a-z]{1,6}", 2..4),
    ) {
        let kebab = words.join("-");
        let snake = words.join("_");
        let camel = naming::simplify_name(&kebab);
        prop_assert_ne!(naming::data_source_key(&kebab, None), naming::data_source_key(&snake, None));
        prop_assert_ne!(naming::data_source_key(&kebab, None), naming::data_source_key(&camel, None));
    }

    #[test]
    fn test_region_is_not_confused_with_name_suffix(
        name in "[a-z]{1,10}",
        region in arb_region(),
    ) {
        let merged = format!("{name}-{region}");
        prop_assert_ne!(
            naming::data_source_key(&name, Some(&region)),
            naming::data_source_key(&merged, None)
        );
    }

    #[test]
    fn test_keys_are_alphanumeric(name in arb_function_name(), region in prop::option::of(arb_region())) {
        let region = region.as_deref();
        let keys = [
            naming::role_key(&name, region),
            naming::data_source_key(&name, region),
            naming::function_config_key(&name, region),
        ];
        for key in keys {
            prop_assert!(key.as_str().chars().all(|c| c.is_ascii_alphanumeric()), "{}", key);
        }
    }

    #[test]
    fn test_role_name_base_respects_limit(name in arb_function_name(), max_len in 1usize..64) {
        prop_assert!(naming::role_name_base(&name, None, max_len).chars().count() <= max_len);
    }

    #[test]
    fn test_env_suffix_is_stripped(base in "[a-zA-Z][a-zA-Z0-9_]{0,30}") {
        let config = TransformerConfig::default();
        let name = format!("{base}-${{env}}");
        prop_assert!(address::references_env(&name, &config));
        prop_assert_eq!(address::remove_env_reference(&name, &config), base);
    }

    #[test]
    fn test_resolver_key_shape(field in "[a-z][a-zA-Z0-9]{0,20}") {
        let key = naming::resolver_key("Query", &field);
        prop_assert!(key.as_str().starts_with("Query"));
        prop_assert!(key.as_str().ends_with("Resolver"));
        prop_assert_eq!(key, naming::resolver_key("Query", &field));
    }

    #[test]
    fn test_graph_builder_second_pass_writes_nothing(
        name in arb_function_name(),
        region in prop::option::of(arb_region()),
    ) {
        let config = TransformerConfig::default();
        let builder = GraphBuilder::new(&config);
        let args = DirectiveArguments::new(name, region.as_deref());

        let mut ctx = TransformerContext::new();
        let first = builder.ensure(&mut ctx, &args);
        prop_assert_eq!(ctx.len(), 3);

        let mut mock = MockRegistry::seeded(ctx);
        let second = builder.ensure(&mut mock, &args);
        prop_assert_eq!(mock.writes(), 0);
        prop_assert_eq!(first, second);
    }
}
