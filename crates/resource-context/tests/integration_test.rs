use resource_context::mock::{MockRegistry, RegistryCall};
use resource_context::{ContextError, ResourceEntry, ResourceKey, ResourceRegistry, TransformerContext};

// --- Test Entry ---

#[derive(Clone, Debug, PartialEq)]
struct Service {
    name: String,
    depends_on: Vec<ResourceKey>,
}

impl Service {
    fn new(name: &str, depends_on: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            depends_on: depends_on.iter().map(|k| ResourceKey::from(*k)).collect(),
        }
    }
}

impl ResourceEntry for Service {
    fn kind(&self) -> &'static str {
        "Service"
    }

    fn depends_on(&self) -> &[ResourceKey] {
        &self.depends_on
    }
}

/// Creates `key` only if it is absent, the way transformer stages do.
fn ensure<R: ResourceRegistry<Service>>(registry: &mut R, key: &str, service: Service) -> bool {
    let key = ResourceKey::from(key);
    if registry.has_resource(&key) {
        return false;
    }
    registry.set_resource(key.clone(), service);
    registry.map_resource_to_stack("Services", &key);
    true
}

#[test]
fn test_check_then_insert_is_idempotent() {
    let mut ctx = TransformerContext::new();

    assert!(ensure(&mut ctx, "Db", Service::new("db", &[])));
    assert!(ensure(&mut ctx, "Api", Service::new("api", &["Db"])));
    assert!(!ensure(&mut ctx, "Db", Service::new("db-2", &[])));

    assert_eq!(ctx.len(), 2);
    assert_eq!(ctx.get_resource(&"Db".into()).unwrap().name, "db");
    assert_eq!(ctx.resources_in_stack("Services").len(), 2);
}

#[test]
fn test_second_pass_over_seeded_mock_writes_nothing() {
    let mut first = MockRegistry::new();
    first.expect_set("Db").expect_set("Api");
    ensure(&mut first, "Db", Service::new("db", &[]));
    ensure(&mut first, "Api", Service::new("api", &["Db"]));
    first.verify();

    let mut second = MockRegistry::seeded(first.into_inner());
    ensure(&mut second, "Db", Service::new("db", &[]));
    ensure(&mut second, "Api", Service::new("api", &["Db"]));

    second.verify();
    assert_eq!(second.writes(), 0);
    assert_eq!(
        second.calls(),
        vec![RegistryCall::Get("Db".into()), RegistryCall::Get("Api".into())]
    );
}

#[test]
fn test_dependency_order_over_diamond() {
    let mut ctx = TransformerContext::new();
    ensure(&mut ctx, "Top", Service::new("top", &["Left", "Right"]));
    ensure(&mut ctx, "Left", Service::new("left", &["Base"]));
    ensure(&mut ctx, "Right", Service::new("right", &["Base"]));
    ensure(&mut ctx, "Base", Service::new("base", &[]));

    let order: Vec<String> = ctx
        .dependency_order()
        .unwrap()
        .into_iter()
        .map(|k| k.to_string())
        .collect();
    assert_eq!(order, vec!["Base", "Left", "Right", "Top"]);
}

#[test]
fn test_dependency_order_reports_self_cycle() {
    let mut ctx = TransformerContext::new();
    ensure(&mut ctx, "Loop", Service::new("loop", &["Loop"]));

    assert_eq!(
        ctx.dependency_order(),
        Err(ContextError::DependencyCycle(vec!["Loop".into()]))
    );
}
