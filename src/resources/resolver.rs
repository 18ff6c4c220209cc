//! Per-field resolver bound to the shared data source and function configuration.

use crate::expression::Expr;
use crate::mapping::{self, call, compound, lit, obj, qr, raw, to_json, Vtl};
use resource_context::ResourceKey;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Resolver {
    pub api_id: Expr,
    pub type_name: String,
    pub field_name: String,
    pub kind: String,
    pub data_source_name: Expr,
    pub request_mapping_template: String,
    pub response_mapping_template: String,
    #[serde(skip)]
    pub data_source: ResourceKey,
    #[serde(skip)]
    pub function_config: ResourceKey,
    #[serde(skip)]
    pub depends_on: Vec<ResourceKey>,
}

/// Which field a resolver serves and which shared resources back it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverBinding {
    pub type_name: String,
    pub field_name: String,
    pub data_source_name: ResourceKey,
    pub function_config_id: ResourceKey,
}

impl Resolver {
    pub fn new(
        api_id: Expr,
        type_name: &str,
        field_name: &str,
        data_source: ResourceKey,
        function_config: ResourceKey,
    ) -> Self {
        Self {
            api_id,
            type_name: type_name.to_string(),
            field_name: field_name.to_string(),
            kind: "UNIT".to_string(),
            data_source_name: Expr::get_att(data_source.as_str(), "Name"),
            request_mapping_template: mapping::print(&request_template(type_name, field_name)),
            response_mapping_template: mapping::print(&to_json(raw("$ctx.result"))),
            depends_on: vec![function_config.clone()],
            data_source,
            function_config,
        }
    }

    pub fn binding(&self) -> ResolverBinding {
        ResolverBinding {
            type_name: self.type_name.clone(),
            field_name: self.field_name.clone(),
            data_source_name: self.data_source.clone(),
            function_config_id: self.function_config.clone(),
        }
    }
}

/// Stashes the routing context for the function configuration, then sends no payload.
fn request_template(type_name: &str, field_name: &str) -> Vtl {
    let put = |key: &str, value: &str| {
        qr(call(raw("$ctx.stash"), "put", vec![lit(key), lit(value)]))
    };
    compound(vec![
        put("typeName", type_name),
        put("fieldName", field_name),
        obj(vec![]),
    ])
}
