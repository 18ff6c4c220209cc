//! Function configuration that invokes the data source's function.
//!
//! The request template reads the routing context (`typeName`, `fieldName`) the
//! resolver stashed, and forwards the call's arguments, identity, source, raw request
//! and previous result as the invocation payload. The response template re-raises a
//! function error with its own message and type, otherwise returns the result.

use crate::expression::Expr;
use crate::mapping::{self, call, if_else, lit, obj, raw, to_json, Vtl};
use resource_context::ResourceKey;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionConfiguration {
    pub api_id: Expr,
    pub name: String,
    pub data_source_name: Expr,
    pub function_version: String,
    pub request_mapping_template: String,
    pub response_mapping_template: String,
    #[serde(skip)]
    pub data_source: ResourceKey,
    #[serde(skip)]
    pub depends_on: Vec<ResourceKey>,
}

impl FunctionConfiguration {
    pub fn new(api_id: Expr, name: String, data_source: ResourceKey, version: &str) -> Self {
        Self {
            api_id,
            name,
            data_source_name: Expr::get_att(data_source.as_str(), "Name"),
            function_version: version.to_string(),
            request_mapping_template: mapping::print(&request_template(version)),
            response_mapping_template: mapping::print(&response_template()),
            depends_on: vec![data_source.clone()],
            data_source,
        }
    }
}

fn stashed(name: &str) -> Vtl {
    to_json(call(raw("$ctx.stash"), "get", vec![lit(name)]))
}

fn request_template(version: &str) -> Vtl {
    obj(vec![
        ("version", lit(version)),
        ("operation", lit("Invoke")),
        (
            "payload",
            obj(vec![
                ("typeName", stashed("typeName")),
                ("fieldName", stashed("fieldName")),
                ("arguments", to_json(raw("$ctx.arguments"))),
                ("identity", to_json(raw("$ctx.identity"))),
                ("source", to_json(raw("$ctx.source"))),
                ("request", to_json(raw("$ctx.request"))),
                ("prev", to_json(raw("$ctx.prev"))),
            ]),
        ),
    ])
}

fn response_template() -> Vtl {
    if_else(
        raw("$ctx.error"),
        mapping::error(raw("$ctx.error.message"), raw("$ctx.error.type")),
        to_json(raw("$ctx.result")),
    )
}
