//! Function-backed data source.

use crate::expression::Expr;
use resource_context::ResourceKey;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LambdaDataSource {
    pub api_id: Expr,
    pub name: String,
    #[serde(rename = "Type")]
    pub kind: String,
    pub service_role_arn: Expr,
    pub lambda_config: LambdaConfig,
    /// Key of the execution role
    #[serde(skip)]
    pub role: ResourceKey,
    #[serde(skip)]
    pub depends_on: Vec<ResourceKey>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LambdaConfig {
    pub lambda_function_arn: Expr,
}

impl LambdaDataSource {
    pub fn new(api_id: Expr, name: String, role: ResourceKey, function_arn: Expr) -> Self {
        Self {
            api_id,
            name,
            kind: "AWS_LAMBDA".to_string(),
            service_role_arn: Expr::get_att(role.as_str(), "Arn"),
            lambda_config: LambdaConfig {
                lambda_function_arn: function_arn,
            },
            depends_on: vec![role.clone()],
            role,
        }
    }
}
