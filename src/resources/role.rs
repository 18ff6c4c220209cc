//! Execution role assumed by the data source when invoking a function.

use crate::expression::Expr;
use resource_context::ResourceKey;
use serde::Serialize;

const POLICY_VERSION: &str = "2012-10-17";
const APPSYNC_PRINCIPAL: &str = "appsync.amazonaws.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IamRole {
    pub role_name: Expr,
    pub assume_role_policy_document: PolicyDocument,
    pub policies: Vec<InlinePolicy>,
    #[serde(skip)]
    pub depends_on: Vec<ResourceKey>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    pub statement: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    pub effect: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<Principal>,
    pub action: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resource: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Principal {
    pub service: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InlinePolicy {
    pub policy_name: String,
    pub policy_document: PolicyDocument,
}

impl IamRole {
    /// A role the API service may assume, allowed to invoke exactly `function_arn`.
    pub fn invoking(role_name: Expr, function_arn: Expr) -> Self {
        let trust = PolicyDocument {
            version: POLICY_VERSION.to_string(),
            statement: vec![Statement {
                effect: "Allow".to_string(),
                principal: Some(Principal {
                    service: APPSYNC_PRINCIPAL.to_string(),
                }),
                action: "sts:AssumeRole".to_string(),
                resource: vec![],
            }],
        };
        let invoke = InlinePolicy {
            policy_name: "InvokeLambdaFunction".to_string(),
            policy_document: PolicyDocument {
                version: POLICY_VERSION.to_string(),
                statement: vec![Statement {
                    effect: "Allow".to_string(),
                    principal: None,
                    action: "lambda:InvokeFunction".to_string(),
                    resource: vec![function_arn],
                }],
            },
        };

        Self {
            role_name,
            assume_role_policy_document: trust,
            policies: vec![invoke],
            depends_on: vec![],
        }
    }

    /// Function addresses this role may invoke.
    pub fn invokable(&self) -> impl Iterator<Item = &Expr> {
        self.policies
            .iter()
            .flat_map(|p| &p.policy_document.statement)
            .filter(|s| s.action == "lambda:InvokeFunction")
            .flat_map(|s| &s.resource)
    }
}
