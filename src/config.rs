//! Transformer configuration.
//!
//! Every name the generated resources refer to (the owning API, the environment
//! parameter, the deployment condition, the stack tag) lives here instead of in
//! process-wide constants, so tests can inject their own fixtures.

use crate::error::TransformerError;
use serde::{Deserialize, Serialize};

/// Names and constants used while building the resource graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformerConfig {
    /// Name of the directive this transformer handles
    pub directive_name: String,
    /// Companion directive every annotated type must also carry
    pub model_directive_name: String,
    /// Stack tag applied to every created resource
    pub stack_name: String,
    /// Logical id of the owning GraphQL API
    pub api_logical_id: String,
    /// Logical id of the deployment environment parameter
    pub env_parameter: String,
    /// Condition that holds when the environment parameter is set
    pub has_env_condition: String,
    /// Placeholder a function name uses to embed the environment
    pub env_placeholder: String,
    /// Resolver/function protocol version
    pub function_version: String,
    /// Role display names are truncated to this many characters before suffixing
    pub role_name_prefix_len: usize,
}

impl Default for TransformerConfig {
    fn default() -> Self {
        Self {
            directive_name: "modelFunction".to_string(),
            model_directive_name: "model".to_string(),
            stack_name: "ModelFunctionStack".to_string(),
            api_logical_id: "GraphQLAPI".to_string(),
            env_parameter: "env".to_string(),
            has_env_condition: "HasEnvironmentParameter".to_string(),
            env_placeholder: "${env}".to_string(),
            function_version: "2018-05-29".to_string(),
            role_name_prefix_len: 26,
        }
    }
}

impl TransformerConfig {
    /// Load configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(content: &str) -> Result<Self, TransformerError> {
        serde_json::from_str(content).map_err(TransformerError::Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config =
            TransformerConfig::from_json(r#"{ "stackName": "Custom", "apiLogicalId": "Api" }"#)
                .unwrap();

        assert_eq!(config.stack_name, "Custom");
        assert_eq!(config.api_logical_id, "Api");
        assert_eq!(config.env_placeholder, "${env}");
        assert_eq!(config.role_name_prefix_len, 26);
    }

    #[test]
    fn test_malformed_config_is_rejected() {
        let err = TransformerConfig::from_json(r#"{ "roleNamePrefixLen": "long" }"#).unwrap_err();
        assert!(matches!(err, TransformerError::Config(_)));
    }
}
