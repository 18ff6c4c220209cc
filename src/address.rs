//! Function address (ARN) construction.
//!
//! A function name may embed the environment placeholder (`my-fn-${env}`) so one schema
//! can target a different function per environment. Whether the environment parameter
//! exists is only known at deploy time, so the address is always a two-branch
//! [`Expr::Conditional`] on the has-environment condition.

use crate::config::TransformerConfig;
use crate::expression::Expr;
use std::collections::BTreeMap;

/// True if `name` embeds the environment placeholder anywhere.
pub fn references_env(name: &str, config: &TransformerConfig) -> bool {
    name.contains(&config.env_placeholder)
}

/// Removes the first `-${env}` segment from `name`.
///
/// Only the hyphen-prefixed form is stripped; a bare `${env}` elsewhere in the name is
/// left as is.
pub fn remove_env_reference(name: &str, config: &TransformerConfig) -> String {
    let segment = format!("-{}", config.env_placeholder);
    name.replacen(&segment, "", 1)
}

/// Substitution template for a function ARN.
///
/// Without a region the address is implicit in the deploying stack's own region.
pub fn function_arn_template(name: &str, region: Option<&str>) -> String {
    let region = region.unwrap_or("${AWS::Region}");
    format!("arn:aws:lambda:{region}:${{AWS::AccountId}}:function:{name}")
}

/// Deploy-time address of the function `name`, optionally pinned to `region`.
///
/// The true branch substitutes the live environment value into the placeholder; the
/// false branch uses the name with the placeholder segment removed. Names without a
/// placeholder use the same name in both branches.
pub fn function_arn(name: &str, region: Option<&str>, config: &TransformerConfig) -> Expr {
    let mut variables = BTreeMap::new();
    if references_env(name, config) {
        variables.insert(
            config.env_parameter.clone(),
            Expr::reference(config.env_parameter.clone()),
        );
    }

    Expr::conditional(
        config.has_env_condition.clone(),
        Expr::sub(function_arn_template(name, region), variables),
        Expr::sub(
            function_arn_template(&remove_env_reference(name, config), region),
            BTreeMap::new(),
        ),
    )
}
