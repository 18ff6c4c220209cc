//! # Resource Graph Builder
//!
//! Ensures the three shared resources behind one function target exist exactly once:
//!
//! ```text
//! Role  <-  DataSource  <-  FunctionConfiguration  <-  Resolver (one per field)
//! ```
//!
//! Every step checks the registry before creating anything. A second directive
//! occurrence that names the same `(name, region)` finds all three keys present, writes
//! nothing, and gets the same keys back. This is what lets several `@model` types share
//! one function without duplicating its infrastructure.

use crate::address;
use crate::config::TransformerConfig;
use crate::directive::DirectiveArguments;
use crate::expression::Expr;
use crate::naming::{self, Purpose};
use crate::resources::{FunctionConfiguration, IamRole, LambdaDataSource, Resource};
use resource_context::{ResourceKey, ResourceRegistry};
use tracing::{debug, info, instrument};

/// Keys of the shared resources backing one function target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionGraph {
    pub role: ResourceKey,
    pub data_source: ResourceKey,
    pub function_config: ResourceKey,
}

/// Builds the role, data source and function configuration for a function target.
pub struct GraphBuilder<'a> {
    config: &'a TransformerConfig,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(config: &'a TransformerConfig) -> Self {
        Self { config }
    }

    /// Create whichever of the three shared resources are missing and return their keys.
    #[instrument(skip(self, ctx, args), fields(name = %args.name, region = ?args.region))]
    pub fn ensure<R: ResourceRegistry<Resource>>(
        &self,
        ctx: &mut R,
        args: &DirectiveArguments,
    ) -> FunctionGraph {
        let name = args.name.as_str();
        let region = args.region.as_deref();

        let role = naming::role_key(name, region);
        self.ensure_resource(ctx, &role, Purpose::Role, || {
            Resource::Role(self.role(name, region))
        });

        let data_source = naming::data_source_key(name, region);
        self.ensure_resource(ctx, &data_source, Purpose::DataSource, || {
            Resource::DataSource(LambdaDataSource::new(
                self.api_id(),
                naming::data_source_id(name, region),
                role.clone(),
                address::function_arn(name, region, self.config),
            ))
        });

        let function_config = naming::function_config_key(name, region);
        self.ensure_resource(ctx, &function_config, Purpose::FunctionConfig, || {
            Resource::FunctionConfiguration(FunctionConfiguration::new(
                self.api_id(),
                function_config.to_string(),
                data_source.clone(),
                &self.config.function_version,
            ))
        });

        FunctionGraph {
            role,
            data_source,
            function_config,
        }
    }

    /// Never overwrites: an existing entry under `key` is left untouched.
    fn ensure_resource<R: ResourceRegistry<Resource>>(
        &self,
        ctx: &mut R,
        key: &ResourceKey,
        purpose: Purpose,
        build: impl FnOnce() -> Resource,
    ) {
        if ctx.has_resource(key) {
            debug!(%purpose, %key, "Reusing existing resource");
            return;
        }
        ctx.set_resource(key.clone(), build());
        ctx.map_resource_to_stack(&self.config.stack_name, key);
        info!(%purpose, %key, stack = %self.config.stack_name, "Created");
    }

    fn api_id(&self) -> Expr {
        Expr::get_att(self.config.api_logical_id.clone(), "ApiId")
    }

    /// Role display name, suffixed with the API id, plus the environment when one is set.
    fn role_name(&self, name: &str, region: Option<&str>) -> Expr {
        let base = naming::role_name_base(name, region, self.config.role_name_prefix_len);
        Expr::conditional(
            self.config.has_env_condition.clone(),
            Expr::join(
                "-",
                vec![
                    Expr::str(base.clone()),
                    self.api_id(),
                    Expr::reference(self.config.env_parameter.clone()),
                ],
            ),
            Expr::join("-", vec![Expr::str(base), self.api_id()]),
        )
    }

    fn role(&self, name: &str, region: Option<&str>) -> IamRole {
        IamRole::invoking(
            self.role_name(name, region),
            address::function_arn(name, region, self.config),
        )
    }
}
