//! Resource descriptors written into the registry.
//!
//! Each descriptor carries its typed properties plus the keys it depends on. Serializing
//! a [`Resource`] yields the template fragment (`Type`, `Properties`, `DependsOn`) the
//! downstream renderer places under the resource's key.

mod data_source;
mod function_config;
mod resolver;
mod role;

pub use data_source::*;
pub use function_config::*;
pub use resolver::*;
pub use role::*;

use crate::naming::Purpose;
use resource_context::{ResourceEntry, ResourceKey};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Any resource this transformer produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Role(IamRole),
    DataSource(LambdaDataSource),
    FunctionConfiguration(FunctionConfiguration),
    Resolver(Resolver),
}

impl Resource {
    pub fn purpose(&self) -> Purpose {
        match self {
            Resource::Role(_) => Purpose::Role,
            Resource::DataSource(_) => Purpose::DataSource,
            Resource::FunctionConfiguration(_) => Purpose::FunctionConfig,
            Resource::Resolver(_) => Purpose::Resolver,
        }
    }

    /// Resource type name in the rendered template.
    pub fn resource_type(&self) -> &'static str {
        match self {
            Resource::Role(_) => "AWS::IAM::Role",
            Resource::DataSource(_) => "AWS::AppSync::DataSource",
            Resource::FunctionConfiguration(_) => "AWS::AppSync::FunctionConfiguration",
            Resource::Resolver(_) => "AWS::AppSync::Resolver",
        }
    }

    pub fn as_role(&self) -> Option<&IamRole> {
        match self {
            Resource::Role(role) => Some(role),
            _ => None,
        }
    }

    pub fn as_data_source(&self) -> Option<&LambdaDataSource> {
        match self {
            Resource::DataSource(data_source) => Some(data_source),
            _ => None,
        }
    }

    pub fn as_function_configuration(&self) -> Option<&FunctionConfiguration> {
        match self {
            Resource::FunctionConfiguration(function) => Some(function),
            _ => None,
        }
    }

    pub fn as_resolver(&self) -> Option<&Resolver> {
        match self {
            Resource::Resolver(resolver) => Some(resolver),
            _ => None,
        }
    }
}

impl ResourceEntry for Resource {
    fn kind(&self) -> &'static str {
        self.purpose().as_str()
    }

    fn depends_on(&self) -> &[ResourceKey] {
        match self {
            Resource::Role(role) => &role.depends_on,
            Resource::DataSource(data_source) => &data_source.depends_on,
            Resource::FunctionConfiguration(function) => &function.depends_on,
            Resource::Resolver(resolver) => &resolver.depends_on,
        }
    }
}

impl Serialize for Resource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let depends_on = self.depends_on();
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("Type", self.resource_type())?;
        match self {
            Resource::Role(role) => map.serialize_entry("Properties", role)?,
            Resource::DataSource(data_source) => map.serialize_entry("Properties", data_source)?,
            Resource::FunctionConfiguration(function) => {
                map.serialize_entry("Properties", function)?
            }
            Resource::Resolver(resolver) => map.serialize_entry("Properties", resolver)?,
        }
        if !depends_on.is_empty() {
            map.serialize_entry("DependsOn", depends_on)?;
        }
        map.end()
    }
}
