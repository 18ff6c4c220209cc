//! Schema-side inputs: annotated types, their directives, and decoded arguments.
//!
//! The schema parser that produces these values is not part of this crate. It hands
//! over already-parsed definitions; argument values stay as JSON so the transformer can
//! decode only the shape it needs.

use crate::error::TransformerError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A directive occurrence on a schema element, e.g. `@modelFunction(name: "fn")`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directive {
    pub name: String,
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl Directive {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Map::new(),
        }
    }

    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }
}

/// An object type definition together with the directives attached to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedType {
    pub name: String,
    #[serde(default)]
    pub directives: Vec<Directive>,
}

impl AnnotatedType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directives: Vec::new(),
        }
    }

    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn has_directive(&self, name: &str) -> bool {
        self.directive(name).is_some()
    }

    /// First directive with the given name.
    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directives.iter().find(|d| d.name == name)
    }
}

/// Decoded `@modelFunction` arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectiveArguments {
    /// Name of the function to invoke.
    pub name: String,
    /// Region the function lives in; defaults to the stack's region.
    #[serde(default)]
    pub region: Option<String>,
}

impl DirectiveArguments {
    pub fn new(name: impl Into<String>, region: Option<&str>) -> Self {
        Self {
            name: name.into(),
            region: region.map(str::to_string),
        }
    }
}

/// Decode the arguments of a directive occurrence.
///
/// `name` must be present and contain at least one alphanumeric character; an absent,
/// `null` or blank name is a [`TransformerError::MissingArgument`]. A blank `region` is
/// treated as no region. Other argument shapes are trusted.
pub fn get_directive_arguments(directive: &Directive) -> Result<DirectiveArguments, TransformerError> {
    let missing_name = || TransformerError::MissingArgument {
        directive: directive.name.clone(),
        argument: "name".to_string(),
    };

    if directive.arguments.get("name").map_or(true, Value::is_null) {
        return Err(missing_name());
    }

    let mut args: DirectiveArguments =
        serde_json::from_value(Value::Object(directive.arguments.clone())).map_err(|source| {
            TransformerError::InvalidArguments {
                directive: directive.name.clone(),
                source,
            }
        })?;

    if !args.name.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(missing_name());
    }
    if args.region.as_deref().is_some_and(|region| region.trim().is_empty()) {
        args.region = None;
    }

    Ok(args)
}
