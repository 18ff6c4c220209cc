//! Deferred expressions.
//!
//! Values such as role names and function addresses depend on things only known at
//! deploy time (the account, the region, whether an environment was supplied). They are
//! built as an [`Expr`] tree and rendered downstream; nothing here resolves them.

use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

/// A value resolved at deploy time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A literal string.
    Str(String),
    /// Reference to a parameter or resource by logical id.
    Ref(String),
    /// Attribute of another resource.
    GetAtt { resource: String, attribute: String },
    /// Template substitution; `${Name}` placeholders come from `variables`
    /// or from deploy-time pseudo parameters such as `${AWS::Region}`.
    Sub {
        template: String,
        variables: BTreeMap<String, Expr>,
    },
    /// Parts joined with a delimiter.
    Join { delimiter: String, parts: Vec<Expr> },
    /// `when_true` if `condition` holds at deploy time, else `when_false`.
    Conditional {
        condition: String,
        when_true: Box<Expr>,
        when_false: Box<Expr>,
    },
}

impl Expr {
    pub fn str(value: impl Into<String>) -> Self {
        Expr::Str(value.into())
    }

    pub fn reference(logical_id: impl Into<String>) -> Self {
        Expr::Ref(logical_id.into())
    }

    pub fn get_att(resource: impl Into<String>, attribute: impl Into<String>) -> Self {
        Expr::GetAtt {
            resource: resource.into(),
            attribute: attribute.into(),
        }
    }

    pub fn sub(template: impl Into<String>, variables: BTreeMap<String, Expr>) -> Self {
        Expr::Sub {
            template: template.into(),
            variables,
        }
    }

    pub fn join(delimiter: impl Into<String>, parts: Vec<Expr>) -> Self {
        Expr::Join {
            delimiter: delimiter.into(),
            parts,
        }
    }

    pub fn conditional(condition: impl Into<String>, when_true: Expr, when_false: Expr) -> Self {
        Expr::Conditional {
            condition: condition.into(),
            when_true: Box::new(when_true),
            when_false: Box::new(when_false),
        }
    }

    /// Condition name of a [`Expr::Conditional`].
    pub fn condition(&self) -> Option<&str> {
        match self {
            Expr::Conditional { condition, .. } => Some(condition),
            _ => None,
        }
    }

    /// `(when_true, when_false)` of a [`Expr::Conditional`].
    pub fn branches(&self) -> Option<(&Expr, &Expr)> {
        match self {
            Expr::Conditional {
                when_true,
                when_false,
                ..
            } => Some((when_true, when_false)),
            _ => None,
        }
    }

    /// Intrinsic-function JSON form.
    pub fn to_json(&self) -> Value {
        match self {
            Expr::Str(value) => Value::String(value.clone()),
            Expr::Ref(logical_id) => json!({ "Ref": logical_id }),
            Expr::GetAtt {
                resource,
                attribute,
            } => json!({ "Fn::GetAtt": [resource, attribute] }),
            Expr::Sub {
                template,
                variables,
            } if variables.is_empty() => json!({ "Fn::Sub": template }),
            Expr::Sub {
                template,
                variables,
            } => {
                let variables: Map<String, Value> = variables
                    .iter()
                    .map(|(name, value)| (name.clone(), value.to_json()))
                    .collect();
                json!({ "Fn::Sub": [template, variables] })
            }
            Expr::Join { delimiter, parts } => {
                let parts: Vec<Value> = parts.iter().map(Expr::to_json).collect();
                json!({ "Fn::Join": [delimiter, parts] })
            }
            Expr::Conditional {
                condition,
                when_true,
                when_false,
            } => json!({ "Fn::If": [condition, when_true.to_json(), when_false.to_json()] }),
        }
    }
}

impl Serialize for Expr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
