//! Naming conventions for generated resources.
//!
//! Every function here is pure: the same inputs always give the same key, which is what
//! lets the graph builder detect resources created by an earlier directive occurrence.
//!
//! Shared keys read as `{Name}{Region}{Digest}LambdaDataSource`. The PascalCase part is
//! for humans and is lossy (`my-fn` and `myFn` both give `MyFn`). The digest is taken
//! over the raw `(name, region)` pair, so two different targets never share a key.
//!
//! | Target | Data source key |
//! |--------|-----------------|
//! | `("echo", None)` | `Echo7868AABELambdaDataSource` |
//! | `("echo", Some("us-east-1"))` | `EchoUsEast11C96FF4CLambdaDataSource` |

use convert_case::{Case, Casing};
use resource_context::ResourceKey;
use sha2::{Digest, Sha256};
use std::fmt;

const TARGET_DOMAIN_TAG: &[u8] = b"model-function-target";

/// Hex characters of the target digest embedded in every shared key.
pub const TARGET_DIGEST_LEN: usize = 8;

/// What a generated resource is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Purpose {
    Role,
    DataSource,
    FunctionConfig,
    Resolver,
}

impl Purpose {
    pub fn as_str(self) -> &'static str {
        match self {
            Purpose::Role => "Role",
            Purpose::DataSource => "DataSource",
            Purpose::FunctionConfig => "FunctionConfig",
            Purpose::Resolver => "Resolver",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// PascalCase form of `raw` with every non-alphanumeric character treated as a word break.
///
/// `"shared-fn"` becomes `SharedFn`, `"myFn-${env}"` becomes `MyFnEnv`.
pub fn simplify_name(raw: &str) -> String {
    let words: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    words.to_case(Case::Pascal)
}

/// Stable digest of the raw `(name, region)` pair, as uppercase hex.
///
/// Each part is length-framed and an absent region writes no frame, so `("a-b", None)`,
/// `("a", Some("b"))` and `("a", Some(""))` all hash differently.
pub fn target_digest(name: &str, region: Option<&str>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(TARGET_DOMAIN_TAG);
    write_framed(&mut hasher, b"name", name.as_bytes());
    if let Some(region) = region {
        write_framed(&mut hasher, b"region", region.as_bytes());
    }
    hasher.finalize()[..TARGET_DIGEST_LEN / 2]
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .collect()
}

fn write_framed(hasher: &mut Sha256, label: &[u8], bytes: &[u8]) {
    let label_len = u32::try_from(label.len()).unwrap_or(u32::MAX);
    hasher.update(label_len.to_be_bytes());
    hasher.update(label);

    let bytes_len = u32::try_from(bytes.len()).unwrap_or(u32::MAX);
    hasher.update(bytes_len.to_be_bytes());
    hasher.update(bytes);
}

/// Readable part of a target's identity; not unique on its own.
fn readable(name: &str, region: Option<&str>) -> String {
    let mut id = simplify_name(name);
    if let Some(region) = region {
        id.push_str(&simplify_name(region));
    }
    id
}

fn qualified(name: &str, region: Option<&str>) -> String {
    format!("{}{}", readable(name, region), target_digest(name, region))
}

/// Logical id of the data source, also used as its display name.
pub fn data_source_id(name: &str, region: Option<&str>) -> String {
    format!("{}LambdaDataSource", qualified(name, region))
}

pub fn role_key(name: &str, region: Option<&str>) -> ResourceKey {
    ResourceKey::new(format!("{}Role", data_source_id(name, region)))
}

pub fn data_source_key(name: &str, region: Option<&str>) -> ResourceKey {
    ResourceKey::new(data_source_id(name, region))
}

pub fn function_config_key(name: &str, region: Option<&str>) -> ResourceKey {
    ResourceKey::new(format!("Invoke{}", data_source_id(name, region)))
}

/// Key for one of the three shared resources behind a function.
///
/// Resolvers are keyed by operation and field instead; see [`resolver_key`].
pub fn shared_key(purpose: Purpose, name: &str, region: Option<&str>) -> Option<ResourceKey> {
    match purpose {
        Purpose::Role => Some(role_key(name, region)),
        Purpose::DataSource => Some(data_source_key(name, region)),
        Purpose::FunctionConfig => Some(function_config_key(name, region)),
        Purpose::Resolver => None,
    }
}

/// Role display name before the API id and environment suffixes are joined on.
///
/// The readable part is truncated first so the target digest survives; the whole base
/// never exceeds `max_len`.
pub fn role_name_base(name: &str, region: Option<&str>, max_len: usize) -> String {
    let prefix: String = format!("{}LambdaRole", readable(name, region))
        .chars()
        .take(max_len.saturating_sub(TARGET_DIGEST_LEN))
        .collect();
    format!("{prefix}{}", target_digest(name, region))
        .chars()
        .take(max_len)
        .collect()
}

/// `Mutation` + `createWidget` gives `MutationCreateWidgetResolver`.
pub fn resolver_key(operation_type: &str, field_name: &str) -> ResourceKey {
    ResourceKey::new(format!(
        "{}{}Resolver",
        operation_type,
        upper_first(field_name)
    ))
}

pub fn upper_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// English plural of a type name, for `list` field names.
pub fn plural(word: &str) -> String {
    let lower = word.to_ascii_lowercase();
    if let Some(stem) = word.strip_suffix(|c: char| c == 'y' || c == 'Y') {
        let before = stem.chars().last().map(|c| c.to_ascii_lowercase());
        if matches!(before, Some(c) if !"aeiou".contains(c)) {
            return format!("{stem}ies");
        }
    }
    if ["s", "x", "z", "ch", "sh"].iter().any(|end| lower.ends_with(end)) {
        return format!("{word}es");
    }
    format!("{word}s")
}
