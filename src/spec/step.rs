//! Step and container-level fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single container step of a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Step name (template).
    #[serde(default)]
    pub name: String,

    /// Container image (template).
    #[serde(default)]
    pub image: String,

    /// Entrypoint (each entry is a template).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,

    /// Arguments (each entry is a template).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    /// Working directory (template).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub working_dir: String,

    /// Environment variables.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<EnvVar>,

    /// Bulk environment sources.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env_from: Vec<EnvFromSource>,

    /// Volume mounts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volume_mounts: Vec<VolumeMount>,

    /// Container fields without a template (`resources`, `securityContext`,
    /// ...), kept as written.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An environment variable.
///
/// `name` is a key and is never substituted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEnvVar", into = "RawEnvVar")]
pub struct EnvVar {
    pub name: String,
    pub value: EnvValue,
}

impl EnvVar {
    /// Create a variable with a literal value.
    pub fn literal(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: EnvValue::Value(value.into()),
        }
    }

    /// Create a variable read from another object.
    pub fn from_source(name: impl Into<String>, source: EnvVarSource) -> Self {
        Self {
            name: name.into(),
            value: EnvValue::ValueFrom(source),
        }
    }
}

/// Where an environment variable gets its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvValue {
    /// A literal template value.
    Value(String),
    /// A value read from a secret or config map key.
    ValueFrom(EnvVarSource),
}

/// The source of a `valueFrom` environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvVarSource {
    SecretKeyRef(KeySelector),
    ConfigMapKeyRef(KeySelector),
    /// Any other source (`fieldRef`, `resourceFieldRef`, ...), kept as written.
    Other(Map<String, Value>),
}

/// Selects `key` from the object called `name`. Both fields are templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySelector {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub key: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl KeySelector {
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            extra: Map::new(),
        }
    }
}

/// Imports every key of a config map or secret as environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEnvFromSource", into = "RawEnvFromSource")]
pub struct EnvFromSource {
    /// Prefix prepended to each imported key (template).
    pub prefix: String,
    pub source: EnvFromRef,
}

/// The object an [`EnvFromSource`] imports from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFromRef {
    ConfigMapRef(ObjectRef),
    SecretRef(ObjectRef),
}

/// Reference to an object by name (template).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRef {
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ObjectRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }
}

/// Mounts a volume into the step container. All fields are templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeMount {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mount_path: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sub_path: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ============================================================================
// Wire forms
// ============================================================================

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEnvVar {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value_from: Option<RawEnvVarSource>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEnvVarSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    secret_key_ref: Option<KeySelector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    config_map_key_ref: Option<KeySelector>,
    #[serde(flatten)]
    other: Map<String, Value>,
}

impl TryFrom<RawEnvVar> for EnvVar {
    type Error = String;

    fn try_from(raw: RawEnvVar) -> Result<Self, Self::Error> {
        let value = match (raw.value, raw.value_from) {
            (Some(_), Some(_)) => {
                return Err(format!(
                    "env var '{}' sets both 'value' and 'valueFrom'",
                    raw.name
                ));
            }
            (_, Some(from)) => {
                let source = match (from.secret_key_ref, from.config_map_key_ref) {
                    (Some(secret), None) if from.other.is_empty() => {
                        EnvVarSource::SecretKeyRef(secret)
                    }
                    (None, Some(config_map)) if from.other.is_empty() => {
                        EnvVarSource::ConfigMapKeyRef(config_map)
                    }
                    (None, None) if !from.other.is_empty() => EnvVarSource::Other(from.other),
                    (None, None) => {
                        return Err(format!("env var '{}' has an empty 'valueFrom'", raw.name));
                    }
                    _ => {
                        return Err(format!(
                            "env var '{}' declares more than one 'valueFrom' source",
                            raw.name
                        ));
                    }
                };
                EnvValue::ValueFrom(source)
            }
            // An env var with neither field has an empty value.
            (value, None) => EnvValue::Value(value.unwrap_or_default()),
        };

        Ok(EnvVar {
            name: raw.name,
            value,
        })
    }
}

impl From<EnvVar> for RawEnvVar {
    fn from(env: EnvVar) -> Self {
        let (value, value_from) = match env.value {
            EnvValue::Value(value) => (Some(value), None),
            EnvValue::ValueFrom(source) => {
                let mut raw = RawEnvVarSource {
                    secret_key_ref: None,
                    config_map_key_ref: None,
                    other: Map::new(),
                };
                match source {
                    EnvVarSource::SecretKeyRef(selector) => raw.secret_key_ref = Some(selector),
                    EnvVarSource::ConfigMapKeyRef(selector) => {
                        raw.config_map_key_ref = Some(selector)
                    }
                    EnvVarSource::Other(other) => raw.other = other,
                }
                (None, Some(raw))
            }
        };
        RawEnvVar {
            name: env.name,
            value,
            value_from,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEnvFromSource {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    prefix: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    config_map_ref: Option<ObjectRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    secret_ref: Option<ObjectRef>,
}

impl TryFrom<RawEnvFromSource> for EnvFromSource {
    type Error = String;

    fn try_from(raw: RawEnvFromSource) -> Result<Self, Self::Error> {
        let source = match (raw.config_map_ref, raw.secret_ref) {
            (Some(config_map), None) => EnvFromRef::ConfigMapRef(config_map),
            (None, Some(secret)) => EnvFromRef::SecretRef(secret),
            (Some(_), Some(_)) => {
                return Err("envFrom entry sets both 'configMapRef' and 'secretRef'".to_string());
            }
            (None, None) => {
                return Err("envFrom entry needs one of 'configMapRef' or 'secretRef'".to_string());
            }
        };

        Ok(EnvFromSource {
            prefix: raw.prefix,
            source,
        })
    }
}

impl From<EnvFromSource> for RawEnvFromSource {
    fn from(env_from: EnvFromSource) -> Self {
        let (config_map_ref, secret_ref) = match env_from.source {
            EnvFromRef::ConfigMapRef(r) => (Some(r), None),
            EnvFromRef::SecretRef(r) => (None, Some(r)),
        };
        RawEnvFromSource {
            prefix: env_from.prefix,
            config_map_ref,
            secret_ref,
        }
    }
}
