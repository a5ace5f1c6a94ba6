//! Task volumes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A volume declared by a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawVolume", into = "RawVolume")]
pub struct Volume {
    /// Volume name (template).
    pub name: String,
    pub source: VolumeSource,
}

/// The backing source of a [`Volume`].
///
/// `extra` holds the source's other fields (`items`, `defaultMode`,
/// `readOnly`, ...), which are never substituted.
#[derive(Debug, Clone, PartialEq)]
pub enum VolumeSource {
    /// A config map, by `name` (template).
    ConfigMap {
        name: String,
        extra: Map<String, Value>,
    },
    /// A secret, by `secret_name` (template).
    Secret {
        secret_name: String,
        extra: Map<String, Value>,
    },
    /// A persistent volume claim, by `claim_name` (template).
    PersistentVolumeClaim {
        claim_name: String,
        extra: Map<String, Value>,
    },
    /// Any other source (`emptyDir`, `hostPath`, ...), kept as written.
    Other(Map<String, Value>),
}

impl VolumeSource {
    pub fn config_map(name: impl Into<String>) -> Self {
        Self::ConfigMap {
            name: name.into(),
            extra: Map::new(),
        }
    }

    pub fn secret(secret_name: impl Into<String>) -> Self {
        Self::Secret {
            secret_name: secret_name.into(),
            extra: Map::new(),
        }
    }

    pub fn claim(claim_name: impl Into<String>) -> Self {
        Self::PersistentVolumeClaim {
            claim_name: claim_name.into(),
            extra: Map::new(),
        }
    }
}

impl Volume {
    pub fn new(name: impl Into<String>, source: VolumeSource) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVolume {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    config_map: Option<ConfigMapVolume>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    secret: Option<SecretVolume>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    persistent_volume_claim: Option<ClaimVolume>,
    #[serde(flatten)]
    other: Map<String, Value>,
}

#[derive(Serialize, Deserialize)]
struct ConfigMapVolume {
    #[serde(default)]
    name: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SecretVolume {
    #[serde(default)]
    secret_name: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClaimVolume {
    #[serde(default)]
    claim_name: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<RawVolume> for Volume {
    type Error = String;

    fn try_from(raw: RawVolume) -> Result<Self, Self::Error> {
        let mut sources = Vec::new();
        if let Some(config_map) = raw.config_map {
            sources.push(VolumeSource::ConfigMap {
                name: config_map.name,
                extra: config_map.extra,
            });
        }
        if let Some(secret) = raw.secret {
            sources.push(VolumeSource::Secret {
                secret_name: secret.secret_name,
                extra: secret.extra,
            });
        }
        if let Some(claim) = raw.persistent_volume_claim {
            sources.push(VolumeSource::PersistentVolumeClaim {
                claim_name: claim.claim_name,
                extra: claim.extra,
            });
        }

        let source = match sources.len() {
            0 => VolumeSource::Other(raw.other),
            1 if raw.other.is_empty() => sources.remove(0),
            _ => {
                return Err(format!(
                    "volume '{}' declares more than one source",
                    raw.name
                ));
            }
        };

        Ok(Volume {
            name: raw.name,
            source,
        })
    }
}

impl From<Volume> for RawVolume {
    fn from(volume: Volume) -> Self {
        let mut raw = RawVolume {
            name: volume.name,
            config_map: None,
            secret: None,
            persistent_volume_claim: None,
            other: Map::new(),
        };
        match volume.source {
            VolumeSource::ConfigMap { name, extra } => {
                raw.config_map = Some(ConfigMapVolume { name, extra })
            }
            VolumeSource::Secret { secret_name, extra } => {
                raw.secret = Some(SecretVolume { secret_name, extra })
            }
            VolumeSource::PersistentVolumeClaim { claim_name, extra } => {
                raw.persistent_volume_claim = Some(ClaimVolume { claim_name, extra })
            }
            VolumeSource::Other(other) => raw.other = other,
        }
        raw
    }
}
