//! Task specification model.
//!
//! A [`TaskSpec`] is an ordered list of container [`Step`]s plus the
//! [`Volume`]s they mount. Most string fields are templates that may embed
//! `${...}` placeholders (see [`crate::placeholder`]); keys such as
//! [`EnvVar::name`] are never templates.
//!
//! The YAML/JSON form follows the Kubernetes container layout:
//!
//! ```text
//! steps:
//!   - name: build
//!     image: golang:${inputs.params.go-version}
//!     workingDir: /workspace/${inputs.resources.source.name}
//!     env:
//!       - name: TOKEN
//!         valueFrom:
//!           secretKeyRef:
//!             name: ${inputs.params.secret}
//!             key: token
//! volumes:
//!   - name: cache
//!     persistentVolumeClaim:
//!       claimName: ${inputs.params.cache-claim}
//! ```
//!
//! One-of fields (`value`/`valueFrom`, `configMapRef`/`secretRef`, volume
//! sources) are modeled as enums and validated on deserialization.

mod params;
mod step;
mod volume;


pub use params::{ParamBinding, ParamDeclaration};
pub use step::{
    EnvFromRef, EnvFromSource, EnvValue, EnvVar, EnvVarSource, KeySelector, ObjectRef, Step,
    VolumeMount,
};
pub use volume::{Volume, VolumeSource};

use serde::{Deserialize, Serialize};

/// A task specification: the steps to run and the volumes they use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskSpec {
    /// Steps, in execution order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,

    /// Volumes available to the steps.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<Volume>,
}
