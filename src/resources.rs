//! Resolved pipeline resources.
//!
//! A run binds resources (a git checkout, an image to push, a storage
//! bucket, ...) to names declared by the task. Once resolved, each resource
//! exports a few string fields that templates can reference as
//! `${inputs.resources.<binding>.<field>}` or
//! `${outputs.resources.<binding>.<field>}`.
//!
//! | type      | exported fields                      |
//! |-----------|--------------------------------------|
//! | `git`     | `name`, `type`, `url`, `revision`    |
//! | `image`   | `name`, `type`, `url`, `digest`      |
//! | `storage` | `name`, `type`, `location`           |
//! | `generic` | `name`, `type`, plus every `fields` entry |

use crate::replacements::ResolvedResource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A resolved resource, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PipelineResource {
    Git(GitResource),
    Image(ImageResource),
    Storage(StorageResource),
    Generic(GenericResource),
}

/// A git repository at a revision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub revision: String,
}

/// A container image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub digest: String,
}

/// A blob storage location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
}

/// Any other resource, described by its exported fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl PipelineResource {
    /// The `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineResource::Git(_) => "git",
            PipelineResource::Image(_) => "image",
            PipelineResource::Storage(_) => "storage",
            PipelineResource::Generic(_) => "generic",
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PipelineResource::Git(r) => &r.name,
            PipelineResource::Image(r) => &r.name,
            PipelineResource::Storage(r) => &r.name,
            PipelineResource::Generic(r) => &r.name,
        }
    }

    fn name_mut(&mut self) -> &mut String {
        match self {
            PipelineResource::Git(r) => &mut r.name,
            PipelineResource::Image(r) => &mut r.name,
            PipelineResource::Storage(r) => &mut r.name,
            PipelineResource::Generic(r) => &mut r.name,
        }
    }

    /// Use `binding` as the resource name if none was given.
    pub fn default_name(&mut self, binding: &str) {
        let name = self.name_mut();
        if name.is_empty() {
            *name = binding.to_string();
        }
    }
}

impl ResolvedResource for PipelineResource {
    fn replacements(&self) -> BTreeMap<String, String> {
        let mut fields = BTreeMap::new();

        match self {
            PipelineResource::Git(git) => {
                fields.insert("url".to_string(), git.url.clone());
                fields.insert("revision".to_string(), git.revision.clone());
            }
            PipelineResource::Image(image) => {
                fields.insert("url".to_string(), image.url.clone());
                fields.insert("digest".to_string(), image.digest.clone());
            }
            PipelineResource::Storage(storage) => {
                fields.insert("location".to_string(), storage.location.clone());
            }
            PipelineResource::Generic(generic) => {
                fields.extend(generic.fields.clone());
            }
        }

        // `name` and `type` always describe the resource itself.
        fields.insert("name".to_string(), self.name().to_string());
        fields.insert("type".to_string(), self.kind().to_string());
        fields
    }
}
