//! Parameter declarations and run-time bindings.

use serde::{Deserialize, Serialize};

/// A parameter declared by a task, with an optional default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDeclaration {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Default value. An absent default and an empty one are treated alike.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl ParamDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_default(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: Some(default.into()),
            ..Default::default()
        }
    }

    /// The default value, if one is declared and non-empty.
    pub fn non_empty_default(&self) -> Option<&str> {
        self.default.as_deref().filter(|d| !d.is_empty())
    }
}

/// A value supplied for a parameter when a task is run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamBinding {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl ParamBinding {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
