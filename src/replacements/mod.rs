//! Replacement maps.
//!
//! A [`Replacements`] map holds fully-qualified placeholder keys and the
//! values they expand to. Maps are built fresh for every rewrite from one of
//! two sources:
//!
//! - **Parameters**: declared defaults overridden by run-time bindings, keyed
//!   `inputs.params.<name>`
//! - **Resources**: fields exported by resolved resources, keyed
//!   `<scope>.resources.<binding>.<field>`
//!
//! Keys are exact-match and case-sensitive. Inserting an existing key replaces
//! its value.

use crate::spec::{ParamBinding, ParamDeclaration};
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::btree_map;
use tracing::trace;

#[cfg(test)]
mod tests;

/// Key prefix for task parameters.
pub const PARAMS_PREFIX: &str = "inputs.params";

/// Scope name for input resource bindings.
pub const INPUTS_SCOPE: &str = "inputs";

/// Scope name for output resource bindings.
pub const OUTPUTS_SCOPE: &str = "outputs";

/// Placeholder key for the parameter `name`.
pub fn param_key(name: &str) -> String {
    format!("{}.{}", PARAMS_PREFIX, name)
}

/// Placeholder key for field `field` of the resource bound as `binding` in `scope`.
pub fn resource_key(scope: &str, binding: &str, field: &str) -> String {
    format!("{}.resources.{}.{}", scope, binding, field)
}

/// A resource that has already been resolved to concrete values.
///
/// Implementors export a map of short field names (`url`, `revision`, ...)
/// to values; [`Replacements::from_resources`] qualifies each field with the
/// scope and binding name.
pub trait ResolvedResource {
    fn replacements(&self) -> BTreeMap<String, String>;
}

impl<T: ResolvedResource + ?Sized> ResolvedResource for &T {
    fn replacements(&self) -> BTreeMap<String, String> {
        (**self).replacements()
    }
}

impl<T: ResolvedResource + ?Sized> ResolvedResource for Box<T> {
    fn replacements(&self) -> BTreeMap<String, String> {
        (**self).replacements()
    }
}

/// A plain field map is its own export.
impl ResolvedResource for BTreeMap<String, String> {
    fn replacements(&self) -> BTreeMap<String, String> {
        self.clone()
    }
}

/// Placeholder key to value table used for one substitution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Replacements(BTreeMap<String, String>);

impl Replacements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the parameter map for a run.
    ///
    /// Runs two passes over the same map:
    ///
    /// 1. every declaration with a non-empty default is entered
    /// 2. every binding is entered, overwriting a default for the same name
    ///
    /// The second pass always runs after the first, so a binding wins over a
    /// default. Bindings are entered even when their value is empty.
    /// Unknown and duplicate names are accepted; the last write wins.
    pub fn from_parameters(
        declarations: &[ParamDeclaration],
        bindings: &[ParamBinding],
    ) -> Self {
        let mut map = Self::new();

        for declaration in declarations {
            if let Some(default) = declaration.non_empty_default() {
                trace!(param = %declaration.name, "using declared default");
                map.insert(param_key(&declaration.name), default);
            }
        }

        for binding in bindings {
            trace!(param = %binding.name, "using run binding");
            map.insert(param_key(&binding.name), binding.value.as_str());
        }

        map
    }

    /// Build the resource map for `scope`.
    ///
    /// Each field exported by each resource is keyed
    /// `<scope>.resources.<binding>.<field>`.
    pub fn from_resources<R: ResolvedResource>(
        resources: &BTreeMap<String, R>,
        scope: &str,
    ) -> Self {
        let mut map = Self::new();

        for (binding, resource) in resources {
            for (field, value) in resource.replacements() {
                map.insert(resource_key(scope, binding, &field), value);
            }
        }

        trace!(scope, entries = map.len(), "built resource replacements");
        map
    }

    /// Insert a replacement, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }

    /// Merge `other` into this map. Entries of `other` win on conflicts.
    pub fn merge(&mut self, other: Replacements) {
        self.0.extend(other.0);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Replacements {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Replacements {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl<'a> IntoIterator for &'a Replacements {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
