//! Tests for replacement map construction.

use super::*;

fn exports(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// =========================================================================
// Parameters
// =========================================================================

#[test]
fn test_binding_overrides_default() {
    let map = Replacements::from_parameters(
        &[ParamDeclaration::with_default("x", "d")],
        &[ParamBinding::new("x", "v")],
    );
    assert_eq!(map.get("inputs.params.x"), Some("v"));
    assert_eq!(map.len(), 1);
}

#[test]
fn test_empty_default_is_omitted() {
    let map = Replacements::from_parameters(&[ParamDeclaration::with_default("y", "")], &[]);
    assert!(!map.contains_key("inputs.params.y"));
    assert!(map.is_empty());
}

#[test]
fn test_absent_default_is_omitted() {
    let map = Replacements::from_parameters(&[ParamDeclaration::new("y")], &[]);
    assert!(map.is_empty());
}

#[test]
fn test_default_used_without_binding() {
    let map = Replacements::from_parameters(
        &[
            ParamDeclaration::with_default("a", "1"),
            ParamDeclaration::with_default("b", "2"),
        ],
        &[ParamBinding::new("a", "one")],
    );
    assert_eq!(map.get("inputs.params.a"), Some("one"));
    assert_eq!(map.get("inputs.params.b"), Some("2"));
}

#[test]
fn test_empty_binding_value_is_entered() {
    let map = Replacements::from_parameters(
        &[ParamDeclaration::with_default("x", "d")],
        &[ParamBinding::new("x", "")],
    );
    assert_eq!(map.get("inputs.params.x"), Some(""));
}

#[test]
fn test_undeclared_binding_is_accepted() {
    let map = Replacements::from_parameters(&[], &[ParamBinding::new("extra", "e")]);
    assert_eq!(map.get("inputs.params.extra"), Some("e"));
}

#[test]
fn test_duplicate_bindings_last_wins() {
    let map = Replacements::from_parameters(
        &[],
        &[ParamBinding::new("x", "first"), ParamBinding::new("x", "second")],
    );
    assert_eq!(map.get("inputs.params.x"), Some("second"));
}

#[test]
fn test_duplicate_defaults_last_wins() {
    let map = Replacements::from_parameters(
        &[
            ParamDeclaration::with_default("x", "first"),
            ParamDeclaration::with_default("x", "second"),
        ],
        &[],
    );
    assert_eq!(map.get("inputs.params.x"), Some("second"));
}

// =========================================================================
// Resources
// =========================================================================

#[test]
fn test_resource_keys_are_qualified() {
    let mut resources = BTreeMap::new();
    resources.insert(
        "source".to_string(),
        exports(&[("url", "https://example.com/repo"), ("revision", "main")]),
    );

    let map = Replacements::from_resources(&resources, "inputs");
    assert_eq!(
        map.get("inputs.resources.source.url"),
        Some("https://example.com/repo")
    );
    assert_eq!(map.get("inputs.resources.source.revision"), Some("main"));
    assert_eq!(map.len(), 2);
}

#[test]
fn test_scope_distinguishes_bindings() {
    let mut resources = BTreeMap::new();
    resources.insert("image".to_string(), exports(&[("url", "gcr.io/app")]));

    let inputs = Replacements::from_resources(&resources, INPUTS_SCOPE);
    let outputs = Replacements::from_resources(&resources, OUTPUTS_SCOPE);

    assert!(inputs.contains_key("inputs.resources.image.url"));
    assert!(!inputs.contains_key("outputs.resources.image.url"));
    assert!(outputs.contains_key("outputs.resources.image.url"));
}

#[test]
fn test_boxed_trait_objects() {
    let mut resources: BTreeMap<String, Box<dyn ResolvedResource>> = BTreeMap::new();
    resources.insert("a".to_string(), Box::new(exports(&[("k", "v")])));

    let map = Replacements::from_resources(&resources, "inputs");
    assert_eq!(map.get("inputs.resources.a.k"), Some("v"));
}

#[test]
fn test_no_resources_yields_empty_map() {
    let resources: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
    assert!(Replacements::from_resources(&resources, "inputs").is_empty());
}

// =========================================================================
// Map operations
// =========================================================================

#[test]
fn test_merge_prefers_other() {
    let mut base: Replacements = [("a", "1"), ("b", "2")].into_iter().collect();
    base.merge([("b", "two"), ("c", "3")].into_iter().collect());

    assert_eq!(base.get("a"), Some("1"));
    assert_eq!(base.get("b"), Some("two"));
    assert_eq!(base.get("c"), Some("3"));
}

#[test]
fn test_insert_returns_previous() {
    let mut map = Replacements::new();
    assert_eq!(map.insert("k", "v1"), None);
    assert_eq!(map.insert("k", "v2"), Some("v1".to_string()));
}

#[test]
fn test_iteration_is_sorted() {
    let map: Replacements = [("b", "2"), ("a", "1")].into_iter().collect();
    let keys: Vec<_> = map.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn test_key_helpers() {
    assert_eq!(param_key("x"), "inputs.params.x");
    assert_eq!(
        resource_key("outputs", "image", "digest"),
        "outputs.resources.image.digest"
    );
}
