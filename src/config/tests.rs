//! Tests for config functionality.

use crate::config::{CONFIG_FILE_NAME, Config, OutputFormat};
use crate::error::TaskParamsError;
use crate::test_support::write_file;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.output_format, OutputFormat::Yaml);
    assert!(!config.strict);
    assert_eq!(config.input_scope, "inputs");
    assert_eq!(config.output_scope, "outputs");
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
output_format: json
strict: true
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.output_format, OutputFormat::Json);
    assert!(config.strict);
    assert_eq!(config.input_scope, "inputs");
}

#[test]
fn test_omitted_fields_take_config_defaults() {
    let config = Config::from_yaml("input_scope: in\n").unwrap();

    assert_eq!(
        config,
        Config {
            input_scope: "in".to_string(),
            ..Config::default()
        }
    );
}

#[test]
fn test_unknown_fields_are_ignored() {
    let config = Config::from_yaml("future_option: 42\nstrict: true\n").unwrap();
    assert!(config.strict);
}

#[test]
fn test_invalid_output_format_is_rejected() {
    let err = Config::from_yaml("output_format: toml\n").unwrap_err();
    assert!(matches!(err, TaskParamsError::ParseError(_)));
}

#[test]
fn test_validate_rejects_empty_scope() {
    let err = Config::from_yaml("input_scope: ''\n").unwrap_err();
    assert!(err.to_string().contains("input_scope must be non-empty"));
}

#[test]
fn test_validate_rejects_dotted_scope() {
    let err = Config::from_yaml("output_scope: out.puts\n").unwrap_err();
    assert!(err.to_string().contains("not a valid key segment"));
}

#[test]
fn test_validate_rejects_identical_scopes() {
    let err = Config::from_yaml("input_scope: res\noutput_scope: res\n").unwrap_err();
    assert!(err.to_string().contains("are both 'res'"));
}

#[test]
fn test_roundtrip_yaml() {
    let config = Config {
        output_format: OutputFormat::Json,
        strict: true,
        input_scope: "in".to_string(),
        output_scope: "out".to_string(),
    };
    let yaml = config.to_yaml().unwrap();
    assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
}

#[test]
fn test_scopes() {
    let config = Config::from_yaml("input_scope: in\n").unwrap();
    let scopes = config.scopes();
    assert_eq!(scopes.inputs, "in");
    assert_eq!(scopes.outputs, "outputs");
}

#[test]
fn test_output_format_from_str() {
    assert_eq!(OutputFormat::from_str("yaml"), Some(OutputFormat::Yaml));
    assert_eq!(OutputFormat::from_str("yml"), Some(OutputFormat::Yaml));
    assert_eq!(OutputFormat::from_str("json"), Some(OutputFormat::Json));
    assert_eq!(OutputFormat::from_str("xml"), None);
}

#[test]
fn test_resolve_prefers_explicit_path() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), CONFIG_FILE_NAME, "strict: true\n");
    let explicit = write_file(dir.path(), "other.yaml", "output_format: json\n");

    let config = Config::resolve(Some(explicit.as_path()), dir.path()).unwrap();
    assert_eq!(config.output_format, OutputFormat::Json);
    assert!(!config.strict);
}

#[test]
fn test_resolve_discovers_file_in_dir() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), CONFIG_FILE_NAME, "strict: true\n");

    let config = Config::resolve(None, dir.path()).unwrap();
    assert!(config.strict);
}

#[test]
fn test_resolve_defaults_without_file() {
    let dir = TempDir::new().unwrap();
    assert_eq!(Config::resolve(None, dir.path()).unwrap(), Config::default());
}

#[test]
fn test_resolve_missing_explicit_file_is_user_error() {
    let dir = TempDir::new().unwrap();
    let err = Config::resolve(Some(dir.path().join("nope.yaml").as_path()), dir.path()).unwrap_err();
    assert!(matches!(err, TaskParamsError::UserError(_)));
}
