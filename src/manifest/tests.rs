//! Tests for task definition and run documents.

use super::*;
use crate::error::TaskParamsError;
use crate::resources::{GitResource, ImageResource};
use crate::test_support::write_file;
use tempfile::TempDir;

const TASK_YAML: &str = r#"
name: build-image
params:
  - name: dockerfile
    description: Path to the Dockerfile
    default: Dockerfile
  - name: context
spec:
  steps:
    - name: build
      image: gcr.io/kaniko-project/executor
      args:
        - --dockerfile=${inputs.params.dockerfile}
        - --destination=${outputs.resources.image.url}
"#;

const RUN_YAML: &str = r#"
params:
  - name: dockerfile
    value: Dockerfile.release
resources:
  inputs:
    source:
      type: git
      url: https://github.com/org/app
      revision: v1.2.0
  outputs:
    image:
      type: image
      name: app-image
      url: gcr.io/org/app
"#;

#[test]
fn test_parse_task_definition() {
    let task = TaskDefinition::from_yaml(TASK_YAML).unwrap();

    assert_eq!(task.name, "build-image");
    assert_eq!(task.params.len(), 2);
    assert_eq!(task.params[0].default.as_deref(), Some("Dockerfile"));
    assert_eq!(
        task.params[0].description.as_deref(),
        Some("Path to the Dockerfile")
    );
    assert_eq!(task.params[1].default, None);
    assert_eq!(task.spec.steps[0].args.len(), 2);
}

#[test]
fn test_parse_task_run() {
    let run = TaskRun::from_yaml(RUN_YAML).unwrap();

    assert_eq!(run.params, vec![ParamBinding::new("dockerfile", "Dockerfile.release")]);
    assert_eq!(
        run.resources.inputs["source"],
        PipelineResource::Git(GitResource {
            name: "source".to_string(),
            url: "https://github.com/org/app".to_string(),
            revision: "v1.2.0".to_string(),
        })
    );
    assert_eq!(
        run.resources.outputs["image"],
        PipelineResource::Image(ImageResource {
            name: "app-image".to_string(),
            url: "gcr.io/org/app".to_string(),
            digest: String::new(),
        })
    );
}

#[test]
fn test_empty_run_is_default() {
    assert_eq!(TaskRun::from_yaml("").unwrap(), TaskRun::default());
    assert_eq!(TaskRun::from_yaml("  \n").unwrap(), TaskRun::default());
}

#[test]
fn test_unknown_fields_are_ignored() {
    let run = TaskRun::from_yaml("serviceAccount: builder\nparams: []\n").unwrap();
    assert!(run.params.is_empty());

    let task = TaskDefinition::from_yaml("name: t\napiVersion: v1\nspec: {}\n").unwrap();
    assert_eq!(task.name, "t");
}

#[test]
fn test_invalid_documents_are_parse_errors() {
    let err = TaskDefinition::from_yaml("params: notalist").unwrap_err();
    assert!(matches!(err, TaskParamsError::ParseError(_)));

    let err = TaskRun::from_yaml("resources:\n  inputs:\n    x:\n      type: nope\n").unwrap_err();
    assert!(matches!(err, TaskParamsError::ParseError(_)));
    assert!(err.to_string().contains("invalid task run"));
}

#[test]
fn test_load_from_disk() {
    let dir = TempDir::new().unwrap();
    let task_path = write_file(dir.path(), "task.yaml", TASK_YAML);
    let run_path = write_file(dir.path(), "run.yaml", RUN_YAML);

    let task = TaskDefinition::load(&task_path).unwrap();
    let run = TaskRun::load(&run_path).unwrap();

    assert_eq!(task.name, "build-image");
    assert_eq!(run.resources.inputs.len(), 1);
}

#[test]
fn test_load_missing_file_is_user_error() {
    let dir = TempDir::new().unwrap();
    let err = TaskDefinition::load(dir.path().join("missing.yaml")).unwrap_err();

    assert!(matches!(err, TaskParamsError::UserError(_)));
    assert!(err.to_string().contains("failed to read task file"));
}

#[test]
fn test_load_json_document() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "run.json",
        r#"{"params": [{"name": "x", "value": "1"}]}"#,
    );

    let run = TaskRun::load(&path).unwrap();
    assert_eq!(run.params[0].value, "1");
}
