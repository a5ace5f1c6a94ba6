use crate::replacements::Replacements;
use crate::spec::{
    EnvFromRef, EnvFromSource, EnvVar, EnvVarSource, KeySelector, ObjectRef, Step, TaskSpec,
    Volume, VolumeMount, VolumeSource,
};
use std::path::{Path, PathBuf};

/// Every marker used by [`marked_spec`]; `${m.<marker>}` resolves to `<marker>-value`.
const MARKERS: &[&str] = &[
    "name",
    "image",
    "workdir",
    "args",
    "command",
    "env",
    "secret-name",
    "secret-key",
    "configmap-name",
    "configmap-key",
    "prefix",
    "envfrom-configmap",
    "envfrom-secret",
    "mount-name",
    "mount-path",
    "sub-path",
    "volume-configmap",
    "configmap-source",
    "volume-secret",
    "secret-source",
    "volume-claim",
    "claim-source",
];

fn marker(name: &str) -> String {
    format!("${{m.{}}}", name)
}

/// A spec with a distinct placeholder in every template field.
pub(crate) fn marked_spec() -> TaskSpec {
    let selector = |name: &str, key: &str| KeySelector::new(marker(name), marker(key));

    TaskSpec {
        steps: vec![Step {
            name: marker("name"),
            image: marker("image"),
            working_dir: marker("workdir"),
            args: vec![marker("args")],
            command: vec![marker("command")],
            env: vec![
                EnvVar::literal("LITERAL", marker("env")),
                EnvVar::from_source(
                    "SECRET",
                    EnvVarSource::SecretKeyRef(selector("secret-name", "secret-key")),
                ),
                EnvVar::from_source(
                    "CONFIG",
                    EnvVarSource::ConfigMapKeyRef(selector("configmap-name", "configmap-key")),
                ),
            ],
            env_from: vec![
                EnvFromSource {
                    prefix: marker("prefix"),
                    source: EnvFromRef::ConfigMapRef(ObjectRef::new(marker("envfrom-configmap"))),
                },
                EnvFromSource {
                    prefix: String::new(),
                    source: EnvFromRef::SecretRef(ObjectRef::new(marker("envfrom-secret"))),
                },
            ],
            volume_mounts: vec![VolumeMount {
                name: marker("mount-name"),
                mount_path: marker("mount-path"),
                sub_path: marker("sub-path"),
                ..Default::default()
            }],
            ..Default::default()
        }],
        volumes: vec![
            Volume::new(
                marker("volume-configmap"),
                VolumeSource::config_map(marker("configmap-source")),
            ),
            Volume::new(
                marker("volume-secret"),
                VolumeSource::secret(marker("secret-source")),
            ),
            Volume::new(
                marker("volume-claim"),
                VolumeSource::claim(marker("claim-source")),
            ),
        ],
    }
}

/// Replacements resolving every marker of [`marked_spec`].
pub(crate) fn marker_replacements() -> Replacements {
    MARKERS
        .iter()
        .map(|m| (format!("m.{}", m), format!("{}-value", m)))
        .collect()
}

/// Write `contents` to `dir/name` and return the path.
pub(crate) fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
