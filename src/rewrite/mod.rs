//! Spec rewriting.
//!
//! [`apply_replacements`] clones a [`TaskSpec`] and runs every template field
//! of the clone through [`substitute`]. The input is only borrowed, so the
//! caller's spec is never modified and several rewrites may share it.
//!
//! # Template fields
//!
//! Steps: `name`, `image`, `command[*]`, `args[*]`, `workingDir`,
//! `env[*].value` (or the secret/config map `name` and `key` of a
//! `valueFrom`), `envFrom[*].prefix` and its ref's `name`, and
//! `volumeMounts[*]` `name`/`mountPath`/`subPath`.
//!
//! Volumes: `name` and the identifying field of the source
//! (`configMap.name`, `secret.secretName`, `persistentVolumeClaim.claimName`).
//! Other sources are left as written.
//!
//! Env var names are keys and are never substituted. Other `valueFrom`
//! sources and pass-through `extra` fields are copied unchanged.

use crate::placeholder::{references, substitute};
use crate::replacements::{INPUTS_SCOPE, ResolvedResource, Replacements};
use crate::spec::{
    EnvFromRef, EnvValue, EnvVarSource, ParamBinding, ParamDeclaration, TaskSpec, VolumeSource,
};
use std::collections::{BTreeMap, BTreeSet};


/// Return a copy of `spec` with every resolvable placeholder substituted.
///
/// Placeholders without a replacement are kept verbatim. Substitution is a
/// single pass; values are never expanded again.
pub fn apply_replacements(spec: &TaskSpec, replacements: &Replacements) -> TaskSpec {
    let mut rewritten = spec.clone();
    for_each_template(&mut rewritten, |field| {
        *field = substitute(field, replacements);
    });
    rewritten
}

/// Substitute task parameters: declared defaults overridden by `bindings`.
pub fn apply_parameters(
    spec: &TaskSpec,
    declarations: &[ParamDeclaration],
    bindings: &[ParamBinding],
) -> TaskSpec {
    apply_replacements(spec, &Replacements::from_parameters(declarations, bindings))
}

/// Substitute fields of resolved resources bound in `scope`
/// (usually [`INPUTS_SCOPE`] or `outputs`).
pub fn apply_resources<R: ResolvedResource>(
    spec: &TaskSpec,
    resources: &BTreeMap<String, R>,
    scope: &str,
) -> TaskSpec {
    apply_replacements(spec, &Replacements::from_resources(resources, scope))
}

/// Substitute input resources. Shorthand for [`apply_resources`] with
/// [`INPUTS_SCOPE`].
pub fn apply_input_resources<R: ResolvedResource>(
    spec: &TaskSpec,
    resources: &BTreeMap<String, R>,
) -> TaskSpec {
    apply_resources(spec, resources, INPUTS_SCOPE)
}

/// Collect the keys of every placeholder in the template fields of `spec`.
pub fn placeholder_references(spec: &TaskSpec) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for_each_template_ref(spec, |field| {
        keys.extend(references(field).into_iter().map(str::to_string));
    });
    keys
}

/// Expands to a walk over every template field of `$spec`, calling `$visit`
/// on each. With `mut` the fields are borrowed mutably.
macro_rules! walk_templates {
    ($spec:expr, $visit:ident $(, $m:tt)?) => {
        for step in & $($m)? $spec.steps {
            $visit(& $($m)? step.name);
            $visit(& $($m)? step.image);
            for arg in & $($m)? step.args {
                $visit(arg);
            }

            for env in & $($m)? step.env {
                match & $($m)? env.value {
                    EnvValue::Value(value) => $visit(value),
                    EnvValue::ValueFrom(
                        EnvVarSource::SecretKeyRef(selector)
                        | EnvVarSource::ConfigMapKeyRef(selector),
                    ) => {
                        $visit(& $($m)? selector.name);
                        $visit(& $($m)? selector.key);
                    }
                    EnvValue::ValueFrom(EnvVarSource::Other(_)) => {}
                }
            }

            for env_from in & $($m)? step.env_from {
                $visit(& $($m)? env_from.prefix);
                match & $($m)? env_from.source {
                    EnvFromRef::ConfigMapRef(object) | EnvFromRef::SecretRef(object) => {
                        $visit(& $($m)? object.name)
                    }
                }
            }

            $visit(& $($m)? step.working_dir);
            for command in & $($m)? step.command {
                $visit(command);
            }

            for mount in & $($m)? step.volume_mounts {
                $visit(& $($m)? mount.name);
                $visit(& $($m)? mount.mount_path);
                $visit(& $($m)? mount.sub_path);
            }
        }

        for volume in & $($m)? $spec.volumes {
            $visit(& $($m)? volume.name);
            match & $($m)? volume.source {
                VolumeSource::ConfigMap { name, .. } => $visit(name),
                VolumeSource::Secret { secret_name, .. } => $visit(secret_name),
                VolumeSource::PersistentVolumeClaim { claim_name, .. } => $visit(claim_name),
                VolumeSource::Other(_) => {}
            }
        }
    };
}

/// Visit every template field of `spec` for writing.
fn for_each_template<F: FnMut(&mut String)>(spec: &mut TaskSpec, mut visit: F) {
    walk_templates!(spec, visit, mut);
}

/// Visit every template field of `spec` for reading.
fn for_each_template_ref<F: FnMut(&str)>(spec: &TaskSpec, mut visit: F) {
    walk_templates!(spec, visit);
}
