//! Runs assisted-parameter resolution over a whole model.

use crate::frontend::{Program, ShardProgram, lower_model};
use crate::model::Model;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write;
use std::path::Path;
use tracing::{debug, info_span};
use weld_codegen::{
    BindingKind, JAVA_RESERVED_WORDS, ParameterSpec, Shard, assisted_parameter_specs,
    render_parameter_list,
};
use weld_types::TypeContext;

#[derive(Clone, Debug)]
pub struct DriverOptions {
    /// Pre-claim the target language's keywords in every shard.
    pub reserved_words: bool,
}

impl Default for DriverOptions {
    fn default() -> Self {
        DriverOptions {
            reserved_words: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShardReport {
    pub name: String,
    pub fields: Vec<String>,
    pub bindings: Vec<BindingReport>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BindingReport {
    pub kind: BindingKind,
    pub key: String,
    /// Only populated for assisted-injection bindings.
    pub parameters: Vec<ParameterReport>,
    /// `(String data, int count)`.
    pub signature: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParameterReport {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
}

pub fn load_model(path: &Path) -> Result<Model> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read model {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse model {}", path.display()))
}

pub fn run_file(path: &Path, options: &DriverOptions) -> Result<Vec<ShardReport>> {
    let model = load_model(path)?;
    run(&model, options)
}

pub fn run(model: &Model, options: &DriverOptions) -> Result<Vec<ShardReport>> {
    let Program { ctx, shards } = lower_model(model).context("failed to lower model")?;
    shards
        .iter()
        .map(|shard| run_shard(&ctx, shard, options))
        .collect()
}

fn run_shard(ctx: &TypeContext, program: &ShardProgram, options: &DriverOptions) -> Result<ShardReport> {
    let _span = info_span!("shard", name = %program.name).entered();

    let mut shard = if options.reserved_words {
        Shard::with_reserved_words(&program.name, JAVA_RESERVED_WORDS)
    } else {
        Shard::new(&program.name)
    };
    for name in &program.reserved {
        shard.scope_mut().claim(name);
    }
    for (type_id, name) in &program.fields {
        shard.add_field(*type_id, name);
    }

    let mut bindings = Vec::with_capacity(program.bindings.len());
    for binding in &program.bindings {
        let key = binding.key.format(ctx);
        let specs = if binding.kind == BindingKind::AssistedInjection {
            assisted_parameter_specs(binding, ctx, &mut shard).with_context(|| {
                format!("failed to resolve assisted parameters of `{key}` in shard `{}`", program.name)
            })?
        } else {
            debug!(kind = %binding.kind, key = %key, "no assisted parameters");
            Vec::new()
        };
        bindings.push(BindingReport {
            kind: binding.kind,
            parameters: parameter_reports(ctx, &specs),
            signature: render_parameter_list(ctx, &specs),
            key,
        });
    }

    Ok(ShardReport {
        name: program.name.clone(),
        fields: shard.fields().iter().map(|field| field.render(ctx)).collect(),
        bindings,
    })
}

fn parameter_reports(ctx: &TypeContext, specs: &[ParameterSpec]) -> Vec<ParameterReport> {
    specs
        .iter()
        .map(|spec| ParameterReport {
            ty: ctx.format_type(spec.type_id),
            name: spec.name.clone(),
        })
        .collect()
}

/// Human-readable report: one block per shard, one line per binding.
pub fn render_text(reports: &[ShardReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let _ = writeln!(out, "shard {}", report.name);
        for field in &report.fields {
            let _ = writeln!(out, "  {field}");
        }
        for binding in &report.bindings {
            let _ = writeln!(out, "  {} {}{}", binding.kind, binding.key, binding.signature);
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/driver_unit_tests.rs"]
mod tests;
